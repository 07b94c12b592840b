//! Turn and dealing engine.
//!
//! - [`draw`]: drawing, reshuffling and card intake
//! - [`deal`]: the per-round dealing state machine
//! - [`advance`]: turn order and chain anchors
//! - [`moves`]: HIT and STAY

pub mod advance;
pub mod deal;
pub mod draw;
pub mod moves;

pub use advance::{advance_turn, first_active_from, next_active_after, pending_holder_from_anchor};
pub use deal::deal;
pub use draw::{draw_one, has_life_saver_recipient, receive, Intake};
pub use moves::{hit, stay};
