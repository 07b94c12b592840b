//! Encoding game states for storage or the wire.
//!
//! JSON is the plain structured form (camelCase fields, no behavior) that
//! a remote store or another client can read. The binary form is a compact
//! bincode snapshot for local saves and replay logs. Both decode to a state
//! that `perform_action` accepts directly.

use crate::core::GameState;
use crate::error::PersistError;

/// Encode as JSON.
pub fn to_json(state: &GameState) -> Result<String, PersistError> {
    Ok(serde_json::to_string(state)?)
}

/// Encode as indented JSON.
pub fn to_json_pretty(state: &GameState) -> Result<String, PersistError> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Decode from JSON.
pub fn from_json(json: &str) -> Result<GameState, PersistError> {
    Ok(serde_json::from_str(json)?)
}

/// Encode as a bincode snapshot.
pub fn to_bytes(state: &GameState) -> Result<Vec<u8>, PersistError> {
    Ok(bincode::serialize(state)?)
}

/// Decode a bincode snapshot.
pub fn from_bytes(bytes: &[u8]) -> Result<GameState, PersistError> {
    Ok(bincode::deserialize(bytes)?)
}
