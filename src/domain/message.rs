use serde::{Deserialize, Serialize};

/// A chat board entry. `timestamp` is assigned by the server when the
/// message is posted; clients never control it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub sender: String,
    pub content: String,
    pub timestamp: String,
}
