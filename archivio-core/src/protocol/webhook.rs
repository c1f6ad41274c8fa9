use serde::{Deserialize, Serialize};

/// Turno di conversazione inviato al webhook del sistema sotto test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMessage {
    pub sender_user_id: String,
    pub group_id: String,
    pub content: String,
}

impl GroupMessage {
    pub fn new(sender_user_id: &str, group_id: &str, content: &str) -> Self {
        Self {
            sender_user_id: sender_user_id.to_string(),
            group_id: group_id.to_string(),
            content: content.to_string(),
        }
    }

    /// Stessa coppia mittente/gruppo: il consumer deve legare i due turni.
    pub fn same_thread(&self, other: &GroupMessage) -> bool {
        self.sender_user_id == other.sender_user_id && self.group_id == other.group_id
    }
}
