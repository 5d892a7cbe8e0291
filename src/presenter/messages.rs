/// Control messages accepted from an embedding host
use serde::{Deserialize, Serialize};

use super::surface::Layout;
use crate::error::{ClockError, Result};

/// One JSON object per message, e.g. `{"type":"setCompact","value":true}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ControlMessage {
    SetCompact { value: bool },
}

impl ControlMessage {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        serde_json::from_str(line)
            .map_err(|e| ClockError::InvalidControlMessage(format!("{}: {}", line, e)))
    }

    pub fn apply(&self, layout: &mut Layout) {
        match *self {
            ControlMessage::SetCompact { value } => layout.compact = value,
        }
    }
}
