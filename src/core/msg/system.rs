use serde::{Deserialize, Serialize};

/// Messages specific to SystemState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SystemMsg {
    // System control
    Quit,
    Resize(u16, u16),

    // Status management
    ShowError(String),
    ClearStatusMessage,
}
