use serde::{Deserialize, Serialize};

pub mod reader;
pub mod search;
pub mod system;

use reader::ReaderMsg;
use search::SearchMsg;
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Search page operations (delegated to SearchState)
    Search(SearchMsg),

    // Reader page operations (delegated to ReaderState)
    Reader(ReaderMsg),
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_msg_equality() {
        assert_eq!(Msg::System(SystemMsg::Quit), Msg::System(SystemMsg::Quit));
        assert_ne!(
            Msg::Reader(ReaderMsg::ScrollUp),
            Msg::Reader(ReaderMsg::ScrollDown)
        );
    }

    #[test]
    fn test_msg_serialization() -> Result<()> {
        let msg = Msg::System(SystemMsg::ShowError("test".to_string()));
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: Msg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);
        Ok(())
    }
}
