//! Error taxonomy for the bridge.
//!
//! Most binding functions return nothing, so these rarely reach the foreign
//! caller as return codes. They are recorded in the context's last-error
//! slot and logged, and the failing call becomes a no-op.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BridgeError {
    #[error("Handle(0) is the null handle")]
    NullHandle,

    #[error("Stale handle {0:#x}: the object was already released")]
    StaleHandle(u64),

    #[error("Unknown handle {0:#x}")]
    UnknownHandle(u64),

    #[error("Handle {handle:#x} is a {actual} handle, expected a {expected} handle")]
    WrongHandleKind {
        handle: u64,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Unknown widget kind {0}")]
    UnknownKind(u8),

    #[error("Null string pointer passed for `{0}`")]
    NullPointer(&'static str),

    #[error("Cannot attach a view to itself or to one of its descendants")]
    Cycle,

    #[error("View {0} is no longer live")]
    DeadView(String),

    #[error("Layout engine error: {0}")]
    Layout(String),

    #[error("Snapshot serialization failed: {0}")]
    Snapshot(String),

    #[error("Bridge context is already borrowed (reentrant call)")]
    ContextBusy,
}

impl From<taffy::TaffyError> for BridgeError {
    fn from(err: taffy::TaffyError) -> Self {
        BridgeError::Layout(format!("{err:?}"))
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_handle() {
        let msg = BridgeError::StaleHandle(0x1_0000_0002).to_string();
        assert!(msg.contains("0x100000002"), "got: {msg}");

        let msg = BridgeError::WrongHandleKind {
            handle: 3,
            expected: "widget",
            actual: "view",
        }
        .to_string();
        assert_eq!(msg, "Handle 0x3 is a view handle, expected a widget handle");
    }
}
