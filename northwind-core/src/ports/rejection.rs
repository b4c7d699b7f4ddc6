use thiserror::Error;

/// Expected, non-exceptional reasons an operation did nothing.
///
/// The `Display` text is the message handed back to callers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Rejection {
    /// No row matched the key (on read, update or delete)
    #[error("{entity} with {key} not found")]
    NotFound {
        /// Entity or view name
        entity: &'static str,
        /// Rendered key, e.g. `ID 5`
        key: String,
    },

    /// Views cannot be inserted into, updated or deleted from
    #[error("{operation} is not supported for view {view}")]
    ReadOnlyView {
        /// View name
        view: &'static str,
        /// The rejected operation
        operation: &'static str,
    },
}
