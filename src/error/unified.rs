//! Error classification for hosts embedding the client.

/// Broad error category for routing recovery logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Authentication,
    Network,
    Timeout,
    Server,
    Api,
    Configuration,
    Serialization,
    Unknown,
}

/// Suggested recovery action.
///
/// The client never acts on these itself. A host maps `Reauthenticate` to a
/// setup failure that asks the user to sign in again and `RetryLater` to a
/// temporarily-unavailable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoverySuggestion {
    Reauthenticate,
    RetryLater,
    CheckConfiguration,
    ContactSupport,
}
