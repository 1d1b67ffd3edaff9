//! Error types for social graph operations.

use mingle_creds::CredentialError;
use mingle_types::UserId;
use thiserror::Error;

/// Errors from social graph operations.
///
/// Everything except [`Store`] is a non-fatal, user-visible rejection: the
/// caller displays it and the graph is left untouched. A [`Store`] error
/// from the credential backend at load time is fatal to initialization.
///
/// [`Store`]: GraphError::Store
#[derive(Debug, Error)]
pub enum GraphError {
    /// An id did not resolve to a user. Ids are dense and never reused, so
    /// this indicates a caller bug rather than a data race.
    #[error("unknown user id: {0}")]
    UnknownUser(UserId),

    /// A display name did not resolve to a user.
    #[error("user not found: {name}")]
    UserNotFound { name: String },

    /// The request is already pending; state is unchanged.
    #[error("{to} has already received a friend request from {from}")]
    DuplicateRequest { from: String, to: String },

    /// Accept was called with no matching pending request. This is a
    /// caller-contract violation (e.g. a stale accept action), not a
    /// recoverable user error.
    #[error("no pending friend request from {from}")]
    NoPendingRequest { from: String },

    /// Sign-up with a display name that is already in use.
    #[error("username already taken: {name}")]
    NameTaken { name: String },

    /// Login failed. Unknown name and wrong password are deliberately
    /// indistinguishable.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// Error from the credential store backend.
    #[error(transparent)]
    Store(#[from] CredentialError),
}

/// Result alias for social graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
