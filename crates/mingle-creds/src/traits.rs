use mingle_types::Credential;

use crate::error::CredentialResult;

/// Durable record of (name, password) pairs.
///
/// All implementations must satisfy these invariants:
/// - `load` returns credentials in their original insertion order.
/// - `append` adds exactly one record and never rewrites or reorders
///   existing content.
/// - There is no update or delete: the store only ever grows.
/// - Name uniqueness is the caller's responsibility, not the store's.
/// - All I/O errors are propagated, never silently ignored.
pub trait CredentialStore: Send + Sync {
    /// Read every stored credential, in insertion order.
    ///
    /// Returns an empty vec for a brand-new store. Returns `Err` on I/O
    /// failure or if a persisted record is malformed.
    fn load(&self) -> CredentialResult<Vec<Credential>>;

    /// Append one credential to the store.
    ///
    /// Fire-and-forget: callers do not read back for confirmation.
    fn append(&self, credential: &Credential) -> CredentialResult<()>;
}
