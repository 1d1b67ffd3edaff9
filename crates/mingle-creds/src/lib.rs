//! Credential storage for the mingle social graph.
//!
//! This crate is the durable half of the system: a record of
//! (name, password) pairs that survives across sessions. Everything else
//! (friendships, posts, feeds, notifications) lives only in memory.
//!
//! # Storage Backends
//!
//! All backends implement the [`CredentialStore`] trait:
//!
//! - [`FileCredentialStore`] -- line-oriented flat file, one credential per
//!   line, append-only
//! - [`InMemoryCredentialStore`] -- `Vec`-based store for tests and embedding
//!
//! # Design Rules
//!
//! 1. The store is append-only: existing lines are never rewritten,
//!    reordered, or deleted.
//! 2. Appends are fire-and-forget; callers do not read back for
//!    confirmation.
//! 3. Name uniqueness is caller discipline, not enforced here.
//! 4. A malformed line is fatal at load time; the format has no recovery
//!    path, so the store never guesses a parse or skips a record.
//!
//! # Modules
//!
//! - [`error`] — Error types for store operations
//! - [`traits`] — The [`CredentialStore`] trait defining the storage
//!   interface
//! - [`file`] — The flat-file backend
//! - [`memory`] — In-memory [`InMemoryCredentialStore`] for tests

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use error::{CredentialError, CredentialResult};
pub use file::FileCredentialStore;
pub use memory::InMemoryCredentialStore;
pub use traits::CredentialStore;
