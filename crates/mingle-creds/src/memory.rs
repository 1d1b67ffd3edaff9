use std::sync::RwLock;

use mingle_types::Credential;

use crate::error::CredentialResult;
use crate::traits::CredentialStore;

/// In-memory, `Vec`-based credential store.
///
/// Intended for tests and embedding. Credentials are held in memory behind
/// a `RwLock` so the store can be shared through `&self` like the file
/// backend. Nothing is persisted.
pub struct InMemoryCredentialStore {
    credentials: RwLock<Vec<Credential>>,
}

impl InMemoryCredentialStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            credentials: RwLock::new(Vec::new()),
        }
    }

    /// Create a store pre-seeded with the given credentials.
    pub fn with_credentials(credentials: Vec<Credential>) -> Self {
        Self {
            credentials: RwLock::new(credentials),
        }
    }

    /// Number of credentials currently stored.
    pub fn len(&self) -> usize {
        self.credentials.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.credentials.read().expect("lock poisoned").is_empty()
    }

    /// Remove all credentials from the store.
    pub fn clear(&self) {
        self.credentials.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn load(&self) -> CredentialResult<Vec<Credential>> {
        let credentials = self.credentials.read().expect("lock poisoned");
        Ok(credentials.clone())
    }

    fn append(&self, credential: &Credential) -> CredentialResult<()> {
        let mut credentials = self.credentials.write().expect("lock poisoned");
        credentials.push(credential.clone());
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryCredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryCredentialStore")
            .field("credential_count", &count)
            .finish()
    }
}
