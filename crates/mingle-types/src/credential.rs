use serde::{Deserialize, Serialize};

/// A name/password pair as persisted by the credential store.
///
/// Passwords are stored and compared in plain text; the credential file
/// format offers no hashing or escaping. Names and passwords containing
/// whitespace are unsupported by the line-oriented format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Unique display name (uniqueness is caller discipline).
    pub name: String,
    /// Plain-text password.
    pub password: String,
}

impl Credential {
    /// Create a credential from a name and password.
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
        }
    }
}
