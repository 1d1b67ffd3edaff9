//! Account entry points exposed to the presentation layer.
//!
//! These are the checking wrappers around the raw graph operations:
//! `sign_up` performs the name-uniqueness pre-check that `add_user`
//! deliberately does not, and `login` performs the plain-equality
//! password comparison.

use tracing::{debug, warn};

use mingle_creds::CredentialStore;
use mingle_types::UserId;

use crate::error::{GraphError, GraphResult};
use crate::graph::SocialGraph;

impl<S: CredentialStore> SocialGraph<S> {
    /// Create an account, rejecting a display name that is already in use.
    ///
    /// On success the user exists in the graph and its credential has been
    /// appended to the store. On [`GraphError::NameTaken`] neither the
    /// graph nor the store is touched.
    pub fn sign_up(
        &mut self,
        name: impl Into<String>,
        password: impl Into<String>,
    ) -> GraphResult<UserId> {
        let name = name.into();
        if self.find_user_by_name(&name).is_some() {
            warn!(user = %name, "sign-up rejected: name taken");
            return Err(GraphError::NameTaken { name });
        }
        self.add_user(name, password)
    }

    /// Authenticate by name and password.
    ///
    /// Unknown name and wrong password both produce
    /// [`GraphError::InvalidCredentials`]; callers cannot distinguish them.
    pub fn login(&self, name: &str, password: &str) -> GraphResult<UserId> {
        match self.find_user_by_name(name) {
            Some(user) if user.password_matches(password) => {
                debug!(user = %name, id = %user.id, "login ok");
                Ok(user.id)
            }
            _ => Err(GraphError::InvalidCredentials),
        }
    }

    /// Resolve a display name to an id, e.g. for addressing a friend
    /// request typed in by name.
    pub fn resolve_name(&self, name: &str) -> GraphResult<UserId> {
        self.find_user_by_name(name)
            .map(|user| user.id)
            .ok_or_else(|| GraphError::UserNotFound {
                name: name.to_string(),
            })
    }
}
