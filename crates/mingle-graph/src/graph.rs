//! The core social graph structure and its mutating operations.
//!
//! [`SocialGraph`] is the main data structure. It stores users in a dense
//! table (index == id) and posts in a central arena, so an author's post
//! list and a recipient's feed share the same [`PostId`] rather than
//! holding copies.
//!
//! # Invariants
//!
//! - Friendship is always mutual: `A in B.friends` iff `B in A.friends`.
//!   Both directions are written by the single [`insert_edge`] helper.
//! - A (from, to) request exists at most once in `to.friend_requests`;
//!   a duplicate send is rejected without mutating state.
//! - Accepting removes the pending entry before the edge is inserted, so
//!   a pending request never coexists with an accepted friendship.
//! - User ids are dense, assigned in insertion order, and never reused.
//!
//! [`insert_edge`]: SocialGraph::insert_edge

use tracing::{debug, info};

use mingle_creds::CredentialStore;
use mingle_types::{Credential, Post, PostId, UserId};

use crate::error::{GraphError, GraphResult};
use crate::user::User;

/// The social graph: every user, their friendships, and the post arena.
///
/// Generic over the [`CredentialStore`] backend so the same graph runs on
/// the flat credential file in the app and on an in-memory store in tests.
/// All social-graph state besides the credentials lives only in memory for
/// the duration of the session.
pub struct SocialGraph<S: CredentialStore> {
    /// Dense user table; a user's index equals its id.
    users: Vec<User>,
    /// Post arena. `posts` and `feed` lists hold indices into this.
    posts: Vec<Post>,
    /// Durable credential backend, written on every non-replay `add_user`.
    store: S,
}

impl<S: CredentialStore> SocialGraph<S> {
    /// Create an empty graph over the given credential store.
    pub fn new(store: S) -> Self {
        Self {
            users: Vec::new(),
            posts: Vec::new(),
            store,
        }
    }

    /// Build a graph by replaying every stored credential through user
    /// construction, without re-appending to the store.
    ///
    /// Fails if the store cannot be read or contains a malformed record;
    /// there is no partial recovery at startup.
    pub fn open(store: S) -> GraphResult<Self> {
        let mut graph = Self::new(store);
        for credential in graph.store.load()? {
            graph.insert_user(credential.name, credential.password);
        }
        info!(users = graph.users.len(), "replayed credential store");
        Ok(graph)
    }

    /// Number of users in the graph.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns `true` if the graph has no users.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// All users, in insertion order.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    /// Resolve a user by id.
    pub fn user(&self, id: UserId) -> GraphResult<&User> {
        self.users
            .get(id.index())
            .ok_or(GraphError::UnknownUser(id))
    }

    /// Resolve a post by arena id.
    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.get(id.index())
    }

    /// Find a user by display name: linear scan, first exact match.
    ///
    /// Case-sensitive. `None` is the not-found signal.
    pub fn find_user_by_name(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|user| user.name == name)
    }

    // ---------------------------------------------------------------
    // Mutation
    // ---------------------------------------------------------------

    /// Add a new user and persist its credential.
    ///
    /// The id is the next sequential index. No name-uniqueness check is
    /// performed here; [`sign_up`] is the checking entry point, and a
    /// caller that bypasses it can create duplicate names.
    ///
    /// [`sign_up`]: SocialGraph::sign_up
    pub fn add_user(
        &mut self,
        name: impl Into<String>,
        password: impl Into<String>,
    ) -> GraphResult<UserId> {
        let name = name.into();
        let password = password.into();
        let credential = Credential::new(name.clone(), password.clone());
        let id = self.insert_user(name, password);
        self.store.append(&credential)?;
        Ok(id)
    }

    /// Construct a user in memory without touching the store. Used by both
    /// `add_user` and the startup replay.
    fn insert_user(&mut self, name: String, password: String) -> UserId {
        let id = UserId(self.users.len() as u64);
        debug!(user = %name, id = %id, "added user");
        self.users.push(User::new(id, name, password));
        id
    }

    /// Send a friend request from `from` to `to`.
    ///
    /// Appends `from` to `to`'s pending list and notifies `to`. If the
    /// request is already pending, returns [`GraphError::DuplicateRequest`]
    /// and changes nothing.
    ///
    /// Deliberately permissive beyond that: self-requests and requests to
    /// an existing friend are allowed, matching the accepted behavior of
    /// the system this models.
    pub fn send_friend_request(&mut self, from: UserId, to: UserId) -> GraphResult<()> {
        let from_name = self.user(from)?.name.clone();
        self.user(to)?;

        let to_user = &mut self.users[to.index()];
        if to_user.friend_requests.contains(&from) {
            return Err(GraphError::DuplicateRequest {
                from: from_name,
                to: to_user.name.clone(),
            });
        }
        to_user.friend_requests.push(from);
        to_user
            .notifications
            .push(format!("{from_name} sent you a friend request."));

        debug!(from = %from, to = %to, "friend request sent");
        Ok(())
    }

    /// Accept the pending friend request sent by `from` to `user`.
    ///
    /// Removes the pending entry, inserts the mutual friendship edge, and
    /// notifies `from`. If no such request is pending, returns
    /// [`GraphError::NoPendingRequest`] and changes nothing.
    pub fn accept_friend_request(&mut self, user: UserId, from: UserId) -> GraphResult<()> {
        let user_name = self.user(user)?.name.clone();
        let from_name = self.user(from)?.name.clone();

        let accepting = &mut self.users[user.index()];
        let Some(position) = accepting.friend_requests.iter().position(|id| *id == from) else {
            return Err(GraphError::NoPendingRequest { from: from_name });
        };
        accepting.friend_requests.remove(position);

        self.insert_edge(user, from);
        self.users[from.index()]
            .notifications
            .push(format!("{user_name} accepted your friend request."));

        debug!(user = %user, from = %from, "friend request accepted");
        Ok(())
    }

    /// Create a post authored by `author` and fan it out.
    ///
    /// The post is allocated in the arena with the author's display name
    /// captured as a string and zeroed reaction counters. The author's
    /// friend set is snapshotted at call time: each current friend gets
    /// the same [`PostId`] appended to their feed plus a notification, and
    /// later friendship changes never retroactively alter the fan-out.
    pub fn create_post(&mut self, author: UserId, content: impl Into<String>) -> GraphResult<PostId> {
        let author_name = self.user(author)?.name.clone();

        let id = PostId(self.posts.len() as u64);
        self.posts.push(Post::new(id, author_name.clone(), content));
        self.users[author.index()].posts.push(id);

        let recipients: Vec<UserId> = self.users[author.index()].friends.iter().copied().collect();
        for friend in &recipients {
            let friend_user = &mut self.users[friend.index()];
            friend_user.feed.push(id);
            friend_user
                .notifications
                .push(format!("{author_name} created a new post."));
        }

        debug!(author = %author, post = %id, fanout = recipients.len(), "post created");
        Ok(id)
    }

    /// Insert the undirected friendship edge between `a` and `b`.
    ///
    /// The only writer of the `friends` sets: both directions are inserted
    /// here, so the mutual-friendship invariant holds by construction.
    /// Callers must have validated both ids.
    fn insert_edge(&mut self, a: UserId, b: UserId) {
        self.users[a.index()].friends.insert(b);
        self.users[b.index()].friends.insert(a);
    }
}

impl<S: CredentialStore> std::fmt::Debug for SocialGraph<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SocialGraph")
            .field("user_count", &self.users.len())
            .field("post_count", &self.posts.len())
            .finish()
    }
}
