use std::collections::BTreeSet;

use mingle_types::{PostId, UserId};

/// A user in the social graph.
///
/// Owns the per-user collections. All of them are only ever mutated by
/// [`SocialGraph`] operations; in particular the `friends` adjacency set
/// is written exclusively by the graph's symmetric-edge helper, so a
/// friendship edge always exists in both directions.
///
/// [`SocialGraph`]: crate::SocialGraph
#[derive(Clone, Debug)]
pub struct User {
    /// Dense identifier, equal to this user's 0-based creation order.
    pub id: UserId,
    /// Display name. Unique by sign-up discipline, not by construction.
    pub name: String,
    /// Plain-text password, compared by equality at login.
    pub(crate) password: String,
    /// Adjacency set of mutual friendships, keyed by id.
    pub(crate) friends: BTreeSet<UserId>,
    /// Posts authored by this user, in creation order. Append-only.
    pub(crate) posts: Vec<PostId>,
    /// Posts fanned out from friends, in arrival order. Shares arena ids
    /// with each author's `posts` list. Displayed most-recent-first.
    pub(crate) feed: Vec<PostId>,
    /// Inbound pending friend requests, in arrival order. An entry is
    /// removed only on acceptance.
    pub(crate) friend_requests: Vec<UserId>,
    /// Human-readable event log. Append-only, no expiry. Displayed
    /// most-recent-first.
    pub(crate) notifications: Vec<String>,
}

impl User {
    pub(crate) fn new(id: UserId, name: String, password: String) -> Self {
        Self {
            id,
            name,
            password,
            friends: BTreeSet::new(),
            posts: Vec::new(),
            feed: Vec::new(),
            friend_requests: Vec::new(),
            notifications: Vec::new(),
        }
    }

    /// Ids of this user's friends.
    pub fn friends(&self) -> &BTreeSet<UserId> {
        &self.friends
    }

    /// Returns `true` if `other` is a friend of this user.
    pub fn is_friend_of(&self, other: UserId) -> bool {
        self.friends.contains(&other)
    }

    /// Posts authored by this user, oldest first.
    pub fn posts(&self) -> &[PostId] {
        &self.posts
    }

    /// Raw feed entries, oldest first.
    pub fn feed(&self) -> &[PostId] {
        &self.feed
    }

    /// Inbound pending friend requests, in arrival order.
    pub fn friend_requests(&self) -> &[UserId] {
        &self.friend_requests
    }

    /// Raw notification log, oldest first.
    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    /// Returns `true` if `password` matches this user's stored password.
    ///
    /// Plain equality: passwords are stored unhashed by design.
    pub fn password_matches(&self, password: &str) -> bool {
        self.password == password
    }
}
