use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a user in the social graph.
///
/// Ids are dense and assigned in insertion order starting at 0: the n-th
/// user ever created holds id `n`. Once assigned an id never changes and is
/// never reused (users cannot be deleted).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub u64);

impl UserId {
    /// The raw index value.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserId({})", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for u64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// Identifier of a post in the social graph's post arena.
///
/// A `PostId` is an index into the central post arena. An author's post
/// list and a friend's feed hold the *same* `PostId`, so an edit to the
/// arena entry is visible everywhere the post appears.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PostId(pub u64);

impl PostId {
    /// The raw index value.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PostId({})", self.0)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PostId> for u64 {
    fn from(id: PostId) -> Self {
        id.0
    }
}
