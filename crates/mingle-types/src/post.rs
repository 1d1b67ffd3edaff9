use serde::{Deserialize, Serialize};

use crate::id::PostId;

/// A single post in the social graph.
///
/// Posts live in the graph's central arena and are shared by reference:
/// the author's post list and every recipient's feed point at the same
/// arena slot through a [`PostId`].
///
/// The author is captured as a display name at creation time, not as a
/// live user reference. The reaction counters exist in the data model but
/// no graph operation currently increments them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// This post's arena identifier.
    pub id: PostId,
    /// Display name of the author, captured at creation.
    pub author: String,
    /// The post body.
    pub content: String,
    /// Number of likes. Starts at 0.
    pub likes: u32,
    /// Number of dislikes. Starts at 0.
    pub dislikes: u32,
}

impl Post {
    /// Create a new post with zeroed reaction counters.
    pub fn new(id: PostId, author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            author: author.into(),
            content: content.into(),
            likes: 0,
            dislikes: 0,
        }
    }
}
