//! Read-side projections handed to the presentation layer.
//!
//! The graph stores raw arena ids and append-order lists; these views
//! resolve them into display-ready rows. Feed and notifications are
//! returned most-recent-first, pending requests in arrival order.

use serde::{Deserialize, Serialize};

use mingle_creds::CredentialStore;
use mingle_types::UserId;

use crate::error::GraphResult;
use crate::graph::SocialGraph;

/// One row of a user's feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    /// Display name of the post's author.
    pub author: String,
    /// The post body.
    pub content: String,
    /// Like count at display time.
    pub likes: u32,
    /// Dislike count at display time.
    pub dislikes: u32,
}

/// One inbound pending friend request, with enough context for the caller
/// to render an accept action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRequest {
    /// Id of the requester, to pass back into accept.
    pub from: UserId,
    /// Display name of the requester.
    pub name: String,
}

impl<S: CredentialStore> SocialGraph<S> {
    /// The user's feed, most-recent-first.
    ///
    /// Entries are resolved from the post arena at call time, so any
    /// counter change on the shared post is visible here.
    pub fn feed_of(&self, user: UserId) -> GraphResult<Vec<FeedEntry>> {
        let user = self.user(user)?;
        Ok(user
            .feed()
            .iter()
            .rev()
            .filter_map(|id| self.post(*id))
            .map(|post| FeedEntry {
                author: post.author.clone(),
                content: post.content.clone(),
                likes: post.likes,
                dislikes: post.dislikes,
            })
            .collect())
    }

    /// The user's inbound pending friend requests, in arrival order.
    pub fn pending_requests_of(&self, user: UserId) -> GraphResult<Vec<PendingRequest>> {
        let user = self.user(user)?;
        Ok(user
            .friend_requests()
            .iter()
            .map(|from| PendingRequest {
                from: *from,
                name: self.users_name(*from),
            })
            .collect())
    }

    /// The user's notifications, most-recent-first.
    pub fn notifications_of(&self, user: UserId) -> GraphResult<Vec<String>> {
        let user = self.user(user)?;
        Ok(user.notifications().iter().rev().cloned().collect())
    }

    /// Display name for an id known to be valid (ids are never reused, so
    /// every recorded requester still resolves).
    fn users_name(&self, id: UserId) -> String {
        self.user(id)
            .map(|user| user.name.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use mingle_creds::InMemoryCredentialStore;

    fn graph_with(names: &[&str]) -> SocialGraph<InMemoryCredentialStore> {
        let mut graph = SocialGraph::new(InMemoryCredentialStore::new());
        for name in names {
            graph.add_user(*name, "pw").unwrap();
        }
        graph
    }

    fn befriend(graph: &mut SocialGraph<InMemoryCredentialStore>, a: UserId, b: UserId) {
        graph.send_friend_request(a, b).unwrap();
        graph.accept_friend_request(b, a).unwrap();
    }

    #[test]
    fn feed_is_most_recent_first() {
        let mut graph = graph_with(&["alice", "bob"]);
        befriend(&mut graph, UserId(0), UserId(1));
        graph.create_post(UserId(0), "first").unwrap();
        graph.create_post(UserId(0), "second").unwrap();

        let feed = graph.feed_of(UserId(1)).unwrap();
        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].content, "second");
        assert_eq!(feed[1].content, "first");
        assert_eq!(feed[0].author, "alice");
        assert_eq!((feed[0].likes, feed[0].dislikes), (0, 0));
    }

    #[test]
    fn feed_of_empty_user_is_empty() {
        let graph = graph_with(&["alice"]);
        assert!(graph.feed_of(UserId(0)).unwrap().is_empty());
    }

    #[test]
    fn pending_requests_carry_requester_names_in_arrival_order() {
        let mut graph = graph_with(&["alice", "bob", "carol"]);
        graph.send_friend_request(UserId(1), UserId(0)).unwrap();
        graph.send_friend_request(UserId(2), UserId(0)).unwrap();

        let pending = graph.pending_requests_of(UserId(0)).unwrap();
        assert_eq!(
            pending,
            vec![
                PendingRequest { from: UserId(1), name: "bob".into() },
                PendingRequest { from: UserId(2), name: "carol".into() },
            ]
        );
    }

    #[test]
    fn notifications_are_most_recent_first() {
        let mut graph = graph_with(&["alice", "bob", "carol"]);
        graph.send_friend_request(UserId(1), UserId(0)).unwrap();
        graph.send_friend_request(UserId(2), UserId(0)).unwrap();

        let notifications = graph.notifications_of(UserId(0)).unwrap();
        assert_eq!(
            notifications,
            vec![
                "carol sent you a friend request.".to_string(),
                "bob sent you a friend request.".to_string(),
            ]
        );
    }

    #[test]
    fn views_reject_unknown_ids() {
        let graph = graph_with(&["alice"]);
        assert!(matches!(
            graph.feed_of(UserId(9)),
            Err(GraphError::UnknownUser(_))
        ));
        assert!(matches!(
            graph.pending_requests_of(UserId(9)),
            Err(GraphError::UnknownUser(_))
        ));
        assert!(matches!(
            graph.notifications_of(UserId(9)),
            Err(GraphError::UnknownUser(_))
        ));
    }
}
