//! Core social graph for mingle.
//!
//! This crate holds the whole in-memory social network for one session:
//! every user, the friendship adjacency sets, the post arena, and each
//! user's feed, pending requests, and notifications. The only durable
//! state is the credential list, reached through the injected
//! [`CredentialStore`] backend; everything else exists for the lifetime of
//! the [`SocialGraph`] value.
//!
//! # Architecture
//!
//! - **Users** live in a dense table; a [`UserId`] is the user's 0-based
//!   creation index and is never reused.
//! - **Posts** live in a central arena. An author's post list and a
//!   friend's feed hold the same [`PostId`], so there is exactly one copy
//!   of every post.
//! - **Friendships** are undirected edges written by a single symmetric
//!   helper, making the mutual-friendship invariant structural.
//! - **Requests and notifications** are plain append-order lists; a
//!   pending request leaves the list only on acceptance.
//!
//! Mutation is synchronous and single-session through `&mut self`; the
//! graph contains no locking because exclusive access is enforced by the
//! borrow checker.
//!
//! # Modules
//!
//! - [`error`] — Error types for graph operations
//! - [`user`] — The [`User`] entity and its collections
//! - [`graph`] — [`SocialGraph`] construction and mutating operations
//! - [`account`] — Sign-up, login, and name resolution
//! - [`views`] — Display-ready feed, request, and notification projections
//!
//! [`CredentialStore`]: mingle_creds::CredentialStore
//! [`UserId`]: mingle_types::UserId
//! [`PostId`]: mingle_types::PostId

pub mod account;
pub mod error;
pub mod graph;
pub mod user;
pub mod views;

pub use error::{GraphError, GraphResult};
pub use graph::SocialGraph;
pub use user::User;
pub use views::{FeedEntry, PendingRequest};
