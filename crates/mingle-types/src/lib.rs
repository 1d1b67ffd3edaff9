//! Foundation types for the mingle social graph.
//!
//! This crate provides the identifier and data types shared by every other
//! mingle crate. Every other mingle crate depends on `mingle-types`.
//!
//! # Key Types
//!
//! - [`UserId`] — Dense, insertion-ordered user identifier
//! - [`PostId`] — Index into the social graph's post arena
//! - [`Post`] — A single authored post with its reaction counters
//! - [`Credential`] — A plain name/password pair as persisted by the
//!   credential store

pub mod credential;
pub mod id;
pub mod post;

pub use credential::Credential;
pub use id::{PostId, UserId};
pub use post::Post;
