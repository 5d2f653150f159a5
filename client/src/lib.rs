//! Client-side authentication session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the single source of truth for "who is logged in" in a running
//! client. UI code reads [`state::session::Session`] snapshots and calls
//! [`state::auth::AuthController`] actions; it never talks to the identity
//! service directly.

pub mod state;
pub mod util;
