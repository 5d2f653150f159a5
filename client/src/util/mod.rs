//! Helpers for identity-aware views.

pub mod auth;
