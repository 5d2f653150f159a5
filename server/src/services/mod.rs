//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the identity checks so route handlers stay focused on
//! header extraction and response shape.

pub mod verify;
