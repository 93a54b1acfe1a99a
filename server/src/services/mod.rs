//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the mock's business rules (validation, account lookup,
//! registration minting) so route handlers can stay focused on protocol
//! translation.

pub mod accounts;
pub mod auth;
