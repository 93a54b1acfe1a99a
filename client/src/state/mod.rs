//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth` for the request lifecycle, `shell` for
//! which page is showing) so front ends can depend on small focused models.

pub mod auth;
pub mod shell;
