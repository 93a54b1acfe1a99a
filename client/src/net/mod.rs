//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST calls against the mock auth service and decodes its
//! error envelope.

pub mod api;
