//! Client-side auth state for the TONE mock auth service.
//!
//! SYSTEM CONTEXT
//! ==============
//! UI front ends (the `cli` crate, or a browser shell) hold an
//! [`auth::AuthController`] built from a transport ([`net::api::AuthApi`]) and a
//! session store ([`session::SessionStore`]). Forms validate locally and only
//! reach the network through the controller.

pub mod auth;
pub mod error;
pub mod forms;
pub mod net;
pub mod session;
pub mod state;
pub mod validation;

pub use auth::AuthController;
pub use error::{ClientError, StoreError};
pub use forms::{LoginForm, RegisterForm};
pub use net::api::{AuthApi, HttpAuthApi};
pub use session::{FileSessionStore, MemorySessionStore, SessionStore};
