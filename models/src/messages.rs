//! User-facing messages shared by the service and its clients.

pub const INPUT_HAS_ERRORS: &str = "There are errors in your input.";

pub const USERNAME_REQUIRED: &str = "Username is required.";
pub const USERNAME_TOO_SHORT: &str = "Username must be at least 3 characters.";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Enter a valid email address.";
pub const PASSWORD_REQUIRED: &str = "Password is required.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";
pub const CONFIRM_PASSWORD_REQUIRED: &str = "Password confirmation is required.";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match.";

pub const EMAIL_TAKEN: &str = "This email address is already registered.";
pub const INVALID_CREDENTIALS: &str = "The email address or password is incorrect.";
pub const CREDENTIALS_SUGGESTION: &str = "Enter a correct email address and password.";
pub const AUTHENTICATION_FAILED: &str = "authentication_failed";
pub const ENDPOINT_NOT_FOUND: &str = "Endpoint not found.";
pub const INTERNAL_ERROR: &str = "An internal server error occurred.";
pub const MALFORMED_BODY: &str = "The request body is not valid JSON.";
pub const MISTYPED_BODY: &str = "The request body has fields of the wrong type.";
pub const UNREADABLE_BODY: &str = "The request body could not be read.";

pub const LOGGED_OUT: &str = "Logged out.";
pub const SERVICE_RUNNING: &str = "TONE mock API server is running";

/// Client fallback when a failed login carries no usable message.
pub const LOGIN_FAILED: &str = "Login failed.";
/// Client fallback when a failed registration carries no usable message.
pub const REGISTRATION_FAILED: &str = "Registration failed.";
