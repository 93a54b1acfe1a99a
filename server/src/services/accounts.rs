//! Static test-account table.
//!
//! The table is built once at startup and never mutated; lookups are exact
//! `(email, password)` matches over three rows.

#[cfg(test)]
#[path = "accounts_test.rs"]
mod accounts_test;

use models::{Profile, TestAccountHint, User};

const FIXTURE_CREATED_AT: &str = "2024-01-01T00:00:00.000Z";

/// Email address the mock reports as already registered.
pub const EXISTING_EMAIL: &str = "existing@example.com";

/// A canned account: credentials plus the user and token handed out on login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub email: String,
    pub password: String,
    pub user: User,
    pub token: String,
}

/// Read-only set of accounts accepted by `POST /auth/login`.
#[derive(Debug, Clone, Default)]
pub struct AccountTable {
    accounts: Vec<Account>,
}

impl AccountTable {
    /// The three fixed test accounts.
    #[must_use]
    pub fn fixture() -> Self {
        Self {
            accounts: vec![
                fixture_account(
                    ("mock-user-001", "testuser", "test@example.com", "password123"),
                    ("Test", "https://example.com/avatar.jpg"),
                    "mock-jwt-token-test-12345",
                ),
                fixture_account(
                    ("mock-user-002", "admin", "admin@tone-app.com", "admin123"),
                    ("Admin", "https://example.com/admin-avatar.jpg"),
                    "mock-jwt-token-admin-67890",
                ),
                fixture_account(
                    ("mock-user-003", "demouser", "demo@demo.com", "demo123"),
                    ("Demo", "https://example.com/demo-avatar.jpg"),
                    "mock-jwt-token-demo-11111",
                ),
            ],
        }
    }

    /// Account whose email and password both match exactly.
    #[must_use]
    pub fn find(&self, email: &str, password: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.email == email && account.password == password)
    }

    /// Credentials of every account, for the failed-login hint.
    #[must_use]
    pub fn hints(&self) -> Vec<TestAccountHint> {
        self.accounts
            .iter()
            .map(|account| TestAccountHint {
                email: account.email.clone(),
                password: account.password.clone(),
                username: account.user.username.clone(),
            })
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Account> {
        self.accounts.iter()
    }
}

impl<'a> IntoIterator for &'a AccountTable {
    type Item = &'a Account;
    type IntoIter = std::slice::Iter<'a, Account>;

    fn into_iter(self) -> Self::IntoIter {
        self.accounts.iter()
    }
}

/// The user returned by `GET /auth/me`: always the first test account.
#[must_use]
pub fn current_user() -> User {
    fixture_user("mock-user-001", "testuser", "test@example.com", "Test", "https://example.com/avatar.jpg")
}

fn fixture_account(
    (id, username, email, password): (&str, &str, &str, &str),
    (first_name, avatar): (&str, &str),
    token: &str,
) -> Account {
    Account {
        email: email.to_owned(),
        password: password.to_owned(),
        user: fixture_user(id, username, email, first_name, avatar),
        token: token.to_owned(),
    }
}

fn fixture_user(id: &str, username: &str, email: &str, first_name: &str, avatar: &str) -> User {
    User {
        id: id.to_owned(),
        username: username.to_owned(),
        email: email.to_owned(),
        created_at: FIXTURE_CREATED_AT.to_owned(),
        profile: Some(Profile {
            first_name: first_name.to_owned(),
            last_name: "User".to_owned(),
            avatar: avatar.to_owned(),
        }),
    }
}
