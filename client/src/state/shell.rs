//! Top-level page state: restoring, auth pages, or the signed-in home.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

/// Which auth form is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPage {
    #[default]
    Login,
    Register,
}

/// What the shell should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Restoring,
    Auth(AuthPage),
    Home,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shell {
    restoring: bool,
    authenticated: bool,
    page: AuthPage,
}

impl Default for Shell {
    fn default() -> Self {
        Self { restoring: true, authenticated: false, page: AuthPage::Login }
    }
}

impl Shell {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish startup with the result of reading the session store.
    pub fn restored(&mut self, authenticated: bool) {
        self.restoring = false;
        self.authenticated = authenticated;
    }

    pub fn on_auth_success(&mut self) {
        self.authenticated = true;
    }

    pub fn on_logout(&mut self) {
        self.authenticated = false;
        self.page = AuthPage::Login;
    }

    /// Switch between the login and register forms. Ignored while a request
    /// is in flight. Returns whether the page changed.
    pub fn switch_to(&mut self, page: AuthPage, loading: bool) -> bool {
        if loading || self.page == page {
            return false;
        }
        self.page = page;
        true
    }

    #[must_use]
    pub fn view(&self) -> View {
        if self.restoring {
            View::Restoring
        } else if self.authenticated {
            View::Home
        } else {
            View::Auth(self.page)
        }
    }
}
