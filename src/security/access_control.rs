//! Route guards.
//! Decides whether the current session may open a page.

use tracing::debug;

use crate::routing::Page;
use crate::session::AuthState;

/// Access rule attached to a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Anyone.
    Public,
    /// A guest account must be logged in.
    Private,
    /// A guest or an admin account must be logged in.
    Authenticated,
    /// An admin account must be logged in.
    Admin,
}

/// Outcome of a guard check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Allow,
    /// The stored session has not been read yet; show a loading state.
    Pending,
    /// Send the visitor to this page instead.
    Redirect(Page),
}

impl Guard {
    /// Login page a denied visitor is sent to.
    pub fn login_page(&self) -> Page {
        match self {
            Guard::Admin => Page::AdminLogin,
            _ => Page::Login,
        }
    }

    fn admits(&self, state: &AuthState) -> bool {
        match self {
            Guard::Public => true,
            Guard::Private => state.is_authenticated(),
            Guard::Authenticated => state.is_authenticated() || state.is_admin(),
            Guard::Admin => state.is_admin(),
        }
    }
}

/// Check `guard` against the session.
pub fn authorize(guard: Guard, state: &AuthState) -> Access {
    if guard == Guard::Public {
        return Access::Allow;
    }
    if state.loading {
        return Access::Pending;
    }
    if guard.admits(state) {
        Access::Allow
    } else {
        let target = guard.login_page();
        debug!(?guard, redirect = %target, "Access denied");
        Access::Redirect(target)
    }
}

/// Check the guard of `page` against the session.
pub fn authorize_page(page: &Page, state: &AuthState) -> Access {
    authorize(page.guard(), state)
}
