//! Authentication state and its persistence.

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::api::types::{Admin, RecordId, User};
use crate::session::storage::{SessionError, SessionStorage};

/// Storage key for the logged-in guest record.
pub const USER_KEY: &str = "user";
/// Storage key for the logged-in admin record.
pub const ADMIN_KEY: &str = "admin";

/// Who is logged in, as seen by guards and views.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub admin: Option<Admin>,
    /// True until the stored records have been read back.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            admin: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// A guest account is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// An admin account is logged in.
    pub fn is_admin(&self) -> bool {
        self.admin.is_some()
    }

    /// The account profile pages show: the admin when present, else the user.
    pub fn current_identity(&self) -> Option<Identity<'_>> {
        match (&self.admin, &self.user) {
            (Some(admin), _) => Some(Identity::Admin(admin)),
            (None, Some(user)) => Some(Identity::User(user)),
            (None, None) => None,
        }
    }

    /// Id stamped on new bookings.
    pub fn user_id(&self) -> Option<&RecordId> {
        self.user.as_ref().map(|u| &u.id)
    }
}

/// Borrowed view of the current account.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Identity<'a> {
    User(&'a User),
    Admin(&'a Admin),
}

impl<'a> Identity<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Identity::User(user) => &user.name,
            Identity::Admin(admin) => &admin.name,
        }
    }

    /// Email for guests, username for admins.
    pub fn handle(&self) -> &'a str {
        match self {
            Identity::User(user) => &user.email,
            Identity::Admin(admin) => &admin.username,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Identity::Admin(_))
    }
}

/// Auth state bound to the storage it is persisted in.
#[derive(Debug)]
pub struct Session<S> {
    state: AuthState,
    storage: S,
}

impl<S: SessionStorage> Session<S> {
    /// Wrap `storage` without reading it; the state stays `loading`.
    pub fn new(storage: S) -> Self {
        Self {
            state: AuthState::default(),
            storage,
        }
    }

    /// Wrap `storage` and read back any stored records.
    pub fn restore_from(storage: S) -> Self {
        let mut session = Self::new(storage);
        session.restore();
        session
    }

    /// Read the stored user and admin records and finish loading.
    pub fn restore(&mut self) {
        self.state.user = self.read_record(USER_KEY);
        self.state.admin = self.read_record(ADMIN_KEY);
        self.state.loading = false;
    }

    fn read_record<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.storage.get(key)?;
        serde_json::from_str(&raw)
            .inspect_err(|e| warn!(key, error = %e, "Discarding unreadable session record"))
            .ok()
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Record a guest login.
    pub fn login(&mut self, user: User) -> Result<(), SessionError> {
        let raw = serde_json::to_string(&user)?;
        info!(user_id = %user.id, "User logged in");
        self.state.user = Some(user);
        self.storage.set(USER_KEY, raw)
    }

    /// Record an admin login.
    pub fn admin_login(&mut self, admin: Admin) -> Result<(), SessionError> {
        let raw = serde_json::to_string(&admin)?;
        info!(admin_id = %admin.id, "Admin logged in");
        self.state.admin = Some(admin);
        self.storage.set(ADMIN_KEY, raw)
    }

    /// Forget both accounts.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.state.user = None;
        self.state.admin = None;
        self.storage.remove(USER_KEY)?;
        self.storage.remove(ADMIN_KEY)?;
        info!("Logged out");
        Ok(())
    }
}
