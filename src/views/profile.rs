//! Profile page.

use crate::routing::Page;
use crate::session::{AuthState, Identity, Session, SessionError, SessionStorage};

pub const NOT_LOGGED_IN: &str = "Please log in to view your profile";
pub const SAVE_NOTICE: &str =
    "Profile updated successfully! (Note: This is a demo - changes are not persisted)";

/// Editable profile fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub username: String,
}

impl ProfileForm {
    fn from_identity(identity: Option<Identity<'_>>) -> Self {
        match identity {
            Some(Identity::User(user)) => Self {
                name: user.name.clone(),
                email: user.email.clone(),
                username: String::new(),
            },
            Some(Identity::Admin(admin)) => Self {
                name: admin.name.clone(),
                email: String::new(),
                username: admin.username.clone(),
            },
            None => Self::default(),
        }
    }
}

/// First letter of the name, uppercased; `U` when there is no name.
pub fn avatar_initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "U".to_string())
}

/// What the profile header shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    pub initial: String,
    pub name: String,
    /// Email for guests, username for admins.
    pub handle: String,
    pub admin_badge: bool,
}

/// Profile page state.
#[derive(Debug, Clone, Default)]
pub struct ProfileView {
    pub card: Option<ProfileCard>,
    pub form: ProfileForm,
    pub editing: bool,
    original: ProfileForm,
}

impl ProfileView {
    pub fn new(state: &AuthState) -> Self {
        let identity = state.current_identity();
        let card = identity.map(|id| ProfileCard {
            initial: avatar_initial(id.name()),
            name: id.name().to_string(),
            handle: id.handle().to_string(),
            admin_badge: id.is_admin(),
        });
        let form = ProfileForm::from_identity(identity);
        Self {
            card,
            original: form.clone(),
            form,
            editing: false,
        }
    }

    /// Banner shown instead of the profile.
    pub fn message(&self) -> Option<&'static str> {
        self.card.is_none().then_some(NOT_LOGGED_IN)
    }

    pub fn begin_edit(&mut self) {
        self.editing = true;
    }

    /// Close the form. Nothing is written to the store.
    pub fn save(&mut self) -> &'static str {
        self.editing = false;
        SAVE_NOTICE
    }

    /// Close the form and restore the account's values.
    pub fn cancel(&mut self) {
        self.editing = false;
        self.form = self.original.clone();
    }
}

/// Log out and go home.
pub fn logout<S: SessionStorage>(session: &mut Session<S>) -> Result<Page, SessionError> {
    session.logout()?;
    Ok(Page::Home)
}
