//! Navigation bar contents for the current session.

use crate::routing::Page;
use crate::session::AuthState;

/// One entry of the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItem {
    Link { label: &'static str, target: Page },
    /// Display name linking to the profile.
    Account { name: String, admin: bool },
    Logout,
}

impl NavItem {
    fn link(label: &'static str, target: Page) -> Self {
        NavItem::Link { label, target }
    }

    /// Text shown for the entry.
    pub fn label(&self) -> String {
        match self {
            NavItem::Link { label, .. } => label.to_string(),
            NavItem::Account { name, admin: true } => format!("{name} (Admin)"),
            NavItem::Account { name, admin: false } => name.clone(),
            NavItem::Logout => "Logout".to_string(),
        }
    }
}

/// Entries in display order.
pub fn nav_items(state: &AuthState) -> Vec<NavItem> {
    let mut items = vec![
        NavItem::link("Home", Page::Home),
        NavItem::link("Rooms", Page::Rooms),
    ];

    if state.is_authenticated() {
        items.push(NavItem::link("My Bookings", Page::Bookings));
        items.push(NavItem::link("Profile", Page::Profile));
    }
    if state.is_admin() {
        items.push(NavItem::link("Admin Panel", Page::Admin));
        items.push(NavItem::link("Profile", Page::Profile));
    }

    match (&state.admin, &state.user) {
        (None, None) => {
            items.push(NavItem::link("Login", Page::Login));
            items.push(NavItem::link("Sign Up", Page::Signup));
        }
        (Some(admin), _) => {
            items.push(NavItem::Account {
                name: admin.name.clone(),
                admin: true,
            });
            items.push(NavItem::Logout);
        }
        (None, Some(user)) => {
            items.push(NavItem::Account {
                name: user.name.clone(),
                admin: false,
            });
            items.push(NavItem::Logout);
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Admin, RecordId, User};
    use serde_json::Map;

    fn labels(state: &AuthState) -> Vec<String> {
        nav_items(state).iter().map(NavItem::label).collect()
    }

    #[test]
    fn test_anonymous() {
        assert_eq!(
            labels(&AuthState::default()),
            vec!["Home", "Rooms", "Login", "Sign Up"]
        );
    }

    #[test]
    fn test_guest() {
        let state = AuthState {
            user: Some(User {
                id: RecordId::Num(1),
                name: "Dev".into(),
                email: "dev@example.com".into(),
                password: "pw".into(),
                extra: Map::new(),
            }),
            admin: None,
            loading: false,
        };
        assert_eq!(
            labels(&state),
            vec!["Home", "Rooms", "My Bookings", "Profile", "Dev", "Logout"]
        );
    }

    #[test]
    fn test_admin() {
        let state = AuthState {
            user: None,
            admin: Some(Admin {
                id: RecordId::Num(1),
                username: "admin".into(),
                name: "Hotel Admin".into(),
                password: "pw".into(),
                extra: Map::new(),
            }),
            loading: false,
        };
        assert_eq!(
            labels(&state),
            vec!["Home", "Rooms", "Admin Panel", "Profile", "Hotel Admin (Admin)", "Logout"]
        );
    }
}
