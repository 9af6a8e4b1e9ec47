//! Page table.

use std::fmt;
use std::sync::OnceLock;

use crate::routing::matcher::{Params, PathPattern};
use crate::security::access_control::Guard;

/// Every page of the booking interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Signup,
    AdminLogin,
    Rooms,
    RoomDetails { id: String },
    Booking { room_id: String },
    Bookings,
    Profile,
    Admin,
}

type Build = fn(&Params) -> Page;

const ROUTES: &[(&str, Build)] = &[
    ("/", |_| Page::Home),
    ("/login", |_| Page::Login),
    ("/signup", |_| Page::Signup),
    ("/admin-login", |_| Page::AdminLogin),
    ("/rooms", |_| Page::Rooms),
    ("/rooms/:id", |p| Page::RoomDetails { id: param(p, "id") }),
    ("/booking/:id", |p| Page::Booking { room_id: param(p, "id") }),
    ("/bookings", |_| Page::Bookings),
    ("/profile", |_| Page::Profile),
    ("/admin", |_| Page::Admin),
];

fn param(params: &Params, name: &str) -> String {
    params.get(name).cloned().unwrap_or_default()
}

fn table() -> &'static [(PathPattern, Build)] {
    static TABLE: OnceLock<Vec<(PathPattern, Build)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        ROUTES
            .iter()
            .map(|(pattern, build)| (PathPattern::new(pattern), *build))
            .collect()
    })
}

impl Page {
    /// Resolve a path to its page.
    pub fn resolve(path: &str) -> Option<Page> {
        table()
            .iter()
            .find_map(|(pattern, build)| pattern.matches(path).map(|params| build(&params)))
    }

    /// Canonical path of this page.
    pub fn path(&self) -> String {
        match self {
            Page::Home => "/".to_string(),
            Page::Login => "/login".to_string(),
            Page::Signup => "/signup".to_string(),
            Page::AdminLogin => "/admin-login".to_string(),
            Page::Rooms => "/rooms".to_string(),
            Page::RoomDetails { id } => format!("/rooms/{id}"),
            Page::Booking { room_id } => format!("/booking/{room_id}"),
            Page::Bookings => "/bookings".to_string(),
            Page::Profile => "/profile".to_string(),
            Page::Admin => "/admin".to_string(),
        }
    }

    /// Access rule wrapped around this page.
    pub fn guard(&self) -> Guard {
        match self {
            Page::Booking { .. } => Guard::Private,
            Page::Bookings | Page::Profile => Guard::Authenticated,
            Page::Admin => Guard::Admin,
            _ => Guard::Public,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
