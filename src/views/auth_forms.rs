//! Login, signup and admin login forms.
//!
//! On success the returned record is written into the session and the page
//! to continue to is returned. On failure the banner text is returned.

use crate::api::{ApiClient, ApiError, NewUser};
use crate::routing::Page;
use crate::session::{Session, SessionStorage};
use crate::views::FormError;

pub const LOGIN_FAILED: &str = "Failed to login. Please check your credentials.";

/// Banner text for a failed attempt: the error's own message when it has one.
pub fn failure_message(err: &ApiError) -> String {
    let message = err.to_string();
    if message.is_empty() {
        LOGIN_FAILED.to_string()
    } else {
        message
    }
}

fn require(fields: &[&str]) -> Result<(), String> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(FormError::MissingFields.to_string());
    }
    Ok(())
}

/// Guest login.
pub async fn login<S: SessionStorage>(
    api: &ApiClient,
    session: &mut Session<S>,
    email: &str,
    password: &str,
) -> Result<Page, String> {
    require(&[email, password])?;
    let user = api
        .login_user(email, password)
        .await
        .map_err(|e| failure_message(&e))?;
    session.login(user).map_err(|e| e.to_string())?;
    Ok(Page::Rooms)
}

/// Guest signup; the new account is logged in straight away.
pub async fn signup<S: SessionStorage>(
    api: &ApiClient,
    session: &mut Session<S>,
    user: &NewUser,
) -> Result<Page, String> {
    require(&[user.name.as_str(), user.email.as_str(), user.password.as_str()])?;
    let created = api
        .signup_user(user)
        .await
        .map_err(|e| failure_message(&e))?;
    session.login(created).map_err(|e| e.to_string())?;
    Ok(Page::Rooms)
}

/// Admin login.
pub async fn admin_login<S: SessionStorage>(
    api: &ApiClient,
    session: &mut Session<S>,
    username: &str,
    password: &str,
) -> Result<Page, String> {
    require(&[username, password])?;
    let admin = api
        .login_admin(username, password)
        .await
        .map_err(|e| failure_message(&e))?;
    session.admin_login(admin).map_err(|e| e.to_string())?;
    Ok(Page::Admin)
}
