//! Account lookups against the store.
//!
//! Credentials are matched by the store's equality filter on plaintext
//! fields. There is no token; the returned record *is* the login.

use tracing::{error, info};

use crate::api::client::ApiClient;
use crate::api::error::{ApiError, ApiResult};
use crate::api::types::{Admin, NewUser, User};

impl ApiClient {
    /// Register a guest account unless the email is already taken.
    pub async fn signup_user(&self, user: &NewUser) -> ApiResult<User> {
        self.create_unique_user(user)
            .await
            .inspect(|created| info!(user_id = %created.id, "User signed up"))
            .inspect_err(|e| error!(error = %e, "Error signing up"))
    }

    async fn create_unique_user(&self, user: &NewUser) -> ApiResult<User> {
        let existing: Vec<User> = self
            .get_with_query("/users", &[("email", user.email.as_str())])
            .await?;
        if !existing.is_empty() {
            return Err(ApiError::UserExists);
        }
        self.post("/users", user).await
    }

    /// Find the guest account matching email and password.
    pub async fn login_user(&self, email: &str, password: &str) -> ApiResult<User> {
        let log = |e: &ApiError| error!(error = %e, "Error logging in");

        let matches: Vec<User> = self
            .get_with_query("/users", &[("email", email), ("password", password)])
            .await
            .inspect_err(log)?;

        matches
            .into_iter()
            .next()
            .ok_or(ApiError::InvalidUserCredentials)
            .inspect_err(log)
    }

    /// Find the admin account matching username and password.
    pub async fn login_admin(&self, username: &str, password: &str) -> ApiResult<Admin> {
        let log = |e: &ApiError| error!(error = %e, "Error logging in as admin");

        let matches: Vec<Admin> = self
            .get_with_query("/admins", &[("username", username), ("password", password)])
            .await
            .inspect_err(log)?;

        matches
            .into_iter()
            .next()
            .ok_or(ApiError::InvalidAdminCredentials)
            .inspect_err(log)
    }
}
