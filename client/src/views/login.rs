use crate::api::ApiClient;
use crate::error::Result;
use crate::navigation::{NavigationStore, Page};

/// Login form state. `submit` checks credentials against the API and moves
/// to the home page when they pass.
#[derive(Default)]
pub struct LoginView {
    pub username: String,
    pub password: String,
    pub error: Option<String>,
}

impl LoginView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when login succeeded and navigation happened.
    pub async fn submit(&mut self, api: &ApiClient, nav: &mut NavigationStore) -> Result<bool> {
        self.error = None;

        if self.username.trim().is_empty() || self.password.is_empty() {
            self.error = Some("Username and password are required".to_string());
            return Ok(false);
        }

        if api.login(&self.username, &self.password).await? {
            nav.navigate(Page::Home);
            Ok(true)
        } else {
            self.error = Some("Wrong username or password!".to_string());
            Ok(false)
        }
    }
}
