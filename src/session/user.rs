use serde::{Deserialize, Serialize};

/// Identity of the signed-in user as returned by `/auth/me`.
///
/// The record is replaced wholesale on login, logout and session refresh;
/// fields are never patched individually. Contents are trusted as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub user_id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl CurrentUser {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            login: None,
            email: None,
        }
    }

    pub fn with_login(mut self, login: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Label for headers and menus: login, else email, else `#<id>`.
    pub fn display_name(&self) -> String {
        self.login
            .clone()
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| format!("#{}", self.user_id))
    }
}
