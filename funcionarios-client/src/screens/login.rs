//! Login screen

use std::sync::Arc;

use shared::models::UserProfile;

use super::{Alert, Busy, Effect, Route};
use crate::DirectoryApi;

pub struct LoginScreen {
    api: Arc<dyn DirectoryApi>,
    pub email: String,
    pub password: String,
    loading: bool,
    user: Option<UserProfile>,
}

impl LoginScreen {
    pub fn new(api: Arc<dyn DirectoryApi>) -> Self {
        Self {
            api,
            email: String::new(),
            password: String::new(),
            loading: false,
            user: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Profile of the accepted login, kept in memory only
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Check the credentials and move on to the list
    pub async fn submit(&mut self) -> Effect {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Effect::alert(Alert::error("Por favor, preencha email e senha."));
        }

        let result = {
            let _busy = Busy::new(&mut self.loading);
            self.api.login(self.email.trim(), &self.password).await
        };

        match result {
            Ok(user) => {
                tracing::debug!(user_id = user.id, "Logged in");
                self.user = Some(user);
                self.password.clear();
                Effect::navigate(Route::List { refresh: false })
            }
            Err(e) => {
                tracing::debug!(error = %e, "Login failed");
                Effect::alert(Alert::error(e.user_message()))
            }
        }
    }
}
