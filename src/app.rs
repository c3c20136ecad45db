// Copyright 2024 The Bloglist Authors
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log::{error, info, warn};

use crate::blogs::BlogList;
use crate::config::Config;
use crate::domain::Session;
use crate::error::{Error, Result};
use crate::form::{BlogForm, LoginForm, Toggle};
use crate::notification::{Notification, Notifier};
use crate::service::BlogService;
use crate::storage::SessionStore;

/// Top level controller of the client.
///
/// Owns the session, the blog collection, the notification and the form
/// state. Every action takes `&mut self`, so actions run one after another
/// and their results are applied in the order they were issued.
///
/// Actions report failures twice: the error is logged and an error
/// notification is shown, then the error is returned to the caller.
pub struct App {
    pub(crate) service: BlogService,
    pub(crate) store: SessionStore,
    pub(crate) session: Option<Session>,
    pub(crate) blogs: BlogList,
    pub(crate) notifier: Notifier,
    pub login_form: LoginForm,
    pub blog_form: BlogForm,
    pub blog_form_toggle: Toggle,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            service: BlogService::new(config.url()),
            store: SessionStore::new(config.session_path()),
            session: None,
            blogs: BlogList::default(),
            notifier: Notifier::new(config.notification_ttl()),
            login_form: LoginForm::default(),
            blog_form: BlogForm::default(),
            blog_form_toggle: Toggle::new("New Blog"),
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn blogs(&self) -> &BlogList {
        &self.blogs
    }

    pub fn notification(&self) -> Option<Notification> {
        self.notifier.current()
    }

    pub fn service(&self) -> &BlogService {
        &self.service
    }

    /// Adopts the stored session, if any, and loads the blogs for it.
    ///
    /// A stored session that cannot be read leaves the client logged out.
    pub async fn restore(&mut self) -> Result<()> {
        let session = match self.store.load() {
            Ok(session) => session,
            Err(err) => {
                warn!("could not read stored session: {}", err);
                None
            }
        };

        let Some(session) = session else {
            return Ok(());
        };

        info!("restored session of {}", session.username);
        self.service.set_token(Some(&session.token));
        self.session = Some(session);
        self.refresh().await
    }

    /// Logs in with the credentials currently in the login form.
    pub async fn login(&mut self) -> Result<()> {
        let credentials = self.login_form.submit();
        let session = match self.service.login(&credentials).await {
            Ok(session) => session,
            Err(err) => {
                error!("login of {} failed: {}", credentials.username, err);
                self.notifier.error("Wrong credentials");
                return Err(err);
            }
        };

        if let Err(err) = self.store.save(&session) {
            warn!("could not store session: {}", err);
        }
        info!("logged in as {}", session.username);
        self.service.set_token(Some(&session.token));
        self.session = Some(session);
        self.login_form.clear();
        self.refresh().await
    }

    pub fn logout(&mut self) {
        if let Err(err) = self.store.clear() {
            warn!("could not remove stored session: {}", err);
        }
        self.session = None;
        self.service.set_token(None);
        self.blog_form_toggle.hide();
        self.notifier.success("Logged out successfully");
    }

    pub(crate) fn require_session(&self) -> Result<&Session> {
        self.session.as_ref().ok_or_else(|| {
            self.notifier.error("Log in to manage blogs");
            Error::NotLoggedIn
        })
    }
}
