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

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::notification::NOTIFICATION_TTL;
use crate::storage::{default_session_path, SESSION_KEY};

/// Address of a locally running blog service.
pub const DEFAULT_URL: &str = "http://localhost:3003";

/// Settings of the client.
///
/// # Examples
///
/// ```
/// use bloglist_client::Config;
///
/// let config = Config::new()
///     .with_url("http://localhost:8080")
///     .with_session_path("session.json");
/// assert_eq!(config.url(), "http://localhost:8080");
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    url: String,
    session_path: PathBuf,
    notification_ttl: Duration,
}

impl Config {
    /// Defaults: the local service, the session in the user data directory
    /// (the working directory when there is none) and a five second
    /// notification lifetime.
    pub fn new() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            session_path: default_session_path()
                .unwrap_or_else(|| PathBuf::from(format!("{}.json", SESSION_KEY))),
            notification_ttl: NOTIFICATION_TTL,
        }
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = url.to_string();
        self
    }

    pub fn with_session_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_path = path.into();
        self
    }

    pub fn with_notification_ttl(mut self, ttl: Duration) -> Self {
        self.notification_ttl = ttl;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn session_path(&self) -> &Path {
        &self.session_path
    }

    pub fn notification_ttl(&self) -> Duration {
        self.notification_ttl
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
