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

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::domain::Session;
use crate::error::Result;

/// Key the logged in user is stored under.
pub const SESSION_KEY: &str = "loggedBlogAppUser";

/// Default location of the stored session.
///
/// The path is `<data dir>/bloglist/loggedBlogAppUser.json`, `None` if the
/// platform has no data directory.
pub fn default_session_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("bloglist").join(format!("{}.json", SESSION_KEY)))
}

/// File backed store for the logged in user.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored session.
    ///
    /// Returns `Ok(None)` when nothing is stored. A payload that does not
    /// parse is removed and also reported as `Ok(None)`.
    pub fn load(&self) -> Result<Option<Session>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        match serde_json::from_str::<Session>(&content) {
            Ok(session) => {
                debug!("restored session of {} from {:?}", session.username, self.path);
                Ok(Some(session))
            }
            Err(err) => {
                warn!("discarding malformed session at {:?}: {}", self.path, err);
                self.clear()?;
                Ok(None)
            }
        }
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        fs::write(&self.path, serde_json::to_string(session)?)?;
        Ok(())
    }

    /// Removes the stored session. Removing a missing session is not an error.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Err(err) if err.kind() != ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}
