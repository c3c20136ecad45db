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

use std::fmt::Display;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Authenticated user as returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
    pub username: String,
    pub token: String,
}

/// Reduced reference to the user who added a blog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogUser {
    pub username: String,
    pub name: String,
    /// Remaining fields, such as the user id, sent back untouched on update.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(
        default,
        deserialize_with = "populated_user",
        skip_serializing_if = "Option::is_none"
    )]
    pub user: Option<BlogUser>,
}

impl Blog {
    /// Returns true when `session` belongs to the user who added this blog.
    pub fn is_owned_by(&self, session: &Session) -> bool {
        self.user
            .as_ref()
            .is_some_and(|user| user.username == session.username)
    }

    /// Copy of the blog with one more like.
    pub fn liked(&self) -> Blog {
        Blog {
            likes: self.likes + 1,
            ..self.clone()
        }
    }
}

impl Display for Blog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}

/// Payload of a create request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBlog {
    pub title: String,
    pub author: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Payload of the user registration endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub username: String,
    pub name: String,
    pub password: String,
}

// Update responses may carry the owner as a bare id instead of an object.
fn populated_user<'de, D>(deserializer: D) -> Result<Option<BlogUser>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}
