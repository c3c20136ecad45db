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

use crate::domain::{Credentials, NewBlog};

/// Username and password fields of the login form.
///
/// Submitting does not clear the fields, the caller does that once the
/// login succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    pub fn submit(&self) -> Credentials {
        Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }

    pub fn clear(&mut self) {
        self.username.clear();
        self.password.clear();
    }
}

/// Fields of the create blog form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogForm {
    pub title: String,
    pub author: String,
    pub url: String,
}

impl BlogForm {
    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
    }

    pub fn set_author(&mut self, value: impl Into<String>) {
        self.author = value.into();
    }

    pub fn set_url(&mut self, value: impl Into<String>) {
        self.url = value.into();
    }

    /// Hands the collected fields to `create_blog` and empties the form.
    pub fn submit<F>(&mut self, create_blog: F)
    where
        F: FnOnce(NewBlog),
    {
        create_blog(NewBlog {
            title: std::mem::take(&mut self.title),
            author: std::mem::take(&mut self.author),
            url: std::mem::take(&mut self.url),
        });
    }
}

/// Two state visibility flag behind a labelled button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggle {
    label: String,
    visible: bool,
}

impl Toggle {
    /// Starts hidden.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            visible: false,
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Label of the button that flips the toggle.
    pub fn button_label(&self) -> &str {
        if self.visible {
            "cancel"
        } else {
            &self.label
        }
    }
}
