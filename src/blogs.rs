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

use std::cmp::Reverse;
use std::collections::HashSet;

use log::{error, info};

use crate::app::App;
use crate::domain::{Blog, NewBlog};
use crate::error::{Error, Result};

/// Blogs as last fetched from the server, in server order.
///
/// Also tracks which entries have their details expanded.
#[derive(Debug, Clone, Default)]
pub struct BlogList {
    blogs: Vec<Blog>,
    expanded: HashSet<String>,
}

impl BlogList {
    pub fn new(blogs: Vec<Blog>) -> Self {
        Self {
            blogs,
            expanded: HashSet::new(),
        }
    }

    /// Replaces the whole collection. Expanded details survive for blogs
    /// that are still present.
    pub fn replace(&mut self, blogs: Vec<Blog>) {
        self.expanded
            .retain(|id| blogs.iter().any(|blog| &blog.id == id));
        self.blogs = blogs;
    }

    /// Puts `blog` in place of the entry with the same id. Returns false when
    /// there is no such entry.
    pub fn update(&mut self, blog: Blog) -> bool {
        match self.blogs.iter_mut().find(|entry| entry.id == blog.id) {
            Some(entry) => {
                *entry = blog;
                true
            }
            None => false,
        }
    }

    /// Drops blog `id` and its expanded details. Returns false for an unknown
    /// id.
    pub fn remove(&mut self, id: &str) -> bool {
        self.expanded.remove(id);
        let before = self.blogs.len();
        self.blogs.retain(|blog| blog.id != id);
        self.blogs.len() != before
    }

    /// Blogs ordered by likes, most liked first. Equal likes keep server
    /// order.
    pub fn sorted(&self) -> Vec<&Blog> {
        let mut sorted = self.blogs.iter().collect::<Vec<&Blog>>();
        sorted.sort_by_key(|blog| Reverse(blog.likes));
        sorted
    }

    pub fn get(&self, id: &str) -> Option<&Blog> {
        self.blogs.iter().find(|blog| blog.id == id)
    }

    pub fn len(&self) -> usize {
        self.blogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blogs.is_empty()
    }

    /// Flips the details of blog `id`. Returns false for an unknown id.
    pub fn toggle_details(&mut self, id: &str) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
        true
    }

    pub fn details_visible(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }
}

impl App {
    /// Replaces the collection with the one on the server.
    pub async fn refresh(&mut self) -> Result<()> {
        match self.service.get_all().await {
            Ok(blogs) => {
                self.blogs.replace(blogs);
                Ok(())
            }
            Err(err) => {
                error!("error fetching blogs: {}", err);
                self.notifier.error("Error fetching blogs");
                Err(err)
            }
        }
    }

    /// Submits the create blog form.
    pub async fn submit_blog_form(&mut self) -> Result<()> {
        let mut submitted = NewBlog::default();
        self.blog_form.submit(|blog| submitted = blog);
        self.create(submitted).await
    }

    pub async fn create(&mut self, blog: NewBlog) -> Result<()> {
        self.require_session()?;
        let created = match self.service.create(&blog).await {
            Ok(created) => created,
            Err(err) => {
                error!("error adding blog {}: {}", blog.title, err);
                self.notifier.error("Failed to add blog");
                return Err(err);
            }
        };

        info!("added blog {}", created.id);
        self.refresh().await?;
        self.blog_form_toggle.hide();
        self.notifier
            .success(format!("Added new blog: {} by {}", created.title, created.author));
        Ok(())
    }

    /// Adds one like to blog `id`.
    ///
    /// The stored like is applied to the collection before it is fetched
    /// again. A failed fetch is reported but does not fail the like.
    pub async fn like(&mut self, id: &str) -> Result<()> {
        self.require_session()?;
        let blog = self.find(id)?;
        let liked = blog.liked();

        if let Err(err) = self.service.update(&blog.id, &liked).await {
            error!("error liking blog {}: {}", blog.id, err);
            self.notifier.error("Failed to like blog");
            return Err(err);
        }

        info!("liked blog {}", blog.id);
        self.blogs.update(liked);
        let _ = self.refresh().await;
        Ok(())
    }

    /// Removes blog `id` after `confirm` accepted the prompt.
    ///
    /// Only the user who added the blog may remove it. Returns false when the
    /// removal was declined. As with likes, the blog leaves the collection
    /// before it is fetched again.
    pub async fn delete<F>(&mut self, id: &str, confirm: F) -> Result<bool>
    where
        F: FnOnce(&str) -> bool,
    {
        let session = self.require_session()?;
        let blog = self.find(id)?;
        if !blog.is_owned_by(session) {
            self.notifier
                .error("Only the user who added a blog can remove it");
            return Err(Error::NotOwner(blog.id));
        }

        if !confirm(&format!("Remove blog \"{}\" by {}?", blog.title, blog.author)) {
            return Ok(false);
        }

        if let Err(err) = self.service.remove(&blog.id).await {
            error!("error deleting blog {}: {}", blog.id, err);
            self.notifier.error("Failed to remove blog");
            return Err(err);
        }

        info!("removed blog {}", blog.id);
        self.blogs.remove(&blog.id);
        if self.refresh().await.is_ok() {
            self.notifier.success(format!("Removed blog: {}", blog));
        }
        Ok(true)
    }

    pub fn toggle_details(&mut self, id: &str) -> Result<()> {
        if self.blogs.toggle_details(id) {
            Ok(())
        } else {
            Err(self.unknown_blog(id))
        }
    }

    fn find(&self, id: &str) -> Result<Blog> {
        self.blogs
            .get(id)
            .cloned()
            .ok_or_else(|| self.unknown_blog(id))
    }

    fn unknown_blog(&self, id: &str) -> Error {
        let err = Error::UnknownBlog(id.to_string());
        self.notifier.error(err.to_string());
        err
    }
}
