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

use log::debug;
use reqwest::{Client, Method, RequestBuilder, Response};

use crate::domain::{Blog, Credentials, NewBlog, NewUser, Session};
use crate::error::{Error, Result};

const LOGIN_URI: &str = "/api/login";
const BLOGS_URI: &str = "/api/blogs";
const USERS_URI: &str = "/api/users";
const RESET_URI: &str = "/api/testing/reset";

/// Thin wrapper over the blog service REST endpoints.
///
/// Once a token is set every request carries it as a bearer
/// `Authorization` header.
#[derive(Debug, Clone)]
pub struct BlogService {
    base_url: String,
    client: Client,
    token: Option<String>,
}

impl BlogService {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            token: None,
        }
    }

    pub fn set_token(&mut self, token: Option<&str>) {
        self.token = token.map(str::to_string);
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<Session> {
        let response = self
            .send(self.request(Method::POST, LOGIN_URI).json(credentials))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Blog>> {
        let response = self.send(self.request(Method::GET, BLOGS_URI)).await?;
        Ok(response.json().await?)
    }

    pub async fn create(&self, blog: &NewBlog) -> Result<Blog> {
        let response = self
            .send(self.request(Method::POST, BLOGS_URI).json(blog))
            .await?;
        Ok(response.json().await?)
    }

    /// Replaces the blog with `id` by the full `blog` object.
    pub async fn update(&self, id: &str, blog: &Blog) -> Result<Blog> {
        let uri = format!("{}/{}", BLOGS_URI, id);
        let response = self
            .send(self.request(Method::PUT, &uri).json(blog))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn remove(&self, id: &str) -> Result<()> {
        let uri = format!("{}/{}", BLOGS_URI, id);
        self.send(self.request(Method::DELETE, &uri)).await?;
        Ok(())
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<()> {
        self.send(self.request(Method::POST, USERS_URI).json(user))
            .await?;
        Ok(())
    }

    /// Empties the server database. Only available on test deployments.
    pub async fn reset(&self) -> Result<()> {
        self.send(self.request(Method::POST, RESET_URI)).await?;
        Ok(())
    }

    fn request(&self, method: Method, uri: &str) -> RequestBuilder {
        let request_builder = self
            .client
            .request(method, format!("{}{}", self.base_url, uri));
        match &self.token {
            Some(token) => request_builder.bearer_auth(token),
            None => request_builder,
        }
    }

    async fn send(&self, request_builder: RequestBuilder) -> Result<Response> {
        let request = request_builder.build()?;
        let method = request.method().to_string();
        let uri = request.url().path().to_string();
        debug!("{} {}", method, uri);

        let response = self.client.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                method,
                uri,
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}
