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

use log::info;

use crate::app::App;
use crate::domain::{NewBlog, NewUser};
use crate::error::Result;

/// One user action, as issued by a single run of the command line client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Show the blogs, optionally with every entry expanded.
    Show { details: bool },
    Login { username: String, password: String },
    Logout,
    Create(NewBlog),
    Like(String),
    /// Remove a blog. `yes` skips the confirmation prompt.
    Remove { id: String, yes: bool },
    Register(NewUser),
    Reset,
}

impl App {
    /// Restores the stored session, then performs `action`.
    ///
    /// Liking and removing act on the fetched collection, so they fail with
    /// the fetch error when the blogs could not be loaded. `confirm` is only
    /// asked before a removal.
    pub async fn run<F>(&mut self, action: Action, confirm: F) -> Result<()>
    where
        F: FnOnce(&str) -> bool,
    {
        let restored = self.restore().await;

        match action {
            Action::Show { details } => {
                if details {
                    let ids = self
                        .blogs()
                        .sorted()
                        .iter()
                        .map(|blog| blog.id.clone())
                        .collect::<Vec<String>>();
                    for id in ids {
                        self.toggle_details(&id)?;
                    }
                }
                restored
            }
            Action::Login { username, password } => {
                self.login_form.set_username(username);
                self.login_form.set_password(password);
                self.login().await
            }
            Action::Logout => {
                self.logout();
                Ok(())
            }
            Action::Create(blog) => {
                self.blog_form_toggle.toggle();
                self.blog_form.set_title(blog.title);
                self.blog_form.set_author(blog.author);
                self.blog_form.set_url(blog.url);
                self.submit_blog_form().await
            }
            Action::Like(id) => {
                restored?;
                self.toggle_details(&id)?;
                self.like(&id).await
            }
            Action::Remove { id, yes } => {
                restored?;
                self.delete(&id, |prompt| yes || confirm(prompt))
                    .await
                    .map(|_| ())
            }
            Action::Register(user) => {
                self.service.create_user(&user).await?;
                info!("registered {}", user.username);
                self.notifier
                    .success(format!("Registered {}", user.username));
                Ok(())
            }
            Action::Reset => self.service.reset().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use mockito::ServerGuard;
    use tempfile::TempDir;

    use super::*;
    use crate::config::Config;
    use crate::error::Error;
    use crate::notification::NotificationKind;

    const SESSION_BODY: &str = r#"{"name":"Test User","username":"testuser","token":"abcd"}"#;

    fn stored_session_app(server: &ServerGuard, dir: &TempDir) -> App {
        fs::write(dir.path().join("session.json"), SESSION_BODY).unwrap();
        App::new(
            &Config::new()
                .with_url(&server.url())
                .with_session_path(dir.path().join("session.json")),
        )
    }

    #[tokio::test]
    async fn test_like_after_failed_fetch() {
        let mut server = mockito::Server::new_async().await;
        let dir = tempfile::tempdir().unwrap();
        let mut app = stored_session_app(&server, &dir);
        let _mock = server
            .mock("GET", "/api/blogs")
            .with_status(503)
            .create_async()
            .await;
        let update = server
            .mock("PUT", "/api/blogs/123")
            .expect(0)
            .create_async()
            .await;

        let result = app.run(Action::Like("123".to_string()), |_| true).await;

        update.assert_async().await;
        assert!(matches!(result, Err(Error::Status { status: 503, .. })));
        let notification = app.notification().unwrap();
        assert_eq!(notification.message, "Error fetching blogs");
        assert_eq!(notification.kind, NotificationKind::Error);
    }

    #[tokio::test]
    async fn test_remove_after_failed_fetch() {
        let mut server = mockito::Server::new_async().await;
        let dir = tempfile::tempdir().unwrap();
        let mut app = stored_session_app(&server, &dir);
        let _mock = server
            .mock("GET", "/api/blogs")
            .with_status(503)
            .create_async()
            .await;

        let result = app
            .run(
                Action::Remove {
                    id: "123".to_string(),
                    yes: true,
                },
                |_| panic!("no prompt expected"),
            )
            .await;

        assert!(matches!(result, Err(Error::Status { status: 503, .. })));
        assert_eq!(app.notification().unwrap().message, "Error fetching blogs");
    }

    #[tokio::test]
    async fn test_like_unknown_blog() {
        let mut server = mockito::Server::new_async().await;
        let dir = tempfile::tempdir().unwrap();
        let mut app = stored_session_app(&server, &dir);
        let _mock = server
            .mock("GET", "/api/blogs")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let result = app.run(Action::Like("123".to_string()), |_| true).await;

        assert!(matches!(result, Err(Error::UnknownBlog(_))));
    }

    #[tokio::test]
    async fn test_show_with_details() {
        let mut server = mockito::Server::new_async().await;
        let dir = tempfile::tempdir().unwrap();
        let mut app = stored_session_app(&server, &dir);
        let _mock = server
            .mock("GET", "/api/blogs")
            .with_status(200)
            .with_body(r#"[{"id":"1","title":"A","author":"B","url":"C","likes":2},{"id":"2","title":"D","author":"E","url":"F"}]"#)
            .create_async()
            .await;

        app.run(Action::Show { details: true }, |_| true)
            .await
            .unwrap();

        assert!(app.blogs().details_visible("1"));
        assert!(app.blogs().details_visible("2"));
    }

    #[tokio::test]
    async fn test_logout_without_stored_session() {
        let server = mockito::Server::new_async().await;
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(
            &Config::new()
                .with_url(&server.url())
                .with_session_path(dir.path().join("session.json")),
        );

        app.run(Action::Logout, |_| true).await.unwrap();

        assert!(app.session().is_none());
        assert_eq!(
            app.notification().unwrap().message,
            "Logged out successfully"
        );
    }
}
