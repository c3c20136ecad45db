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

use std::fmt::Write;

use crate::app::App;
use crate::domain::{Blog, Session};
use crate::form::{BlogForm, LoginForm};
use crate::notification::{Notification, NotificationKind};

const INDENT: &str = "    ";

/// Renders the whole client state as text.
///
/// Logged out, only the login form is shown. Logged in, the welcome line,
/// the create blog toggle and the blogs ordered by likes are shown.
pub fn render(app: &App) -> String {
    let mut out = String::from("Blogs\n");
    out.push_str(&render_notification(app.notification().as_ref()));

    match app.session() {
        None => {
            out.push_str("Log in to application\n");
            out.push_str(&render_login_form(&app.login_form));
        }
        Some(session) => {
            let _ = writeln!(out, "Welcome, {}! [Logout]", session.name);
            if app.blog_form_toggle.is_visible() {
                out.push_str(&render_blog_form(&app.blog_form));
            }
            let _ = writeln!(out, "[{}]", app.blog_form_toggle.button_label());
            for blog in app.blogs().sorted() {
                out.push_str(&render_blog(
                    blog,
                    Some(session),
                    app.blogs().details_visible(&blog.id),
                ));
            }
        }
    }

    out
}

/// Renders nothing without a notification.
pub fn render_notification(notification: Option<&Notification>) -> String {
    match notification {
        Some(notification) => {
            let marker = match notification.kind {
                NotificationKind::Success => "ok",
                NotificationKind::Error => "error",
            };
            format!("[{}] {}\n", marker, notification.message)
        }
        None => String::new(),
    }
}

pub fn render_login_form(form: &LoginForm) -> String {
    format!(
        "Username [{}]\nPassword [{}]\n[login]\n",
        form.username,
        "*".repeat(form.password.chars().count())
    )
}

pub fn render_blog_form(form: &BlogForm) -> String {
    format!(
        "Create New Blog\ntitle [{}]\nauthor [{}]\nurl [{}]\n[create]\n",
        form.title, form.author, form.url
    )
}

/// One blog entry. The remove control is only shown to the user who added
/// the blog.
pub fn render_blog(blog: &Blog, session: Option<&Session>, details_visible: bool) -> String {
    let mut out = String::new();
    let toggle = if details_visible { "hide" } else { "view" };
    let _ = writeln!(
        out,
        "{} {} [{}] ({})",
        blog.title, blog.author, toggle, blog.id
    );

    if details_visible {
        let _ = writeln!(out, "{}{}", INDENT, blog.url);
        let _ = writeln!(out, "{}{} likes [like]", INDENT, blog.likes);
        let added_by = blog.user.as_ref().map_or("Unknown", |user| user.name.as_str());
        let _ = writeln!(out, "{}added by {}", INDENT, added_by);
        if session.is_some_and(|session| blog.is_owned_by(session)) {
            let _ = writeln!(out, "{}[remove]", INDENT);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blogs::BlogList;
    use crate::config::Config;
    use crate::domain::BlogUser;

    fn blog(id: &str, likes: u64, username: &str) -> Blog {
        Blog {
            id: id.to_string(),
            title: format!("Title {}", id),
            author: "Test Author".to_string(),
            url: format!("http://test.com/{}", id),
            likes,
            user: Some(BlogUser {
                username: username.to_string(),
                name: "Test User".to_string(),
                extra: Default::default(),
            }),
        }
    }

    fn session(username: &str) -> Session {
        Session {
            name: "Test User".to_string(),
            username: username.to_string(),
            token: "abcd".to_string(),
        }
    }

    fn app() -> App {
        App::new(&Config::new().with_session_path("unused.json"))
    }

    #[test]
    fn test_details_hidden_by_default() {
        let out = render_blog(&blog("1", 0, "testuser"), Some(&session("testuser")), false);

        assert!(out.contains("Title 1"));
        assert!(out.contains("Test Author"));
        assert!(out.contains("[view]"));
        assert!(!out.contains("http://test.com/1"));
        assert!(!out.contains("0 likes"));
    }

    #[test]
    fn test_details_visible() {
        let out = render_blog(&blog("1", 0, "testuser"), None, true);

        assert!(out.contains("[hide]"));
        assert!(out.contains("http://test.com/1"));
        assert!(out.contains("0 likes [like]"));
        assert!(out.contains("added by Test User"));
    }

    #[test]
    fn test_remove_only_for_owner() {
        let entry = blog("1", 0, "testuser");

        assert!(render_blog(&entry, Some(&session("testuser")), true).contains("[remove]"));
        assert!(!render_blog(&entry, Some(&session("other")), true).contains("[remove]"));
        assert!(!render_blog(&entry, None, true).contains("[remove]"));

        let unowned = Blog { user: None, ..entry };
        let out = render_blog(&unowned, Some(&session("testuser")), true);
        assert!(!out.contains("[remove]"));
        assert!(out.contains("added by Unknown"));
    }

    #[test]
    fn test_logged_out_view() {
        let mut app = app();
        app.blogs = BlogList::new(vec![blog("1", 3, "testuser")]);

        let out = render(&app);

        assert!(out.contains("Log in to application"));
        assert!(out.contains("Username ["));
        assert!(out.contains("Password ["));
        assert!(out.contains("[login]"));
        assert!(!out.contains("Title 1"));
    }

    #[test]
    fn test_logged_in_view_orders_by_likes() {
        let mut app = app();
        app.session = Some(session("testuser"));
        app.blogs = BlogList::new(vec![
            blog("a", 1, "testuser"),
            blog("b", 9, "testuser"),
            blog("c", 4, "other"),
        ]);

        let out = render(&app);

        assert!(out.contains("Welcome, Test User! [Logout]"));
        assert!(out.contains("[New Blog]"));
        assert!(!out.contains("[login]"));
        let b = out.find("Title b").unwrap();
        let c = out.find("Title c").unwrap();
        let a = out.find("Title a").unwrap();
        assert!(b < c && c < a);
    }

    #[test]
    fn test_blog_form_shown_when_toggled() {
        let mut app = app();
        app.session = Some(session("testuser"));
        app.blog_form_toggle.toggle();
        app.blog_form.set_title("Draft");

        let out = render(&app);

        assert!(out.contains("Create New Blog"));
        assert!(out.contains("title [Draft]"));
        assert!(out.contains("[cancel]"));
    }

    #[test]
    fn test_login_form_masks_password() {
        let form = LoginForm {
            username: "root".to_string(),
            password: "salainen".to_string(),
        };

        let out = render_login_form(&form);

        assert!(out.contains("Username [root]"));
        assert!(out.contains("Password [********]"));
        assert!(!out.contains("salainen"));
    }

    #[test]
    fn test_no_notification_renders_nothing() {
        assert_eq!(render_notification(None), "");
        let notification = Notification {
            message: "Wrong credentials".to_string(),
            kind: NotificationKind::Error,
        };
        assert_eq!(
            render_notification(Some(&notification)),
            "[error] Wrong credentials\n"
        );
    }
}
