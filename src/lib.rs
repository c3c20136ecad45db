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

#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

pub mod action;
pub mod app;
pub mod blogs;
pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod notification;
pub mod service;
pub mod storage;
pub mod view;


pub use action::Action;
pub use app::App;
pub use config::Config;
pub use domain::{Blog, BlogUser, Credentials, NewBlog, NewUser, Session};
pub use error::{Error, Result};
pub use notification::{Notification, NotificationKind};
