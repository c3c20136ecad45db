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

use thiserror::Error;

/// Error type for the bloglist client
#[derive(Error, Debug)]
pub enum Error {
    /// The request could not be sent or its body could not be read
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status code
    #[error("{method} {uri} returned {status}")]
    Status {
        method: String,
        uri: String,
        status: u16,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("session storage: {0}")]
    Storage(#[from] std::io::Error),

    /// A mutating action was attempted without a session
    #[error("not logged in")]
    NotLoggedIn,

    /// The session user did not add the blog
    #[error("blog {0} was added by another user")]
    NotOwner(String),

    #[error("no blog with id {0}")]
    UnknownBlog(String),
}

pub type Result<T> = std::result::Result<T, Error>;
