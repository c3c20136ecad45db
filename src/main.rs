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

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use env_logger::Env;

use bloglist_client::config::DEFAULT_URL;
use bloglist_client::{view, Action, App, Config, Error, NewBlog, NewUser};

#[doc(hidden)]
#[macro_export]
macro_rules! handle_error {
    ($code:expr, $msg:expr, $($arg:tt)*) => {
        eprintln!($msg, $($arg)*);
        std::process::exit($code);
    };

    ($code:expr, $msg:expr) => {
        eprintln!($msg);
        std::process::exit($code);
    };
}

#[doc(hidden)]
struct Code;

impl Code {
    const SUCCESS: i32 = 0;
    const INTERNAL_ERROR: i32 = 1;
    const INVALID_ARGUMENT: i32 = 2;
    const ACTION_FAILED: i32 = 3;
}

#[doc(hidden)]
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Base URL of the blog service
    #[clap(short, long, env = "BLOGLIST_URL", default_value = DEFAULT_URL)]
    server: String,

    /// File the logged in user is kept in between runs
    #[clap(long, env = "BLOGLIST_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[doc(hidden)]
#[derive(Debug, Subcommand)]
enum Command {
    /// Show the blogs, most liked first
    Show {
        /// Expand the details of every blog
        #[clap(short, long)]
        details: bool,
    },
    /// Log in and remember the user
    Login {
        #[clap(short, long)]
        username: String,
        #[clap(short, long)]
        password: String,
    },
    /// Forget the logged in user
    Logout,
    /// Add a new blog
    Create {
        #[clap(long)]
        title: String,
        #[clap(long)]
        author: String,
        #[clap(long)]
        url: String,
    },
    /// Like a blog
    Like { id: String },
    /// Remove a blog you added
    Remove {
        id: String,
        /// Do not ask for confirmation
        #[clap(short, long)]
        yes: bool,
    },
    /// Register a new user
    Register {
        #[clap(short, long)]
        username: String,
        #[clap(short, long)]
        name: String,
        #[clap(short, long)]
        password: String,
    },
    /// Empty the service database (test deployments only)
    Reset,
}

impl From<Command> for Action {
    fn from(command: Command) -> Self {
        match command {
            Command::Show { details } => Action::Show { details },
            Command::Login { username, password } => Action::Login { username, password },
            Command::Logout => Action::Logout,
            Command::Create { title, author, url } => {
                Action::Create(NewBlog { title, author, url })
            }
            Command::Like { id } => Action::Like(id),
            Command::Remove { id, yes } => Action::Remove { id, yes },
            Command::Register {
                username,
                name,
                password,
            } => Action::Register(NewUser {
                username,
                name,
                password,
            }),
            Command::Reset => Action::Reset,
        }
    }
}

fn confirm(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    io::stdin().read_line(&mut answer).is_ok()
        && matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[doc(hidden)]
#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut config = Config::new().with_url(cli.server.as_str());
    if let Some(path) = cli.session_file {
        config = config.with_session_path(path);
    }

    let mut app = App::new(&config);
    let result = app.run(cli.command.into(), confirm).await;

    println!("{}", view::render(&app));

    match result {
        Ok(()) => std::process::exit(Code::SUCCESS),
        Err(err @ (Error::Storage(_) | Error::Json(_))) => {
            handle_error!(Code::INTERNAL_ERROR, "Error: {}", err);
        }
        Err(err @ Error::UnknownBlog(_)) => {
            handle_error!(Code::INVALID_ARGUMENT, "Error: {}", err);
        }
        Err(err) => {
            handle_error!(Code::ACTION_FAILED, "Error: {}", err);
        }
    }
}
