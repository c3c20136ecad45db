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
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::{debug, warn};
use tokio::runtime::Handle;

/// How long a notification stays visible.
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationKind::Success => write!(f, "success"),
            NotificationKind::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Debug, Default)]
struct Slot {
    token: u64,
    current: Option<Notification>,
}

/// Holds the single visible notification.
///
/// Every notification gets a new token and schedules its own expiry. An
/// expiry only clears the slot while its token is still the current one, so
/// an older timer never removes a newer message. Clones share the slot.
#[derive(Debug, Clone)]
pub struct Notifier {
    slot: Arc<Mutex<Slot>>,
    ttl: Duration,
}

impl Notifier {
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            ttl,
        }
    }

    /// Replaces the current notification and schedules its expiry.
    ///
    /// Outside a tokio runtime no expiry can be scheduled, the notification
    /// then stays until it is replaced or expired by token.
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        let token = {
            let mut slot = self.lock();
            slot.token += 1;
            slot.current = Some(Notification {
                message: message.into(),
                kind,
            });
            slot.token
        };

        let Ok(handle) = Handle::try_current() else {
            warn!("no runtime to expire notification {}", token);
            return token;
        };
        let notifier = self.clone();
        handle.spawn(async move {
            tokio::time::sleep(notifier.ttl).await;
            notifier.expire(token);
        });

        token
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.notify(message, NotificationKind::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.notify(message, NotificationKind::Error)
    }

    /// Clears the notification issued with `token`. Returns false if it has
    /// already been replaced.
    pub fn expire(&self, token: u64) -> bool {
        let mut slot = self.lock();
        if slot.token != token {
            debug!("skipping stale notification expiry {}", token);
            return false;
        }
        slot.current = None;
        true
    }

    pub fn current(&self) -> Option<Notification> {
        self.lock().current.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(NOTIFICATION_TTL)
    }
}
