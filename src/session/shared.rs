//! Current-user holder for multi-threaded hosts.
//!
//! Built on `tokio::sync::watch`: one writer, any number of readers. Readers
//! always see the latest value; a reader that falls behind sees only the most
//! recent `set`, not every intermediate one.

use crate::session::CurrentUser;
use tokio::sync::watch;
use tracing::debug;

#[derive(Debug)]
pub struct SharedCurrentUser {
    sender: watch::Sender<Option<CurrentUser>>,
}

impl SharedCurrentUser {
    /// A holder with no signed-in user.
    pub fn new() -> Self {
        let (sender, _receiver) = watch::channel(None);
        Self { sender }
    }

    /// Replace the held user and wake every receiver.
    pub fn set(&self, user: Option<CurrentUser>) {
        match &user {
            Some(user) => debug!("Current user set to id {}", user.user_id),
            None => debug!("Current user cleared"),
        }
        // send_replace stores the value even when no receiver is alive.
        self.sender.send_replace(user);
    }

    pub fn clear(&self) {
        self.set(None);
    }

    pub fn get(&self) -> Option<CurrentUser> {
        self.sender.borrow().clone()
    }

    /// A receiver whose `borrow()` is the current value and whose
    /// `changed()` resolves on the next `set`.
    pub fn subscribe(&self) -> watch::Receiver<Option<CurrentUser>> {
        self.sender.subscribe()
    }

    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for SharedCurrentUser {
    fn default() -> Self {
        Self::new()
    }
}
