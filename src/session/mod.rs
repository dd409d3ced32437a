//! Session state visible to the UI: who is signed in.
//!
//! - `user`: the `CurrentUser` record
//! - `store`: single-threaded observable slot (`Store`, `Subscription`)
//! - `shared`: `tokio::sync::watch` based holder for multi-threaded hosts
//!
//! The authentication layer writes; views subscribe. Neither side validates
//! the record.

mod shared;
mod store;
mod user;

pub use shared::SharedCurrentUser;
pub use store::{Store, Subscription};
pub use user::CurrentUser;

/// Observable slot holding the signed-in user, if any.
pub type CurrentUserStore = Store<Option<CurrentUser>>;

/// A current-user store with nobody signed in.
pub fn current_user_store() -> CurrentUserStore {
    Store::new(None)
}
