//! Content keys known at compile time.

use std::fmt;

macro_rules! message_keys {
    ($($variant:ident => $key:literal,)+) => {
        /// A key of the reference (Polish) translation table.
        ///
        /// Using the enum instead of a raw string means a typo in a key is a
        /// compile error rather than a visible fallback on screen.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum MessageKey {
            $($variant,)+
        }

        impl MessageKey {
            /// Every key, in table order.
            pub const ALL: &'static [MessageKey] = &[$(MessageKey::$variant,)+];

            /// The key as it appears in the locale documents.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(MessageKey::$variant => $key,)+
                }
            }
        }
    };
}

message_keys! {
    AppTitle => "app_title",
    NavEvents => "nav_events",
    NavInvitations => "nav_invitations",
    NavNotifications => "nav_notifications",
    NavPasses => "nav_passes",
    Login => "login",
    Logout => "logout",
    Register => "register",
    Email => "email",
    Password => "password",
    CreateEvent => "create_event",
    JoinEvent => "join_event",
    LeaveEvent => "leave_event",
    EventTitle => "event_title",
    EventDescription => "event_description",
    EventDate => "event_date",
    EventLocation => "event_location",
    Comments => "comments",
    AddComment => "add_comment",
    AcceptInvitation => "accept_invitation",
    DeclineInvitation => "decline_invitation",
    NoNotifications => "no_notifications",
    Loading => "loading",
    ErrorGeneric => "error_generic",
    Save => "save",
    Cancel => "cancel",
}

impl AsRef<str> for MessageKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
