//! Inbound event model.
//!
//! One variant per protocol event kind the plugin subscribes to, each
//! carrying only the fields that kind actually has. Events borrow from the
//! host's transport buffer and are consumed once per handler invocation.

/// A NOTICE received by the connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice<'a> {
    /// Nickname of the sender.
    pub sender: &'a str,
    /// Body of the notice.
    pub text: &'a str,
}

/// A user disconnected from the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quit<'a> {
    /// Nickname the user held when quitting.
    pub sender: &'a str,
}

/// A user changed nickname.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NickChange<'a> {
    /// Nickname the user held before the change.
    pub sender: &'a str,
    /// Nickname the user just adopted.
    pub new_nick: &'a str,
}

/// An inbound server event relevant to NickServ automation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserEvent<'a> {
    /// A NOTICE from some user or service.
    Notice(Notice<'a>),
    /// A user quit.
    Quit(Quit<'a>),
    /// A user changed nickname.
    Nick(NickChange<'a>),
    /// ERR_NICKNAMEINUSE (433): the nickname we asked for is taken.
    NicknameInUse,
}
