//! # slirc-nickserv
//!
//! NickServ automation for IRC client connections: identify to the nickname
//! service when asked, ghost-kill a stale session squatting on the protected
//! nickname, and keep the connection's tracked nickname in sync with
//! server-confirmed changes.
//!
//! The crate is transport-agnostic. A host decodes inbound protocol messages
//! into [`UserEvent`]s, hands each one to [`NickServ::dispatch`] together
//! with a [`Context`], and flushes whatever the handlers append to its
//! outbound queue. Handlers are synchronous and never fail; events that do
//! not concern the plugin are ignored without touching the queue.
//!
//! ```
//! use slirc_nickserv::{Command, Config, Context, Identity, NickServ, Notice};
//!
//! let plugin = NickServ::new(Config::new("hunter2", None)?);
//! let mut identity = Identity::new("Phergie");
//! let mut queue: Vec<Command> = Vec::new();
//!
//! let mut ctx = Context {
//!     connection: &mut identity,
//!     queue: &mut queue,
//! };
//! plugin.handle_notice(
//!     &mut ctx,
//!     &Notice {
//!         sender: "NickServ",
//!         text: "This nickname is registered. Please identify via /msg NickServ identify <password>.",
//!     },
//! );
//!
//! assert_eq!(queue[0].to_string(), "PRIVMSG NickServ :IDENTIFY Phergie hunter2");
//! # Ok::<(), slirc_nickserv::ConfigError>(())
//! ```

#![warn(missing_docs)]

pub mod classify;
pub mod command;
pub mod config;
pub mod connection;
pub mod event;
pub mod plugin;

pub use self::classify::{NICKSERV, NoticeIntent, classify};
pub use self::command::{ChannelQueue, Command, EventQueue};
pub use self::config::{Config, ConfigError};
pub use self::connection::{Connection, Identity};
pub use self::event::{NickChange, Notice, Quit, UserEvent};
pub use self::plugin::{Context, NickServ};
