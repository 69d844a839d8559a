//! Event handlers and dispatch.
//!
//! Four independent entry points, one per subscribed event kind. There is no
//! persistent mode: each call is a pure function of the event and the
//! connection's current identity state, and runs synchronously to completion
//! before the next event is dispatched. Handlers never fail; an event that
//! does not match is the normal ignore path.

use tracing::{debug, info};

use crate::classify::{NICKSERV, NoticeIntent, classify};
use crate::command::{Command, EventQueue};
use crate::config::Config;
use crate::connection::Connection;
use crate::event::{NickChange, Notice, Quit, UserEvent};

/// Handler context for one event.
///
/// Bundles the connection whose identity is protected with the outbound
/// queue commands are appended to.
pub struct Context<'a> {
    /// Connection-side identity state.
    pub connection: &'a mut dyn Connection,
    /// Sink for outbound commands.
    pub queue: &'a mut dyn EventQueue,
}

/// NickServ automation for one connection.
///
/// Identifies when the service asks, reclaims the protected nickname from
/// ghost sessions, and tracks server-confirmed nickname changes.
pub struct NickServ {
    config: Config,
}

impl NickServ {
    /// Create the plugin from validated configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Route an inbound event to its handler.
    ///
    /// The host's read loop calls this once per decoded event.
    pub fn dispatch(&self, ctx: &mut Context<'_>, event: &UserEvent<'_>) {
        match event {
            UserEvent::Notice(notice) => self.handle_notice(ctx, notice),
            UserEvent::Quit(quit) => self.handle_quit(ctx, quit),
            UserEvent::Nick(change) => self.handle_nick(ctx, change),
            UserEvent::NicknameInUse => self.handle_nickname_in_use(ctx),
        }
    }

    /// Respond to a NOTICE.
    ///
    /// An identification request from the nickname service is answered with
    /// IDENTIFY; a ghost-kill confirmation triggers reclaiming the protected
    /// nickname. Anything else is ignored without touching the queue.
    pub fn handle_notice(&self, ctx: &mut Context<'_>, event: &Notice<'_>) {
        match classify(event.sender, event.text, NICKSERV) {
            NoticeIntent::AuthRequest => {
                let nick = self.desired_nick(ctx);
                info!(nick = %nick, "identifying to NickServ");
                let text = format!("IDENTIFY {} {}", nick, self.config.password());
                ctx.queue.enqueue(Command::Privmsg(NICKSERV.to_owned(), text));
            }
            NoticeIntent::GhostNotification => {
                let nick = self.desired_nick(ctx);
                info!(nick = %nick, "ghost session disconnected, reclaiming nickname");
                ctx.queue.enqueue(Command::Nick(nick));
            }
            NoticeIntent::Unrelated => {}
        }
    }

    /// Claim the protected nickname when whoever held it quits.
    pub fn handle_quit(&self, ctx: &mut Context<'_>, event: &Quit<'_>) {
        let nick = self.desired_nick(ctx);
        if event.sender != nick {
            return;
        }
        info!(nick = %nick, "protected nickname freed, claiming it");
        ctx.queue.enqueue(Command::Nick(nick));
    }

    /// Track a server-confirmed nickname change.
    ///
    /// Fires only for our own pending change to the protected nickname. The
    /// connection is updated directly because the server has already
    /// committed this state; nothing is queued.
    pub fn handle_nick(&self, ctx: &mut Context<'_>, event: &NickChange<'_>) {
        let nick = self.desired_nick(ctx);
        if event.sender != nick || event.new_nick != nick {
            debug!(
                sender = %event.sender,
                new_nick = %event.new_nick,
                "ignoring unrelated nick change"
            );
            return;
        }
        info!(nick = %nick, "nickname change confirmed");
        ctx.connection.set_nickname(nick);
    }

    /// React to the server rejecting the protected nickname as taken.
    ///
    /// Claims a `_`-suffixed fallback first so the session has a usable
    /// identity, then asks the service to disconnect the conflicting
    /// session. The order is mandatory: the GHOST request goes out under the
    /// fallback nickname.
    pub fn handle_nickname_in_use(&self, ctx: &mut Context<'_>) {
        let nick = self.desired_nick(ctx);
        let fallback = format!("{nick}_");
        info!(nick = %nick, fallback = %fallback, "nickname in use, requesting ghost kill");
        ctx.queue.enqueue(Command::Nick(fallback));
        let text = format!("GHOST {} {}", nick, self.config.password());
        ctx.queue.enqueue(Command::Privmsg(NICKSERV.to_owned(), text));
    }

    fn desired_nick(&self, ctx: &Context<'_>) -> String {
        self.config
            .desired_nick(ctx.connection.nickname())
            .to_owned()
    }
}
