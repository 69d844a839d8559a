//! Outbound protocol commands and the queue that carries them.

use std::fmt;

use tokio::sync::mpsc;

/// An outbound protocol action produced by the event handlers.
///
/// Commands are appended to an [`EventQueue`] in emission order and later
/// serialized as raw protocol lines by the transport layer; [`fmt::Display`]
/// produces that line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Request a nickname change.
    Nick(String),
    /// Send a private message to a target.
    Privmsg(String, String),
}

/// Check if a string needs colon-prefixing as a trailing IRC argument.
fn needs_colon_prefix(s: &str) -> bool {
    s.is_empty() || s.contains(' ') || s.starts_with(':')
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Nick(nick) => write!(f, "NICK {nick}"),
            Command::Privmsg(target, text) if needs_colon_prefix(text) => {
                write!(f, "PRIVMSG {target} :{text}")
            }
            Command::Privmsg(target, text) => write!(f, "PRIVMSG {target} {text}"),
        }
    }
}

/// Ordered sink of not-yet-transmitted protocol actions.
///
/// The plugin only appends; draining and transmission belong to the queue's
/// owner. Ordering among commands appended by a single handler call must be
/// preserved exactly as emitted.
pub trait EventQueue {
    /// Append a command, preserving emission order.
    fn enqueue(&mut self, command: Command);
}

impl EventQueue for Vec<Command> {
    fn enqueue(&mut self, command: Command) {
        self.push(command);
    }
}

/// [`EventQueue`] backed by an unbounded channel.
///
/// Lets the synchronous handlers feed a per-connection async writer task
/// without the handlers themselves becoming async.
pub struct ChannelQueue {
    tx: mpsc::UnboundedSender<Command>,
}

impl ChannelQueue {
    /// Wrap the sending half of a connection's command channel.
    pub fn new(tx: mpsc::UnboundedSender<Command>) -> Self {
        Self { tx }
    }
}

impl EventQueue for ChannelQueue {
    fn enqueue(&mut self, command: Command) {
        // Receiver gone means the connection is closing; drop the command.
        let _ = self.tx.send(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nick_line() {
        assert_eq!(Command::Nick("Phergie_".into()).to_string(), "NICK Phergie_");
    }

    #[test]
    fn test_privmsg_line_with_spaces_gets_colon() {
        let cmd = Command::Privmsg("NickServ".into(), "GHOST Phergie password".into());
        assert_eq!(cmd.to_string(), "PRIVMSG NickServ :GHOST Phergie password");
    }

    #[test]
    fn test_privmsg_line_single_word() {
        let cmd = Command::Privmsg("NickServ".into(), "HELP".into());
        assert_eq!(cmd.to_string(), "PRIVMSG NickServ HELP");
    }

    #[test]
    fn test_privmsg_line_leading_colon_gets_colon() {
        let cmd = Command::Privmsg("foo".into(), ":)".into());
        assert_eq!(cmd.to_string(), "PRIVMSG foo ::)");
    }

    #[test]
    fn test_vec_queue_preserves_order() {
        let mut queue: Vec<Command> = Vec::new();
        queue.enqueue(Command::Nick("a".into()));
        queue.enqueue(Command::Nick("b".into()));
        assert_eq!(
            queue,
            vec![Command::Nick("a".into()), Command::Nick("b".into())]
        );
    }

    #[test]
    fn test_channel_queue_preserves_order() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut queue = ChannelQueue::new(tx);
        queue.enqueue(Command::Nick("a".into()));
        queue.enqueue(Command::Nick("b".into()));
        assert_eq!(rx.try_recv().unwrap(), Command::Nick("a".into()));
        assert_eq!(rx.try_recv().unwrap(), Command::Nick("b".into()));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_channel_queue_tolerates_closed_receiver() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let mut queue = ChannelQueue::new(tx);
        queue.enqueue(Command::Nick("a".into()));
    }
}
