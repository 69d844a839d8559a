//! Notice classification.
//!
//! Services phrase their notices differently across implementations, so
//! classification matches on short stable substrings rather than parsing the
//! full server grammar. Deterministic, cheap, and tolerant of wording
//! variation.

/// Canonical nickname of the network's nickname service.
pub const NICKSERV: &str = "NickServ";

/// What a notice is asking of us.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeIntent {
    /// The service wants us to identify for a registered nickname.
    AuthRequest,
    /// The service confirmed a ghost session was disconnected.
    GhostNotification,
    /// Anything else, including notices from other users.
    Unrelated,
}

/// Classify a notice by sender and body.
///
/// Only notices whose sender exactly equals `agent` are considered at all.
/// The body is then matched in order: `registered` marks an authentication
/// request ("This nickname is registered...") and `ghost`, case-insensitive,
/// marks a ghost-kill confirmation ("... has been ghosted"). A body
/// containing both markers is an authentication request; the ordering is a
/// documented tie-break.
pub fn classify(sender: &str, text: &str, agent: &str) -> NoticeIntent {
    if sender != agent {
        return NoticeIntent::Unrelated;
    }
    if text.contains("registered") {
        NoticeIntent::AuthRequest
    } else if text.to_ascii_lowercase().contains("ghost") {
        NoticeIntent::GhostNotification
    } else {
        NoticeIntent::Unrelated
    }
}
