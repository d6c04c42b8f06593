use std::fmt;

/// The chat-entry kinds this crate understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    TextMessage,
    PaidMessage,
    PaidSticker,
    MembershipItem,
}

impl MessageKind {
    pub const ALL: [MessageKind; 4] = [
        MessageKind::TextMessage,
        MessageKind::PaidMessage,
        MessageKind::PaidSticker,
        MessageKind::MembershipItem,
    ];

    /// Classify an element tag, ignoring ASCII case
    ///
    /// Returns `None` for renderers we don't parse (system messages,
    /// moderation notices, placeholders...).
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag().eq_ignore_ascii_case(tag))
    }

    /// Element tag of the renderer
    pub fn tag(self) -> &'static str {
        match self {
            MessageKind::TextMessage => "yt-live-chat-text-message-renderer",
            MessageKind::PaidMessage => "yt-live-chat-paid-message-renderer",
            MessageKind::PaidSticker => "yt-live-chat-paid-sticker-renderer",
            MessageKind::MembershipItem => "yt-live-chat-membership-item-renderer",
        }
    }

    /// Discriminator written to `messageType`
    pub fn message_type(self) -> &'static str {
        match self {
            MessageKind::TextMessage => "text-message",
            MessageKind::PaidMessage => "paid-message",
            MessageKind::PaidSticker => "paid-sticker",
            MessageKind::MembershipItem => "membership-item",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message_type())
    }
}
