mod kind;


pub use kind::MessageKind;

use serde::{Deserialize, Serialize};

/// One chat entry, discriminated by `messageType`
///
/// Absent fields are omitted from the serialized form rather than written
/// as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "messageType", rename_all = "kebab-case")]
pub enum Message {
    TextMessage(TextMessage),
    PaidMessage(PaidMessage),
    PaidSticker(PaidSticker),
    MembershipItem(MembershipItem),
}

/// Fields every chat entry carries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// e.g. `owner`, `moderator`, `member`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Plain-text body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextMessage {
    #[serde(flatten)]
    pub common: CommonFields,
    /// Body markup, emoji images included
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

/// Super Chat
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaidMessage {
    #[serde(flatten)]
    pub common: CommonFields,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Purchase amount as displayed (e.g. `¥1,000`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

/// Super Sticker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaidSticker {
    #[serde(flatten)]
    pub common: CommonFields,
    /// Purchase amount; empty when the chip is missing, never absent
    #[serde(default)]
    pub sub_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticker_url: Option<String>,
}

/// New or renewed membership
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipItem {
    #[serde(flatten)]
    pub common: CommonFields,
    /// Header detail text (e.g. "Welcome to ..."), stored in the markup slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl Message {
    pub fn kind(&self) -> MessageKind {
        match self {
            Message::TextMessage(_) => MessageKind::TextMessage,
            Message::PaidMessage(_) => MessageKind::PaidMessage,
            Message::PaidSticker(_) => MessageKind::PaidSticker,
            Message::MembershipItem(_) => MessageKind::MembershipItem,
        }
    }

    /// The `messageType` literal
    pub fn message_type(&self) -> &'static str {
        self.kind().message_type()
    }

    pub fn common(&self) -> &CommonFields {
        match self {
            Message::TextMessage(m) => &m.common,
            Message::PaidMessage(m) => &m.common,
            Message::PaidSticker(m) => &m.common,
            Message::MembershipItem(m) => &m.common,
        }
    }

    pub fn author(&self) -> Option<&str> {
        self.common().author.as_deref()
    }

    pub fn background_color(&self) -> Option<&str> {
        match self {
            Message::TextMessage(_) => None,
            Message::PaidMessage(m) => m.background_color.as_deref(),
            Message::PaidSticker(m) => m.background_color.as_deref(),
            Message::MembershipItem(m) => m.background_color.as_deref(),
        }
    }
}

impl From<TextMessage> for Message {
    fn from(m: TextMessage) -> Self {
        Message::TextMessage(m)
    }
}

impl From<PaidMessage> for Message {
    fn from(m: PaidMessage) -> Self {
        Message::PaidMessage(m)
    }
}

impl From<PaidSticker> for Message {
    fn from(m: PaidSticker) -> Self {
        Message::PaidSticker(m)
    }
}

impl From<MembershipItem> for Message {
    fn from(m: MembershipItem) -> Self {
        Message::MembershipItem(m)
    }
}
