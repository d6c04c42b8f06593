// Public API exports
pub mod config;
pub mod element;
pub mod feed;
pub mod image;
pub mod message;
pub mod parser;

mod error;

// Re-export main types for convenience
pub use config::{ParserConfig, DEFAULT_IMAGE_TIMEOUT};
pub use element::{ChatElement, HtmlElement};
pub use error::Error;
pub use feed::{parse_feed, FeedReport};
pub use image::{ImageResolver, SrcAttributeResolver, TimeoutResolver, DEFAULT_BASE_URL};
pub use message::{
    CommonFields, MembershipItem, Message, MessageKind, PaidMessage, PaidSticker, TextMessage,
};
pub use parser::{parse, ChatParser};
