//! Chat-entry extraction
//!
//! [`parse`] classifies an element by its tag and hands it to the matching
//! extractor. Every lookup is allowed to miss; a miss leaves the field empty
//! and never stops the other lookups.

mod common;
mod membership;
mod paid;
mod sticker;
mod text;


pub use common::parse_common;
pub use membership::parse_membership_item;
pub use paid::parse_paid_message;
pub use sticker::parse_paid_sticker;
pub use text::parse_text_message;

use crate::element::ChatElement;
use crate::image::ImageResolver;
use crate::message::{Message, MessageKind};

/// Selector paths into a chat renderer
pub mod selectors {
    pub const AUTHOR_NAME: &str = "#author-name";
    pub const AVATAR_IMAGE: &str = "#img";
    pub const MESSAGE: &str = "#message";
    pub const PURCHASE_AMOUNT: &str = "#purchase-amount";
    pub const PURCHASE_AMOUNT_CHIP: &str = "#purchase-amount-chip";
    pub const CARD: &str = "#card";
    pub const CARD_HEADER: &str = "#card > #header";
    pub const STICKER_IMAGE: &str = "#sticker > #img";
    pub const HEADER_SUBTEXT: &str = "#header-subtext";

    /// Attribute on the renderer itself
    pub const AUTHOR_TYPE_ATTR: &str = "author-type";
}

/// Parse one chat renderer, or `None` when its kind isn't one we know
pub async fn parse<E, R>(el: &E, images: &R) -> Option<Message>
where
    E: ChatElement,
    R: ImageResolver<E> + ?Sized,
{
    let Some(kind) = MessageKind::from_tag(el.kind_tag()) else {
        tracing::trace!(tag = el.kind_tag(), "unrecognized chat entry");
        return None;
    };
    tracing::trace!(%kind, "parsing chat entry");

    let message: Message = match kind {
        MessageKind::TextMessage => parse_text_message(el, images).await.into(),
        MessageKind::PaidMessage => parse_paid_message(el, images).await.into(),
        MessageKind::PaidSticker => parse_paid_sticker(el, images).await.into(),
        MessageKind::MembershipItem => parse_membership_item(el, images).await.into(),
    };
    Some(message)
}

/// Dispatcher bound to one image resolver
#[derive(Debug, Clone, Default)]
pub struct ChatParser<R> {
    images: R,
}

impl<R> ChatParser<R> {
    pub fn new(images: R) -> Self {
        Self { images }
    }

    pub fn resolver(&self) -> &R {
        &self.images
    }

    pub async fn parse<E>(&self, el: &E) -> Option<Message>
    where
        E: ChatElement,
        R: ImageResolver<E>,
    {
        parse(el, &self.images).await
    }
}

/// Text of the first descendant matching `selector`
fn text_of<E: ChatElement>(el: &E, selector: &str) -> Option<String> {
    el.query(selector).and_then(|node| node.text_content())
}

/// Background color of the first descendant matching `selector`
fn background_of<E: ChatElement>(el: &E, selector: &str) -> Option<String> {
    el.query(selector).map(|node| node.background_color())
}

/// Resolved source of the first image matching `selector`
async fn image_of<E, R>(el: &E, selector: &str, images: &R) -> Option<String>
where
    E: ChatElement,
    R: ImageResolver<E> + ?Sized,
{
    match el.query(selector) {
        Some(image) => images.resolve(&image).await,
        None => None,
    }
}
