use super::{background_of, image_of, parse_common, selectors, text_of};
use crate::element::ChatElement;
use crate::image::ImageResolver;
use crate::message::PaidSticker;

/// Super Sticker
///
/// Unlike the other kinds, the amount is always present: a missing chip
/// yields an empty string.
pub async fn parse_paid_sticker<E, R>(el: &E, images: &R) -> PaidSticker
where
    E: ChatElement,
    R: ImageResolver<E> + ?Sized,
{
    let common = parse_common(el, images).await;
    let sub_text = text_of(el, selectors::PURCHASE_AMOUNT_CHIP).unwrap_or_default();
    let background_color = background_of(el, selectors::CARD);
    let sticker_url = image_of(el, selectors::STICKER_IMAGE, images).await;

    PaidSticker {
        common,
        sub_text,
        background_color,
        sticker_url,
    }
}
