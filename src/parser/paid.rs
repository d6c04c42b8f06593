use super::{background_of, parse_common, selectors, text_of};
use crate::element::ChatElement;
use crate::image::ImageResolver;
use crate::message::PaidMessage;

/// Super Chat: body markup, amount and header color
pub async fn parse_paid_message<E, R>(el: &E, images: &R) -> PaidMessage
where
    E: ChatElement,
    R: ImageResolver<E> + ?Sized,
{
    let common = parse_common(el, images).await;
    let html = el
        .query(selectors::MESSAGE)
        .and_then(|body| body.inner_html());
    let sub_text = text_of(el, selectors::PURCHASE_AMOUNT);
    let background_color = background_of(el, selectors::CARD_HEADER);

    PaidMessage {
        common,
        html,
        sub_text,
        background_color,
    }
}
