use super::{parse_common, selectors};
use crate::element::ChatElement;
use crate::image::ImageResolver;
use crate::message::TextMessage;

pub async fn parse_text_message<E, R>(el: &E, images: &R) -> TextMessage
where
    E: ChatElement,
    R: ImageResolver<E> + ?Sized,
{
    let common = parse_common(el, images).await;
    let html = el
        .query(selectors::MESSAGE)
        .and_then(|body| body.inner_html());

    TextMessage { common, html }
}
