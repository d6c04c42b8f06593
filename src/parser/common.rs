use super::{image_of, selectors, text_of};
use crate::element::ChatElement;
use crate::image::ImageResolver;
use crate::message::CommonFields;

/// Author, author type, avatar and plain-text body
///
/// An empty author name counts as no author.
pub async fn parse_common<E, R>(el: &E, images: &R) -> CommonFields
where
    E: ChatElement,
    R: ImageResolver<E> + ?Sized,
{
    let author = text_of(el, selectors::AUTHOR_NAME).filter(|name| !name.is_empty());
    let author_type = el.attribute(selectors::AUTHOR_TYPE_ATTR);
    let avatar_url = image_of(el, selectors::AVATAR_IMAGE, images).await;
    let message = text_of(el, selectors::MESSAGE);

    CommonFields {
        author,
        author_type,
        avatar_url,
        message,
    }
}
