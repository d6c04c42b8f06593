use super::{background_of, parse_common, selectors, text_of};
use crate::element::ChatElement;
use crate::image::ImageResolver;
use crate::message::MembershipItem;

/// Membership join/renewal
///
/// The header detail is plain text but goes in `html` so every kind shares
/// one field layout.
pub async fn parse_membership_item<E, R>(el: &E, images: &R) -> MembershipItem
where
    E: ChatElement,
    R: ImageResolver<E> + ?Sized,
{
    let common = parse_common(el, images).await;
    let html = text_of(el, selectors::HEADER_SUBTEXT);
    let background_color = background_of(el, selectors::CARD_HEADER);

    MembershipItem {
        common,
        html,
        background_color,
    }
}
