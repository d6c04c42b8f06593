mod resolver;

#[cfg(test)]
pub(crate) mod stub;

pub use resolver::{SrcAttributeResolver, TimeoutResolver, DEFAULT_BASE_URL};

use crate::element::ChatElement;
use async_trait::async_trait;

/// Turns an image-bearing element into its effective source URL
///
/// Resolution may suspend (e.g. waiting for a lazy-loaded image). `None`
/// means the image has no usable source yet; extraction carries on without it.
/// Futures are not `Send`: extraction runs on one task per element tree.
#[async_trait(?Send)]
pub trait ImageResolver<E: ChatElement> {
    async fn resolve(&self, image: &E) -> Option<String>;
}
