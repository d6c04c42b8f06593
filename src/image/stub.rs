use super::ImageResolver;
use crate::element::ChatElement;
use async_trait::async_trait;

/// Canned resolver behaviours for tests
#[derive(Debug, Clone, Copy)]
pub enum StubResolver {
    /// Returns the raw `src` attribute untouched
    Echo,
    /// Every image is unresolvable
    Missing,
    /// Never completes
    Pending,
}

#[async_trait(?Send)]
impl<E: ChatElement> ImageResolver<E> for StubResolver {
    async fn resolve(&self, image: &E) -> Option<String> {
        match self {
            StubResolver::Echo => image.attribute("src"),
            StubResolver::Missing => None,
            StubResolver::Pending => std::future::pending().await,
        }
    }
}
