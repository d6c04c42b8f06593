use super::ImageResolver;
use crate::element::ChatElement;
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

/// Origin the chat widget is served from
pub const DEFAULT_BASE_URL: &str = "https://www.youtube.com/";

/// Resolves an image from its `src` attribute
///
/// Empty sources and inline `data:` placeholders count as "not loaded".
/// Relative and protocol-relative sources are joined against `base`.
#[derive(Debug, Clone)]
pub struct SrcAttributeResolver {
    base: Url,
}

impl SrcAttributeResolver {
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Absolute form of a raw `src` value, or `None` for placeholders
    pub fn absolutize(&self, src: &str) -> Option<String> {
        let src = src.trim();
        if src.is_empty() || src.starts_with("data:") {
            return None;
        }
        match self.base.join(src) {
            Ok(url) => Some(url.into()),
            Err(err) => {
                tracing::debug!(src, error = %err, "unusable image source");
                None
            }
        }
    }
}

impl Default for SrcAttributeResolver {
    fn default() -> Self {
        let base = Url::parse(DEFAULT_BASE_URL).expect("default base URL parses");
        Self::new(base)
    }
}

#[async_trait(?Send)]
impl<E: ChatElement> ImageResolver<E> for SrcAttributeResolver {
    async fn resolve(&self, image: &E) -> Option<String> {
        image
            .attribute("src")
            .and_then(|src| self.absolutize(&src))
    }
}

/// Gives up on a slow resolver after a fixed delay
///
/// An elapsed limit is reported the same way as an image without a source.
#[derive(Debug, Clone)]
pub struct TimeoutResolver<R> {
    inner: R,
    limit: Duration,
}

impl<R> TimeoutResolver<R> {
    pub fn new(inner: R, limit: Duration) -> Self {
        Self { inner, limit }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[async_trait(?Send)]
impl<E, R> ImageResolver<E> for TimeoutResolver<R>
where
    E: ChatElement,
    R: ImageResolver<E>,
{
    async fn resolve(&self, image: &E) -> Option<String> {
        match tokio::time::timeout(self.limit, self.inner.resolve(image)).await {
            Ok(url) => url,
            Err(_) => {
                tracing::debug!(
                    limit_ms = self.limit.as_millis() as u64,
                    "image resolution timed out"
                );
                None
            }
        }
    }
}
