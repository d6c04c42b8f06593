use crate::image::{SrcAttributeResolver, TimeoutResolver, DEFAULT_BASE_URL};
use crate::parser::ChatParser;
use crate::Error;
use std::time::Duration;
use url::Url;

/// Upper bound on a single image resolution
pub const DEFAULT_IMAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Resolver used by parsers built from a [`ParserConfig`]
pub type ConfiguredResolver = TimeoutResolver<SrcAttributeResolver>;

/// Builder for a [`ChatParser`] reading images from `src` attributes
#[derive(Debug, Clone)]
pub struct ParserConfig {
    base_url: Option<Url>,
    image_timeout: Duration,
}

impl ParserConfig {
    /// Create a config with the default base URL and image timeout
    pub fn new() -> Self {
        Self {
            base_url: None,
            image_timeout: DEFAULT_IMAGE_TIMEOUT,
        }
    }

    /// Set the URL relative image sources are resolved against
    pub fn base_url(mut self, url: &str) -> Result<Self, Error> {
        let parsed = Url::parse(url).map_err(|source| Error::InvalidBaseUrl {
            url: url.to_string(),
            source,
        })?;
        if parsed.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl {
                url: url.to_string(),
                source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
            });
        }
        self.base_url = Some(parsed);
        Ok(self)
    }

    /// Set how long to wait for one image before leaving it out
    pub fn image_timeout(mut self, timeout: Duration) -> Self {
        self.image_timeout = timeout;
        self
    }

    pub fn resolver(&self) -> ConfiguredResolver {
        let images = match &self.base_url {
            Some(base) => SrcAttributeResolver::new(base.clone()),
            None => SrcAttributeResolver::default(),
        };
        TimeoutResolver::new(images, self.image_timeout)
    }

    pub fn build(&self) -> ChatParser<ConfiguredResolver> {
        ChatParser::new(self.resolver())
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}
