mod html;

#[cfg(test)]
pub(crate) mod fixture;

pub use html::{HtmlElement, TRANSPARENT};

/// Read-only view of one node in a rendered element tree
///
/// Extraction never mutates the tree; every lookup may come back empty and
/// callers treat that as a missing field, not a failure.
pub trait ChatElement: Sized {
    /// Element type discriminator (e.g. `yt-live-chat-text-message-renderer`)
    fn kind_tag(&self) -> &str;

    /// Value of an attribute set on this node
    fn attribute(&self, name: &str) -> Option<String>;

    /// First descendant matching a selector path such as `#card > #header`
    fn query(&self, selector: &str) -> Option<Self>;

    /// Concatenated text of this node and its descendants
    fn text_content(&self) -> Option<String>;

    /// Serialized markup of this node's children
    fn inner_html(&self) -> Option<String>;

    /// Computed background color of this node
    fn background_color(&self) -> String;
}
