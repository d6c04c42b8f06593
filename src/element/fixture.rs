use super::{ChatElement, TRANSPARENT};
use std::collections::HashMap;

/// In-memory element tree for tests
///
/// Selectors understand `#id` segments joined by `>` only.
#[derive(Debug, Clone, Default)]
pub struct FixtureElement {
    tag: String,
    id: Option<String>,
    attributes: HashMap<String, String>,
    text: Option<String>,
    html: Option<String>,
    background: Option<String>,
    children: Vec<FixtureElement>,
}

impl FixtureElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Plain `div` carrying an id
    pub fn with_id(id: &str) -> Self {
        Self::new("div").id(id)
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn html(mut self, html: &str) -> Self {
        self.html = Some(html.to_string());
        self
    }

    pub fn background(mut self, color: &str) -> Self {
        self.background = Some(color.to_string());
        self
    }

    pub fn child(mut self, child: FixtureElement) -> Self {
        self.children.push(child);
        self
    }

    fn find(&self, path: &[&str], ancestors: &mut Vec<Option<String>>) -> Option<&FixtureElement> {
        for child in &self.children {
            if child.matches(path, ancestors) {
                return Some(child);
            }
            ancestors.push(child.id.clone());
            let found = child.find(path, ancestors);
            ancestors.pop();
            if found.is_some() {
                return found;
            }
        }
        None
    }

    fn matches(&self, path: &[&str], ancestors: &[Option<String>]) -> bool {
        let Some((last, parents)) = path.split_last() else {
            return false;
        };
        if self.id.as_deref() != Some(*last) || parents.len() > ancestors.len() {
            return false;
        }
        parents
            .iter()
            .rev()
            .zip(ancestors.iter().rev())
            .all(|(want, have)| have.as_deref() == Some(*want))
    }
}

impl ChatElement for FixtureElement {
    fn kind_tag(&self) -> &str {
        &self.tag
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn query(&self, selector: &str) -> Option<Self> {
        let path: Vec<&str> = selector
            .split('>')
            .map(|segment| segment.trim().trim_start_matches('#'))
            .collect();
        self.find(&path, &mut Vec::new()).cloned()
    }

    fn text_content(&self) -> Option<String> {
        self.text.clone()
    }

    fn inner_html(&self) -> Option<String> {
        self.html.clone()
    }

    fn background_color(&self) -> String {
        self.background
            .clone()
            .unwrap_or_else(|| TRANSPARENT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_child_path() {
        let root = FixtureElement::new("x")
            .child(FixtureElement::with_id("header").text("outer"))
            .child(
                FixtureElement::with_id("card")
                    .child(FixtureElement::with_id("header").text("inner")),
            );

        let header = root.query("#card > #header").unwrap();
        assert_eq!(header.text_content().as_deref(), Some("inner"));
        assert_eq!(
            root.query("#header").unwrap().text_content().as_deref(),
            Some("outer")
        );
        assert!(root.query("#sticker > #header").is_none());
    }
}
