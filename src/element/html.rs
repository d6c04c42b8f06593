use super::ChatElement;
use scraper::{ElementRef, Selector};
use std::collections::HashMap;
use std::sync::{LazyLock, Mutex, PoisonError};

/// Computed value of a background that was never set
pub const TRANSPARENT: &str = "rgba(0, 0, 0, 0)";

/// Nesting limit for `var()` references that point at other variables
const MAX_VAR_DEPTH: usize = 8;

/// Compiled selectors, keyed by their source text
static SELECTORS: LazyLock<Mutex<HashMap<String, Selector>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Run `f` with the compiled form of `selector`, or `None` if it doesn't parse
fn with_selector<T>(selector: &str, f: impl FnOnce(&Selector) -> T) -> Option<T> {
    let mut cache = SELECTORS.lock().unwrap_or_else(PoisonError::into_inner);
    if !cache.contains_key(selector) {
        match Selector::parse(selector) {
            Ok(compiled) => {
                cache.insert(selector.to_string(), compiled);
            }
            Err(err) => {
                tracing::warn!(selector, error = %err, "invalid selector");
                return None;
            }
        }
    }
    cache.get(selector).map(f)
}

/// [`ChatElement`] backed by a node of a parsed `scraper` document
#[derive(Debug, Clone, Copy)]
pub struct HtmlElement<'a>(ElementRef<'a>);

impl<'a> HtmlElement<'a> {
    pub fn new(element: ElementRef<'a>) -> Self {
        Self(element)
    }

    /// Underlying `scraper` node
    pub fn element(&self) -> ElementRef<'a> {
        self.0
    }
}

impl<'a> From<ElementRef<'a>> for HtmlElement<'a> {
    fn from(element: ElementRef<'a>) -> Self {
        Self::new(element)
    }
}

impl<'a> ChatElement for HtmlElement<'a> {
    fn kind_tag(&self) -> &str {
        self.0.value().name()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.value().attr(name).map(str::to_string)
    }

    fn query(&self, selector: &str) -> Option<Self> {
        with_selector(selector, |compiled| self.0.select(compiled).next().map(Self)).flatten()
    }

    fn text_content(&self) -> Option<String> {
        Some(self.0.text().collect())
    }

    fn inner_html(&self) -> Option<String> {
        Some(self.0.inner_html())
    }

    /// Static trees carry no stylesheet cascade, so only the inline `style`
    /// attribute contributes. `var(--name)` is looked up among custom
    /// properties declared inline on this node or its ancestors; a reference
    /// that stays unresolved counts as unset.
    fn background_color(&self) -> String {
        inline_declaration(self.0, "background-color")
            .and_then(|value| self.resolve_value(&value, 0))
            .unwrap_or_else(|| TRANSPARENT.to_string())
    }
}

impl<'a> HtmlElement<'a> {
    /// Substitute a whole-value `var(--name[, fallback])`
    fn resolve_value(&self, value: &str, depth: usize) -> Option<String> {
        let value = value.trim();
        let Some(inner) = value
            .strip_prefix("var(")
            .and_then(|rest| rest.strip_suffix(')'))
        else {
            return (!value.contains("var(")).then(|| value.to_string());
        };
        if depth >= MAX_VAR_DEPTH {
            return None;
        }

        let (name, fallback) = match inner.split_once(',') {
            Some((name, fallback)) => (name.trim(), Some(fallback)),
            None => (inner.trim(), None),
        };
        match self.custom_property(name) {
            Some(declared) => self.resolve_value(&declared, depth + 1),
            None => fallback.and_then(|fallback| self.resolve_value(fallback, depth + 1)),
        }
    }

    /// Nearest inline declaration of a custom property, walking up the tree
    fn custom_property(&self, name: &str) -> Option<String> {
        std::iter::once(self.0)
            .chain(self.0.ancestors().filter_map(ElementRef::wrap))
            .find_map(|el| inline_declaration(el, name))
    }
}

/// Last declaration of `property` in an element's inline style, if any
///
/// Custom properties (`--*`) match case-sensitively, others ignore case.
fn inline_declaration(el: ElementRef<'_>, property: &str) -> Option<String> {
    el.value().attr("style")?
        .split(';')
        .filter_map(|decl| decl.split_once(':'))
        .filter(|(prop, _)| {
            let prop = prop.trim();
            if property.starts_with("--") {
                prop == property
            } else {
                prop.eq_ignore_ascii_case(property)
            }
        })
        .map(|(_, value)| value.trim().trim_end_matches("!important").trim())
        .filter(|value| !value.is_empty())
        .last()
        .map(str::to_string)
}
