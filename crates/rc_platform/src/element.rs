use serde::{Deserialize, Serialize};

/// Minimal DOM-like query surface for the element under the pointer.
pub trait ElementQuery {
    /// True if this element itself carries `class`.
    fn has_class(&self, class: &str) -> bool;

    /// True if this element or any of its ancestors carries `class`.
    fn is_within(&self, class: &str) -> bool;
}

/// Owned element description: its classes plus its ancestor chain.
///
/// Hosts that own a real widget tree can implement [`ElementQuery`] directly instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<Element>>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Nest this element inside `parent`.
    pub fn inside(mut self, parent: Element) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    pub fn ancestors(&self) -> impl Iterator<Item = &Element> {
        std::iter::successors(self.parent.as_deref(), |el| el.parent.as_deref())
    }
}

impl ElementQuery for Element {
    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn is_within(&self, class: &str) -> bool {
        self.has_class(class) || self.ancestors().any(|el| el.has_class(class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_within_walks_ancestors() {
        let button = Element::new().with_class("confirm-button");
        let icon = Element::new()
            .with_class("icon")
            .inside(Element::new().with_class("label").inside(button));

        assert!(!icon.has_class("confirm-button"));
        assert!(icon.is_within("confirm-button"));
        assert!(icon.is_within("icon"));
        assert!(!icon.is_within("toolbar"));
        assert_eq!(icon.ancestors().count(), 2);
    }
}
