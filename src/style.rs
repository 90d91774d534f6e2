use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The class-name tokens the pages reference.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Debug, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum StyleClass {
    Main,
    Container,
    Title,
    Content,
    Subtitle,
    Text,
    TextItem,
}

/// Maps style tokens to the class strings that end up in the markup.
///
/// The registry is passed into every render call; nothing resolves
/// class names through ambient state.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct StyleRegistry {
    classes: HashMap<StyleClass, String>,
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self {
            classes: HashMap::from_iter(
                [
                    (StyleClass::Main, "main-content"),
                    (StyleClass::Container, "container"),
                    (StyleClass::Title, "title"),
                    (StyleClass::Content, "content"),
                    (StyleClass::Subtitle, "subtitle"),
                    (StyleClass::Text, "text"),
                    (StyleClass::TextItem, "text-item"),
                ]
                .map(|(token, class)| (token, class.to_owned())),
            ),
        }
    }
}

impl StyleRegistry {
    pub fn resolve(&self, token: StyleClass) -> &str {
        self.classes.get(&token).map(String::as_str).unwrap_or("")
    }

    pub fn with_class(mut self, token: StyleClass, class: impl Into<String>) -> Self {
        self.classes.insert(token, class.into());
        self
    }

    /// Default registry with overrides from a YAML mapping of token to class.
    pub fn from_yaml(source: &str) -> Result<Self, serde_yaml::Error> {
        let overrides: HashMap<StyleClass, String> = serde_yaml::from_str(source)?;

        let mut registry = Self::default();
        registry.classes.extend(overrides);

        Ok(registry)
    }
}

#[cfg(test)]
mod test {
    use crate::style::{StyleClass, StyleRegistry};

    #[test]
    fn defaults() {
        let registry = StyleRegistry::default();

        assert_eq!(registry.resolve(StyleClass::Title), "title");
        assert_eq!(registry.resolve(StyleClass::TextItem), "text-item");
    }

    #[test]
    fn yaml_overrides_keep_defaults() {
        let registry = StyleRegistry::from_yaml("title: technologies__title\n").unwrap();

        assert_eq!(registry.resolve(StyleClass::Title), "technologies__title");
        assert_eq!(registry.resolve(StyleClass::Subtitle), "subtitle");
    }

    #[test]
    fn with_class() {
        let registry = StyleRegistry::default().with_class(StyleClass::Main, "page");

        assert_eq!(registry.resolve(StyleClass::Main), "page");
    }
}
