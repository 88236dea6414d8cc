use super::{EmbedPart, PartKind};
use crate::format::WireFormat;
use crate::fragment::Fragment;

/// Embed author line
///
/// `url` and `icon_url` only make it onto the wire next to a non-empty
/// `name`. An author with a url but no name still renders, as an empty
/// `"author": {}` object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub url: String,
    pub icon_url: String,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = icon_url.into();
        self
    }
}

impl EmbedPart for Author {
    fn kind(&self) -> PartKind {
        PartKind::Author
    }

    fn is_present(&self) -> bool {
        !self.name.is_empty() || !self.url.is_empty() || !self.icon_url.is_empty()
    }

    fn render_entries(&self, _format: WireFormat) -> Fragment {
        let mut author = Fragment::new();
        if !self.name.is_empty() {
            author.push("name", self.name.as_str());
            if !self.url.is_empty() {
                author.push("url", self.url.as_str());
            }
            if !self.icon_url.is_empty() {
                author.push("icon_url", self.icon_url.as_str());
            }
        }
        Fragment::single("author", author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_author() {
        let author = Author::new("bot")
            .with_url("https://x")
            .with_icon_url("https://x/i.png");
        assert_eq!(
            author.render(WireFormat::Compat).to_json().unwrap(),
            r#"{"author":{"name":"bot","url":"https://x","icon_url":"https://x/i.png"}}"#
        );
    }

    #[test]
    fn test_missing_name_suppresses_links() {
        let author = Author::default()
            .with_url("https://x")
            .with_icon_url("https://x/i.png");
        assert!(author.is_present());
        assert_eq!(
            author.render(WireFormat::Compat).to_json().unwrap(),
            r#"{"author":{}}"#
        );
    }

    #[test]
    fn test_name_only() {
        let author = Author::new("bot");
        assert_eq!(
            author.render(WireFormat::Typed).to_json().unwrap(),
            r#"{"author":{"name":"bot"}}"#
        );
    }
}
