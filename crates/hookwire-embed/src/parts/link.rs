use super::{EmbedPart, PartKind};
use crate::format::WireFormat;
use crate::fragment::Fragment;

/// Link the embed title points at
///
/// Renders both `title` and `url`. With no title of its own the link
/// shows its url as the title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlLink {
    pub title: String,
    pub url: String,
}

impl UrlLink {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    /// Link titled with its own url
    pub fn to(url: impl Into<String>) -> Self {
        Self::new(String::new(), url)
    }

    /// Title as rendered: the explicit title, else the url
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.url
        } else {
            &self.title
        }
    }
}

impl EmbedPart for UrlLink {
    fn kind(&self) -> PartKind {
        PartKind::Link
    }

    fn is_present(&self) -> bool {
        !self.title.is_empty() || !self.url.is_empty()
    }

    fn render_entries(&self, _format: WireFormat) -> Fragment {
        let mut link = Fragment::single("title", self.display_title());
        if !self.url.is_empty() {
            link.push("url", self.url.as_str());
        }
        link
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_url() {
        let link = UrlLink::new("Docs", "https://x/docs");
        assert_eq!(
            link.render(WireFormat::Compat).to_json().unwrap(),
            r#"{"title":"Docs","url":"https://x/docs"}"#
        );
    }

    #[test]
    fn test_empty_title_defaults_to_url() {
        let link = UrlLink::to("https://x/docs");
        assert_eq!(link.display_title(), "https://x/docs");
        assert_eq!(
            link.render(WireFormat::Compat).to_json().unwrap(),
            r#"{"title":"https://x/docs","url":"https://x/docs"}"#
        );
        // rendering leaves the part untouched
        assert!(link.title.is_empty());
    }

    #[test]
    fn test_empty_url_is_suppressed() {
        let link = UrlLink::new("Docs", "");
        assert_eq!(
            link.render(WireFormat::Compat).to_json().unwrap(),
            r#"{"title":"Docs"}"#
        );
    }
}
