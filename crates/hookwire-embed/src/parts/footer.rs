use super::{EmbedPart, PartKind};
use crate::format::WireFormat;
use crate::fragment::Fragment;

/// Text and icon shown at the bottom of the embed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Footer {
    pub text: String,
    pub icon_url: String,
}

impl Footer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon_url: String::new(),
        }
    }

    pub fn with_icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = icon_url.into();
        self
    }
}

impl EmbedPart for Footer {
    fn kind(&self) -> PartKind {
        PartKind::Footer
    }

    fn is_present(&self) -> bool {
        !self.text.is_empty() || !self.icon_url.is_empty()
    }

    fn render_entries(&self, _format: WireFormat) -> Fragment {
        let mut footer = Fragment::new();
        if !self.text.is_empty() {
            footer.push("text", self.text.as_str());
        }
        if !self.icon_url.is_empty() {
            footer.push("icon_url", self.icon_url.as_str());
        }
        Fragment::single("footer", footer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_with_icon() {
        let footer = Footer::new("Powered by hookwire").with_icon_url("https://x/i.png");
        assert_eq!(
            footer.render(WireFormat::Compat).to_json().unwrap(),
            r#"{"footer":{"text":"Powered by hookwire","icon_url":"https://x/i.png"}}"#
        );
    }

    #[test]
    fn test_icon_without_text() {
        let footer = Footer::default().with_icon_url("https://x/i.png");
        assert_eq!(
            footer.render(WireFormat::Compat).to_json().unwrap(),
            r#"{"footer":{"icon_url":"https://x/i.png"}}"#
        );
    }
}
