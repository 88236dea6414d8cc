use super::{EmbedPart, PartKind};
use crate::format::WireFormat;
use crate::fragment::Fragment;

/// Embed title
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl EmbedPart for Title {
    fn kind(&self) -> PartKind {
        PartKind::Title
    }

    fn is_present(&self) -> bool {
        !self.text.is_empty()
    }

    fn render_entries(&self, _format: WireFormat) -> Fragment {
        Fragment::single("title", self.text.as_str())
    }
}

/// Embed body text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    pub text: String,
}

impl Description {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl EmbedPart for Description {
    fn kind(&self) -> PartKind {
        PartKind::Description
    }

    fn is_present(&self) -> bool {
        !self.text.is_empty()
    }

    fn render_entries(&self, _format: WireFormat) -> Fragment {
        Fragment::single("description", self.text.as_str())
    }
}
