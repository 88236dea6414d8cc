use super::{EmbedPart, PartKind};
use crate::format::WireFormat;
use crate::fragment::Fragment;

/// Large image shown below the embed body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Image {
    pub url: String,
}

impl Image {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl EmbedPart for Image {
    fn kind(&self) -> PartKind {
        PartKind::Image
    }

    fn is_present(&self) -> bool {
        !self.url.is_empty()
    }

    fn render_entries(&self, _format: WireFormat) -> Fragment {
        Fragment::single("image", Fragment::single("url", self.url.as_str()))
    }
}

/// Small image shown in the top-right corner
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Thumbnail {
    pub url: String,
}

impl Thumbnail {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl EmbedPart for Thumbnail {
    fn kind(&self) -> PartKind {
        PartKind::Thumbnail
    }

    fn is_present(&self) -> bool {
        !self.url.is_empty()
    }

    fn render_entries(&self, _format: WireFormat) -> Fragment {
        Fragment::single("thumbnail", Fragment::single("url", self.url.as_str()))
    }
}
