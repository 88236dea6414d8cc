//! Embed parts
//!
//! Each part decides on its own whether it is present and, when it is,
//! which entries it contributes to the embed object.

mod author;
mod color;
mod field;
mod footer;
mod link;
mod media;
mod text;
mod timestamp;

pub use author::Author;
pub use color::{palette, Color, MAX_COLOR};
pub use field::{Field, Fields};
pub use footer::Footer;
pub use link::UrlLink;
pub use media::{Image, Thumbnail};
pub use text::{Description, Title};
pub use timestamp::{Timestamp, TIMESTAMP_PATTERN, ZERO_TIMESTAMP};

use crate::format::WireFormat;
use crate::fragment::Fragment;

/// The ten embed parts, in the order they are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    Fields,
    Description,
    Title,
    Author,
    Color,
    Link,
    Image,
    Thumbnail,
    Footer,
    Timestamp,
}

impl PartKind {
    pub const ORDER: [PartKind; 10] = [
        PartKind::Fields,
        PartKind::Description,
        PartKind::Title,
        PartKind::Author,
        PartKind::Color,
        PartKind::Link,
        PartKind::Image,
        PartKind::Thumbnail,
        PartKind::Footer,
        PartKind::Timestamp,
    ];

    /// Wire key the part is written under
    pub fn key(self) -> &'static str {
        match self {
            PartKind::Fields => "fields",
            PartKind::Description => "description",
            PartKind::Title => "title",
            PartKind::Author => "author",
            PartKind::Color => "color",
            PartKind::Link => "url",
            PartKind::Image => "image",
            PartKind::Thumbnail => "thumbnail",
            PartKind::Footer => "footer",
            PartKind::Timestamp => "timestamp",
        }
    }
}

/// Shared rendering capability of all embed parts
pub trait EmbedPart {
    fn kind(&self) -> PartKind;

    /// Whether the part contributes anything at all
    fn is_present(&self) -> bool;

    /// Entries of a present part. Callers go through [`EmbedPart::render`].
    fn render_entries(&self, format: WireFormat) -> Fragment;

    /// Entries to splice into the embed object, empty when absent
    fn render(&self, format: WireFormat) -> Fragment {
        if self.is_present() {
            self.render_entries(format)
        } else {
            Fragment::new()
        }
    }
}
