//! Embed parts and wire rendering for webhook messages

mod embed;
mod error;
mod format;
mod fragment;
pub mod parts;

pub use embed::{limits, Embed, EmbedBuilder};
pub use error::{ColorError, EmbedError, TimestampError};
pub use format::WireFormat;
pub use fragment::{Fragment, Node};
pub use parts::{
    palette, Author, Color, Description, EmbedPart, Field, Fields, Footer, Image, PartKind,
    Thumbnail, Timestamp, Title, UrlLink, TIMESTAMP_PATTERN, ZERO_TIMESTAMP,
};
