//! Embed aggregation and fluent builder API
//!
//! Implements the Discord embed object:
//! https://discord.com/developers/docs/resources/message#embed-object

use chrono::NaiveDateTime;
use tracing::trace;

use crate::error::EmbedError;
use crate::format::WireFormat;
use crate::fragment::{Fragment, Node};
use crate::parts::{
    Author, Color, Description, EmbedPart, Field, Fields, Footer, Image, PartKind, Thumbnail,
    Timestamp, Title, UrlLink,
};

/// Discord embed field limits
pub mod limits {
    pub const TITLE_MAX: usize = 256;
    pub const DESCRIPTION_MAX: usize = 4096;
    pub const FIELDS_MAX: usize = 25;
    pub const FIELD_NAME_MAX: usize = 256;
    pub const FIELD_VALUE_MAX: usize = 1024;
    pub const FOOTER_TEXT_MAX: usize = 2048;
    pub const AUTHOR_NAME_MAX: usize = 256;
    pub const TOTAL_CHARS_MAX: usize = 6000;
}

/// A single rich embed
///
/// Absent parts are skipped; present parts are emitted in the fixed
/// order of [`PartKind::ORDER`] and wrapped as `"embeds": [{ ... }]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Embed {
    pub fields: Fields,
    pub description: Description,
    pub title: Title,
    pub author: Author,
    pub color: Color,
    pub link: UrlLink,
    pub image: Image,
    pub thumbnail: Thumbnail,
    pub footer: Footer,
    pub timestamp: Timestamp,
}

impl Embed {
    pub fn new() -> Self {
        Self::default()
    }

    /// All parts in emission order
    pub fn parts(&self) -> [&dyn EmbedPart; 10] {
        [
            &self.fields,
            &self.description,
            &self.title,
            &self.author,
            &self.color,
            &self.link,
            &self.image,
            &self.thumbnail,
            &self.footer,
            &self.timestamp,
        ]
    }

    /// True when no part would render
    pub fn is_empty(&self) -> bool {
        !self.parts().iter().any(|part| part.is_present())
    }

    /// Interior of the embed object
    pub fn render_object(&self, format: WireFormat) -> Fragment {
        let mut object = Fragment::new();
        for part in self.parts() {
            let mut fragment = part.render(format);
            if fragment.is_empty() {
                continue;
            }
            // the standalone title owns the key in typed output
            if part.kind() == PartKind::Link && format.is_typed() && self.title.is_present() {
                fragment.remove("title");
            }
            trace!(part = ?part.kind(), entries = fragment.len(), "Rendered embed part");
            object.extend(fragment);
        }
        object
    }

    /// `"embeds": [{ ... }]`, or an empty fragment when nothing is set
    pub fn render(&self, format: WireFormat) -> Fragment {
        let object = self.render_object(format);
        if object.is_empty() {
            return Fragment::new();
        }
        Fragment::single("embeds", vec![Node::Object(object)])
    }

    /// Characters the link contributes to `title` on the wire
    fn link_title_chars(&self, format: WireFormat) -> usize {
        if format.is_typed() && self.title.is_present() {
            0
        } else {
            char_len(self.link.display_title())
        }
    }

    fn rendered_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| field.is_present())
    }

    /// Calculate the total character count of the rendered embed
    pub fn total_chars(&self, format: WireFormat) -> usize {
        let mut total = char_len(&self.title.text)
            + self.link_title_chars(format)
            + char_len(&self.description.text)
            + char_len(&self.footer.text)
            + char_len(&self.author.name);

        for field in self.rendered_fields() {
            total += char_len(&field.name) + char_len(&field.value);
        }

        total
    }

    /// Validate the default (compat) rendering against Discord limits
    pub fn validate(&self) -> Result<(), EmbedError> {
        self.validate_for(WireFormat::default())
    }

    /// Validate the embed as rendered in `format` against Discord limits
    pub fn validate_for(&self, format: WireFormat) -> Result<(), EmbedError> {
        let title_len = char_len(&self.title.text).max(self.link_title_chars(format));
        if title_len > limits::TITLE_MAX {
            return Err(EmbedError::TitleTooLong {
                limit: limits::TITLE_MAX,
                actual: title_len,
            });
        }

        let description_len = char_len(&self.description.text);
        if description_len > limits::DESCRIPTION_MAX {
            return Err(EmbedError::DescriptionTooLong {
                limit: limits::DESCRIPTION_MAX,
                actual: description_len,
            });
        }

        let field_count = self.rendered_fields().count();
        if field_count > limits::FIELDS_MAX {
            return Err(EmbedError::TooManyFields {
                limit: limits::FIELDS_MAX,
                actual: field_count,
            });
        }

        for field in self.rendered_fields() {
            let name_len = char_len(&field.name);
            if name_len > limits::FIELD_NAME_MAX {
                return Err(EmbedError::FieldNameTooLong {
                    limit: limits::FIELD_NAME_MAX,
                    actual: name_len,
                });
            }
            let value_len = char_len(&field.value);
            if value_len > limits::FIELD_VALUE_MAX {
                return Err(EmbedError::FieldValueTooLong {
                    limit: limits::FIELD_VALUE_MAX,
                    actual: value_len,
                });
            }
        }

        let footer_len = char_len(&self.footer.text);
        if footer_len > limits::FOOTER_TEXT_MAX {
            return Err(EmbedError::FooterTextTooLong {
                limit: limits::FOOTER_TEXT_MAX,
                actual: footer_len,
            });
        }

        let author_len = char_len(&self.author.name);
        if author_len > limits::AUTHOR_NAME_MAX {
            return Err(EmbedError::AuthorNameTooLong {
                limit: limits::AUTHOR_NAME_MAX,
                actual: author_len,
            });
        }

        let total_chars = self.total_chars(format);
        if total_chars > limits::TOTAL_CHARS_MAX {
            return Err(EmbedError::TotalSizeTooLarge {
                limit: limits::TOTAL_CHARS_MAX,
                actual: total_chars,
            });
        }

        Ok(())
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Fluent builder for embeds
#[derive(Debug, Clone, Default)]
pub struct EmbedBuilder {
    embed: Embed,
}

impl EmbedBuilder {
    /// Create a new embed builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the embed title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.embed.title = Title::new(title);
        self
    }

    /// Set the embed description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.embed.description = Description::new(description);
        self
    }

    /// Set the embed URL (makes title clickable)
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.embed.link.url = url.into();
        self
    }

    /// Set both the link title and its URL
    pub fn link(mut self, title: impl Into<String>, url: impl Into<String>) -> Self {
        self.embed.link = UrlLink::new(title, url);
        self
    }

    /// Set the embed color from a hex string such as `"FF5733"`
    pub fn color(mut self, hex: impl Into<String>) -> Self {
        self.embed.color = Color::new(hex);
        self
    }

    /// Set the embed color from an RGB integer such as `0xFF5733`
    pub fn color_rgb(mut self, rgb: u32) -> Self {
        self.embed.color = Color::from_rgb(rgb);
        self
    }

    /// Add a field to the embed
    pub fn field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.embed.fields.push(Field::new(name, value, inline));
        self
    }

    /// Add an inline field (shorthand for field with inline=true)
    pub fn inline_field(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.field(name, value, true)
    }

    /// Set the embed author
    pub fn author(mut self, name: impl Into<String>) -> Self {
        self.embed.author = Author::new(name);
        self
    }

    /// Set the embed author with URL and icon
    pub fn author_full(
        mut self,
        name: impl Into<String>,
        url: impl Into<String>,
        icon_url: impl Into<String>,
    ) -> Self {
        self.embed.author = Author::new(name).with_url(url).with_icon_url(icon_url);
        self
    }

    /// Set the embed image
    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.embed.image = Image::new(url);
        self
    }

    /// Set the embed thumbnail
    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.embed.thumbnail = Thumbnail::new(url);
        self
    }

    /// Set the embed footer
    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.embed.footer = Footer::new(text);
        self
    }

    /// Set the embed footer with icon
    pub fn footer_with_icon(mut self, text: impl Into<String>, icon_url: impl Into<String>) -> Self {
        self.embed.footer = Footer::new(text).with_icon_url(icon_url);
        self
    }

    /// Set the timestamp from `YYYY-MM-DD HH:MM:SS.ssss` text
    pub fn timestamp(mut self, text: impl Into<String>) -> Self {
        self.embed.timestamp = Timestamp::new(text);
        self
    }

    /// Set the timestamp from a point in time
    pub fn timestamp_at(mut self, datetime: NaiveDateTime) -> Self {
        self.embed.timestamp = Timestamp::from_datetime(datetime);
        self
    }

    /// Set the embed timestamp to now
    pub fn timestamp_now(mut self) -> Self {
        self.embed.timestamp = Timestamp::now();
        self
    }

    /// Build the embed without validation (may exceed Discord limits)
    pub fn build(self) -> Embed {
        self.embed
    }

    /// Build the embed with validation
    pub fn try_build(self) -> Result<Embed, EmbedError> {
        self.validate()?;
        Ok(self.embed)
    }

    /// Validate the embed against Discord limits
    pub fn validate(&self) -> Result<(), EmbedError> {
        self.embed.validate()
    }
}
