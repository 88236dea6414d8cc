use tracing::warn;

use super::{EmbedPart, PartKind};
use crate::error::ColorError;
use crate::format::WireFormat;
use crate::fragment::Fragment;

/// Largest color Discord accepts (24-bit RGB)
pub const MAX_COLOR: u32 = 0xFF_FF_FF;

/// Embed accent color, held as 1 to 6 bare hex digits (`"FF0000"`)
///
/// The wire carries the decimal value. A malformed string is logged and
/// rendered as `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Color {
    pub hex: String,
}

impl Color {
    pub fn new(hex: impl Into<String>) -> Self {
        Self { hex: hex.into() }
    }

    /// Create from an RGB integer such as `0x57F287`
    pub fn from_rgb(rgb: u32) -> Self {
        Self {
            hex: format!("{:06X}", rgb & MAX_COLOR),
        }
    }

    /// Decimal value of the hex string
    pub fn value(&self) -> Result<u32, ColorError> {
        let digits = self.hex.as_str();
        if digits.is_empty() || digits.len() > 6 || !digits.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(ColorError::Malformed(self.hex.clone()));
        }
        u32::from_str_radix(digits, 16).map_err(|_| ColorError::Malformed(self.hex.clone()))
    }
}

impl From<u32> for Color {
    fn from(rgb: u32) -> Self {
        Self::from_rgb(rgb)
    }
}

impl EmbedPart for Color {
    fn kind(&self) -> PartKind {
        PartKind::Color
    }

    fn is_present(&self) -> bool {
        !self.hex.is_empty()
    }

    fn render_entries(&self, format: WireFormat) -> Fragment {
        let value = self.value().unwrap_or_else(|e| {
            warn!(error = %e, "Rendering embed color as 0");
            0
        });
        Fragment::single("color", format.integer(value))
    }
}

/// Common embed colors
pub mod palette {
    /// Green - use for success messages
    pub const SUCCESS: u32 = 0x57F287;
    /// Yellow - use for warning messages
    pub const WARNING: u32 = 0xFEE75C;
    /// Red - use for error messages
    pub const ERROR: u32 = 0xED4245;
    /// Blurple (Discord brand color) - use for informational messages
    pub const INFO: u32 = 0x5865F2;
    /// Gray - use for neutral messages
    pub const NEUTRAL: u32 = 0x99AAB5;
}
