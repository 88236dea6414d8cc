use chrono::{NaiveDateTime, Timelike, Utc};
use tracing::warn;

use super::{EmbedPart, PartKind};
use crate::error::TimestampError;
use crate::format::WireFormat;
use crate::fragment::Fragment;

/// Layout accepted and emitted for embed timestamps
pub const TIMESTAMP_PATTERN: &str = "YYYY-MM-DD HH:MM:SS.ssss";

/// Rendered in place of a timestamp that fails to parse
pub const ZERO_TIMESTAMP: &str = "0001-01-01 00:00:00.0000";

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const FRACTION_DIGITS: usize = 4;
const NANOS_PER_TICK: u32 = 100_000;
const MAX_TICKS: u32 = 9_999;

/// Embed timestamp in `YYYY-MM-DD HH:MM:SS.ssss` form
///
/// The text is parsed and re-formatted on render, so the wire always
/// carries the canonical layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timestamp {
    pub text: String,
}

impl Timestamp {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Timestamp for a point in time, truncated to 1/10000 s
    pub fn from_datetime(datetime: NaiveDateTime) -> Self {
        Self {
            text: format_canonical(&datetime),
        }
    }

    /// Current UTC time
    pub fn now() -> Self {
        Self::from_datetime(Utc::now().naive_utc())
    }

    pub fn parse(&self) -> Result<NaiveDateTime, TimestampError> {
        let malformed = || TimestampError::Malformed(self.text.clone());

        let (date_time, fraction) = self.text.rsplit_once('.').ok_or_else(malformed)?;
        if fraction.len() != FRACTION_DIGITS || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let ticks: u32 = fraction.parse().map_err(|_| malformed())?;

        let parsed = NaiveDateTime::parse_from_str(date_time, DATE_TIME_FORMAT)
            .ok()
            .and_then(|base| base.with_nanosecond(ticks * NANOS_PER_TICK))
            .ok_or_else(malformed)?;

        // chrono's parser is lenient; only the fixed-width layout is valid
        if format_canonical(&parsed) != self.text {
            return Err(malformed());
        }

        Ok(parsed)
    }
}

fn format_canonical(datetime: &NaiveDateTime) -> String {
    let ticks = (datetime.nanosecond() / NANOS_PER_TICK).min(MAX_TICKS);
    format!("{}.{:04}", datetime.format(DATE_TIME_FORMAT), ticks)
}

impl EmbedPart for Timestamp {
    fn kind(&self) -> PartKind {
        PartKind::Timestamp
    }

    fn is_present(&self) -> bool {
        !self.text.is_empty()
    }

    fn render_entries(&self, _format: WireFormat) -> Fragment {
        let text = match self.parse() {
            Ok(datetime) => format_canonical(&datetime),
            Err(e) => {
                warn!(error = %e, "Rendering zero timestamp");
                ZERO_TIMESTAMP.to_string()
            }
        };
        Fragment::single("timestamp", text)
    }
}
