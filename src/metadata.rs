use chrono::{NaiveDate, NaiveDateTime};

/// Offset written into the front matter. Always this literal, whatever the local zone is.
pub(crate) const FRONT_MATTER_OFFSET: &str = "+0200";

#[derive(Debug, Clone)]
pub(crate) struct PostMetadata {
    pub title: String,
    pub categories: String,
    pub date: NaiveDateTime,
}

impl PostMetadata {
    /// `YYYY-MM-DD HH:MM:SS +0200`, as it appears in the `date:` key.
    pub fn front_matter_date(&self) -> String {
        format!(
            "{} {FRONT_MATTER_OFFSET}",
            self.date.format("%Y-%m-%d %H:%M:%S")
        )
    }

    /// `YYYY-MM-DD`, the filename prefix.
    pub fn file_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Parses the `--date` argument.
pub(crate) fn parse_date(value: &str) -> Result<NaiveDateTime, String> {
    let value = value.trim();
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(date) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(date);
        }
    }
    // date only: midnight
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| {
            format!("invalid date {value:?} (expected YYYY-MM-DD or YYYY-MM-DD HH:MM:SS)")
        })
}
