// src/core/fields.rs
// Table-driven text-to-number conversion. Every numeric field read off a
// page is described by a `FieldSpec` instead of one-off string surgery at
// the call site.

use crate::error::ScrapeError;

/// Cleanup steps applied to the raw cell text before parsing, in order.
#[derive(Clone, Copy, Debug)]
pub enum Cleanup {
    /// Keep only the text before the first space ("17.9% (18%)" -> "17.9%").
    BeforeSpace,
    /// Strip thousands separators ("1,234" -> "1234").
    StripSeparators,
    /// Strip a trailing percent sign ("43.5%" -> "43.5").
    StripPercent,
}

/// What to do when the cleaned text still isn't a number.
#[derive(Clone, Copy, Debug)]
pub enum OnNonNumeric {
    /// Report `ScrapeError::NonNumeric`; the caller skips the player.
    Fail,
    /// Substitute zero. Used for kill/death, where the site shows "-" for
    /// players with zero deaths.
    Zero,
}

/// One numeric field as it appears on a page.
pub struct FieldSpec {
    pub name: &'static str,
    pub cleanups: &'static [Cleanup],
    pub on_non_numeric: OnNonNumeric,
}

impl FieldSpec {
    fn clean(&self, raw: &str) -> String {
        let mut text = raw.trim().to_string();
        for step in self.cleanups {
            text = match step {
                Cleanup::BeforeSpace => text.split(' ').next().unwrap_or("").to_string(),
                Cleanup::StripSeparators => text.replace(',', ""),
                Cleanup::StripPercent => text.trim_end_matches('%').to_string(),
            };
        }
        text
    }

    fn non_numeric(&self, raw: &str) -> Result<(), ScrapeError> {
        match self.on_non_numeric {
            OnNonNumeric::Zero => Ok(()),
            OnNonNumeric::Fail => Err(ScrapeError::NonNumeric {
                field: self.name,
                text: raw.trim().to_string(),
            }),
        }
    }

    pub fn parse_int(&self, raw: &str) -> Result<i64, ScrapeError> {
        match self.clean(raw).parse() {
            Ok(v) => Ok(v),
            Err(_) => self.non_numeric(raw).map(|()| 0),
        }
    }

    pub fn parse_u32(&self, raw: &str) -> Result<u32, ScrapeError> {
        match self.clean(raw).parse() {
            Ok(v) => Ok(v),
            Err(_) => self.non_numeric(raw).map(|()| 0),
        }
    }

    pub fn parse_float(&self, raw: &str) -> Result<f64, ScrapeError> {
        match self.clean(raw).parse() {
            Ok(v) => Ok(v),
            Err(_) => self.non_numeric(raw).map(|()| 0.0),
        }
    }
}
