//! The composite date-time container.
//!
//! One [`Container`] holds a single canonical timestamp (possibly absent) and
//! the time zone currently in effect. Reads derive the date part, the
//! time-of-day part, and the zone name; writes merge a single new part with
//! the untouched remainder into an updated canonical value. All operations
//! are synchronous in-memory computation — merges that need "today" take an
//! explicit anchor, with a thin `Utc::now()` convenience wrapper.
//!
//! A container lives for one edit operation: seed it from the stored value,
//! re-home it into the requested zone, apply parts, read the merged value
//! back. It caches nothing across edits.
//!
//! # Merge ordering
//!
//! Every partial setter merges in the zone *currently on the container*,
//! never a zone carried by the fragment. Establish the zone first (via
//! [`Container::in_time_zone`]), then apply date or time fragments, so that
//! setting only the date never shifts the already-correct time into a
//! different offset, and vice versa.
//!
//! # Examples
//!
//! ```
//! use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
//! use datetime_attribute::{Container, ZoneSelector};
//!
//! let stored = Utc.with_ymd_and_hms(2026, 5, 10, 18, 30, 0).unwrap();
//! let mut container = Container::seeded(Some(stored), chrono_tz::Tz::UTC);
//! container.in_time_zone(&ZoneSelector::from("America/New_York")).unwrap();
//!
//! // 18:30 UTC is 14:30 in New York (EDT); the instant is unchanged.
//! assert_eq!(container.time(), NaiveTime::from_hms_opt(14, 30, 0));
//!
//! // Editing the date keeps the 14:30 wall-clock time in New York.
//! container.set_date("2026-06-01").unwrap();
//! assert_eq!(container.date(), NaiveDate::from_ymd_opt(2026, 6, 1));
//! assert_eq!(container.time(), NaiveTime::from_hms_opt(14, 30, 0));
//! ```

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{AttributeError, Result};
use crate::lenient;
use crate::zone::ZoneSelector;

/// A date fragment accepted by [`Container::set_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput<'a> {
    /// An already-structured calendar date.
    Date(NaiveDate),
    /// Text in `%Y-%m-%d` form.
    Text(&'a str),
}

impl From<NaiveDate> for DateInput<'static> {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(text: &'a str) -> Self {
        DateInput::Text(text)
    }
}

/// A time-of-day fragment accepted by [`Container::set_time`].
///
/// Text goes through lenient normalization ([`crate::lenient`]) before the
/// strict `%H:%M[:%S]` grammar runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeInput<'a> {
    /// An already-structured time-of-day.
    Time(NaiveTime),
    /// Free-form text, e.g. `"14:00"`, `"930"`, `"9.30"`.
    Text(&'a str),
}

impl From<NaiveTime> for TimeInput<'static> {
    fn from(time: NaiveTime) -> Self {
        TimeInput::Time(time)
    }
}

impl<'a> From<&'a str> for TimeInput<'a> {
    fn from(text: &'a str) -> Self {
        TimeInput::Text(text)
    }
}

/// Holds one canonical timestamp and the zone it is currently expressed in.
///
/// Invariant: whenever a value is present, `date()` + `time()` recombined in
/// the container's zone reconstruct `date_time()` exactly, to second
/// resolution or finer.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    value: Option<DateTime<Tz>>,
    zone: Tz,
}

impl Container {
    /// An empty container bound to `zone`.
    pub fn new(zone: Tz) -> Self {
        Self { value: None, zone }
    }

    /// A container seeded from a stored UTC value, expressed in `zone`.
    pub fn seeded(value: Option<DateTime<Utc>>, zone: Tz) -> Self {
        Self {
            value: value.map(|v| v.with_timezone(&zone)),
            zone,
        }
    }

    /// Re-express the held instant in the selected zone ("re-home").
    ///
    /// [`ZoneSelector::NoOverride`] is a strict no-op: same instant, same
    /// zone, same derived parts. Otherwise the instant stays fixed and only
    /// its civil representation moves to the new zone.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::InvalidZone`] for an unresolvable zone name;
    /// the container is left unchanged.
    pub fn in_time_zone(&mut self, selector: &ZoneSelector) -> Result<&mut Self> {
        if let Some(tz) = selector.resolve()? {
            self.value = self.value.map(|v| v.with_timezone(&tz));
            self.zone = tz;
        }
        Ok(self)
    }

    /// The calendar date of the held value in the container's zone, or `None`
    /// when no value has been set.
    pub fn date(&self) -> Option<NaiveDate> {
        self.value.map(|v| v.date_naive())
    }

    /// The time-of-day of the held value in the container's zone, or `None`
    /// when no value has been set.
    pub fn time(&self) -> Option<NaiveTime> {
        self.value.map(|v| v.time())
    }

    /// The canonical IANA name of the zone in effect.
    pub fn zone_name(&self) -> &'static str {
        self.zone.name()
    }

    /// The zone in effect.
    pub fn zone(&self) -> Tz {
        self.zone
    }

    /// The canonical value, or `None` when no value has been set. This is the
    /// read-back path after merges.
    pub fn date_time(&self) -> Option<DateTime<Tz>> {
        self.value
    }

    /// Merge a new calendar date with the existing time-of-day and the
    /// current zone.
    ///
    /// The time-of-day defaults to midnight when the container was empty.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::InvalidDate`] if text input fails the
    /// `%Y-%m-%d` grammar or the merged civil datetime does not exist in the
    /// zone (DST gap). The held value is unchanged on failure.
    pub fn set_date<'a>(&mut self, input: impl Into<DateInput<'a>>) -> Result<&mut Self> {
        let date = match input.into() {
            DateInput::Date(date) => date,
            DateInput::Text(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .map_err(|e| AttributeError::InvalidDate(format!("'{text}': {e}")))?,
        };
        let time = self.time().unwrap_or(NaiveTime::MIN);
        let merged = self.compose(date, time).map_err(AttributeError::InvalidDate)?;
        self.value = Some(merged);
        Ok(self)
    }

    /// Merge a new time-of-day, defaulting an empty container's date to
    /// "today" at `Utc::now()`. See [`Container::set_time_at`].
    pub fn set_time<'a>(&mut self, input: impl Into<TimeInput<'a>>) -> Result<&mut Self> {
        self.set_time_at(input, Utc::now())
    }

    /// Merge a new time-of-day with the existing date and the current zone.
    ///
    /// Text input passes through lenient normalization and then the strict
    /// `%H:%M[:%S]` grammar. When the container was empty, the date defaults
    /// to `anchor`'s date *in the container's zone*.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::InvalidTime`] if text fails the grammar even
    /// after normalization, or the merged civil datetime does not exist in
    /// the zone. The held value is unchanged on failure.
    pub fn set_time_at<'a>(
        &mut self,
        input: impl Into<TimeInput<'a>>,
        anchor: DateTime<Utc>,
    ) -> Result<&mut Self> {
        let time = match input.into() {
            TimeInput::Time(time) => time,
            TimeInput::Text(text) => parse_time_text(text)?,
        };
        let date = self
            .date()
            .unwrap_or_else(|| anchor.with_timezone(&self.zone).date_naive());
        let merged = self.compose(date, time).map_err(AttributeError::InvalidTime)?;
        self.value = Some(merged);
        Ok(self)
    }

    /// Replace the held value outright, reinterpreted into the container's
    /// zone. `None` clears it.
    pub fn set_date_time(&mut self, value: impl Into<Option<DateTime<Utc>>>) -> &mut Self {
        self.value = value.into().map(|v| v.with_timezone(&self.zone));
        self
    }

    /// Combine a date and a time into an instant in the container's zone.
    fn compose(&self, date: NaiveDate, time: NaiveTime) -> std::result::Result<DateTime<Tz>, String> {
        let naive = date.and_time(time);
        self.zone
            .from_local_datetime(&naive)
            .single()
            .ok_or_else(|| {
                format!(
                    "ambiguous or nonexistent local time {naive} in {}",
                    self.zone.name()
                )
            })
    }
}

/// Parse time-of-day text, leniently normalized first.
fn parse_time_text(text: &str) -> Result<NaiveTime> {
    let normalized = lenient::normalize(text);
    NaiveTime::parse_from_str(&normalized, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(&normalized, "%H:%M"))
        .map_err(|e| AttributeError::InvalidTime(format!("'{text}': {e}")))
}

// ── Tests ───────────────────────────────────────────────────────────────────
