//! Statically written accessor wrapper for one timestamp field.
//!
//! The host-object pattern this crate targets exposes a `<field>_date` /
//! `<field>_time` / `<field>_time_zone` accessor family next to the plain
//! `<field>` timestamp. Instead of synthesizing those accessors at runtime,
//! [`DateTimeField`] is one explicit type per field: it owns the persisted
//! value (stored in UTC, the way a database column would be) plus its zone
//! override, and runs every read and merge through a fresh
//! [`Container`] — the one-edit container lifecycle.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::container::{Container, DateInput, TimeInput};
use crate::error::Result;
use crate::zone::ZoneSelector;

/// Snapshot of the three derived parts, for form rendering or APIs.
///
/// Absent parts serialize as `null`, never as a placeholder date or time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldParts {
    /// Calendar date in the field's zone.
    pub date: Option<NaiveDate>,
    /// Time-of-day in the field's zone.
    pub time: Option<NaiveTime>,
    /// Canonical IANA name of the field's zone.
    pub time_zone: &'static str,
}

/// One form-editable timestamp field.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveTime, TimeZone, Utc};
/// use datetime_attribute::DateTimeField;
///
/// let mut published_at = DateTimeField::new()
///     .with_time_zone("America/New_York")
///     .unwrap();
///
/// published_at.set_date("2026-05-10").unwrap();
/// published_at.set_time("930").unwrap();
///
/// assert_eq!(published_at.time(), NaiveTime::from_hms_opt(9, 30, 0));
/// // 09:30 EDT is 13:30 UTC.
/// assert_eq!(
///     published_at.date_time(),
///     Some(Utc.with_ymd_and_hms(2026, 5, 10, 13, 30, 0).unwrap()),
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateTimeField {
    value: Option<DateTime<Utc>>,
    zone: Option<Tz>,
}

impl DateTimeField {
    /// An empty field with no zone override (UTC).
    pub fn new() -> Self {
        Self::default()
    }

    /// A field seeded from a stored value.
    pub fn seeded(value: Option<DateTime<Utc>>) -> Self {
        Self { value, zone: None }
    }

    /// Configure the zone override. [`ZoneSelector::NoOverride`] leaves the
    /// field in UTC. The selector is resolved eagerly, so later reads cannot
    /// fail on a bad zone name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AttributeError::InvalidZone`] for an unresolvable
    /// zone name.
    pub fn with_time_zone(mut self, selector: impl Into<ZoneSelector>) -> Result<Self> {
        self.set_time_zone(selector)?;
        Ok(self)
    }

    fn effective_zone(&self) -> Tz {
        self.zone.unwrap_or(Tz::UTC)
    }

    /// A fresh container for one edit, seeded from the stored value.
    fn container(&self) -> Container {
        Container::seeded(self.value, self.effective_zone())
    }

    fn store(&mut self, container: &Container) {
        self.value = container.date_time().map(|v| v.with_timezone(&Utc));
    }

    /// The `<field>_date` read: calendar date in the field's zone.
    pub fn date(&self) -> Option<NaiveDate> {
        self.container().date()
    }

    /// The `<field>_time` read: time-of-day in the field's zone.
    pub fn time(&self) -> Option<NaiveTime> {
        self.container().time()
    }

    /// The `<field>_time_zone` read: canonical IANA zone name.
    pub fn time_zone(&self) -> &'static str {
        self.effective_zone().name()
    }

    /// The persisted canonical value.
    pub fn date_time(&self) -> Option<DateTime<Utc>> {
        self.value
    }

    /// All three derived parts at once.
    pub fn parts(&self) -> FieldParts {
        let container = self.container();
        FieldParts {
            date: container.date(),
            time: container.time(),
            time_zone: container.zone_name(),
        }
    }

    /// The `<field>_date=` write: merge a new date, keep the time-of-day.
    pub fn set_date<'a>(&mut self, input: impl Into<DateInput<'a>>) -> Result<&mut Self> {
        let mut container = self.container();
        container.set_date(input)?;
        self.store(&container);
        Ok(self)
    }

    /// The `<field>_time=` write: merge a new time-of-day, keep the date.
    /// Defaults an empty field's date to today at `Utc::now()`; use
    /// [`DateTimeField::set_time_at`] for an explicit anchor.
    pub fn set_time<'a>(&mut self, input: impl Into<TimeInput<'a>>) -> Result<&mut Self> {
        self.set_time_at(input, Utc::now())
    }

    /// [`DateTimeField::set_time`] with an explicit "now" anchor.
    pub fn set_time_at<'a>(
        &mut self,
        input: impl Into<TimeInput<'a>>,
        anchor: DateTime<Utc>,
    ) -> Result<&mut Self> {
        let mut container = self.container();
        container.set_time_at(input, anchor)?;
        self.store(&container);
        Ok(self)
    }

    /// The `<field>=` write: replace the whole value. `None` clears it.
    pub fn set_date_time(&mut self, value: impl Into<Option<DateTime<Utc>>>) -> &mut Self {
        self.value = value.into();
        self
    }

    /// The `<field>_time_zone=` write: change the zone for subsequent reads
    /// and merges. The stored instant is untouched; only its civil
    /// representation moves.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AttributeError::InvalidZone`] for an unresolvable
    /// zone name; the field is unchanged.
    pub fn set_time_zone(&mut self, selector: impl Into<ZoneSelector>) -> Result<&mut Self> {
        if let Some(tz) = selector.into().resolve()? {
            self.zone = Some(tz);
        }
        Ok(self)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
