//! Time-zone selection and resolution.

use chrono_tz::Tz;

use crate::error::{AttributeError, Result};

/// A caller-supplied zone choice for one edit operation.
///
/// Replaces the habit of passing "a zone handle, a zone name, or nothing"
/// through one polymorphic argument: the three cases are explicit variants,
/// and resolution against the IANA table happens in exactly one place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ZoneSelector {
    /// No override supplied; the zone already in effect stays in effect.
    #[default]
    NoOverride,
    /// An IANA zone name (e.g., `"America/New_York"`), resolved lazily.
    Name(String),
    /// An already-resolved zone handle.
    Resolved(Tz),
}

impl ZoneSelector {
    /// Resolve to a concrete zone, or `None` for [`ZoneSelector::NoOverride`].
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::InvalidZone`] if a named zone is not in the
    /// IANA table.
    pub fn resolve(&self) -> Result<Option<Tz>> {
        match self {
            ZoneSelector::NoOverride => Ok(None),
            ZoneSelector::Name(name) => name
                .parse::<Tz>()
                .map(Some)
                .map_err(|_| AttributeError::InvalidZone(format!("'{name}'"))),
            ZoneSelector::Resolved(tz) => Ok(Some(*tz)),
        }
    }
}

impl From<Tz> for ZoneSelector {
    fn from(tz: Tz) -> Self {
        ZoneSelector::Resolved(tz)
    }
}

impl From<&str> for ZoneSelector {
    fn from(name: &str) -> Self {
        ZoneSelector::Name(name.to_string())
    }
}

impl From<String> for ZoneSelector {
    fn from(name: String) -> Self {
        ZoneSelector::Name(name)
    }
}

impl<T: Into<ZoneSelector>> From<Option<T>> for ZoneSelector {
    fn from(value: Option<T>) -> Self {
        value.map_or(ZoneSelector::NoOverride, Into::into)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
