//! # datetime-attribute
//!
//! Split one timestamp into separately editable date, time-of-day, and time
//! zone parts, and merge an edit to any single part back into a consistent
//! whole value.
//!
//! Built for form-backed object models: a persisted field holds a full
//! timestamp, but the UI edits the date and the time in separate inputs,
//! often under a per-field time-zone override. The merge always runs in the
//! zone established on the container first, so editing one part never shifts
//! the other, already-correct part into a different offset. Free-form time
//! text ("930", "9.30", "9,30") is leniently normalized before parsing.
//!
//! ## Modules
//!
//! - [`container`] — the composite value container: merge a new date, time, or zone part into the held timestamp
//! - [`lenient`] — shorthand time-text normalization ("930" → "9:30")
//! - [`zone`] — zone selection and IANA resolution
//! - [`field`] — statically written per-field accessor wrapper
//! - [`error`] — error types

pub mod container;
pub mod error;
pub mod field;
pub mod lenient;
pub mod zone;

pub use container::{Container, DateInput, TimeInput};
pub use error::AttributeError;
pub use field::{DateTimeField, FieldParts};
pub use zone::ZoneSelector;
