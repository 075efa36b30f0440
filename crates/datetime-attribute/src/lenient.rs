//! Lenient normalization of shorthand time-of-day text.
//!
//! Form inputs often carry compact times — `"930"`, `"9.30"`, `"9,30"`.
//! Before the strict `%H:%M[:%S]` grammar runs, this module rewrites those
//! shorthands into colon-separated form. At most one rule fires per input;
//! text that matches no rule passes through untouched, and the strict parser
//! reports the failure.

use std::borrow::Cow;

/// Length bound at or above which text is assumed already well-formed (a full
/// ISO time, for instance) and left alone.
///
/// Inherited heuristic with no stronger rationale than "real shorthand is
/// short"; tests treat it as an assumption, not a guarantee.
pub const DEFAULT_MAX_LEN: usize = 16;

/// Normalize with the default length bound. See [`normalize_with_limit`].
pub fn normalize(text: &str) -> Cow<'_, str> {
    normalize_with_limit(text, DEFAULT_MAX_LEN)
}

/// Rewrite shorthand time text into `HH:MM` form.
///
/// Applies only to non-empty text shorter than `max_len` characters. Rules
/// are mutually exclusive and checked in order; the first match wins:
///
/// 1. exactly 4 digits — colon after the 2nd (`"1234"` → `"12:34"`)
/// 2. exactly 3 digits — colon after the 1st (`"930"` → `"9:30"`)
/// 3. contains `,` — every comma becomes a colon
/// 4. contains `.` — every period becomes a colon
/// 5. otherwise unchanged
pub fn normalize_with_limit(text: &str, max_len: usize) -> Cow<'_, str> {
    if text.is_empty() || text.chars().count() >= max_len {
        return Cow::Borrowed(text);
    }

    let all_digits = text.bytes().all(|b| b.is_ascii_digit());
    if all_digits && text.len() == 4 {
        Cow::Owned(format!("{}:{}", &text[..2], &text[2..]))
    } else if all_digits && text.len() == 3 {
        Cow::Owned(format!("{}:{}", &text[..1], &text[1..]))
    } else if text.contains(',') {
        Cow::Owned(text.replace(',', ":"))
    } else if text.contains('.') {
        Cow::Owned(text.replace('.', ":"))
    } else {
        Cow::Borrowed(text)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
