use crate::errors::{AppError, AppResult};
use crate::models::MarkKind;
use regex::Regex;
use std::collections::BTreeSet;
use std::num::IntErrorKind;
use std::sync::LazyLock;

/// `late_12` / `absent_12`: the number is the text up to the next underscore.
static MARK_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(late|absent)_([^_]*)").expect("valid mark field regex"));

/// Member numbers selected in one submission of the daily form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkSelection {
    pub late: BTreeSet<i64>,
    pub absent: BTreeSet<i64>,
}

impl MarkSelection {
    pub fn numbers(&self, kind: MarkKind) -> &BTreeSet<i64> {
        match kind {
            MarkKind::Late => &self.late,
            MarkKind::Absent => &self.absent,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.late.is_empty() && self.absent.is_empty()
    }
}

/// Decode the posted `(name, value)` pairs into a [`MarkSelection`].
///
/// Only fields with a non-empty value count as checked; unrelated fields are
/// skipped, as are numbers too large for any member. A mark field whose
/// number is not numeric rejects the whole form.
pub fn parse_marks(fields: &[(String, String)]) -> AppResult<MarkSelection> {
    let mut selection = MarkSelection::default();

    for (name, value) in fields {
        if value.is_empty() {
            continue;
        }
        let Some(caps) = MARK_FIELD.captures(name) else {
            continue;
        };
        let Some(kind) = MarkKind::from_form_prefix(&caps[1]) else {
            continue;
        };
        let number: i64 = match caps[2].parse() {
            Ok(n) => n,
            // Out of range: cannot be a member, so nothing to record.
            Err(e)
                if matches!(
                    e.kind(),
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                ) =>
            {
                continue;
            }
            Err(_) => return Err(AppError::InvalidMark(name.clone())),
        };

        match kind {
            MarkKind::Late => selection.late.insert(number),
            MarkKind::Absent => selection.absent.insert(number),
        };
    }

    Ok(selection)
}
