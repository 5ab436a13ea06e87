use crate::core::form::MarkSelection;
use crate::db::log::ttlog;
use crate::db::queries::{date_to_db, insert_mark};
use crate::errors::AppResult;
use crate::models::MarkKind;
use chrono::NaiveDate;
use rusqlite::Connection;

/// How many marks a submission actually added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordOutcome {
    pub late_inserted: usize,
    pub absent_inserted: usize,
}

impl RecordOutcome {
    pub fn total(&self) -> usize {
        self.late_inserted + self.absent_inserted
    }
}

/// High-level business logic for the daily form submission.
pub struct AttendanceRecorder;

impl AttendanceRecorder {
    /// Store the selected marks for `today` in a single transaction.
    ///
    /// Members already marked for the day and numbers with no matching
    /// member are skipped silently.
    pub fn apply(
        conn: &mut Connection,
        today: NaiveDate,
        selection: &MarkSelection,
    ) -> AppResult<RecordOutcome> {
        let tx = conn.transaction()?;
        let mut outcome = RecordOutcome::default();

        for kind in MarkKind::ALL {
            for &number in selection.numbers(kind) {
                if insert_mark(&tx, kind, &today, number)? {
                    match kind {
                        MarkKind::Late => outcome.late_inserted += 1,
                        MarkKind::Absent => outcome.absent_inserted += 1,
                    }
                }
            }
        }

        if outcome.total() > 0 {
            ttlog(
                &tx,
                "mark",
                &date_to_db(&today),
                &format!(
                    "{} late, {} absent recorded",
                    outcome.late_inserted, outcome.absent_inserted
                ),
            )?;
        }

        tx.commit()?;
        Ok(outcome)
    }
}
