use serde::Serialize;

/// The two kinds of daily mark an operator can set on a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MarkKind {
    Late,
    Absent,
}

impl MarkKind {
    pub const ALL: [MarkKind; 2] = [MarkKind::Late, MarkKind::Absent];

    /// Prefix of the form field carrying this mark (`late_<number>`).
    pub fn form_prefix(&self) -> &'static str {
        match self {
            MarkKind::Late => "late",
            MarkKind::Absent => "absent",
        }
    }

    pub fn from_form_prefix(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.form_prefix() == s)
    }

    /// Table holding the per-day records for this mark.
    pub fn table(&self) -> &'static str {
        match self {
            MarkKind::Late => "delays",
            MarkKind::Absent => "absences",
        }
    }

    /// Date column of [`MarkKind::table`].
    pub fn date_column(&self) -> &'static str {
        match self {
            MarkKind::Late => "delay_date",
            MarkKind::Absent => "absence_date",
        }
    }
}
