use crate::charts::{BarChart, BarChartRenderer, BarColor, encode_base64};
use crate::db::queries::count_marks_per_member;
use crate::errors::AppResult;
use crate::models::{AttendanceReport, MarkKind, MemberCount};
use rusqlite::Connection;

/// Base64 PNG images for the stats page.
#[derive(Debug, Clone)]
pub struct StatsCharts {
    pub late_png: String,
    pub absent_png: String,
}

pub struct AggregateReporter;

impl AggregateReporter {
    /// Lifetime late and absent totals for every member.
    ///
    /// Each list is sorted by count descending. The sort is stable over the
    /// member-number order of the query, so ties stay in member-number order.
    pub fn compute(conn: &Connection) -> AppResult<AttendanceReport> {
        let mut late = count_marks_per_member(conn, MarkKind::Late)?;
        let mut absent = count_marks_per_member(conn, MarkKind::Absent)?;

        sort_descending(&mut late);
        sort_descending(&mut absent);

        Ok(AttendanceReport { late, absent })
    }

    pub fn render(
        report: &AttendanceReport,
        renderer: &dyn BarChartRenderer,
    ) -> AppResult<StatsCharts> {
        let late = BarChart {
            title: "Delays per member",
            x_label: "Member",
            y_label: "Number of delays",
            color: BarColor::Blue,
            bars: bars(&report.late),
        };
        let absent = BarChart {
            title: "Absences per member",
            x_label: "Member",
            y_label: "Number of absences",
            color: BarColor::Red,
            bars: bars(&report.absent),
        };

        Ok(StatsCharts {
            late_png: encode_base64(&renderer.render(&late)?),
            absent_png: encode_base64(&renderer.render(&absent)?),
        })
    }
}

fn sort_descending(counts: &mut [MemberCount]) {
    counts.sort_by(|a, b| b.count.cmp(&a.count));
}

fn bars(counts: &[MemberCount]) -> Vec<(String, u32)> {
    counts
        .iter()
        .map(|c| (c.nickname.clone(), c.count))
        .collect()
}
