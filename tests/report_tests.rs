mod common;
use common::{ada_and_bo, day, open_with_members, temp_file};

use rattendance::charts::{
    BarChart, BarChartRenderer, BarColor, PlottersRenderer, register_first_available, register_font,
};
use rattendance::core::{AggregateReporter, AttendanceRecorder, MarkSelection};
use rattendance::errors::{AppError, AppResult};
use rattendance::models::MemberCount;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Mutex;

fn mark(pool: &rattendance::db::pool::DbPool, d: chrono::NaiveDate, late: &[i64], absent: &[i64]) {
    let selection = MarkSelection {
        late: late.iter().copied().collect::<BTreeSet<_>>(),
        absent: absent.iter().copied().collect::<BTreeSet<_>>(),
    };
    pool.with_conn(|conn| AttendanceRecorder::apply(conn, d, &selection))
        .expect("record marks");
}

fn names(counts: &[MemberCount]) -> Vec<&str> {
    counts.iter().map(|c| c.nickname.as_str()).collect()
}

#[test]
fn test_scenario_counts_include_members_without_events() {
    let pool = ada_and_bo("report_scenario");
    let d = day(2025, 3, 14);
    mark(&pool, d, &[1], &[2]);
    mark(&pool, d, &[1], &[2]);

    let report = pool.with_conn(|conn| AggregateReporter::compute(conn)).unwrap();

    assert_eq!(report.late.len(), 2);
    assert_eq!(report.absent.len(), 2);
    assert_eq!(report.late_count("Ada"), Some(1));
    assert_eq!(report.late_count("Bo"), Some(0));
    assert_eq!(report.absent_count("Ada"), Some(0));
    assert_eq!(report.absent_count("Bo"), Some(1));
}

#[test]
fn test_counts_are_sorted_descending() {
    let pool = open_with_members("report_order", &[(1, "Ada"), (2, "Bo"), (3, "Cy"), (4, "Di")]);

    // Cy late 3 times, Bo twice, Di once, Ada never.
    mark(&pool, day(2025, 1, 1), &[3, 2, 4], &[1]);
    mark(&pool, day(2025, 1, 2), &[3, 2], &[]);
    mark(&pool, day(2025, 1, 3), &[3], &[1, 4]);
    mark(&pool, day(2025, 1, 4), &[], &[1]);

    let report = pool.with_conn(|conn| AggregateReporter::compute(conn)).unwrap();

    assert_eq!(names(&report.late), vec!["Cy", "Bo", "Di", "Ada"]);
    let late: Vec<u32> = report.late.iter().map(|c| c.count).collect();
    assert_eq!(late, vec![3, 2, 1, 0]);

    assert_eq!(report.absent[0].nickname, "Ada");
    assert_eq!(report.absent[0].count, 3);
    assert!(report.absent.windows(2).all(|w| w[0].count >= w[1].count));
}

#[test]
fn test_equal_counts_keep_member_number_order() {
    let pool = open_with_members("report_ties", &[(5, "Eve"), (2, "Bo"), (9, "Zed"), (1, "Ada")]);
    mark(&pool, day(2025, 2, 1), &[9, 5], &[]);

    let report = pool.with_conn(|conn| AggregateReporter::compute(conn)).unwrap();

    assert_eq!(names(&report.late), vec!["Eve", "Zed", "Ada", "Bo"]);
    assert_eq!(names(&report.absent), vec!["Ada", "Bo", "Eve", "Zed"]);
}

#[test]
fn test_no_members_gives_empty_report() {
    let pool = open_with_members("report_empty", &[]);
    let report = pool.with_conn(|conn| AggregateReporter::compute(conn)).unwrap();
    assert!(report.late.is_empty());
    assert!(report.absent.is_empty());
}

/// Records what it was asked to draw instead of drawing it.
#[derive(Default)]
struct RecordingRenderer {
    seen: Mutex<Vec<(String, BarColor, Vec<(String, u32)>)>>,
}

impl BarChartRenderer for RecordingRenderer {
    fn render(&self, chart: &BarChart<'_>) -> AppResult<Vec<u8>> {
        self.seen
            .lock()
            .unwrap()
            .push((chart.title.to_string(), chart.color, chart.bars.clone()));
        Ok(chart.title.as_bytes().to_vec())
    }
}

#[test]
fn test_render_passes_sorted_bars_to_renderer() {
    let pool = ada_and_bo("report_render");
    mark(&pool, day(2025, 3, 14), &[2], &[1]);
    mark(&pool, day(2025, 3, 15), &[2], &[]);

    let report = pool.with_conn(|conn| AggregateReporter::compute(conn)).unwrap();
    let renderer = RecordingRenderer::default();
    let charts = AggregateReporter::render(&report, &renderer).unwrap();

    let seen = renderer.seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].1, BarColor::Blue);
    assert_eq!(seen[0].2, vec![("Bo".to_string(), 2), ("Ada".to_string(), 0)]);
    assert_eq!(seen[1].1, BarColor::Red);
    assert_eq!(seen[1].2, vec![("Ada".to_string(), 1), ("Bo".to_string(), 0)]);

    // base64 of the bytes returned by the renderer
    assert_eq!(charts.late_png, "RGVsYXlzIHBlciBtZW1iZXI=");
}

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

#[test]
fn test_plotters_renderer_produces_png() {
    let renderer = PlottersRenderer::new(300, false);
    let chart = BarChart {
        title: "Delays per member",
        x_label: "Member",
        y_label: "Number of delays",
        color: BarColor::Blue,
        bars: (0..12).map(|i| (format!("m{i}"), i)).collect(),
    };

    let png = renderer.render(&chart).unwrap();
    assert_eq!(&png[..8], &PNG_SIGNATURE);

    let img = image::load_from_memory(&png).unwrap();
    assert_eq!(img.height(), 300);
    assert_eq!(img.width(), 60 + 20 + 64 * 12);
}

#[test]
fn test_plotters_renderer_handles_no_bars() {
    let renderer = PlottersRenderer::new(300, false);
    let chart = BarChart {
        title: "Absences per member",
        x_label: "Member",
        y_label: "Number of absences",
        color: BarColor::Red,
        bars: Vec::new(),
    };

    let png = renderer.render(&chart).unwrap();
    let img = image::load_from_memory(&png).unwrap();
    assert_eq!(img.width(), 480);
}

#[test]
fn test_register_font_rejects_non_font_file() {
    let path = temp_file("not_a_font", "ttf", "definitely not a TrueType font");
    match register_font(Path::new(&path)) {
        Err(AppError::Chart(msg)) => assert!(msg.contains("not_a_font")),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(()) => panic!("garbage bytes accepted as a font"),
    }
}

#[test]
fn test_plotters_renderer_draws_text_with_font() {
    // Needs a system font; nothing to check on hosts without one.
    if register_first_available(None).is_none() {
        return;
    }
    let renderer = PlottersRenderer::new(300, true);
    let chart = BarChart {
        title: "Delays per member",
        x_label: "Member",
        y_label: "Number of delays",
        color: BarColor::Blue,
        bars: vec![("Ada".to_string(), 3), ("Bo".to_string(), 0)],
    };

    let png = renderer.render(&chart).unwrap();
    assert_eq!(&png[..8], &PNG_SIGNATURE);

    let img = image::load_from_memory(&png).unwrap();
    assert_eq!(img.height(), 300);
    assert_eq!(img.width(), 480);
}
