use crate::core::{
    AggregateReporter, AttendanceRecorder, DailyView, RecordOutcome, parse_marks,
};
use crate::db::queries::date_to_db;
use crate::errors::{AppError, AppResult};
use crate::web::state::AppState;
use crate::web::templates::{IndexTemplate, StatsTemplate};
use askama::Template;
use axum::Form;
use axum::extract::State;
use axum::response::Html;

/// `GET /`: today's form.
pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    render_home(&state, None).await
}

/// `POST /`: store the checked marks, then show the form again.
pub async fn record(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> AppResult<Html<String>> {
    let selection = parse_marks(&fields)?;
    let today = (state.today)();

    let outcome = state
        .pool
        .run(move |conn| AttendanceRecorder::apply(conn, today, &selection))
        .await?;

    tracing::info!(
        date = %today,
        late = outcome.late_inserted,
        absent = outcome.absent_inserted,
        "attendance recorded"
    );

    render_home(&state, Some(notice(&outcome))).await
}

/// `GET /stats`: lifetime totals as two bar charts.
pub async fn stats(State(state): State<AppState>) -> AppResult<Html<String>> {
    let report = state.pool.run(|conn| AggregateReporter::compute(conn)).await?;

    let renderer = state.charts.clone();
    let page = tokio::task::spawn_blocking(move || -> AppResult<StatsTemplate> {
        let charts = AggregateReporter::render(&report, renderer.as_ref())?;
        Ok(StatsTemplate {
            delay_img: charts.late_png,
            absence_img: charts.absent_png,
            late: report.late,
            absent: report.absent,
        })
    })
    .await
    .map_err(|e| AppError::Other(format!("chart task failed: {}", e)))??;

    Ok(Html(page.render()?))
}

async fn render_home(state: &AppState, notice: Option<String>) -> AppResult<Html<String>> {
    let today = (state.today)();
    let view = state
        .pool
        .run(move |conn| DailyView::load(conn, today))
        .await?;

    let page = IndexTemplate {
        date: date_to_db(&view.date),
        rows: view.rows(),
        notice,
    };
    Ok(Html(page.render()?))
}

fn notice(outcome: &RecordOutcome) -> String {
    match outcome.total() {
        0 => "No new marks: everything selected was already recorded.".to_string(),
        _ => format!(
            "Saved {} late and {} absent mark(s).",
            outcome.late_inserted, outcome.absent_inserted
        ),
    }
}
