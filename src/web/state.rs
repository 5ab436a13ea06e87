use crate::charts::{BarChartRenderer, PlottersRenderer};
use crate::db::pool::DbPool;
use crate::utils::date::today;
use chrono::NaiveDate;
use std::sync::Arc;

/// Shared state handed to every route handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub charts: Arc<dyn BarChartRenderer>,
    /// Source of "today" for the daily form.
    pub today: fn() -> NaiveDate,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            charts: Arc::new(PlottersRenderer::detect()),
            today,
        }
    }

    pub fn with_charts(mut self, charts: Arc<dyn BarChartRenderer>) -> Self {
        self.charts = charts;
        self
    }

    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }
}
