pub mod daily;
pub mod form;
pub mod recorder;
pub mod report;

pub use daily::DailyView;
pub use form::{MarkSelection, parse_marks};
pub use recorder::{AttendanceRecorder, RecordOutcome};
pub use report::{AggregateReporter, StatsCharts};
