pub mod mark_kind;
pub mod member;
pub mod report;

pub use mark_kind::MarkKind;
pub use member::{Member, MemberMarkView};
pub use report::{AttendanceReport, MemberCount};
