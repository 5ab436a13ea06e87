use serde::Serialize;

/// A registered member. Rows are maintained outside the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    pub number: i64,
    pub nickname: String,
}

/// One line of the daily form: a member and today's marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberMarkView {
    pub number: i64,
    pub nickname: String,
    pub late: bool,
    pub absent: bool,
}
