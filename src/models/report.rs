use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberCount {
    pub number: i64,
    pub nickname: String,
    pub count: u32,
}

/// Lifetime totals per member, each list sorted by count descending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttendanceReport {
    pub late: Vec<MemberCount>,
    pub absent: Vec<MemberCount>,
}

impl AttendanceReport {
    pub fn late_count(&self, nickname: &str) -> Option<u32> {
        find_count(&self.late, nickname)
    }

    pub fn absent_count(&self, nickname: &str) -> Option<u32> {
        find_count(&self.absent, nickname)
    }
}

fn find_count(list: &[MemberCount], nickname: &str) -> Option<u32> {
    list.iter().find(|c| c.nickname == nickname).map(|c| c.count)
}
