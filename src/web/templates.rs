use crate::models::{MemberCount, MemberMarkView};
use askama::Template;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub date: String,
    pub rows: Vec<MemberMarkView>,
    pub notice: Option<String>,
}

#[derive(Template)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    pub delay_img: String,
    pub absence_img: String,
    pub late: Vec<MemberCount>,
    pub absent: Vec<MemberCount>,
}
