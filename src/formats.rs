use serde::{Deserialize, Serialize};

/// A complete course: its labels plus the top-level menu table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub labels: CourseLabels,
    pub menu: MenuTable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseLabels {
    #[serde(default)]
    pub program_title: String,
    pub course_title: String,
    /// Shown in a blocking modal before an external document opens.
    pub disclaimer: String,
}

/// One level of the menu tree.
///
/// `group_name` is what the user sees for the level (the course title at the
/// top). `menu_name` is an internal label, `main` for the top level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuTable {
    pub menu_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    pub entries: Vec<LessonEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonEntry {
    /// Pages in this entry, including every page of an attached submenu.
    pub page_count: u32,
    pub page_ids: Vec<String>,
    #[serde(default)]
    pub assessment_kind: AssessmentKind,
    #[serde(default = "default_assessment_url")]
    pub assessment_url: String,
    pub title: String,
    /// Landing page relative to the course root, or `#` for a header.
    pub url: String,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_menu: Option<MenuTable>,
}

/// Assessment attached to an entry. Only the `none` marker is in use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentKind {
    #[default]
    None,
}

fn default_assessment_url() -> String {
    "#".to_owned()
}
