use std::collections::HashMap;
use std::collections::HashSet;

use crate::cli::ValidateArgs;
use crate::course::{self, MAIN_MENU_NAME};
use crate::error::ConfigError;
use crate::formats::{Course, LessonEntry, MenuTable};
use crate::menu::NON_SELECTABLE_URL;

pub fn run(args: ValidateArgs) -> anyhow::Result<()> {
    let course = course::resolve(args.config.as_deref(), args.layout)?;
    println!(
        "ok: {} entries, {} pages ({})",
        course.menu.len(),
        course.menu.total_pages(),
        course.labels.course_title
    );
    Ok(())
}

/// Checks every invariant of a course before it is handed to consumers.
pub fn validate_course(course: &Course) -> Result<(), ConfigError> {
    let menu = &course.menu;
    if menu.menu_name != MAIN_MENU_NAME {
        return Err(ConfigError::TopMenuName {
            menu_name: menu.menu_name.clone(),
        });
    }
    if menu.group_name.as_deref() != Some(course.labels.course_title.as_str()) {
        return Err(ConfigError::GroupNameMismatch {
            group_name: menu.group_name.clone(),
            course_title: course.labels.course_title.clone(),
        });
    }
    validate_menu(menu)
}

/// Validates a menu tree. Group ids must be unique across all levels.
pub fn validate_menu(menu: &MenuTable) -> Result<(), ConfigError> {
    let mut groups = HashMap::new();
    walk(menu, &mut groups)
}

fn walk<'a>(
    menu: &'a MenuTable,
    groups: &mut HashMap<&'a str, &'a str>,
) -> Result<(), ConfigError> {
    for entry in menu {
        validate_entry(entry)?;

        if let Some(group_id) = entry.group_id.as_deref() {
            if group_id.trim().is_empty() {
                return Err(ConfigError::EmptyGroupId {
                    title: entry.title.clone(),
                });
            }
            if let Some(first) = groups.insert(group_id, entry.title.as_str()) {
                return Err(ConfigError::DuplicateGroupId {
                    group_id: group_id.to_owned(),
                    first: first.to_owned(),
                    second: entry.title.clone(),
                });
            }
        }

        if let Some(sub) = &entry.sub_menu {
            walk(sub, groups)?;
        }
    }
    Ok(())
}

fn validate_entry(entry: &LessonEntry) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for page_id in &entry.page_ids {
        if page_id.is_empty() || !page_id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConfigError::InvalidPageId {
                title: entry.title.clone(),
                page_id: page_id.clone(),
            });
        }
        if !seen.insert(page_id.as_str()) {
            return Err(ConfigError::DuplicatePageId {
                title: entry.title.clone(),
                page_id: page_id.clone(),
            });
        }
    }

    let expected = entry.expected_page_count();
    if entry.page_count != expected {
        return Err(ConfigError::PageCountMismatch {
            title: entry.title.clone(),
            page_count: entry.page_count,
            expected,
        });
    }

    if !is_relative_url(&entry.url) {
        return Err(ConfigError::InvalidUrl {
            title: entry.title.clone(),
            url: entry.url.clone(),
        });
    }

    Ok(())
}

fn is_relative_url(url: &str) -> bool {
    if url == NON_SELECTABLE_URL {
        return true;
    }
    if url.trim().is_empty() || url.starts_with('/') || url.starts_with('\\') {
        return false;
    }
    matches!(
        url::Url::parse(url),
        Err(url::ParseError::RelativeUrlWithoutBase)
    )
}
