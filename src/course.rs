//! The CRAFT course table and course loading.
//!
//! The built-in course is assembled once per process and validated before it
//! is handed out. A course can also be read from a YAML file with the same
//! shape `coursemenu export --format yaml` writes.

use std::path::Path;
use std::sync::OnceLock;

use anyhow::Context as _;

use crate::cli::CourseLayout;
use crate::disclaimer::DISCLAIMER;
use crate::error::ConfigError;
use crate::formats::{Course, CourseLabels, LessonEntry, MenuTable};
use crate::menu::{MenuBuilder, page_ids};
use crate::validate::validate_course;

pub const PROGRAM_TITLE: &str = "";
pub const COURSE_TITLE: &str = "CRAFT: Help with PTSD for you and your family";
pub const MAIN_MENU_NAME: &str = "main";

static FLAT: OnceLock<Result<Course, ConfigError>> = OnceLock::new();
static NESTED: OnceLock<Result<Course, ConfigError>> = OnceLock::new();

/// The built-in course, built on first use and shared afterwards.
pub fn builtin(layout: CourseLayout) -> Result<&'static Course, ConfigError> {
    let cell = match layout {
        CourseLayout::Flat => &FLAT,
        CourseLayout::Nested => &NESTED,
    };
    cell.get_or_init(|| craft_course(layout))
        .as_ref()
        .map_err(Clone::clone)
}

/// Builds and validates the CRAFT course.
pub fn craft_course(layout: CourseLayout) -> Result<Course, ConfigError> {
    let menu = match layout {
        CourseLayout::Flat => flat_menu(),
        CourseLayout::Nested => nested_menu()?,
    };
    let course = Course {
        labels: CourseLabels {
            program_title: PROGRAM_TITLE.to_owned(),
            course_title: COURSE_TITLE.to_owned(),
            disclaimer: DISCLAIMER.to_owned(),
        },
        menu,
    };
    validate_course(&course)?;

    tracing::debug!(
        ?layout,
        entries = course.menu.len(),
        total_pages = course.menu.total_pages(),
        "built course menu"
    );
    Ok(course)
}

/// Reads a course from YAML and validates it.
pub fn load(path: &Path) -> anyhow::Result<Course> {
    let yaml = std::fs::read_to_string(path)
        .with_context(|| format!("read course config: {}", path.display()))?;
    let course: Course = serde_yaml::from_str(&yaml)
        .with_context(|| format!("parse course config: {}", path.display()))?;
    validate_course(&course)
        .with_context(|| format!("invalid course config: {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        entries = course.menu.len(),
        total_pages = course.menu.total_pages(),
        "loaded course config"
    );
    Ok(course)
}

/// The course a command operates on: the config file when given, the
/// built-in table otherwise.
pub fn resolve(config: Option<&str>, layout: CourseLayout) -> anyhow::Result<Course> {
    match config {
        Some(path) => load(Path::new(path)),
        None => Ok(builtin(layout).context("build built-in course")?.clone()),
    }
}

fn lesson(title: &str, url: &str, pages: Vec<String>, group_id: Option<&str>) -> LessonEntry {
    let entry = LessonEntry::new(title, url, pages);
    match group_id {
        Some(id) => entry.with_group(id),
        None => entry,
    }
}

fn welcome() -> LessonEntry {
    lesson("Welcome", "lesson00/00_001.htm", page_ids(1..=1, &[]), None)
}

// Sections 1 and 2 stand alone; sections 3 to 6 open with a one-page header
// followed by their lessons.
fn standalone_sections() -> Vec<LessonEntry> {
    vec![
        lesson(
            "Section 1: Introduction (Lesson 1)",
            "lesson01/01_001.htm",
            page_ids(1..=17, &[4]),
            Some("01"),
        ),
        lesson(
            "Section 2: Safety Planning (Lesson 2)",
            "lesson02/02_001.htm",
            page_ids(1..=13, &[]),
            Some("02"),
        ),
    ]
}

struct Section {
    header: LessonEntry,
    menu_name: &'static str,
    lessons: Vec<LessonEntry>,
}

fn grouped_sections() -> Vec<Section> {
    vec![
        Section {
            header: lesson(
                "Section 3: Improve the Situation: ",
                "lesson03/03_001.htm",
                page_ids(1..=1, &[]),
                None,
            ),
            menu_name: "improve",
            lessons: vec![
                lesson(
                    "Section 3: Understand PTSD (Lesson 3)",
                    "lesson04/04_001.htm",
                    page_ids(1..=24, &[]),
                    Some("04"),
                ),
                lesson(
                    "Section 3: Increase Positive Behaviors (Lesson 4)",
                    "lesson05/05_001.htm",
                    page_ids(1..=14, &[]),
                    Some("05"),
                ),
            ],
        },
        Section {
            header: lesson(
                "Section 4: Care for Yourself",
                "lesson06/06_001.htm",
                page_ids(1..=1, &[]),
                None,
            ),
            menu_name: "yourself",
            lessons: vec![
                lesson(
                    "Section 4: Use Self-Rewards and Social Support (Lesson 5)",
                    "lesson07/07_001.htm",
                    page_ids(1..=15, &[]),
                    Some("07"),
                ),
                lesson(
                    "Section 4: Improve Problem Solving (Lesson 6)",
                    "lesson08/08_001.htm",
                    page_ids(1..=13, &[]),
                    Some("08"),
                ),
                lesson(
                    "Section 4: Reduce Stress and Improve Sleep (Lesson 7)",
                    "lesson09/09_001.htm",
                    page_ids(1..=17, &[]),
                    Some("09"),
                ),
            ],
        },
        Section {
            header: lesson(
                "Section 5: Rebuild Your Relationship",
                "lesson10/10_001.htm",
                page_ids(1..=1, &[]),
                None,
            ),
            menu_name: "rebuild",
            lessons: vec![
                lesson(
                    "Section 5: Practice Positive Communication (Lesson 8)",
                    "lesson11/11_001.htm",
                    page_ids(1..=13, &[]),
                    Some("11"),
                ),
                lesson(
                    "Section 5: Share Pleasant Activities (Lesson 9)",
                    "lesson12/12_001.htm",
                    page_ids(1..=13, &[]),
                    Some("12"),
                ),
            ],
        },
        Section {
            header: lesson(
                "Section 6: Get Your Veteran into Care ",
                "lesson13/13_001.htm",
                page_ids(1..=1, &[]),
                None,
            ),
            menu_name: "treatment",
            lessons: vec![
                lesson(
                    "Section 6: Explore Treatment Options (Lesson 10)",
                    "lesson14/14_001.htm",
                    page_ids(1..=13, &[]),
                    Some("14"),
                ),
                lesson(
                    "Section 6: Discuss Treatment Options with Your Veteran (Lesson 11)",
                    "lesson15/15_001.htm",
                    page_ids(1..=15, &[]),
                    Some("15"),
                ),
                lesson(
                    "Section 6: Supporting Your Loved One's Treatment (Lesson 12)",
                    "lesson16/16_001.htm",
                    page_ids(1..=20, &[]),
                    Some("16"),
                ),
            ],
        },
    ]
}

/// All 17 entries at the top level, in presentation order.
fn flat_menu() -> MenuTable {
    let mut builder = MenuBuilder::new(MAIN_MENU_NAME).group_name(COURSE_TITLE);
    builder.push(welcome());
    for entry in standalone_sections() {
        builder.push(entry);
    }
    for section in grouped_sections() {
        builder.push(section.header);
        for entry in section.lessons {
            builder.push(entry);
        }
    }
    builder.build()
}

/// Sections 3 to 6 with their lessons moved into submenus under the header.
fn nested_menu() -> Result<MenuTable, ConfigError> {
    let mut builder = MenuBuilder::new(MAIN_MENU_NAME).group_name(COURSE_TITLE);
    builder.push(welcome());
    for entry in standalone_sections() {
        builder.push(entry);
    }
    for section in grouped_sections() {
        let mut sub = MenuBuilder::new(section.menu_name);
        for entry in section.lessons {
            sub.push(entry);
        }
        builder
            .push(section.header)
            .attach_submenu(sub.build(), section.menu_name)?;
    }
    Ok(builder.build())
}
