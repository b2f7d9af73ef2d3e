//! Errors raised while building or loading a course menu.

use thiserror::Error;

/// A course configuration that cannot be accepted.
///
/// These are reported at load time, before anything consumes the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Stored page count disagrees with the page ids plus any submenu pages.
    #[error(
        "entry {title:?}: page count {page_count} does not match {expected} (page ids + submenu pages)"
    )]
    PageCountMismatch {
        title: String,
        page_count: u32,
        expected: u32,
    },

    /// A group id is present but empty.
    #[error("entry {title:?}: group id is empty")]
    EmptyGroupId { title: String },

    /// Two entries share a group id.
    #[error("group id {group_id:?} is used by both {first:?} and {second:?}")]
    DuplicateGroupId {
        group_id: String,
        first: String,
        second: String,
    },

    /// The url is neither `#` nor a non-empty relative path.
    #[error("entry {title:?}: url {url:?} must be \"#\" or a relative path")]
    InvalidUrl { title: String, url: String },

    /// A page id is not a zero-padded page number.
    #[error("entry {title:?}: page id {page_id:?} is not a page number")]
    InvalidPageId { title: String, page_id: String },

    /// A page id appears twice in the same entry.
    #[error("entry {title:?}: page id {page_id:?} is listed twice")]
    DuplicatePageId { title: String, page_id: String },

    /// The top-level table is not labelled `main`.
    #[error("top-level menu is named {menu_name:?}, expected \"main\"")]
    TopMenuName { menu_name: String },

    /// The top-level group name is not the course title.
    #[error("top-level group name {group_name:?} does not match course title {course_title:?}")]
    GroupNameMismatch {
        group_name: Option<String>,
        course_title: String,
    },

    /// A submenu was attached to an entry that already has one.
    #[error("entry {title:?} already has submenu {existing:?} attached")]
    SubmenuAlreadyAttached { title: String, existing: String },

    /// A submenu was attached before any parent entry was pushed.
    #[error("cannot attach submenu {menu_name:?}: menu {parent_menu:?} has no entries")]
    NoParentEntry {
        menu_name: String,
        parent_menu: String,
    },
}
