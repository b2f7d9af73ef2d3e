use std::ops::RangeInclusive;

use crate::error::ConfigError;
use crate::formats::{AssessmentKind, LessonEntry, MenuTable};

/// Url of an entry that only groups others and cannot be opened.
pub const NON_SELECTABLE_URL: &str = "#";

/// Logical position of each attribute within an entry.
///
/// Positions match the legacy `MENU_*_IDX` constants that menu builders
/// index entries with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryField {
    PageCount,
    PageIds,
    AssessmentKind,
    AssessmentUrl,
    Title,
    Url,
    GroupId,
}

impl EntryField {
    pub const ALL: [EntryField; 7] = [
        EntryField::PageCount,
        EntryField::PageIds,
        EntryField::AssessmentKind,
        EntryField::AssessmentUrl,
        EntryField::Title,
        EntryField::Url,
        EntryField::GroupId,
    ];

    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            EntryField::PageCount => 0,
            EntryField::PageIds => 1,
            EntryField::AssessmentKind => 2,
            EntryField::AssessmentUrl => 3,
            EntryField::Title => 4,
            EntryField::Url => 5,
            EntryField::GroupId => 6,
        }
    }

    #[must_use]
    pub fn from_position(position: usize) -> Option<Self> {
        Self::ALL.get(position).copied()
    }

    /// Serialized field name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EntryField::PageCount => "page_count",
            EntryField::PageIds => "page_ids",
            EntryField::AssessmentKind => "assessment_kind",
            EntryField::AssessmentUrl => "assessment_url",
            EntryField::Title => "title",
            EntryField::Url => "url",
            EntryField::GroupId => "group_id",
        }
    }
}

pub const MENU_PAGECNT_IDX: usize = EntryField::PageCount.position();
pub const MENU_PAGEARRAY_IDX: usize = EntryField::PageIds.position();
pub const MENU_ASSESSMENT_IDX: usize = EntryField::AssessmentKind.position();
pub const MENU_ASSESSMENTURL_IDX: usize = EntryField::AssessmentUrl.position();
pub const MENU_TITLE_IDX: usize = EntryField::Title.position();
pub const MENU_URL_IDX: usize = EntryField::Url.position();
pub const MENU_GROUP_IDX: usize = EntryField::GroupId.position();

/// Borrowed value of one logical entry field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Count(u32),
    PageIds(&'a [String]),
    Assessment(AssessmentKind),
    Text(&'a str),
    OptionalText(Option<&'a str>),
}

/// Zero-padded page ids for `range`, leaving out any number in `skip`.
///
/// `page_ids(1..=17, &[4])` yields `"001"` through `"017"` without `"004"`.
#[must_use]
pub fn page_ids(range: RangeInclusive<u32>, skip: &[u32]) -> Vec<String> {
    range
        .filter(|n| !skip.contains(n))
        .map(|n| format!("{n:03}"))
        .collect()
}

fn count_of(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

impl LessonEntry {
    /// A standalone entry whose page count is the number of page ids.
    pub fn new(title: impl Into<String>, url: impl Into<String>, page_ids: Vec<String>) -> Self {
        Self {
            page_count: count_of(page_ids.len()),
            page_ids,
            assessment_kind: AssessmentKind::None,
            assessment_url: NON_SELECTABLE_URL.to_owned(),
            title: title.into(),
            url: url.into(),
            group_id: None,
            sub_menu: None,
        }
    }

    #[must_use]
    pub fn with_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    /// Attaches an already built submenu, labelling it `menu_name`.
    ///
    /// The submenu's pages are added to this entry's page count.
    pub fn with_submenu(
        mut self,
        sub_menu: MenuTable,
        menu_name: &str,
    ) -> Result<Self, ConfigError> {
        self.attach(sub_menu, menu_name)?;
        Ok(self)
    }

    fn attach(&mut self, mut sub_menu: MenuTable, menu_name: &str) -> Result<(), ConfigError> {
        if let Some(existing) = &self.sub_menu {
            return Err(ConfigError::SubmenuAlreadyAttached {
                title: self.title.clone(),
                existing: existing.menu_name.clone(),
            });
        }

        sub_menu.menu_name = menu_name.to_owned();
        let added = sub_menu.total_pages();
        tracing::debug!(
            parent = %self.title,
            menu_name,
            entries = sub_menu.entries.len(),
            added_pages = added,
            "attach submenu"
        );
        self.page_count = self.page_count.saturating_add(added);
        self.sub_menu = Some(sub_menu);
        Ok(())
    }

    /// Pages owned by this entry alone, without submenu pages.
    #[must_use]
    pub fn own_page_count(&self) -> u32 {
        count_of(self.page_ids.len())
    }

    /// Page count this entry must carry to be consistent.
    #[must_use]
    pub fn expected_page_count(&self) -> u32 {
        let sub = self.sub_menu.as_ref().map_or(0, MenuTable::total_pages);
        self.own_page_count().saturating_add(sub)
    }

    #[must_use]
    pub fn is_selectable(&self) -> bool {
        self.url != NON_SELECTABLE_URL
    }

    #[must_use]
    pub fn field(&self, field: EntryField) -> FieldValue<'_> {
        match field {
            EntryField::PageCount => FieldValue::Count(self.page_count),
            EntryField::PageIds => FieldValue::PageIds(&self.page_ids),
            EntryField::AssessmentKind => FieldValue::Assessment(self.assessment_kind),
            EntryField::AssessmentUrl => FieldValue::Text(&self.assessment_url),
            EntryField::Title => FieldValue::Text(&self.title),
            EntryField::Url => FieldValue::Text(&self.url),
            EntryField::GroupId => FieldValue::OptionalText(self.group_id.as_deref()),
        }
    }
}

impl MenuTable {
    pub fn new(menu_name: impl Into<String>) -> Self {
        Self {
            menu_name: menu_name.into(),
            group_name: None,
            entries: Vec::new(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LessonEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the entries' page counts. Nested pages are already folded
    /// into their parents.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.entries
            .iter()
            .fold(0u32, |acc, e| acc.saturating_add(e.page_count))
    }

    /// Name to show for this level. A submenu without its own group name
    /// borrows the title of the entry it hangs from.
    #[must_use]
    pub fn display_group_name<'a>(&'a self, parent: Option<&'a LessonEntry>) -> Option<&'a str> {
        match self.group_name.as_deref() {
            Some(name) if !name.is_empty() => Some(name),
            _ => parent.map(|p| p.title.as_str()),
        }
    }

    /// Depth-first search for the entry carrying `group_id`.
    #[must_use]
    pub fn find_by_group(&self, group_id: &str) -> Option<&LessonEntry> {
        for entry in &self.entries {
            if entry.group_id.as_deref() == Some(group_id) {
                return Some(entry);
            }
            if let Some(found) = entry
                .sub_menu
                .as_ref()
                .and_then(|sub| sub.find_by_group(group_id))
            {
                return Some(found);
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a MenuTable {
    type Item = &'a LessonEntry;
    type IntoIter = std::slice::Iter<'a, LessonEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Builds a menu table in presentation order.
#[derive(Debug)]
pub struct MenuBuilder {
    table: MenuTable,
}

impl MenuBuilder {
    pub fn new(menu_name: impl Into<String>) -> Self {
        Self {
            table: MenuTable::new(menu_name),
        }
    }

    #[must_use]
    pub fn group_name(mut self, group_name: impl Into<String>) -> Self {
        self.table.group_name = Some(group_name.into());
        self
    }

    pub fn push(&mut self, entry: LessonEntry) -> &mut Self {
        self.table.entries.push(entry);
        self
    }

    /// Attaches `sub_menu` to the most recently pushed entry.
    pub fn attach_submenu(
        &mut self,
        sub_menu: MenuTable,
        menu_name: &str,
    ) -> Result<&mut Self, ConfigError> {
        let parent_menu = self.table.menu_name.clone();
        let Some(parent) = self.table.entries.last_mut() else {
            return Err(ConfigError::NoParentEntry {
                menu_name: menu_name.to_owned(),
                parent_menu,
            });
        };
        parent.attach(sub_menu, menu_name)?;
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> MenuTable {
        self.table
    }
}
