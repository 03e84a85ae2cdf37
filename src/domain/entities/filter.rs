use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "postId")]
    PostId,
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "email")]
    Email,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::PostId, SortKey::Name, SortKey::Email];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PostId => "postId",
            SortKey::Name => "name",
            SortKey::Email => "email",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::PostId => "Post ID",
            SortKey::Name => "Name",
            SortKey::Email => "Email",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Active sort, or no sort at all. A key without a direction cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "SortRecord", into = "SortRecord")]
pub enum SortSpec {
    #[default]
    Unsorted,
    By {
        key: SortKey,
        direction: SortDirection,
    },
}

/// Persisted shape of [`SortSpec`]: `{ "key": ..., "direction": ... }` with nulls for "off".
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct SortRecord {
    #[serde(default)]
    key: Option<SortKey>,
    #[serde(default)]
    direction: Option<SortDirection>,
}

impl From<SortRecord> for SortSpec {
    fn from(record: SortRecord) -> Self {
        match (record.key, record.direction) {
            (Some(key), Some(direction)) => SortSpec::By { key, direction },
            _ => SortSpec::Unsorted,
        }
    }
}

impl From<SortSpec> for SortRecord {
    fn from(spec: SortSpec) -> Self {
        match spec {
            SortSpec::Unsorted => SortRecord::default(),
            SortSpec::By { key, direction } => SortRecord {
                key: Some(key),
                direction: Some(direction),
            },
        }
    }
}

impl SortSpec {
    pub fn asc(key: SortKey) -> Self {
        SortSpec::By {
            key,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(key: SortKey) -> Self {
        SortSpec::By {
            key,
            direction: SortDirection::Desc,
        }
    }

    pub fn indicator_for(&self, field: SortKey) -> SortIndicator {
        match self {
            SortSpec::By { key, direction } if *key == field => match direction {
                SortDirection::Asc => SortIndicator::Ascending,
                SortDirection::Desc => SortIndicator::Descending,
            },
            _ => SortIndicator::Inactive,
        }
    }
}

/// Next sort after clicking the button for `clicked`.
///
/// Per field the cycle is asc, desc, off. Clicking another field always
/// starts that field at asc.
pub fn next_sort_spec(current: SortSpec, clicked: SortKey) -> SortSpec {
    match current {
        SortSpec::By { key, direction } if key == clicked => match direction {
            SortDirection::Asc => SortSpec::desc(clicked),
            SortDirection::Desc => SortSpec::Unsorted,
        },
        _ => SortSpec::asc(clicked),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Inactive,
    Ascending,
    Descending,
}

impl SortIndicator {
    pub fn glyph(&self) -> &'static str {
        match self {
            SortIndicator::Inactive => "↕",
            SortIndicator::Ascending => "↑",
            SortIndicator::Descending => "↓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PageSize {
    #[default]
    Ten,
    Fifty,
    Hundred,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("page size must be one of 10, 50 or 100 (got {0})")]
pub struct InvalidPageSize(pub u32);

impl PageSize {
    pub const OPTIONS: [PageSize; 3] = [PageSize::Ten, PageSize::Fifty, PageSize::Hundred];

    pub fn get(&self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }
}

impl TryFrom<u32> for PageSize {
    type Error = InvalidPageSize;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            10 => Ok(PageSize::Ten),
            50 => Ok(PageSize::Fifty),
            100 => Ok(PageSize::Hundred),
            other => Err(InvalidPageSize(other)),
        }
    }
}

impl From<PageSize> for u32 {
    fn from(value: PageSize) -> Self {
        value.get() as u32
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub search: String,
    pub sort: SortSpec,
    pub page: u32,
    pub page_size: PageSize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: SortSpec::Unsorted,
            page: 1,
            page_size: PageSize::Ten,
        }
    }
}
