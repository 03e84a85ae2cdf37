use crate::domain::entities::comment::Comment;
use crate::domain::entities::filter::PageSize;

/// One page sliced out of an already filtered and sorted sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginatedResult<'a> {
    pub data: &'a [Comment],
    pub total_pages: usize,
    pub page: usize,
}

/// Owned output of a full pipeline run. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentPage {
    pub data: Vec<Comment>,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: PageSize,
    pub total_filtered: usize,
}

impl CommentPage {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl std::fmt::Display for RowRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} of {} rows", self.start, self.end, self.total)
    }
}
