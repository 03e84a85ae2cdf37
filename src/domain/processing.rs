use std::borrow::Cow;
use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use tracing::warn;

use crate::domain::entities::comment::Comment;
use crate::domain::entities::filter::{FilterState, PageSize, SortDirection, SortKey, SortSpec};
use crate::domain::entities::page::{CommentPage, PaginatedResult, RowRange};

const PAGE_WINDOW_LEN: usize = 5;

/// Case-insensitive substring match over name, email and body.
///
/// A blank search borrows the input untouched.
pub fn filter_comments<'a>(comments: &'a [Comment], search: &str) -> Cow<'a, [Comment]> {
    if search.trim().is_empty() {
        return Cow::Borrowed(comments);
    }

    let needle = search.to_lowercase();
    Cow::Owned(
        comments
            .iter()
            .filter(|comment| comment.matches_lowercase(&needle))
            .cloned()
            .collect(),
    )
}

/// Stable sort by the active key. `Unsorted` borrows the input untouched.
pub fn sort_comments<'a>(comments: &'a [Comment], sort: &SortSpec) -> Cow<'a, [Comment]> {
    let SortSpec::By { key, direction } = *sort else {
        return Cow::Borrowed(comments);
    };

    let collator = root_collator();
    let mut sorted = comments.to_vec();
    // slice::sort_by is stable; flipping the arguments keeps ties in input order for desc too.
    sorted.sort_by(|a, b| match direction {
        SortDirection::Asc => compare_by_key(a, b, key, collator.as_ref()),
        SortDirection::Desc => compare_by_key(b, a, key, collator.as_ref()),
    });
    Cow::Owned(sorted)
}

fn compare_by_key(a: &Comment, b: &Comment, key: SortKey, collator: Option<&Collator>) -> Ordering {
    match key {
        SortKey::PostId => a.post_id.cmp(&b.post_id),
        SortKey::Name => compare_text(&a.name, &b.name, collator),
        SortKey::Email => compare_text(&a.email, &b.email, collator),
    }
}

/// Root-locale collator with default strength: accents and case only break primary ties,
/// lowercase before uppercase.
fn root_collator() -> Option<Collator> {
    match Collator::try_new(&Default::default(), CollatorOptions::new()) {
        Ok(collator) => Some(collator),
        Err(err) => {
            warn!(error = %err, "root collator unavailable, using case-folded ordering");
            None
        }
    }
}

fn compare_text(a: &str, b: &str, collator: Option<&Collator>) -> Ordering {
    match collator {
        Some(collator) => collator.compare(a, b),
        None => case_folded(a, b),
    }
}

fn case_folded(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    // ASCII uppercase sorts before lowercase, so comparing b to a puts lowercase first.
    folded.then_with(|| b.cmp(a))
}

/// Locale-aware string ordering used for the name and email sort keys.
pub fn collate(a: &str, b: &str) -> Ordering {
    compare_text(a, b, root_collator().as_ref())
}

pub fn total_pages(len: usize, page_size: PageSize) -> usize {
    len.div_ceil(page_size.get())
}

/// Slice out `page` (1-based). Out-of-range pages clamp to the nearest valid page.
pub fn paginate(comments: &[Comment], page: u32, page_size: PageSize) -> PaginatedResult<'_> {
    let total_pages = total_pages(comments.len(), page_size);
    let page = (page as usize).clamp(1, total_pages.max(1));

    let size = page_size.get();
    let start = ((page - 1) * size).min(comments.len());
    let end = (start + size).min(comments.len());

    PaginatedResult {
        data: &comments[start..end],
        total_pages,
        page,
    }
}

pub fn run_pipeline(comments: &[Comment], state: &FilterState) -> CommentPage {
    let filtered = filter_comments(comments, &state.search);
    let sorted = sort_comments(&filtered, &state.sort);
    let result = paginate(&sorted, state.page, state.page_size);

    CommentPage {
        data: result.data.to_vec(),
        total_pages: result.total_pages,
        page: result.page,
        page_size: state.page_size,
        total_filtered: sorted.len(),
    }
}

/// Page numbers for the pagination buttons, at most five, kept around `current`.
pub fn page_window(current: usize, total_pages: usize) -> Vec<usize> {
    if total_pages <= PAGE_WINDOW_LEN {
        return (1..=total_pages).collect();
    }

    let first = if current <= 3 {
        1
    } else if current + 2 >= total_pages {
        total_pages - PAGE_WINDOW_LEN + 1
    } else {
        current - 2
    };
    (first..first + PAGE_WINDOW_LEN).collect()
}

pub fn row_range(page: usize, page_size: PageSize, total: usize) -> RowRange {
    if total == 0 {
        return RowRange {
            start: 0,
            end: 0,
            total,
        };
    }

    let size = page_size.get();
    let start = (page.max(1) - 1) * size + 1;
    RowRange {
        start: start.min(total),
        end: (page.max(1) * size).min(total),
        total,
    }
}
