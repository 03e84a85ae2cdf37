use std::sync::Arc;
use std::thread;

use thiserror::Error;
use tracing::{error, info};

use crate::domain::entities::comment::{Comment, User};
use crate::domain::entities::filter::{SortIndicator, SortKey};
use crate::domain::entities::page::{CommentPage, RowRange};
use crate::domain::processing::{page_window, row_range, run_pipeline};
use crate::usecase::ports::source::{DashboardSource, SourceError};
use crate::usecase::services::filter_store::FilterStateStore;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Failed to load data. Please try again.")]
    Fetch(#[source] SourceError),
    #[error("User not found")]
    NoUser,
}

/// Everything fetched once per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardData {
    pub user: User,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub page: CommentPage,
    pub total_comments: usize,
    pub window: Vec<usize>,
    pub range: RowRange,
    pub sort_indicators: Vec<(SortKey, SortIndicator)>,
    pub search: String,
}

pub struct DashboardService {
    source: Arc<dyn DashboardSource>,
}

impl DashboardService {
    pub fn new(source: Arc<dyn DashboardSource>) -> Self {
        Self { source }
    }

    /// Fetch users and comments side by side; both must succeed.
    pub fn load(&self) -> Result<DashboardData, LoadError> {
        let source = self.source.as_ref();
        let (users, comments) = thread::scope(|scope| {
            let users = scope.spawn(|| source.list_users());
            let comments = source.list_comments();
            let users = users
                .join()
                .unwrap_or_else(|_| Err(worker_panicked("users")));
            (users, comments)
        });

        let users = users.map_err(log_fetch_failure)?;
        let comments = comments.map_err(log_fetch_failure)?;

        let user = users.into_iter().next().ok_or(LoadError::NoUser)?;
        info!(
            user_id = user.id,
            comments = comments.len(),
            "dashboard data loaded"
        );

        Ok(DashboardData { user, comments })
    }

    /// The profile page shows the first user unless an id is given.
    pub fn profile(&self, id: Option<i64>) -> Result<User, LoadError> {
        match id {
            Some(id) => self.source.get_user(id).map_err(log_fetch_failure),
            None => self
                .source
                .list_users()
                .map_err(log_fetch_failure)?
                .into_iter()
                .next()
                .ok_or(LoadError::NoUser),
        }
    }

    pub fn view(&self, data: &DashboardData, store: &FilterStateStore) -> DashboardView {
        build_view(&data.comments, store)
    }
}

pub fn build_view(comments: &[Comment], store: &FilterStateStore) -> DashboardView {
    let state = store.state();
    let page = run_pipeline(comments, state);

    DashboardView {
        window: page_window(page.page, page.total_pages),
        range: row_range(page.page, page.page_size, page.total_filtered),
        sort_indicators: SortKey::ALL
            .iter()
            .map(|key| (*key, state.sort.indicator_for(*key)))
            .collect(),
        total_comments: comments.len(),
        search: state.search.clone(),
        page,
    }
}

fn worker_panicked(resource: &str) -> SourceError {
    SourceError::Request {
        resource: resource.to_string(),
        message: "fetch worker panicked".to_string(),
    }
}

fn log_fetch_failure(err: SourceError) -> LoadError {
    error!(error = %err, "error loading data");
    LoadError::Fetch(err)
}
