pub mod config;

pub mod domain {
    pub mod entities {
        pub mod comment;
        pub mod filter;
        pub mod page;
    }
    pub mod processing;
}

pub mod usecase {
    pub mod ports {
        pub mod source;
        pub mod storage;
    }
    pub mod services {
        pub mod dashboard_service;
        pub mod filter_store;
    }
}

pub mod infra {
    pub mod http {
        pub mod client;
    }
    pub mod memory {
        pub mod store;
    }
    pub mod sqlite {
        pub mod queries;
        pub mod repo;
        pub mod schema;
    }
}

pub mod ui {
    pub mod table;
}

pub use config::{default_db_path, DashboardConfig};
pub use domain::entities::comment::{Comment, CommentId, User};
pub use domain::entities::filter::{
    next_sort_spec, FilterState, InvalidPageSize, PageSize, SortDirection, SortIndicator, SortKey,
    SortSpec,
};
pub use domain::entities::page::{CommentPage, PaginatedResult, RowRange};
pub use domain::processing::{
    filter_comments, page_window, paginate, row_range, run_pipeline, sort_comments,
};
pub use usecase::services::dashboard_service::{
    DashboardData, DashboardService, DashboardView, LoadError,
};
pub use usecase::services::filter_store::{FilterStateStore, FILTER_STATE_KEY};
