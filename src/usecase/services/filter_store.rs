use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, error, warn};

use crate::domain::entities::filter::{
    next_sort_spec, FilterState, PageSize, SortKey, SortSpec,
};
use crate::usecase::ports::storage::KeyValueStore;

pub const FILTER_STATE_KEY: &str = "dashboard-filters";

/// Owner of the current view parameters. Every mutation is written back to the slot.
pub struct FilterStateStore {
    storage: Arc<dyn KeyValueStore>,
    state: FilterState,
}

impl FilterStateStore {
    /// Rehydrate from storage. Missing, unreadable or malformed slots fall back to defaults.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let state = match storage.read(FILTER_STATE_KEY) {
            Ok(Some(raw)) => merge_over_defaults(&raw),
            Ok(None) => {
                debug!(key = FILTER_STATE_KEY, "no saved filter state, using defaults");
                FilterState::default()
            }
            Err(err) => {
                warn!(key = FILTER_STATE_KEY, error = %err, "error loading filter state");
                FilterState::default()
            }
        };

        Self { storage, state }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn update_search(&mut self, search: impl Into<String>) {
        self.state.search = search.into();
        self.state.page = 1;
        self.persist();
    }

    pub fn update_sort(&mut self, sort: SortSpec) {
        self.state.sort = sort;
        self.state.page = 1;
        self.persist();
    }

    pub fn apply_sort_click(&mut self, clicked: SortKey) {
        let next = next_sort_spec(self.state.sort, clicked);
        self.update_sort(next);
    }

    /// Upper bound is the caller's concern; only page >= 1 is enforced here.
    pub fn update_page(&mut self, page: u32) {
        self.state.page = page.max(1);
        self.persist();
    }

    pub fn update_page_size(&mut self, page_size: PageSize) {
        self.state.page_size = page_size;
        self.state.page = 1;
        self.persist();
    }

    pub fn reset(&mut self) {
        self.state = FilterState::default();
        self.persist();
    }

    fn persist(&self) {
        let encoded = match serde_json::to_string(&self.state) {
            Ok(encoded) => encoded,
            Err(err) => {
                error!(error = %err, "error encoding filter state");
                return;
            }
        };

        if let Err(err) = self.storage.write(FILTER_STATE_KEY, &encoded) {
            error!(key = FILTER_STATE_KEY, error = %err, "error saving filter state");
        }
    }
}

/// Field-by-field merge of a saved snapshot over [`FilterState::default`].
pub fn merge_over_defaults(raw: &str) -> FilterState {
    let fields = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(fields)) => fields,
        Ok(other) => {
            warn!(found = value_kind(&other), "saved filter state is not an object, using defaults");
            return FilterState::default();
        }
        Err(err) => {
            warn!(error = %err, "saved filter state is not valid JSON, using defaults");
            return FilterState::default();
        }
    };

    let defaults = FilterState::default();
    FilterState {
        search: field_or(&fields, "search", defaults.search),
        sort: field_or(&fields, "sort", defaults.sort),
        page: field_or(&fields, "page", defaults.page).max(1),
        page_size: field_or(&fields, "pageSize", defaults.page_size),
    }
}

fn field_or<T>(fields: &Map<String, Value>, name: &str, default: T) -> T
where
    T: serde::de::DeserializeOwned,
{
    let Some(value) = fields.get(name) else {
        return default;
    };

    match T::deserialize(value) {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!(field = name, error = %err, "ignoring invalid saved filter field");
            default
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
