use thiserror::Error;

use crate::domain::entities::metadata::{ColumnDescriptor, FilterDescriptor};
use crate::domain::entities::query::{
    Action, FieldValue, PaginatedResult, QueryRequest, SortDirection,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataSourceError {
    #[error("{source_id}: no item with id {id}")]
    NotFound { source_id: String, id: i64 },

    #[error("{source_id}: action '{action}' is not supported")]
    ActionNotAllowed { source_id: String, action: String },
}

/// Read contract consumed by list/detail/filter views.
///
/// Implementations are immutable once built and may be shared across threads.
pub trait DataSource: Send + Sync {
    type Item: Clone + Send + Sync;

    fn identifier(&self) -> &str;
    fn label(&self) -> &str;
    fn icon(&self) -> Option<&str>;

    fn columns(&self) -> Vec<ColumnDescriptor>;
    fn filters(&self) -> Vec<FilterDescriptor>;

    fn default_sort_by(&self) -> &str;
    fn default_sort_direction(&self) -> SortDirection;
    fn default_items_per_page(&self) -> usize;

    fn query(&self, request: &QueryRequest) -> PaginatedResult<Self::Item>;
    fn find(&self, id: i64) -> Option<Self::Item>;

    fn supports_action(&self, action: Action) -> bool;

    fn id_field(&self) -> &str;
    fn item_id(&self, item: &Self::Item) -> i64;
    fn item_value(&self, item: &Self::Item, field: &str) -> Option<FieldValue>;

    fn column(&self, name: &str) -> Option<ColumnDescriptor> {
        self.columns().into_iter().find(|column| column.name == name)
    }

    fn filter(&self, name: &str) -> Option<FilterDescriptor> {
        self.filters().into_iter().find(|filter| filter.name == name)
    }
}
