use std::collections::BTreeMap;
use std::sync::Arc;

use log::debug;

use crate::domain::entities::query::{
    Action, FieldValue, PaginatedResult, QueryRequest, SortDirection,
};
use crate::usecase::ports::data_source::{DataSource, DataSourceError};

/// List-view parameters as they arrive from a request; absent values take the source defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub search: Option<String>,
    pub filters: BTreeMap<String, String>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<SortDirection>,
    pub page: Option<usize>,
    pub items_per_page: Option<usize>,
}

impl ListParams {
    /// Reads `search`, `sortBy`, `sortDirection`, `page`, `itemsPerPage` and `filters[<column>]`.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = ListParams::default();
        for (key, value) in pairs {
            let key = key.as_ref();
            let value: String = value.into();
            match key {
                "search" => params.search = Some(value),
                "sortBy" => params.sort_by = Some(value).filter(|value| !value.is_empty()),
                "sortDirection" => {
                    params.sort_direction = Some(SortDirection::parse_lenient(&value))
                }
                "page" => params.page = value.trim().parse().ok(),
                "itemsPerPage" => params.items_per_page = value.trim().parse().ok(),
                _ => {
                    if let Some(column) = key
                        .strip_prefix("filters[")
                        .and_then(|rest| rest.strip_suffix(']'))
                    {
                        params.filters.insert(column.to_string(), value);
                    }
                }
            }
        }
        params
    }
}

pub type Row = Vec<(String, Option<FieldValue>)>;

pub struct QueryService<I> {
    source: Arc<dyn DataSource<Item = I>>,
}

impl<I: Clone + Send + Sync + 'static> QueryService<I> {
    pub fn new(source: Arc<dyn DataSource<Item = I>>) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &dyn DataSource<Item = I> {
        self.source.as_ref()
    }

    pub fn supports(&self, action: &str) -> bool {
        Action::parse(action).is_some_and(|action| self.source.supports_action(action))
    }

    pub fn ensure_supported(&self, action: Action) -> Result<(), DataSourceError> {
        if self.source.supports_action(action) {
            Ok(())
        } else {
            Err(DataSourceError::ActionNotAllowed {
                source_id: self.source.identifier().to_string(),
                action: action.to_string(),
            })
        }
    }

    pub fn request_for(&self, params: &ListParams) -> QueryRequest {
        let source = self.source.as_ref();
        QueryRequest {
            search: params.search.clone().unwrap_or_default(),
            filters: params.filters.clone(),
            sort_by: params
                .sort_by
                .clone()
                .unwrap_or_else(|| source.default_sort_by().to_string()),
            sort_direction: params
                .sort_direction
                .unwrap_or_else(|| source.default_sort_direction()),
            page: params.page.unwrap_or(1).max(1),
            items_per_page: params
                .items_per_page
                .filter(|per_page| *per_page > 0)
                .unwrap_or_else(|| source.default_items_per_page()),
        }
    }

    pub fn list(&self, params: &ListParams) -> Result<PaginatedResult<I>, DataSourceError> {
        self.ensure_supported(Action::Index)?;
        let request = self.request_for(params);
        debug!("{}: list {:?}", self.source.identifier(), request);
        Ok(self.source.query(&request))
    }

    pub fn show(&self, id: i64) -> Result<I, DataSourceError> {
        self.ensure_supported(Action::Show)?;
        self.source
            .find(id)
            .ok_or_else(|| DataSourceError::NotFound {
                source_id: self.source.identifier().to_string(),
                id,
            })
    }

    /// Column-ordered field values, as a list renderer reads them.
    pub fn rows(&self, items: &[I]) -> Vec<Row> {
        let columns = self.source.columns();
        items
            .iter()
            .map(|item| {
                columns
                    .iter()
                    .map(|column| {
                        (
                            column.name.clone(),
                            self.source.item_value(item, &column.name),
                        )
                    })
                    .collect()
            })
            .collect()
    }
}
