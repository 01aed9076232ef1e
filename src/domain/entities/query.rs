use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Anything other than `DESC` (any case) sorts ascending.
    pub fn parse_lenient(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Scalar read out of a record by field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
    DateTime(NaiveDateTime),
}

impl FieldValue {
    /// Natural ordering within a kind; mixed kinds fall back to their text form.
    pub fn natural_cmp(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Integer(a), FieldValue::Integer(b)) => a.cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::DateTime(a), FieldValue::DateTime(b)) => a.cmp(b),
            _ => self.to_string().cmp(&other.to_string()),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(value) => write!(f, "{value}"),
            FieldValue::Text(value) => write!(f, "{value}"),
            FieldValue::DateTime(value) => write!(f, "{}", value.format(DATETIME_FORMAT)),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Integer(value) => serializer.serialize_i64(*value),
            FieldValue::Text(value) => serializer.serialize_str(value),
            FieldValue::DateTime(_) => serializer.serialize_str(&self.to_string()),
        }
    }
}

/// Missing values sort before present ones.
pub fn compare_optional(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.natural_cmp(b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub search: String,
    pub filters: BTreeMap<String, String>,
    pub sort_by: String,
    pub sort_direction: SortDirection,
    pub page: usize,
    pub items_per_page: usize,
}

impl QueryRequest {
    pub fn new(sort_by: impl Into<String>, sort_direction: SortDirection) -> Self {
        Self {
            search: String::new(),
            filters: BTreeMap::new(),
            sort_by: sort_by.into(),
            sort_direction,
            page: 1,
            items_per_page: 10,
        }
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn filter(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(column.into(), value.into());
        self
    }

    pub fn page(mut self, page: usize, items_per_page: usize) -> Self {
        self.page = page;
        self.items_per_page = items_per_page;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total_items: usize,
    pub current_page: usize,
    pub items_per_page: usize,
}

impl<T> PaginatedResult<T> {
    pub fn total_pages(&self) -> usize {
        if self.items_per_page == 0 {
            return 0;
        }
        self.total_items.div_ceil(self.items_per_page)
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages()
    }
}

/// Admin actions a data source may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Index,
    Show,
    Create,
    Edit,
    Delete,
    BatchDelete,
}

impl Action {
    pub fn parse(value: &str) -> Option<Action> {
        match value {
            "index" => Some(Action::Index),
            "show" => Some(Action::Show),
            "create" | "new" => Some(Action::Create),
            "edit" => Some(Action::Edit),
            "delete" => Some(Action::Delete),
            "batch_delete" => Some(Action::BatchDelete),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Index => "index",
            Action::Show => "show",
            Action::Create => "create",
            Action::Edit => "edit",
            Action::Delete => "delete",
            Action::BatchDelete => "batch_delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
