use chrono::NaiveDateTime;
use log::warn;
use serde_json::Value;

use crate::domain::entities::metadata::{FilterDescriptor, FilterKind};
use crate::domain::entities::vendor::{parse_date, parse_timestamp, VendorRecord};

/// A filter payload resolved once against its column's declared kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Contains(String),
    OneOf(Vec<String>),
    Equals(String),
    Between {
        from: Option<NaiveDateTime>,
        to: Option<NaiveDateTime>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFilter {
    pub column: String,
    pub value: FilterValue,
}

/// Returns `None` when the payload places no constraint at all.
pub fn resolve(
    column: &str,
    raw: &str,
    descriptor: Option<&FilterDescriptor>,
) -> Option<ColumnFilter> {
    if raw.is_empty() {
        return None;
    }

    let value = match descriptor.map(|descriptor| &descriptor.kind) {
        Some(FilterKind::DateRange) => resolve_date_range(column, raw)?,
        Some(FilterKind::Enum { .. }) => resolve_choice(raw),
        Some(FilterKind::Text) | Some(FilterKind::Number) | None => {
            FilterValue::Contains(raw.to_string())
        }
    };

    Some(ColumnFilter {
        column: column.to_string(),
        value,
    })
}

fn resolve_date_range(column: &str, raw: &str) -> Option<FilterValue> {
    let range = match serde_json::from_str::<Value>(raw) {
        Ok(range @ (Value::Object(_) | Value::Array(_))) => range,
        Ok(_) | Err(_) => {
            warn!("ignoring malformed date range for {column}: {raw}");
            return None;
        }
    };

    let bound = |key: &str| {
        range
            .get(key)
            .and_then(Value::as_str)
            .filter(|value| !value.trim().is_empty())
    };

    Some(FilterValue::Between {
        from: bound("from").and_then(parse_timestamp),
        to: bound("to").and_then(end_of_day),
    })
}

/// A bare date covers the whole day; a full timestamp is taken as given.
fn end_of_day(value: &str) -> Option<NaiveDateTime> {
    match parse_date(value) {
        Some(date) => date.and_hms_opt(23, 59, 59),
        None => parse_timestamp(value),
    }
}

/// Arrays and objects both list allowed values; objects contribute their values.
fn resolve_choice(raw: &str) -> FilterValue {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(values)) => FilterValue::OneOf(choices(values.iter())),
        Ok(Value::Object(map)) => FilterValue::OneOf(choices(map.values())),
        Ok(Value::String(value)) => FilterValue::Equals(value),
        _ => FilterValue::Equals(raw.to_string()),
    }
}

fn choices<'a>(values: impl Iterator<Item = &'a Value>) -> Vec<String> {
    values.filter_map(Value::as_str).map(str::to_string).collect()
}

impl ColumnFilter {
    pub fn matches(&self, record: &VendorRecord) -> bool {
        match &self.value {
            FilterValue::Contains(term) => {
                contains_ignore_case(&record.field_text(&self.column), term)
            }
            FilterValue::OneOf(allowed) => {
                let value = record.field_text(&self.column);
                allowed.iter().any(|candidate| *candidate == value)
            }
            FilterValue::Equals(expected) => record.field_text(&self.column) == *expected,
            FilterValue::Between { from, to } => {
                let Some(at) = parse_timestamp(&record.field_text(&self.column)) else {
                    return false;
                };
                if from.is_some_and(|from| at < from) {
                    return false;
                }
                !to.is_some_and(|to| at > to)
            }
        }
    }
}

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
