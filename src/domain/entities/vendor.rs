use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::entities::query::{FieldValue, DATETIME_FORMAT};

pub const CATEGORIES: [&str; 8] = [
    "Drivetrain",
    "Wheels",
    "Tires",
    "Saddles",
    "Brakes",
    "Handlebars",
    "Frames",
    "Accessories",
];

pub const FIELDS: [&str; 6] = ["id", "name", "country", "category", "rating", "lastUpdated"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRecord {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub category: String,
    pub rating: i64,
    /// Raw timestamp as supplied by the source; parsed on demand.
    pub last_updated: String,
}

impl VendorRecord {
    pub fn last_updated_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.last_updated)
    }

    /// Field accessor table. Unknown names yield `None`.
    pub fn field(&self, name: &str) -> Option<FieldValue> {
        let value = match name {
            "id" => FieldValue::Integer(self.id),
            "name" => FieldValue::Text(self.name.clone()),
            "country" => FieldValue::Text(self.country.clone()),
            "category" => FieldValue::Text(self.category.clone()),
            "rating" => FieldValue::Integer(self.rating),
            "lastUpdated" => match self.last_updated_at() {
                Some(at) => FieldValue::DateTime(at),
                None => FieldValue::Text(self.last_updated.clone()),
            },
            _ => return None,
        };
        Some(value)
    }

    /// String form used by substring filters; unknown fields read as empty.
    pub fn field_text(&self, name: &str) -> String {
        match name {
            "lastUpdated" => self.last_updated.clone(),
            _ => self
                .field(name)
                .map(|value| value.to_string())
                .unwrap_or_default(),
        }
    }
}

/// Accepts `YYYY-MM-DD HH:MM:SS`, the `T`-separated form, and a bare date (start of day).
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M"))
        .ok()
        .or_else(|| parse_date(value).and_then(|date| date.and_hms_opt(0, 0, 0)))
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
