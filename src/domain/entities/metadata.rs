use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    String,
    Integer,
    Datetime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDescriptor {
    pub name: String,
    pub label: String,
    pub kind: ColumnKind,
    pub sortable: bool,
}

impl ColumnDescriptor {
    pub fn new(name: &str, label: &str, kind: ColumnKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            sortable: true,
        }
    }
}

/// How a filter's raw value is interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FilterKind {
    Text,
    Number,
    Enum {
        options: Vec<String>,
        multiple: bool,
        #[serde(rename = "showAllOption")]
        show_all_option: bool,
    },
    DateRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterDescriptor {
    pub name: String,
    pub label: String,
    pub kind: FilterKind,
    pub placeholder: Option<String>,
    pub priority: u32,
}

impl FilterDescriptor {
    pub fn text(name: &str, label: &str, placeholder: &str, priority: u32) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FilterKind::Text,
            placeholder: Some(placeholder.to_string()),
            priority,
        }
    }

    pub fn number(name: &str, label: &str, priority: u32) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FilterKind::Number,
            placeholder: None,
            priority,
        }
    }

    pub fn enumeration(
        name: &str,
        options: &[&str],
        label: &str,
        multiple: bool,
        show_all_option: bool,
        priority: u32,
    ) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FilterKind::Enum {
                options: options.iter().map(|option| option.to_string()).collect(),
                multiple,
                show_all_option,
            },
            placeholder: None,
            priority,
        }
    }

    pub fn date_range(name: &str, label: &str, priority: u32) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FilterKind::DateRange,
            placeholder: None,
            priority,
        }
    }
}
