use log::debug;

use crate::domain::entities::metadata::{ColumnDescriptor, ColumnKind, FilterDescriptor};
use crate::domain::entities::query::{
    compare_optional, Action, FieldValue, PaginatedResult, QueryRequest, SortDirection,
};
use crate::domain::entities::vendor::{VendorRecord, CATEGORIES};
use crate::infra::catalog::filters::{self, contains_ignore_case, ColumnFilter};
use crate::usecase::ports::data_source::DataSource;

pub const IDENTIFIER: &str = "vendor-catalog";
pub const DEFAULT_SORT_BY: &str = "name";
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

const SEARCH_FIELDS: [&str; 3] = ["name", "country", "category"];
const SUPPORTED_ACTIONS: [Action; 2] = [Action::Index, Action::Show];

type RawVendor = (i64, &'static str, &'static str, &'static str, i64, &'static str);

static MOCK_VENDORS: [RawVendor; 18] = [
    (1, "Shimano", "Japan", "Drivetrain", 5, "2026-01-10 10:00:00"),
    (2, "SRAM", "USA", "Drivetrain", 5, "2026-01-09 14:30:00"),
    (3, "Campagnolo", "Italy", "Drivetrain", 5, "2026-01-08 09:15:00"),
    (4, "FSA", "Taiwan", "Handlebars", 4, "2026-01-07 11:00:00"),
    (5, "Fizik", "Italy", "Saddles", 4, "2026-01-06 16:45:00"),
    (6, "Brooks", "UK", "Saddles", 5, "2026-01-05 08:30:00"),
    (7, "Continental", "Germany", "Tires", 5, "2026-01-10 07:00:00"),
    (8, "Vittoria", "Italy", "Tires", 4, "2026-01-04 13:20:00"),
    (9, "Mavic", "France", "Wheels", 4, "2026-01-03 10:00:00"),
    (10, "DT Swiss", "Switzerland", "Wheels", 5, "2026-01-10 09:00:00"),
    (11, "Zipp", "USA", "Wheels", 5, "2026-01-09 11:30:00"),
    (12, "Enve", "USA", "Wheels", 5, "2026-01-08 15:00:00"),
    (13, "Chris King", "USA", "Accessories", 5, "2026-01-07 09:45:00"),
    (14, "Hope", "UK", "Brakes", 5, "2026-01-06 14:00:00"),
    (15, "Magura", "Germany", "Brakes", 4, "2026-01-05 10:30:00"),
    (16, "Specialized", "USA", "Frames", 5, "2026-01-10 08:00:00"),
    (17, "Trek", "USA", "Frames", 5, "2026-01-09 12:00:00"),
    (18, "Pinarello", "Italy", "Frames", 5, "2026-01-08 10:00:00"),
];

/// Built-in vendor table.
pub fn mock_vendors() -> Vec<VendorRecord> {
    MOCK_VENDORS
        .iter()
        .map(
            |&(id, name, country, category, rating, last_updated)| VendorRecord {
                id,
                name: name.to_string(),
                country: country.to_string(),
                category: category.to_string(),
                rating,
                last_updated: last_updated.to_string(),
            },
        )
        .collect()
}

/// Read-only vendor catalog served from memory.
#[derive(Debug, Clone)]
pub struct VendorCatalogDataSource {
    records: Vec<VendorRecord>,
}

impl Default for VendorCatalogDataSource {
    fn default() -> Self {
        Self::new()
    }
}

impl VendorCatalogDataSource {
    pub fn new() -> Self {
        Self::with_records(mock_vendors())
    }

    pub fn with_records(records: Vec<VendorRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[VendorRecord] {
        &self.records
    }

    fn resolve_filters(&self, request: &QueryRequest) -> Vec<ColumnFilter> {
        let declared = self.filters();
        request
            .filters
            .iter()
            .filter_map(|(column, raw)| {
                let descriptor = declared.iter().find(|filter| filter.name == *column);
                filters::resolve(column, raw, descriptor)
            })
            .collect()
    }
}

fn matches_search(record: &VendorRecord, search: &str) -> bool {
    SEARCH_FIELDS
        .iter()
        .any(|field| contains_ignore_case(&record.field_text(field), search))
}

impl DataSource for VendorCatalogDataSource {
    type Item = VendorRecord;

    fn identifier(&self) -> &str {
        IDENTIFIER
    }

    fn label(&self) -> &str {
        "Vendor Catalog"
    }

    fn icon(&self) -> Option<&str> {
        Some("storefront")
    }

    fn columns(&self) -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::new("name", "Vendor Name", ColumnKind::String),
            ColumnDescriptor::new("country", "Country", ColumnKind::String),
            ColumnDescriptor::new("category", "Category", ColumnKind::String),
            ColumnDescriptor::new("rating", "Rating", ColumnKind::Integer),
            ColumnDescriptor::new("lastUpdated", "Last Updated", ColumnKind::Datetime),
        ]
    }

    fn filters(&self) -> Vec<FilterDescriptor> {
        vec![
            FilterDescriptor::text("name", "Vendor Name", "Search vendor...", 1),
            FilterDescriptor::text("country", "Country", "Filter by country...", 2),
            FilterDescriptor::enumeration("category", &CATEGORIES, "Category", true, true, 3),
            FilterDescriptor::date_range("lastUpdated", "Updated Between", 4),
        ]
    }

    fn default_sort_by(&self) -> &str {
        DEFAULT_SORT_BY
    }

    fn default_sort_direction(&self) -> SortDirection {
        SortDirection::Asc
    }

    fn default_items_per_page(&self) -> usize {
        DEFAULT_ITEMS_PER_PAGE
    }

    fn query(&self, request: &QueryRequest) -> PaginatedResult<VendorRecord> {
        let column_filters = self.resolve_filters(request);

        let mut matched: Vec<&VendorRecord> = self
            .records
            .iter()
            .filter(|record| request.search.is_empty() || matches_search(record, &request.search))
            .filter(|record| column_filters.iter().all(|filter| filter.matches(record)))
            .collect();

        // Vec::sort_by is stable; equal keys keep dataset order.
        matched.sort_by(|a, b| {
            let ordering = compare_optional(
                a.field(&request.sort_by).as_ref(),
                b.field(&request.sort_by).as_ref(),
            );
            request.sort_direction.apply(ordering)
        });

        let total_items = matched.len();
        let current_page = request.page.max(1);
        let offset = (current_page - 1).saturating_mul(request.items_per_page);
        let items: Vec<VendorRecord> = matched
            .into_iter()
            .skip(offset)
            .take(request.items_per_page)
            .cloned()
            .collect();

        debug!(
            "{IDENTIFIER}: search={:?} filters={} sort={} {} page={} -> {}/{}",
            request.search,
            column_filters.len(),
            request.sort_by,
            request.sort_direction.as_str(),
            current_page,
            items.len(),
            total_items
        );

        PaginatedResult {
            items,
            total_items,
            current_page,
            items_per_page: request.items_per_page,
        }
    }

    fn find(&self, id: i64) -> Option<VendorRecord> {
        self.records.iter().find(|record| record.id == id).cloned()
    }

    fn supports_action(&self, action: Action) -> bool {
        SUPPORTED_ACTIONS.contains(&action)
    }

    fn id_field(&self) -> &str {
        "id"
    }

    fn item_id(&self, item: &VendorRecord) -> i64 {
        item.id
    }

    fn item_value(&self, item: &VendorRecord, field: &str) -> Option<FieldValue> {
        item.field(field)
    }
}
