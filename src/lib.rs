//! Read-only vendor catalog data source: search, filter, sort and paginate a
//! fixed in-memory record set, plus the metadata a list/detail view needs.

pub mod app;
pub mod cli;
pub mod config;

pub mod domain {
    pub mod entities {
        pub mod metadata;
        pub mod query;
        pub mod vendor;
    }
}

pub mod usecase {
    pub mod ports {
        pub mod data_source;
    }
    pub mod services {
        pub mod import_service;
        pub mod query_service;
    }
}

pub mod infra {
    pub mod catalog {
        pub mod filters;
        pub mod vendor_catalog;
    }
    pub mod import {
        pub mod csv;
    }
}

pub use domain::entities::metadata::{ColumnDescriptor, ColumnKind, FilterDescriptor, FilterKind};
pub use domain::entities::query::{Action, FieldValue, PaginatedResult, QueryRequest, SortDirection};
pub use domain::entities::vendor::VendorRecord;
pub use infra::catalog::vendor_catalog::VendorCatalogDataSource;
pub use usecase::ports::data_source::{DataSource, DataSourceError};
pub use usecase::services::query_service::{ListParams, QueryService};
