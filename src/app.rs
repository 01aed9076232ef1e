use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::json;

use crate::cli::{Cli, Commands, Direction, OutputFormat};
use crate::config::AppConfig;
use crate::domain::entities::query::SortDirection;
use crate::domain::entities::vendor::VendorRecord;
use crate::infra::catalog::vendor_catalog::VendorCatalogDataSource;
use crate::infra::import::csv::write_rows;
use crate::usecase::services::import_service::ImportService;
use crate::usecase::services::query_service::{ListParams, QueryService};

pub fn build_catalog(config: &AppConfig) -> Result<VendorCatalogDataSource> {
    match &config.catalog_path {
        Some(path) => ImportService::new(path.clone()).load_catalog(),
        None => Ok(VendorCatalogDataSource::new()),
    }
}

pub fn run<W: Write>(cli: Cli, config: &AppConfig, out: &mut W) -> Result<()> {
    let catalog = build_catalog(config)?;
    let service: QueryService<VendorRecord> = QueryService::new(Arc::new(catalog));

    match cli.command {
        Commands::Info => write_info(&service, out),
        Commands::List {
            search,
            filters,
            sort,
            direction,
            page,
            per_page,
            format,
        } => {
            let params = ListParams {
                search,
                filters: filters.into_iter().collect(),
                sort_by: sort,
                sort_direction: direction.map(|direction| match direction {
                    Direction::Asc => SortDirection::Asc,
                    Direction::Desc => SortDirection::Desc,
                }),
                page,
                items_per_page: per_page,
            };
            let result = service.list(&params)?;
            match format {
                OutputFormat::Json => write_json(out, &result),
                OutputFormat::Csv => {
                    let columns: Vec<String> = service
                        .source()
                        .columns()
                        .into_iter()
                        .map(|column| column.name)
                        .collect();
                    write_rows(out, &columns, &service.rows(&result.items))
                }
            }
        }
        Commands::Show { id } => {
            let vendor = service.show(id)?;
            write_json(out, &vendor)
        }
        Commands::Supports { action } => {
            writeln!(out, "{}", service.supports(&action)).context("failed to write output")
        }
    }
}

fn write_info<W: Write>(service: &QueryService<VendorRecord>, out: &mut W) -> Result<()> {
    let source = service.source();
    let info = json!({
        "identifier": source.identifier(),
        "label": source.label(),
        "icon": source.icon(),
        "idField": source.id_field(),
        "columns": source.columns(),
        "filters": source.filters(),
        "defaultSortBy": source.default_sort_by(),
        "defaultSortDirection": source.default_sort_direction(),
        "defaultItemsPerPage": source.default_items_per_page(),
    });
    write_json(out, &info)
}

fn write_json<W: Write, T: serde::Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to render json")?;
    writeln!(out).context("failed to write output")
}
