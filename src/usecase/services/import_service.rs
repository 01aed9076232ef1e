use std::path::{Path, PathBuf};

use anyhow::Result;
use log::info;

use crate::domain::entities::vendor::VendorRecord;
use crate::infra::catalog::vendor_catalog::VendorCatalogDataSource;
use crate::infra::import::csv::read_vendors_from_path;

pub struct ImportService {
    catalog_path: PathBuf,
}

impl ImportService {
    pub fn new(catalog_path: PathBuf) -> Self {
        Self { catalog_path }
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    pub fn load_vendors(&self) -> Result<Vec<VendorRecord>> {
        let vendors = read_vendors_from_path(&self.catalog_path)?;
        info!(
            "loaded {} vendors from {}",
            vendors.len(),
            self.catalog_path.display()
        );
        Ok(vendors)
    }

    pub fn load_catalog(&self) -> Result<VendorCatalogDataSource> {
        Ok(VendorCatalogDataSource::with_records(self.load_vendors()?))
    }
}
