use serde::Deserialize;

use crate::config::CatalogConfig;
use crate::listing::{Category, Listing};

/// On-disk shape of a catalog fixture.
#[derive(Debug, Deserialize)]
pub(super) struct Fixture {
    #[serde(default)]
    pub config: CatalogConfig,
    #[serde(default)]
    pub categories: Vec<Category>,
    pub listings: Vec<Listing>,
}
