use std::path::Path;

use serde::Deserialize;
use strum_macros::Display;
use strum_macros::EnumString;

use crate::error::CommonError;
use crate::error::Result;

pub const CATEGORIES_COUNT: usize = 20;
pub const MAX_REVIEW_CHARS: usize = 100_000;

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_PRODUCT_ROWS: usize = 1_000_000;
pub const DEFAULT_BATCH_SIZE: usize = 100_000;
pub const DEFAULT_MAX_REVIEWS: usize = 5;
pub const DEFAULT_YEARS_BACK: i64 = 3;
pub const DEFAULT_MAX_ROW_GROUP_SIZE: usize = 1024 * 1024;
pub const DEFAULT_PRODUCTS_PATH: &str = "amazon_like_products.parquet";
pub const DEFAULT_REVIEWS_PATH: &str = "amazon_like_reviews.parquet";

pub const CATEGORY_GENERAL: &str = "General";

pub const COLUMN_ID: &str = "id";
pub const COLUMN_PRODUCT_CATEGORY: &str = "product_category";
pub const COLUMN_PRODUCT_NAME: &str = "product_name";
pub const COLUMN_PRICE_USD: &str = "price_usd";
pub const COLUMN_INVENTORY_COUNT: &str = "inventory_count";
pub const COLUMN_MARGIN: &str = "margin";

pub const COLUMN_REVIEW_ID: &str = "review_id";
pub const COLUMN_PRODUCT_ID: &str = "product_id";
pub const COLUMN_RATING: &str = "rating";
pub const COLUMN_REVIEW_TEXT: &str = "review_text";
pub const COLUMN_REVIEWER_NAME: &str = "reviewer_name";
pub const COLUMN_REVIEWER_PERSONA: &str = "reviewer_persona";
pub const COLUMN_REVIEWER_AGE: &str = "reviewer_age";
pub const COLUMN_REVIEWER_LOCATION: &str = "reviewer_location";
pub const COLUMN_REVIEW_DATE: &str = "review_date";

/// Key of the parquet key/value metadata entry naming the dataset.
pub const METADATA_DATASET_KEY: &str = "datagen.dataset";

/// 12-hour clock with AM/PM, used for row-oriented outputs.
pub const REVIEW_DATE_FORMAT: &str = "%Y-%m-%d %I:%M:%S %p";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    Products,
    Reviews,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Parquet,
    Csv,
    Tsv,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        match ext.as_deref() {
            Some("parquet") => Ok(OutputFormat::Parquet),
            Some("csv") => Ok(OutputFormat::Csv),
            Some("tsv") => Ok(OutputFormat::Tsv),
            _ => Err(CommonError::UnsupportedFormat(format!(
                "output must end with .parquet, .csv or .tsv, got {:?}",
                path
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    Uncompressed,
    Snappy,
    Zstd,
    Gzip,
    Lz4,
}
