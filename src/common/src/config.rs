use std::path::PathBuf;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use tracing::level_filters::LevelFilter;

use crate::types::Compression;
use crate::types::OutputFormat;
use crate::types::COLUMN_ID;
use crate::types::COLUMN_PRODUCT_CATEGORY;
use crate::types::COLUMN_PRODUCT_NAME;
use crate::types::DEFAULT_BATCH_SIZE;
use crate::types::DEFAULT_MAX_REVIEWS;
use crate::types::DEFAULT_MAX_ROW_GROUP_SIZE;
use crate::types::DEFAULT_PRODUCTS_PATH;
use crate::types::DEFAULT_PRODUCT_ROWS;
use crate::types::DEFAULT_REVIEWS_PATH;
use crate::types::DEFAULT_SEED;
use crate::types::DEFAULT_YEARS_BACK;

#[derive(Debug, Clone)]
pub struct Log {
    pub level: LevelFilter,
}

#[derive(Debug, Clone)]
pub struct Generator {
    pub seed: u64,
    pub batch_size: usize,
    pub partitions: usize,
}

#[derive(Debug, Clone)]
pub struct Output {
    // inferred from the file extension when not set
    pub format: Option<OutputFormat>,
    pub compression: Compression,
    pub dictionary: bool,
    pub max_row_group_size: usize,
}

#[derive(Debug, Clone)]
pub struct Products {
    pub rows: usize,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Columns {
    pub id: String,
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone)]
pub struct Reviews {
    pub path: PathBuf,
    pub max_per_product: usize,
    pub period: Duration,
    pub to_date: DateTime<Utc>,
    pub columns: Columns,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub log: Log,
    pub generator: Generator,
    pub output: Output,
    pub products: Products,
    pub reviews: Reviews,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log: Log {
                level: LevelFilter::INFO,
            },
            generator: Generator {
                seed: DEFAULT_SEED,
                batch_size: DEFAULT_BATCH_SIZE,
                partitions: 1,
            },
            output: Output {
                format: None,
                compression: Compression::Snappy,
                dictionary: true,
                max_row_group_size: DEFAULT_MAX_ROW_GROUP_SIZE,
            },
            products: Products {
                rows: DEFAULT_PRODUCT_ROWS,
                path: PathBuf::from(DEFAULT_PRODUCTS_PATH),
            },
            reviews: Reviews {
                path: PathBuf::from(DEFAULT_REVIEWS_PATH),
                max_per_product: DEFAULT_MAX_REVIEWS,
                period: Duration::days(365 * DEFAULT_YEARS_BACK),
                to_date: Utc::now(),
                columns: Columns {
                    id: COLUMN_ID.to_string(),
                    name: COLUMN_PRODUCT_NAME.to_string(),
                    category: COLUMN_PRODUCT_CATEGORY.to_string(),
                },
            },
        }
    }
}
