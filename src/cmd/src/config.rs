use std::path::PathBuf;

use chrono::Utc;
use clap::ValueEnum;
use common::types::Compression;
use common::types::OutputFormat;
use common::types::COLUMN_ID;
use common::types::COLUMN_PRODUCT_CATEGORY;
use common::types::COLUMN_PRODUCT_NAME;
use common::types::DEFAULT_BATCH_SIZE;
use common::types::DEFAULT_MAX_REVIEWS;
use common::types::DEFAULT_MAX_ROW_GROUP_SIZE;
use common::types::DEFAULT_PRODUCTS_PATH;
use common::types::DEFAULT_PRODUCT_ROWS;
use common::types::DEFAULT_REVIEWS_PATH;
use common::types::DEFAULT_SEED;
use common::types::DEFAULT_YEARS_BACK;
use dateparser::DateTimeUtc;
use serde_derive::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing::Level;

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Log {
    pub level: LogLevel,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Generator {
    pub seed: u64,
    pub batch_size: usize,
    // 0 means one partition per cpu
    pub partitions: usize,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            batch_size: DEFAULT_BATCH_SIZE,
            partitions: 0,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Output {
    pub format: Option<OutputFormat>,
    pub compression: Compression,
    pub dictionary: bool,
    pub max_row_group_size: usize,
}

impl Default for Output {
    fn default() -> Self {
        Self {
            format: None,
            compression: Compression::Snappy,
            dictionary: true,
            max_row_group_size: DEFAULT_MAX_ROW_GROUP_SIZE,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Products {
    pub rows: usize,
    pub path: PathBuf,
}

impl Default for Products {
    fn default() -> Self {
        Self {
            rows: DEFAULT_PRODUCT_ROWS,
            path: PathBuf::from(DEFAULT_PRODUCTS_PATH),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Reviews {
    pub path: PathBuf,
    pub max_per_product: usize,
    pub period: String,
    // now when not set
    pub to_date: Option<String>,
    pub id_column: String,
    pub name_column: String,
    pub category_column: String,
}

impl Default for Reviews {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_REVIEWS_PATH),
            max_per_product: DEFAULT_MAX_REVIEWS,
            period: format!("{} days", DEFAULT_YEARS_BACK * 365),
            to_date: None,
            id_column: COLUMN_ID.to_string(),
            name_column: COLUMN_PRODUCT_NAME.to_string(),
            category_column: COLUMN_PRODUCT_CATEGORY.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub log: Log,
    pub generator: Generator,
    pub output: Output,
    pub products: Products,
    pub reviews: Reviews,
}

pub fn parse_duration(s: &str) -> crate::error::Result<chrono::Duration> {
    Ok(chrono::Duration::from_std(parse_duration::parse(s)?)?)
}

pub fn parse_date(s: &str) -> crate::error::Result<chrono::DateTime<Utc>> {
    Ok(s.parse::<DateTimeUtc>()?.0)
}

impl TryInto<common::config::Config> for Config {
    type Error = crate::error::Error;

    fn try_into(self) -> Result<common::config::Config, Self::Error> {
        let partitions = match self.generator.partitions {
            0 => num_cpus::get(),
            n => n,
        };
        let to_date = match &self.reviews.to_date {
            Some(dt) => parse_date(dt)?,
            None => Utc::now(),
        };

        Ok(common::config::Config {
            log: common::config::Log {
                level: self.log.level.into(),
            },
            generator: common::config::Generator {
                seed: self.generator.seed,
                batch_size: self.generator.batch_size,
                partitions,
            },
            output: common::config::Output {
                format: self.output.format,
                compression: self.output.compression,
                dictionary: self.output.dictionary,
                max_row_group_size: self.output.max_row_group_size,
            },
            products: common::config::Products {
                rows: self.products.rows,
                path: self.products.path,
            },
            reviews: common::config::Reviews {
                path: self.reviews.path,
                max_per_product: self.reviews.max_per_product,
                period: parse_duration(self.reviews.period.as_str())?,
                to_date,
                columns: common::config::Columns {
                    id: self.reviews.id_column,
                    name: self.reviews.name_column,
                    category: self.reviews.category_column,
                },
            },
        })
    }
}

#[derive(Deserialize, Copy, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    #[serde(rename = "trace")]
    Trace,
    #[serde(rename = "debug")]
    Debug,
    #[serde(rename = "info")]
    Info,
    #[serde(rename = "warn")]
    Warn,
    #[serde(rename = "error")]
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
        .into()
    }
}
