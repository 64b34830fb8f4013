use std::result;

use chrono::OutOfRangeError;
use common::error::CommonError;
use datagen::error::DatagenError;
use indicatif::style::TemplateError;
use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;

pub type Result<T> = result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("file not found: {0}")]
    FileNotFound(String),
    #[error("datagen: {0}")]
    Datagen(#[from] DatagenError),
    #[error("common: {0}")]
    Common(#[from] CommonError),
    #[error("config: {0}")]
    ConfigError(#[from] config::ConfigError),
    #[error("StdIO: {0:?}")]
    StdIO(#[from] std::io::Error),
    #[error("TimeDurationOutOfRange: {0:?}")]
    TimeDurationOutOfRange(#[from] OutOfRangeError),
    #[error("ParseDuration: {0:?}")]
    ParseDuration(#[from] parse_duration::parse::Error),
    #[error("progress template: {0:?}")]
    Template(#[from] TemplateError),
    #[error("SetGlobalDefaultError: {0:?}")]
    SetGlobalDefaultError(#[from] SetGlobalDefaultError),
    #[error("other: {0:?}")]
    Other(#[from] anyhow::Error),
}
