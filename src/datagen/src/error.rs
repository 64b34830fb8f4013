use std::io;
use std::result;

use arrow::error::ArrowError;
use common::error::CommonError;
use parquet::errors::ParquetError;
use thiserror::Error;

pub type Result<T> = result::Result<T, DatagenError>;

#[derive(Error, Debug)]
pub enum DatagenError {
    #[error("Internal: {0:?}")]
    Internal(String),
    #[error("Config: {0}")]
    Config(String),
    #[error("InvalidInput: {0}")]
    InvalidInput(String),
    #[error("ColumnNotFound: {0:?}")]
    ColumnNotFound(String),
    #[error("ArrowError: {0:?}")]
    ArrowError(#[from] ArrowError),
    #[error("ParquetError: {0:?}")]
    ParquetError(#[from] ParquetError),
    #[error("CommonError: {0:?}")]
    CommonError(#[from] CommonError),
    #[error("StdIO: {0:?}")]
    StdIO(#[from] io::Error),
}
