use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, CommonError>;

#[derive(Error, Debug)]
pub enum CommonError {
    #[error("UnsupportedFormat: {0}")]
    UnsupportedFormat(String),
}
