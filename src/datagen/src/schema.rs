use std::sync::Arc;

use arrow::datatypes::DataType;
use arrow::datatypes::Field;
use arrow::datatypes::Schema;
use arrow::datatypes::SchemaRef;
use arrow::datatypes::TimeUnit;
use common::types::COLUMN_ID;
use common::types::COLUMN_INVENTORY_COUNT;
use common::types::COLUMN_MARGIN;
use common::types::COLUMN_PRICE_USD;
use common::types::COLUMN_PRODUCT_CATEGORY;
use common::types::COLUMN_PRODUCT_ID;
use common::types::COLUMN_PRODUCT_NAME;
use common::types::COLUMN_RATING;
use common::types::COLUMN_REVIEWER_AGE;
use common::types::COLUMN_REVIEWER_LOCATION;
use common::types::COLUMN_REVIEWER_NAME;
use common::types::COLUMN_REVIEWER_PERSONA;
use common::types::COLUMN_REVIEW_DATE;
use common::types::COLUMN_REVIEW_ID;
use common::types::COLUMN_REVIEW_TEXT;

pub fn products_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new(COLUMN_ID, DataType::Int64, false),
        Field::new(COLUMN_PRODUCT_CATEGORY, DataType::Utf8, false),
        Field::new(COLUMN_PRODUCT_NAME, DataType::Utf8, false),
        Field::new(COLUMN_PRICE_USD, DataType::Float64, false),
        Field::new(COLUMN_INVENTORY_COUNT, DataType::Int32, false),
        Field::new(COLUMN_MARGIN, DataType::Float64, false),
    ]))
}

pub fn reviews_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new(COLUMN_REVIEW_ID, DataType::Int64, false),
        Field::new(COLUMN_PRODUCT_ID, DataType::Int64, false),
        Field::new(COLUMN_PRODUCT_NAME, DataType::Utf8, false),
        Field::new(COLUMN_PRODUCT_CATEGORY, DataType::Utf8, false),
        Field::new(COLUMN_RATING, DataType::Int8, false),
        Field::new(COLUMN_REVIEW_TEXT, DataType::Utf8, false),
        Field::new(COLUMN_REVIEWER_NAME, DataType::Utf8, false),
        Field::new(COLUMN_REVIEWER_PERSONA, DataType::Utf8, false),
        Field::new(COLUMN_REVIEWER_AGE, DataType::Int16, false),
        Field::new(COLUMN_REVIEWER_LOCATION, DataType::Utf8, false),
        Field::new(
            COLUMN_REVIEW_DATE,
            DataType::Timestamp(TimeUnit::Second, None),
            false,
        ),
    ]))
}

/// Database column type a field maps to when the dataset is imported.
pub fn sql_type(data_type: &DataType) -> &'static str {
    match data_type {
        DataType::Int8 => "TINYINT",
        DataType::Int16 => "SMALLINT",
        DataType::Int32 => "INTEGER",
        DataType::Int64 => "BIGINT",
        DataType::Float32 => "FLOAT",
        DataType::Float64 => "DOUBLE",
        DataType::Utf8 | DataType::LargeUtf8 => "VARCHAR",
        DataType::Timestamp(_, _) => "TIMESTAMP",
        DataType::Boolean => "BOOLEAN",
        _ => "VARCHAR",
    }
}

pub fn describe(schema: &Schema) -> Vec<(String, &'static str)> {
    schema
        .fields()
        .iter()
        .map(|f| (f.name().to_owned(), sql_type(f.data_type())))
        .collect()
}
