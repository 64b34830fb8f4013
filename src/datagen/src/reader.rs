use std::fs::File;
use std::path::Path;

use arrow::array::Array;
use arrow::array::AsArray;
use arrow::compute::cast;
use arrow::datatypes::DataType;
use arrow::datatypes::Int64Type;
use arrow::record_batch::RecordBatch;
use common::types::CATEGORY_GENERAL;
use parquet::arrow::arrow_reader::ParquetRecordBatchReader;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::ProjectionMask;
use tracing::debug;

use crate::error::DatagenError;
use crate::error::Result;
use crate::products::ProductRef;

#[derive(Debug, Clone)]
pub struct Columns {
    pub id: String,
    pub name: String,
    // derived from the product name when missing in the file
    pub category: Option<String>,
}

/// Category encoded as a name prefix ("Books_Some Title"), or the general category.
pub fn category_from_name(name: &str) -> String {
    match name.split_once('_') {
        Some((prefix, _)) if !prefix.is_empty() => prefix.to_string(),
        _ => CATEGORY_GENERAL.to_string(),
    }
}

/// Streams products of an existing products file, reading only the referenced columns.
pub struct ProductReader {
    reader: ParquetRecordBatchReader,
    id: String,
    name: String,
    category: Option<String>,
    total_rows: usize,
    rows: usize,
}

impl ProductReader {
    pub fn try_new(path: &Path, cols: &Columns, batch_size: usize) -> Result<Self> {
        let file = File::open(path)
            .map_err(|err| DatagenError::InvalidInput(format!("can't open {:?}: {err}", path)))?;
        let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
        let schema = builder.schema().clone();
        let index_of = |name: &str| {
            schema
                .index_of(name)
                .map_err(|_| DatagenError::ColumnNotFound(name.to_string()))
        };

        let mut roots = vec![index_of(&cols.id)?, index_of(&cols.name)?];
        let category = match &cols.category {
            Some(name) => match schema.index_of(name) {
                Ok(idx) => {
                    roots.push(idx);
                    Some(name.to_owned())
                }
                Err(_) => {
                    debug!("category column {name:?} not found, deriving categories from names");
                    None
                }
            },
            None => None,
        };

        let total_rows = builder.metadata().file_metadata().num_rows().max(0) as usize;
        let mask = ProjectionMask::roots(builder.parquet_schema(), roots);
        let reader = builder
            .with_projection(mask)
            .with_batch_size(batch_size.max(1))
            .build()?;

        Ok(Self {
            reader,
            id: cols.id.clone(),
            name: cols.name.clone(),
            category,
            total_rows,
            rows: 0,
        })
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    fn convert(&mut self, batch: RecordBatch) -> Result<Vec<ProductRef>> {
        let column = |name: &str| {
            batch
                .column_by_name(name)
                .ok_or_else(|| DatagenError::ColumnNotFound(name.to_string()))
        };

        let ids = cast(column(&self.id)?, &DataType::Int64)?;
        let ids = ids.as_primitive::<Int64Type>();
        let names = cast(column(&self.name)?, &DataType::Utf8)?;
        let names = names.as_string::<i32>();
        let categories = match &self.category {
            Some(name) => Some(cast(column(name)?, &DataType::Utf8)?),
            None => None,
        };
        let categories = categories.as_ref().map(|c| c.as_string::<i32>());

        let mut out = Vec::with_capacity(batch.num_rows());
        for row in 0..batch.num_rows() {
            if ids.is_null(row) || names.is_null(row) {
                return Err(DatagenError::InvalidInput(format!(
                    "product id and name can't be null, row {}",
                    self.rows + row
                )));
            }

            let name = names.value(row);
            let category = match categories {
                Some(c) if c.is_null(row) => CATEGORY_GENERAL.to_string(),
                Some(c) => c.value(row).to_string(),
                None => category_from_name(name),
            };

            out.push(ProductRef {
                id: ids.value(row),
                name: name.to_string(),
                category,
            });
        }

        self.rows += out.len();
        Ok(out)
    }
}

impl Iterator for ProductReader {
    type Item = Result<Vec<ProductRef>>;

    fn next(&mut self) -> Option<Self::Item> {
        let batch = self.reader.next()?;
        Some(batch.map_err(DatagenError::from).and_then(|b| self.convert(b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_name() {
        assert_eq!(category_from_name("Books_Dune"), "Books");
        assert_eq!(category_from_name("Books_Dune_2"), "Books");
        assert_eq!(category_from_name("Dune"), "General");
        assert_eq!(category_from_name("_Dune"), "General");
    }
}
