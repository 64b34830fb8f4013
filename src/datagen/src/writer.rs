use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use arrow::csv;
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use common::types::Compression;
use common::types::Dataset;
use common::types::OutputFormat;
use common::types::METADATA_DATASET_KEY;
use common::types::REVIEW_DATE_FORMAT;
use parquet::arrow::ArrowWriter;
use parquet::basic;
use parquet::basic::GzipLevel;
use parquet::basic::ZstdLevel;
use parquet::file::metadata::KeyValue;
use parquet::file::properties::WriterProperties;
use tracing::debug;

use crate::error::Result;

#[derive(Debug, Clone)]
pub struct Options {
    pub format: Option<OutputFormat>,
    pub compression: Compression,
    pub dictionary: bool,
    pub max_row_group_size: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            format: None,
            compression: Compression::Snappy,
            dictionary: true,
            max_row_group_size: common::types::DEFAULT_MAX_ROW_GROUP_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub rows: usize,
    pub batches: usize,
    pub bytes: u64,
}

/// Serializes record batches of a single schema into one file.
pub trait BatchWriter {
    fn write(&mut self, batch: &RecordBatch) -> Result<()>;
    fn close(self: Box<Self>) -> Result<WriteSummary>;
}

pub fn create(
    path: &Path,
    dataset: Dataset,
    schema: SchemaRef,
    opts: &Options,
) -> Result<Box<dyn BatchWriter>> {
    let format = match opts.format {
        Some(format) => format,
        None => OutputFormat::from_path(path)?,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.try_exists()? {
            fs::create_dir_all(parent)?;
        }
    }

    debug!("creating {format} writer for {dataset} at {:?}", path);
    let file = File::create(path)?;
    let writer: Box<dyn BatchWriter> = match format {
        OutputFormat::Parquet => Box::new(ParquetBatchWriter::try_new(
            file,
            path.to_path_buf(),
            dataset,
            schema,
            opts,
        )?),
        OutputFormat::Csv => Box::new(CsvBatchWriter::new(file, path.to_path_buf(), b',', format)),
        OutputFormat::Tsv => Box::new(CsvBatchWriter::new(file, path.to_path_buf(), b'\t', format)),
    };

    Ok(writer)
}

pub fn writer_properties(dataset: Dataset, opts: &Options) -> WriterProperties {
    let compression = match opts.compression {
        Compression::Uncompressed => basic::Compression::UNCOMPRESSED,
        Compression::Snappy => basic::Compression::SNAPPY,
        Compression::Zstd => basic::Compression::ZSTD(ZstdLevel::default()),
        Compression::Gzip => basic::Compression::GZIP(GzipLevel::default()),
        Compression::Lz4 => basic::Compression::LZ4,
    };

    WriterProperties::builder()
        .set_compression(compression)
        .set_dictionary_enabled(opts.dictionary)
        .set_max_row_group_size(opts.max_row_group_size.max(1))
        .set_key_value_metadata(Some(vec![KeyValue::new(
            METADATA_DATASET_KEY.to_string(),
            dataset.to_string(),
        )]))
        .build()
}

pub struct ParquetBatchWriter {
    writer: ArrowWriter<File>,
    path: PathBuf,
    rows: usize,
    batches: usize,
}

impl ParquetBatchWriter {
    pub fn try_new(
        file: File,
        path: PathBuf,
        dataset: Dataset,
        schema: SchemaRef,
        opts: &Options,
    ) -> Result<Self> {
        let props = writer_properties(dataset, opts);
        Ok(Self {
            writer: ArrowWriter::try_new(file, schema, Some(props))?,
            path,
            rows: 0,
            batches: 0,
        })
    }
}

impl BatchWriter for ParquetBatchWriter {
    fn write(&mut self, batch: &RecordBatch) -> Result<()> {
        self.writer.write(batch)?;
        self.rows += batch.num_rows();
        self.batches += 1;

        Ok(())
    }

    fn close(self: Box<Self>) -> Result<WriteSummary> {
        // writes the footer with the schema and row group metadata
        self.writer.close()?;
        let bytes = fs::metadata(&self.path)?.len();

        Ok(WriteSummary {
            path: self.path,
            format: OutputFormat::Parquet,
            rows: self.rows,
            batches: self.batches,
            bytes,
        })
    }
}

pub struct CsvBatchWriter {
    writer: csv::Writer<BufWriter<File>>,
    path: PathBuf,
    format: OutputFormat,
    rows: usize,
    batches: usize,
}

impl CsvBatchWriter {
    pub fn new(file: File, path: PathBuf, delimiter: u8, format: OutputFormat) -> Self {
        // header is written with the first batch only
        let writer = csv::WriterBuilder::new()
            .with_header(true)
            .with_delimiter(delimiter)
            .with_timestamp_format(REVIEW_DATE_FORMAT.to_string())
            .build(BufWriter::new(file));

        Self {
            writer,
            path,
            format,
            rows: 0,
            batches: 0,
        }
    }
}

impl BatchWriter for CsvBatchWriter {
    fn write(&mut self, batch: &RecordBatch) -> Result<()> {
        self.writer.write(batch)?;
        self.rows += batch.num_rows();
        self.batches += 1;

        Ok(())
    }

    fn close(self: Box<Self>) -> Result<WriteSummary> {
        let mut inner = self.writer.into_inner();
        inner.flush()?;
        drop(inner);
        let bytes = fs::metadata(&self.path)?.len();

        Ok(WriteSummary {
            path: self.path,
            format: self.format,
            rows: self.rows,
            batches: self.batches,
            bytes,
        })
    }
}
