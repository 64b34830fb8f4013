use arrow::datatypes::Schema;
use bytesize::ByteSize;
use clap::Parser;
use common::config;
use common::types::Compression;
use common::types::OutputFormat;
use datagen::reviews::Config as ReviewsConfig;
use datagen::reviews::ReviewGenerator;
use datagen::scenario::Summary;
use datagen::schema::describe;
use datagen::writer;
use datagen::writer::WriteSummary;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use tracing::info;

use crate::config::parse_date;
use crate::config::parse_duration;
use crate::error::Result;

pub mod all;
pub mod products;
pub mod reviews;

#[derive(Parser, Clone, Debug, Default)]
pub struct GeneratorArgs {
    /// Random seed, the same seed gives the same output
    #[arg(long)]
    pub seed: Option<u64>,
    /// Rows per generated batch
    #[arg(long)]
    pub batch_size: Option<usize>,
    /// Worker threads, 0 for one per cpu
    #[arg(long)]
    pub partitions: Option<usize>,
}

impl GeneratorArgs {
    pub fn apply(&self, cfg: &mut config::Generator) {
        if let Some(seed) = self.seed {
            cfg.seed = seed;
        }
        if let Some(batch_size) = self.batch_size {
            cfg.batch_size = batch_size;
        }
        match self.partitions {
            Some(0) => cfg.partitions = num_cpus::get(),
            Some(n) => cfg.partitions = n,
            None => {}
        }
    }
}

#[derive(Parser, Clone, Debug, Default)]
pub struct OutputArgs {
    /// Output format, inferred from the file extension when not set
    #[arg(long)]
    pub format: Option<OutputFormat>,
    #[arg(long)]
    pub compression: Option<Compression>,
    /// Disable parquet dictionary encoding
    #[arg(long)]
    pub no_dictionary: bool,
    #[arg(long)]
    pub max_row_group_size: Option<usize>,
}

impl OutputArgs {
    pub fn apply(&self, cfg: &mut config::Output) {
        if self.format.is_some() {
            cfg.format = self.format;
        }
        if let Some(compression) = self.compression {
            cfg.compression = compression;
        }
        if self.no_dictionary {
            cfg.dictionary = false;
        }
        if let Some(size) = self.max_row_group_size {
            cfg.max_row_group_size = size;
        }
    }
}

#[derive(Parser, Clone, Debug, Default)]
pub struct ReviewArgs {
    /// Upper bound of reviews per product, at most 5
    #[arg(long)]
    pub max_reviews_per_product: Option<usize>,
    /// How far back from --to-date review dates go, e.g. "3 years"
    #[arg(long)]
    pub period: Option<String>,
    /// Latest review date, now by default
    #[arg(long)]
    pub to_date: Option<String>,
}

impl ReviewArgs {
    pub fn apply(&self, cfg: &mut config::Reviews) -> Result<()> {
        if let Some(max) = self.max_reviews_per_product {
            cfg.max_per_product = max;
        }
        if let Some(period) = &self.period {
            cfg.period = parse_duration(period)?;
        }
        if let Some(to_date) = &self.to_date {
            cfg.to_date = parse_date(to_date)?;
        }

        Ok(())
    }
}

pub fn write_options(cfg: &config::Output) -> writer::Options {
    writer::Options {
        format: cfg.format,
        compression: cfg.compression,
        dictionary: cfg.dictionary,
        max_row_group_size: cfg.max_row_group_size,
    }
}

pub fn review_generator(cfg: &config::Reviews) -> Result<ReviewGenerator> {
    Ok(ReviewGenerator::try_new(ReviewsConfig {
        max_reviews: cfg.max_per_product,
        to_date: cfg.to_date,
        period: cfg.period,
    })?)
}

pub fn progress_bar(len: usize, unit: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::with_template(&format!(
            "{{spinner:.green}} [{{elapsed_precise}}] [{{wide_bar:.cyan/blue}}] {{pos}}/{{len}} {unit} ({{eta}})"
        ))?
        .progress_chars("#>-"),
    );

    Ok(pb)
}

pub fn log_schema(name: &str, schema: &Schema) {
    info!("{name} schema:");
    for (col, typ) in describe(schema) {
        info!("  {col}: {typ}");
    }
}

fn log_written(name: &str, summary: &WriteSummary) {
    info!(
        "{name}: {} rows in {} batches, {} {} written to {:?}",
        summary.rows,
        summary.batches,
        ByteSize(summary.bytes),
        summary.format,
        summary.path
    );
}

pub fn report(summary: &Summary) {
    if let Some(products) = &summary.products {
        log_written("products", products);
    }
    if let Some(reviews) = &summary.reviews {
        log_written("reviews", reviews);
    }
    info!(
        "elapsed: {}",
        humantime::format_duration(std::time::Duration::from_millis(
            summary.elapsed.as_millis() as u64
        ))
    );
}
