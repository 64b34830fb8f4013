use std::path::PathBuf;

use clap::Parser;
use common::config::Config;
use common::types::Dataset;
use datagen::reader::Columns;
use datagen::reader::ProductReader;
use datagen::scenario;
use datagen::scenario::Scenario;
use datagen::scenario::Sinks;
use datagen::scenario::Summary;
use datagen::schema::reviews_schema;
use datagen::writer;
use tracing::info;

use crate::command::log_schema;
use crate::command::progress_bar;
use crate::command::report;
use crate::command::review_generator;
use crate::command::write_options;
use crate::command::GeneratorArgs;
use crate::command::OutputArgs;
use crate::command::ReviewArgs;
use crate::error::Error;
use crate::error::Result;

#[derive(Parser, Clone, Debug, Default)]
pub struct Reviews {
    /// Products parquet file, [products] path by default
    #[arg(long)]
    pub input: Option<PathBuf>,
    #[arg(long)]
    pub output: Option<PathBuf>,
    #[arg(long)]
    pub id_column: Option<String>,
    #[arg(long)]
    pub name_column: Option<String>,
    /// Empty to derive categories from product names
    #[arg(long)]
    pub category_column: Option<String>,
    #[clap(flatten)]
    pub review: ReviewArgs,
    #[clap(flatten)]
    pub gen: GeneratorArgs,
    #[clap(flatten)]
    pub out: OutputArgs,
}

impl Reviews {
    pub fn apply(&self, cfg: &mut Config) -> Result<()> {
        self.gen.apply(&mut cfg.generator);
        self.out.apply(&mut cfg.output);
        self.review.apply(&mut cfg.reviews)?;
        if let Some(path) = &self.input {
            cfg.products.path = path.clone();
        }
        if let Some(path) = &self.output {
            cfg.reviews.path = path.clone();
        }
        let cols = &mut cfg.reviews.columns;
        if let Some(id) = &self.id_column {
            cols.id = id.clone();
        }
        if let Some(name) = &self.name_column {
            cols.name = name.clone();
        }
        if let Some(category) = &self.category_column {
            cols.category = category.clone();
        }

        Ok(())
    }
}

pub fn start(args: &Reviews, mut cfg: Config) -> Result<Summary> {
    args.apply(&mut cfg)?;

    let input = &cfg.products.path;
    if !input.try_exists()? {
        return Err(Error::FileNotFound(format!(
            "products file {:?} doesn't exist",
            input
        )));
    }

    let cols = &cfg.reviews.columns;
    let columns = Columns {
        id: cols.id.clone(),
        name: cols.name.clone(),
        category: (!cols.category.is_empty()).then(|| cols.category.clone()),
    };
    let reader = ProductReader::try_new(input, &columns, cfg.generator.batch_size)?;
    info!(
        "generating reviews for {} products from {:?} to {:?}",
        reader.total_rows(),
        input,
        cfg.reviews.path
    );
    log_schema("reviews", &reviews_schema());

    let sinks = Sinks {
        products: None,
        reviews: Some(writer::create(
            &cfg.reviews.path,
            Dataset::Reviews,
            reviews_schema(),
            &write_options(&cfg.output),
        )?),
    };

    let scenario = Scenario::new(scenario::Config {
        seed: cfg.generator.seed,
        batch_size: cfg.generator.batch_size,
        partitions: cfg.generator.partitions,
        products: None,
        reviews: Some(review_generator(&cfg.reviews)?),
        progress: progress_bar(reader.total_rows(), "products")?,
    });

    let summary = scenario.run_reviews(reader, sinks)?;
    report(&summary);

    Ok(summary)
}
