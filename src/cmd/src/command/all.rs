use std::path::PathBuf;

use clap::Parser;
use common::config::Config;
use common::types::Dataset;
use datagen::products::ProductGenerator;
use datagen::scenario;
use datagen::scenario::Scenario;
use datagen::scenario::Sinks;
use datagen::scenario::Summary;
use datagen::schema::products_schema;
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
use crate::error::Result;

#[derive(Parser, Clone, Debug, Default)]
pub struct All {
    /// Number of products
    #[arg(long)]
    pub rows: Option<usize>,
    #[arg(long)]
    pub products_output: Option<PathBuf>,
    #[arg(long)]
    pub reviews_output: Option<PathBuf>,
    #[clap(flatten)]
    pub review: ReviewArgs,
    #[clap(flatten)]
    pub gen: GeneratorArgs,
    #[clap(flatten)]
    pub out: OutputArgs,
}

impl All {
    pub fn apply(&self, cfg: &mut Config) -> Result<()> {
        self.gen.apply(&mut cfg.generator);
        self.out.apply(&mut cfg.output);
        self.review.apply(&mut cfg.reviews)?;
        if let Some(rows) = self.rows {
            cfg.products.rows = rows;
        }
        if let Some(path) = &self.products_output {
            cfg.products.path = path.clone();
        }
        if let Some(path) = &self.reviews_output {
            cfg.reviews.path = path.clone();
        }

        Ok(())
    }
}

pub fn start(args: &All, mut cfg: Config) -> Result<Summary> {
    args.apply(&mut cfg)?;
    log_schema("products", &products_schema());
    log_schema("reviews", &reviews_schema());

    let rows = cfg.products.rows;
    info!(
        "generating {rows} products to {:?} and their reviews to {:?}",
        cfg.products.path, cfg.reviews.path
    );
    let opts = write_options(&cfg.output);
    let sinks = Sinks {
        products: Some(writer::create(
            &cfg.products.path,
            Dataset::Products,
            products_schema(),
            &opts,
        )?),
        reviews: Some(writer::create(
            &cfg.reviews.path,
            Dataset::Reviews,
            reviews_schema(),
            &opts,
        )?),
    };

    let scenario = Scenario::new(scenario::Config {
        seed: cfg.generator.seed,
        batch_size: cfg.generator.batch_size,
        partitions: cfg.generator.partitions,
        products: Some(ProductGenerator::try_new()?),
        reviews: Some(review_generator(&cfg.reviews)?),
        progress: progress_bar(rows, "products")?,
    });

    let summary = scenario.run_products(rows, sinks)?;
    report(&summary);

    Ok(summary)
}
