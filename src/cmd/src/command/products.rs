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
use datagen::writer;
use tracing::info;

use crate::command::log_schema;
use crate::command::progress_bar;
use crate::command::report;
use crate::command::write_options;
use crate::command::GeneratorArgs;
use crate::command::OutputArgs;
use crate::error::Result;

#[derive(Parser, Clone, Debug, Default)]
pub struct Products {
    /// Number of products
    #[arg(long)]
    pub rows: Option<usize>,
    #[arg(long)]
    pub output: Option<PathBuf>,
    #[clap(flatten)]
    pub gen: GeneratorArgs,
    #[clap(flatten)]
    pub out: OutputArgs,
}

impl Products {
    pub fn apply(&self, cfg: &mut Config) {
        self.gen.apply(&mut cfg.generator);
        self.out.apply(&mut cfg.output);
        if let Some(rows) = self.rows {
            cfg.products.rows = rows;
        }
        if let Some(path) = &self.output {
            cfg.products.path = path.clone();
        }
    }
}

pub fn start(args: &Products, mut cfg: Config) -> Result<Summary> {
    args.apply(&mut cfg);
    log_schema("products", &products_schema());

    let rows = cfg.products.rows;
    info!("generating {rows} products to {:?}", cfg.products.path);
    let sinks = Sinks {
        products: Some(writer::create(
            &cfg.products.path,
            Dataset::Products,
            products_schema(),
            &write_options(&cfg.output),
        )?),
        reviews: None,
    };

    let scenario = Scenario::new(scenario::Config {
        seed: cfg.generator.seed,
        batch_size: cfg.generator.batch_size,
        partitions: cfg.generator.partitions,
        products: Some(ProductGenerator::try_new()?),
        reviews: None,
        progress: progress_bar(rows, "products")?,
    });

    let summary = scenario.run_products(rows, sinks)?;
    report(&summary);

    Ok(summary)
}
