use std::collections::BTreeMap;
use std::ops::Range;
use std::thread;
use std::time::Instant;

use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;
use common::types::Dataset;
use crossbeam_channel::bounded;
use indicatif::ProgressBar;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;
use tracing::info;
use tracing::trace;

use crate::batch_builder::ProductBatchBuilder;
use crate::batch_builder::ReviewBatchBuilder;
use crate::error::DatagenError;
use crate::error::Result;
use crate::products::ProductGenerator;
use crate::products::ProductRef;
use crate::reviews::Review;
use crate::reviews::ReviewGenerator;
use crate::schema::products_schema;
use crate::schema::reviews_schema;
use crate::writer::BatchWriter;
use crate::writer::WriteSummary;

const SAMPLE_ROWS: usize = 5;

/// Seed of the rng of a single batch.
pub fn batch_seed(seed: u64, dataset: Dataset, idx: usize) -> u64 {
    let tag: u64 = match dataset {
        Dataset::Products => 0x7072_6f64,
        Dataset::Reviews => 0x7276_7773,
    };
    let mut z = seed ^ tag.rotate_left(32) ^ (idx as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Ids of the products of batch `idx`, starting from 1.
pub fn batch_ids(idx: usize, batch_size: usize, rows: usize) -> Range<i64> {
    let start = idx * batch_size;
    let end = (start + batch_size).min(rows);
    (start as i64 + 1)..(end as i64 + 1)
}

pub enum Input {
    // products with these ids are generated
    Range(Range<i64>),
    Products(Vec<ProductRef>),
}

struct Job {
    idx: usize,
    input: Input,
}

struct Output {
    idx: usize,
    products: Option<RecordBatch>,
    reviews: Vec<Review>,
    count: usize,
}

#[derive(Default)]
pub struct Sinks {
    pub products: Option<Box<dyn BatchWriter>>,
    pub reviews: Option<Box<dyn BatchWriter>>,
}

#[derive(Debug, Clone)]
pub struct Summary {
    pub products: Option<WriteSummary>,
    pub reviews: Option<WriteSummary>,
    pub elapsed: std::time::Duration,
}

pub struct Config {
    pub seed: u64,
    pub batch_size: usize,
    pub partitions: usize,
    pub products: Option<ProductGenerator>,
    pub reviews: Option<ReviewGenerator>,
    pub progress: ProgressBar,
}

pub struct Scenario {
    seed: u64,
    batch_size: usize,
    partitions: usize,
    products: Option<ProductGenerator>,
    reviews: Option<ReviewGenerator>,
    progress: ProgressBar,
}

impl Scenario {
    pub fn new(cfg: Config) -> Self {
        Self {
            seed: cfg.seed,
            batch_size: cfg.batch_size.max(1),
            partitions: cfg.partitions.max(1),
            products: cfg.products,
            reviews: cfg.reviews,
            progress: cfg.progress,
        }
    }

    /// Generates `rows` products, and their reviews when a review generator is set.
    pub fn run_products(&self, rows: usize, sinks: Sinks) -> Result<Summary> {
        if self.products.is_none() || sinks.products.is_none() {
            return Err(DatagenError::Config(
                "products generation needs a product generator and an output".to_string(),
            ));
        }

        let batch_size = self.batch_size;
        let batches = rows.div_ceil(batch_size);
        info!("generating {rows} products in {batches} batches using {} partitions", self.partitions);
        let jobs = (0..batches).map(move |idx| Ok(Input::Range(batch_ids(idx, batch_size, rows))));

        self.run(jobs, sinks)
    }

    /// Generates reviews for the products of `source`.
    pub fn run_reviews<I>(&self, source: I, sinks: Sinks) -> Result<Summary>
    where I: Iterator<Item = Result<Vec<ProductRef>>> + Send {
        if sinks.products.is_some() {
            return Err(DatagenError::Config(
                "products can't be written when reading them from a file".to_string(),
            ));
        }

        info!("generating reviews using {} partitions", self.partitions);
        self.run(source.map(|res| res.map(Input::Products)), sinks)
    }

    fn run<I>(&self, jobs: I, mut sinks: Sinks) -> Result<Summary>
    where I: Iterator<Item = Result<Input>> + Send {
        if self.reviews.is_some() != sinks.reviews.is_some() {
            return Err(DatagenError::Config(
                "reviews generation needs a review generator and an output".to_string(),
            ));
        }

        let start = Instant::now();
        let cap = self.partitions * 2;
        let (job_tx, job_rx) = bounded::<Job>(cap);
        let (res_tx, res_rx) = bounded::<Result<Output>>(cap);

        thread::scope(|s| -> Result<()> {
            let feeder_tx = res_tx.clone();
            s.spawn(move || {
                for (idx, input) in jobs.enumerate() {
                    let sent = match input {
                        Ok(input) => job_tx.send(Job { idx, input }).is_ok(),
                        Err(err) => {
                            let _ = feeder_tx.send(Err(err));
                            false
                        }
                    };
                    if !sent {
                        return;
                    }
                }
            });

            for partition in 0..self.partitions {
                let job_rx = job_rx.clone();
                let res_tx = res_tx.clone();
                s.spawn(move || {
                    for job in job_rx.iter() {
                        trace!("partition {partition}: batch {}", job.idx);
                        if res_tx.send(self.process(job)).is_err() {
                            return;
                        }
                    }
                });
            }
            drop(job_rx);
            drop(res_tx);

            // dropping the receiver on error stops the workers and the feeder
            let res_rx = res_rx;
            let mut reviews = ReviewBatchBuilder::new(self.batch_size, reviews_schema(), 1);
            let mut pending = BTreeMap::new();
            let mut next = 0;
            for res in res_rx.iter() {
                let out = res?;
                pending.insert(out.idx, out);
                while let Some(out) = pending.remove(&next) {
                    self.write(out, &mut sinks, &mut reviews)?;
                    next += 1;
                }
            }

            if !pending.is_empty() {
                return Err(DatagenError::Internal(format!("batch {next} is missing")));
            }

            Ok(())
        })?;

        self.progress.finish();
        let products = sinks.products.map(|w| w.close()).transpose()?;
        let reviews = sinks.reviews.map(|w| w.close()).transpose()?;

        Ok(Summary {
            products,
            reviews,
            elapsed: start.elapsed(),
        })
    }

    fn process(&self, job: Job) -> Result<Output> {
        let (refs, products) = match job.input {
            Input::Range(ids) => {
                let gen = self.products.as_ref().ok_or_else(|| {
                    DatagenError::Internal("product generator is not set".to_string())
                })?;
                let mut rng =
                    StdRng::seed_from_u64(batch_seed(self.seed, Dataset::Products, job.idx));
                let products = gen.generate(&mut rng, ids);

                let mut builder = ProductBatchBuilder::new(products.len(), products_schema());
                for product in products.iter() {
                    builder.write_product(product);
                }
                let refs = match self.reviews {
                    Some(_) => products.iter().map(|p| p.to_ref()).collect(),
                    None => vec![],
                };

                (refs, Some(builder.build_record_batch()?))
            }
            Input::Products(refs) => (refs, None),
        };

        let count = products.as_ref().map(|b| b.num_rows()).unwrap_or(refs.len());
        let reviews = match &self.reviews {
            Some(gen) => {
                let mut rng =
                    StdRng::seed_from_u64(batch_seed(self.seed, Dataset::Reviews, job.idx));
                gen.generate(&mut rng, &refs)
            }
            None => vec![],
        };

        Ok(Output {
            idx: job.idx,
            products,
            reviews,
            count,
        })
    }

    fn write(
        &self,
        out: Output,
        sinks: &mut Sinks,
        reviews: &mut ReviewBatchBuilder,
    ) -> Result<()> {
        if let (Some(batch), Some(w)) = (&out.products, sinks.products.as_mut()) {
            if out.idx == 0 && batch.num_rows() > 0 {
                let sample = batch.slice(0, SAMPLE_ROWS.min(batch.num_rows()));
                debug!("products sample:\n{}", pretty_format_batches(&[sample])?);
            }
            w.write(batch)?;
        }

        if let Some(w) = sinks.reviews.as_mut() {
            if !out.reviews.is_empty() {
                for review in out.reviews.iter() {
                    reviews.write_review(review);
                }
                w.write(&reviews.build_record_batch()?)?;
            }
        }

        debug!(
            "batch {}: {} products, {} reviews",
            out.idx,
            out.count,
            out.reviews.len()
        );
        self.progress.inc(out.count as u64);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_ids() {
        assert_eq!(batch_ids(0, 10, 25), 1..11);
        assert_eq!(batch_ids(1, 10, 25), 11..21);
        assert_eq!(batch_ids(2, 10, 25), 21..26);
    }

    #[test]
    fn test_batch_seed() {
        assert_eq!(
            batch_seed(42, Dataset::Products, 3),
            batch_seed(42, Dataset::Products, 3)
        );
        assert_ne!(
            batch_seed(42, Dataset::Products, 3),
            batch_seed(42, Dataset::Reviews, 3)
        );
        assert_ne!(
            batch_seed(42, Dataset::Products, 3),
            batch_seed(42, Dataset::Products, 4)
        );
        assert_ne!(
            batch_seed(42, Dataset::Products, 0),
            batch_seed(43, Dataset::Products, 0)
        );
    }

    #[test]
    fn test_missing_output() {
        let scenario = Scenario::new(Config {
            seed: 1,
            batch_size: 10,
            partitions: 1,
            products: Some(ProductGenerator::try_new().unwrap()),
            reviews: None,
            progress: ProgressBar::hidden(),
        });

        assert!(scenario.run_products(10, Sinks::default()).is_err());
    }
}
