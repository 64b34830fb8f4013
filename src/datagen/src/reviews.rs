use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::error::DatagenError;
use crate::error::Result;
use crate::persona::PersonaProvider;
use crate::persona::Reviewer;
use crate::products::ProductRef;
use crate::rating::bias_key;
use crate::rating::RatingSampler;
use crate::rating::ReviewCountSampler;
use crate::text::make_review_text;

/// A review without its id; ids are assigned in output order by the batch builder.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub product: ProductRef,
    pub rating: i8,
    pub text: String,
    pub reviewer: Reviewer,
    pub created_at: i64,
}

pub struct Config {
    pub max_reviews: usize,
    pub to_date: DateTime<Utc>,
    pub period: Duration,
}

pub struct ReviewGenerator {
    personas: PersonaProvider,
    ratings: RatingSampler,
    counts: ReviewCountSampler,
    from_ts: i64,
    to_ts: i64,
}

impl ReviewGenerator {
    pub fn try_new(cfg: Config) -> Result<Self> {
        if cfg.period < Duration::zero() {
            return Err(DatagenError::Config(format!(
                "review period can't be negative: {}",
                cfg.period
            )));
        }
        let from = cfg.to_date.checked_sub_signed(cfg.period).ok_or_else(|| {
            DatagenError::Config(format!(
                "review period {} is out of range for {}",
                cfg.period, cfg.to_date
            ))
        })?;

        Ok(Self {
            personas: PersonaProvider::new(),
            ratings: RatingSampler::try_new()?,
            counts: ReviewCountSampler::try_new(cfg.max_reviews)?,
            from_ts: from.timestamp(),
            to_ts: cfg.to_date.timestamp(),
        })
    }

    pub fn max_reviews(&self) -> usize {
        self.counts.max_reviews()
    }

    pub fn sample_timestamp(&self, rng: &mut StdRng) -> i64 {
        rng.gen_range(self.from_ts..=self.to_ts)
    }

    pub fn generate_for_product(&self, rng: &mut StdRng, product: &ProductRef, out: &mut Vec<Review>) {
        let n = self.counts.sample(rng);
        if n == 0 {
            return;
        }

        let product = ProductRef {
            category: bias_key(&product.category).to_string(),
            ..product.clone()
        };
        for _ in 0..n {
            let reviewer = self.personas.sample(rng);
            let rating = self.ratings.sample(rng, &product.category);
            let text = make_review_text(rng, rating, &product.name, &product.category, &reviewer);
            let created_at = self.sample_timestamp(rng);

            out.push(Review {
                product: product.clone(),
                rating,
                text,
                reviewer,
                created_at,
            });
        }
    }

    pub fn generate(&self, rng: &mut StdRng, products: &[ProductRef]) -> Vec<Review> {
        let mut out = Vec::with_capacity(products.len() * 2);
        for product in products {
            self.generate_for_product(rng, product, &mut out);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rand::SeedableRng;

    use super::*;

    fn products() -> Vec<ProductRef> {
        (1..=100)
            .map(|id| ProductRef {
                id,
                name: format!("Product {id}"),
                category: if id % 2 == 0 { "Books" } else { "Electronics" }.to_string(),
            })
            .collect()
    }

    fn config(max_reviews: usize) -> Config {
        Config {
            max_reviews,
            to_date: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            period: Duration::days(365 * 3),
        }
    }

    #[test]
    fn test_reviews_reference_products() {
        let gen = ReviewGenerator::try_new(config(5)).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let products = products();
        let reviews = gen.generate(&mut rng, &products);

        assert!(!reviews.is_empty());
        let to = config(5).to_date;
        let from = to - Duration::days(365 * 3);
        for r in reviews.iter() {
            assert!(products.contains(&r.product));
            assert!((1..=5).contains(&r.rating));
            assert!(r.created_at >= from.timestamp() && r.created_at <= to.timestamp());
            assert!(r.text.contains(&r.product.name));
        }

        // reviews come grouped in product order
        let ids = reviews.iter().map(|r| r.product.id).collect::<Vec<_>>();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_per_product_limit() {
        let gen = ReviewGenerator::try_new(config(1)).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let reviews = gen.generate(&mut rng, &products());
        for p in products() {
            assert!(reviews.iter().filter(|r| r.product.id == p.id).count() <= 1);
        }
    }

    #[test]
    fn test_no_reviews() {
        let gen = ReviewGenerator::try_new(config(0)).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(gen.generate(&mut rng, &products()).is_empty());
    }

    #[test]
    fn test_category_without_bias_becomes_general() {
        let gen = ReviewGenerator::try_new(config(5)).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let products = (1..=50)
            .map(|id| ProductRef {
                id,
                name: format!("Kettle {id}"),
                category: "Home & Kitchen".to_string(),
            })
            .collect::<Vec<_>>();
        let reviews = gen.generate(&mut rng, &products);

        assert!(!reviews.is_empty());
        for r in reviews.iter() {
            assert_eq!(r.product.category, "General");
            assert!(r.text.contains("In the General category"));
            assert_eq!(r.product.name, products[(r.product.id - 1) as usize].name);
        }
    }

    #[test]
    fn test_period_out_of_range() {
        let mut c = config(3);
        c.period = Duration::days(365 * 1_000_000);
        assert!(ReviewGenerator::try_new(c).is_err());
    }

    #[test]
    fn test_negative_period() {
        let mut c = config(3);
        c.period = Duration::days(-1);
        assert!(ReviewGenerator::try_new(c).is_err());
    }
}
