use std::ops::Range;

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::catalog::Catalog;
use crate::error::Result;

pub const PRICE_MIN: f64 = 4.99;
pub const PRICE_MAX: f64 = 999.99;
pub const INVENTORY_MAX: i32 = 250_000;
pub const MARGIN_MIN: f64 = 0.05;
pub const MARGIN_MAX: f64 = 0.75;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub category: String,
    pub name: String,
    pub price_usd: f64,
    pub inventory_count: i32,
    pub margin: f64,
}

impl Product {
    pub fn to_ref(&self) -> ProductRef {
        ProductRef {
            id: self.id,
            name: self.name.clone(),
            category: self.category.clone(),
        }
    }
}

/// The part of a product a review needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRef {
    pub id: i64,
    pub name: String,
    pub category: String,
}

pub fn round_to(v: f64, digits: i32) -> f64 {
    let m = 10f64.powi(digits);
    (v * m).round() / m
}

pub struct ProductGenerator {
    catalog: Catalog,
}

impl ProductGenerator {
    pub fn try_new() -> Result<Self> {
        Ok(Self {
            catalog: Catalog::try_new()?,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn generate(&self, rng: &mut StdRng, ids: Range<i64>) -> Vec<Product> {
        let mut products = Vec::with_capacity((ids.end - ids.start).max(0) as usize);
        for id in ids {
            let category = self.catalog.category_for_id(id);
            let name = self.catalog.sample_name(rng, category);

            products.push(Product {
                id,
                category: category.name.to_string(),
                name,
                price_usd: round_to(rng.gen_range(PRICE_MIN..PRICE_MAX), 2),
                inventory_count: rng.gen_range(0..INVENTORY_MAX),
                margin: round_to(rng.gen_range(MARGIN_MIN..MARGIN_MAX), 4),
            });
        }

        products
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_generate_ranges() {
        let gen = ProductGenerator::try_new().unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let products = gen.generate(&mut rng, 1..1001);

        assert_eq!(products.len(), 1000);
        for (idx, p) in products.iter().enumerate() {
            assert_eq!(p.id, idx as i64 + 1);
            assert!(p.price_usd >= PRICE_MIN && p.price_usd <= PRICE_MAX);
            assert_eq!(round_to(p.price_usd, 2), p.price_usd);
            assert!(p.inventory_count >= 0 && p.inventory_count < INVENTORY_MAX);
            assert!(p.margin >= MARGIN_MIN && p.margin <= MARGIN_MAX);
            assert_eq!(round_to(p.margin, 4), p.margin);
            assert_eq!(p.category, gen.catalog().category_for_id(p.id).name);
        }
    }

    #[test]
    fn test_categories_evenly_spread() {
        let gen = ProductGenerator::try_new().unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let products = gen.generate(&mut rng, 1..201);
        for cat in gen.catalog().categories() {
            assert_eq!(products.iter().filter(|p| p.category == cat).count(), 10);
        }
    }

    #[test]
    fn test_same_seed_same_products() {
        let gen = ProductGenerator::try_new().unwrap();
        let a = gen.generate(&mut StdRng::seed_from_u64(5), 100..150);
        let b = gen.generate(&mut StdRng::seed_from_u64(5), 100..150);
        assert_eq!(a, b);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(12.345678, 2), 12.35);
        assert_eq!(round_to(0.123456, 4), 0.1235);
    }
}
