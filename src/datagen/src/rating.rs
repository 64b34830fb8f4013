use std::collections::HashMap;

use common::types::CATEGORY_GENERAL;
use rand::distributions::WeightedIndex;
use rand::prelude::*;
use rand::rngs::StdRng;
use tracing::warn;

use crate::error::DatagenError;
use crate::error::Result;

/// Probabilities of ratings 1..=5 before the category bias is applied.
pub const BASE_RATING_PROBS: [f64; 5] = [0.07, 0.11, 0.22, 0.33, 0.27];

pub const CATEGORY_BIASES: &[(&str, f64)] = &[
    ("Electronics", -0.10),
    ("Automotive", -0.08),
    ("Tools", -0.05),
    ("Clothing", 0.02),
    ("Shoes", 0.01),
    ("Toys", 0.03),
    ("Books", 0.08),
    ("Music", 0.06),
    ("Movies", 0.04),
    ("Health", 0.00),
    ("Beauty", 0.03),
    ("Grocery", 0.02),
    ("Home", 0.03),
    ("Garden", 0.01),
    ("Sports", 0.00),
    ("Office", 0.02),
    ("Pets", 0.04),
    ("Baby", 0.05),
    ("Outdoors", -0.02),
    ("Jewelry", 0.05),
    (CATEGORY_GENERAL, 0.0),
];

pub const REVIEW_COUNT_WEIGHTS: [f64; 6] = [0.20, 0.28, 0.22, 0.15, 0.10, 0.05];

const MAX_SHIFT: f64 = 0.15;
const MIN_PROB: f64 = 1e-6;

/// Category as reviews see it: names without a bias entry collapse to the general category.
pub fn bias_key(category: &str) -> &'static str {
    CATEGORY_BIASES
        .iter()
        .find(|(cat, _)| *cat == category)
        .map(|(cat, _)| *cat)
        .unwrap_or(CATEGORY_GENERAL)
}

pub fn category_bias(category: &str) -> f64 {
    let key = bias_key(category);
    CATEGORY_BIASES
        .iter()
        .find(|(cat, _)| *cat == key)
        .map(|(_, bias)| *bias)
        .unwrap_or(0.0)
}

// moves `shift` of the mass held by `from` into `to`, proportionally to what `to` already holds
fn move_mass(probs: &mut [f64; 5], from: [usize; 2], to: [usize; 2], shift: f64) {
    let from_total = probs[from[0]] + probs[from[1]];
    let moved = shift * from_total;
    if moved <= 0. {
        return;
    }

    for idx in from {
        probs[idx] -= probs[idx] * (moved / from_total);
    }

    let to_total = probs[to[0]] + probs[to[1]];
    for idx in to {
        if to_total <= 0. {
            probs[idx] += moved * 0.5;
        } else {
            probs[idx] += moved * (probs[idx] / to_total);
        }
    }
}

pub fn adjust_probs_for_bias(base: [f64; 5], bias: f64) -> [f64; 5] {
    let mut probs = base;
    if bias == 0. {
        return probs;
    }

    let shift = (bias * 0.5).clamp(-MAX_SHIFT, MAX_SHIFT);
    if shift > 0. {
        move_mass(&mut probs, [0, 1], [3, 4], shift);
    } else {
        move_mass(&mut probs, [3, 4], [0, 1], -shift);
    }

    for p in probs.iter_mut() {
        *p = p.clamp(MIN_PROB, 1.);
    }
    let sum: f64 = probs.iter().sum();
    for p in probs.iter_mut() {
        *p /= sum;
    }

    probs
}

pub struct RatingSampler {
    by_category: HashMap<&'static str, WeightedIndex<f64>>,
}

impl RatingSampler {
    pub fn try_new() -> Result<Self> {
        let mut by_category = HashMap::with_capacity(CATEGORY_BIASES.len());
        for (cat, bias) in CATEGORY_BIASES {
            let weights = WeightedIndex::new(adjust_probs_for_bias(BASE_RATING_PROBS, *bias))
                .map_err(|err| DatagenError::Internal(err.to_string()))?;
            by_category.insert(*cat, weights);
        }

        Ok(Self { by_category })
    }

    pub fn sample(&self, rng: &mut StdRng, category: &str) -> i8 {
        // every bias key has weights, see try_new
        let idx = self.by_category[bias_key(category)].sample(rng);
        idx as i8 + 1
    }
}

pub struct ReviewCountSampler {
    // None when no reviews are wanted at all
    weights: Option<WeightedIndex<f64>>,
    max_reviews: usize,
}

impl ReviewCountSampler {
    pub fn try_new(max_reviews: usize) -> Result<Self> {
        let limit = REVIEW_COUNT_WEIGHTS.len() - 1;
        if max_reviews > limit {
            warn!("max reviews per product {max_reviews} is above {limit}, clamping");
        }
        let max_reviews = max_reviews.min(limit);

        if max_reviews < 1 {
            return Ok(Self {
                weights: None,
                max_reviews,
            });
        }

        let weights = WeightedIndex::new(&REVIEW_COUNT_WEIGHTS[..=max_reviews])
            .map_err(|err| DatagenError::Internal(err.to_string()))?;

        Ok(Self {
            weights: Some(weights),
            max_reviews,
        })
    }

    pub fn max_reviews(&self) -> usize {
        self.max_reviews
    }

    pub fn sample(&self, rng: &mut StdRng) -> usize {
        match &self.weights {
            None => 0,
            Some(w) => w.sample(rng),
        }
    }
}
