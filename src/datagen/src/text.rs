use common::MAX_REVIEW_CHARS;
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::persona::Reviewer;

struct Templates {
    openers: &'static [&'static str],
    middles: &'static [&'static str],
    closers: &'static [&'static str],
}

fn templates(rating: i8) -> Templates {
    match rating {
        i8::MIN..=1 => Templates {
            openers: &[
                "Terrible experience with",
                "I regret buying",
                "Completely unsatisfied with",
            ],
            middles: &[
                "It broke after a few uses and support did nothing.",
                "The build felt cheap and failed.",
                "Multiple defects and poor reliability.",
            ],
            closers: &[
                "Would not recommend.",
                "Save your money.",
                "I returned it and asked for a refund.",
            ],
        },
        2 => Templates {
            openers: &[
                "Disappointing overall for",
                "Not what I expected from",
                "Mixed feelings about",
            ],
            middles: &[
                "Works sometimes but has flaws.",
                "Some features are fine but execution lacks.",
                "Disappointing quality in several places.",
            ],
            closers: &[
                "There are better options.",
                "I probably won't buy again.",
                "Needs improvement.",
            ],
        },
        3 => Templates {
            openers: &["It's okay for", "Average experience with", "Works as expected for"],
            middles: &[
                "It does the job but doesn't excel.",
                "Reasonable quality at this price.",
                "Has pros and cons.",
            ],
            closers: &[
                "A decent neutral pick.",
                "Satisfactory if you need something simple.",
                "Not exceptional but usable.",
            ],
        },
        4 => Templates {
            openers: &["Pretty pleased with", "Good value in", "Solid performance for"],
            middles: &[
                "Performs reliably and feels well constructed.",
                "Met expectations and pleasant to use.",
                "A few small issues, but overall positive.",
            ],
            closers: &["Would recommend.", "Good buy.", "I'd purchase again."],
        },
        _ => Templates {
            openers: &[
                "Absolutely love",
                "Fantastic product:",
                "Exceeded expectations with",
            ],
            middles: &[
                "Top-tier quality and attention to detail.",
                "Performs flawlessly and is a joy to use.",
                "Everything feels premium and reliable.",
            ],
            closers: &["Highly recommended!", "Five stars.", "Worth every penny."],
        },
    }
}

const EXTRA_POSITIVE: &[&str] = &[
    "It consistently performs well in daily use.",
    "Setup was straightforward and painless.",
    "Materials and fit/finish are impressive for the price.",
];

const EXTRA_NEUTRAL: &[&str] = &[
    "It's serviceable for common tasks but not outstanding.",
    "It does what it needs to, but don't expect surprises.",
    "Good for occasional use or budget setups.",
];

const EXTRA_NEGATIVE: &[&str] = &[
    "It caused repeated issues during normal use.",
    "Support and documentation were inadequate.",
    "I encountered multiple defects and usability problems.",
];

fn pick(rng: &mut StdRng, values: &[&'static str]) -> &'static str {
    values.choose(rng).copied().unwrap_or_default()
}

pub fn make_review_text(
    rng: &mut StdRng,
    rating: i8,
    product_name: &str,
    product_category: &str,
    reviewer: &Reviewer,
) -> String {
    let tpl = templates(rating);
    let opener = pick(rng, tpl.openers);
    let middle = pick(rng, tpl.middles);
    let closer = pick(rng, tpl.closers);
    let extra = match rating {
        4.. => pick(rng, EXTRA_POSITIVE),
        3 => pick(rng, EXTRA_NEUTRAL),
        _ => pick(rng, EXTRA_NEGATIVE),
    };

    let text = format!(
        "{opener} {product_name}. {}{middle}  In the {product_category} category, this product. {extra} {closer}  - {}, {}, {}",
        reviewer.focus.phrase(),
        reviewer.name,
        reviewer.persona,
        reviewer.location,
    );

    truncate(text, MAX_REVIEW_CHARS)
}

/// Cuts text longer than `max_chars` characters down to `max_chars - 1`.
pub fn truncate(text: String, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text,
        Some(_) => text.chars().take(max_chars.saturating_sub(1)).collect(),
    }
}
