use std::env::temp_dir;
use std::fs;
use std::path::PathBuf;

use cmd::command::all;
use cmd::command::all::All;
use cmd::command::products;
use cmd::command::products::Products;
use cmd::command::reviews;
use cmd::command::reviews::Reviews;
use cmd::command::GeneratorArgs;
use cmd::command::ReviewArgs;
use cmd::config::Config;
use uuid::Uuid;

fn tmp_path(ext: &str) -> PathBuf {
    temp_dir().join(format!("{}.{ext}", Uuid::new_v4()))
}

fn cfg() -> common::config::Config {
    Config::default().try_into().unwrap()
}

fn gen() -> GeneratorArgs {
    GeneratorArgs {
        seed: Some(7),
        batch_size: Some(50),
        partitions: Some(2),
    }
}

#[test]
fn test_products_then_reviews() {
    let products_path = tmp_path("parquet");
    let reviews_path = tmp_path("csv");

    let summary = products::start(
        &Products {
            rows: Some(120),
            output: Some(products_path.clone()),
            gen: gen(),
            ..Default::default()
        },
        cfg(),
    )
    .unwrap();
    assert_eq!(summary.products.unwrap().rows, 120);

    let summary = reviews::start(
        &Reviews {
            input: Some(products_path.clone()),
            output: Some(reviews_path.clone()),
            review: ReviewArgs {
                max_reviews_per_product: Some(2),
                period: Some("30 days".to_string()),
                to_date: Some("2024-05-01".to_string()),
            },
            gen: gen(),
            ..Default::default()
        },
        cfg(),
    )
    .unwrap();
    let written = summary.reviews.unwrap();
    assert!(written.rows <= 240);

    let csv = fs::read_to_string(&reviews_path).unwrap();
    assert_eq!(csv.lines().count(), written.rows + 1);

    fs::remove_file(products_path).unwrap();
    fs::remove_file(reviews_path).unwrap();
}

#[test]
fn test_reviews_missing_input() {
    let res = reviews::start(
        &Reviews {
            input: Some(tmp_path("parquet")),
            output: Some(tmp_path("parquet")),
            ..Default::default()
        },
        cfg(),
    );
    assert!(res.is_err());
}

#[test]
fn test_all() {
    let dir = temp_dir().join(Uuid::new_v4().to_string());
    let products_path = dir.join("products.parquet");
    let reviews_path = dir.join("reviews.parquet");

    let summary = all::start(
        &All {
            rows: Some(75),
            products_output: Some(products_path.clone()),
            reviews_output: Some(reviews_path.clone()),
            gen: gen(),
            ..Default::default()
        },
        cfg(),
    )
    .unwrap();

    assert_eq!(summary.products.unwrap().rows, 75);
    assert!(summary.reviews.unwrap().bytes > 0);
    assert!(reviews_path.exists());
    fs::remove_dir_all(dir).unwrap();
}
