use std::collections::HashMap;
use std::collections::HashSet;
use std::env::temp_dir;
use std::fs;
use std::fs::File;
use std::path::Path;
use std::path::PathBuf;

use arrow::array::AsArray;
use arrow::compute::concat_batches;
use arrow::datatypes::Int64Type;
use arrow::record_batch::RecordBatch;
use arrow::record_batch::RecordBatchReader;
use chrono::Duration;
use chrono::TimeZone;
use chrono::Utc;
use common::types::Dataset;
use datagen::products::ProductGenerator;
use datagen::reader::Columns;
use datagen::reader::ProductReader;
use datagen::reviews;
use datagen::reviews::ReviewGenerator;
use datagen::scenario::Config;
use datagen::scenario::Scenario;
use datagen::scenario::Sinks;
use datagen::schema::products_schema;
use datagen::schema::reviews_schema;
use datagen::writer;
use datagen::writer::Options;
use indicatif::ProgressBar;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use uuid::Uuid;

fn tmp_path(ext: &str) -> PathBuf {
    temp_dir().join(format!("{}.{ext}", Uuid::new_v4()))
}

fn review_generator(max_reviews: usize) -> ReviewGenerator {
    ReviewGenerator::try_new(reviews::Config {
        max_reviews,
        to_date: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
        period: Duration::days(365 * 3),
    })
    .unwrap()
}

fn scenario(partitions: usize, products: bool, reviews: bool) -> Scenario {
    Scenario::new(Config {
        seed: 42,
        batch_size: 100,
        partitions,
        products: products.then(|| ProductGenerator::try_new().unwrap()),
        reviews: reviews.then(|| review_generator(5)),
        progress: ProgressBar::hidden(),
    })
}

fn read(path: &Path) -> RecordBatch {
    let rdr = ParquetRecordBatchReaderBuilder::try_new(File::open(path).unwrap())
        .unwrap()
        .build()
        .unwrap();
    let schema = rdr.schema();
    let batches = rdr.collect::<Result<Vec<_>, _>>().unwrap();
    concat_batches(&schema, &batches).unwrap()
}

fn ids(batch: &RecordBatch, col: &str) -> Vec<i64> {
    batch
        .column_by_name(col)
        .unwrap()
        .as_primitive::<Int64Type>()
        .values()
        .to_vec()
}

fn generate_products(partitions: usize, rows: usize) -> PathBuf {
    let path = tmp_path("parquet");
    let sinks = Sinks {
        products: Some(
            writer::create(&path, Dataset::Products, products_schema(), &Options::default())
                .unwrap(),
        ),
        reviews: None,
    };
    let summary = scenario(partitions, true, false)
        .run_products(rows, sinks)
        .unwrap();
    assert_eq!(summary.products.unwrap().rows, rows);
    assert!(summary.reviews.is_none());

    path
}

#[test]
fn test_products() {
    let path = generate_products(2, 250);
    let batch = read(&path);

    assert_eq!(batch.num_rows(), 250);
    assert_eq!(batch.schema().fields(), products_schema().fields());
    assert_eq!(ids(&batch, "id"), (1..=250).collect::<Vec<i64>>());
    fs::remove_file(path).unwrap();
}

#[test]
fn test_output_does_not_depend_on_partitions() {
    let one = generate_products(1, 330);
    let four = generate_products(4, 330);

    assert_eq!(read(&one), read(&four));
    fs::remove_file(one).unwrap();
    fs::remove_file(four).unwrap();
}

#[test]
fn test_all() {
    let products_path = tmp_path("parquet");
    let reviews_path = tmp_path("parquet");
    let opts = Options::default();
    let sinks = Sinks {
        products: Some(
            writer::create(&products_path, Dataset::Products, products_schema(), &opts).unwrap(),
        ),
        reviews: Some(
            writer::create(&reviews_path, Dataset::Reviews, reviews_schema(), &opts).unwrap(),
        ),
    };

    let summary = scenario(3, true, true).run_products(500, sinks).unwrap();
    let reviews_summary = summary.reviews.unwrap();
    assert_eq!(summary.products.unwrap().rows, 500);

    let products = read(&products_path);
    let reviews = read(&reviews_path);
    assert_eq!(reviews.num_rows(), reviews_summary.rows);
    assert!(reviews.num_rows() > 0);
    assert_eq!(reviews.schema().fields(), reviews_schema().fields());

    let product_ids = ids(&products, "id").into_iter().collect::<HashSet<_>>();
    assert!(ids(&reviews, "product_id")
        .iter()
        .all(|id| product_ids.contains(id)));

    let review_ids = ids(&reviews, "review_id");
    assert_eq!(
        review_ids,
        (1..=reviews.num_rows() as i64).collect::<Vec<_>>()
    );

    fs::remove_file(products_path).unwrap();
    fs::remove_file(reviews_path).unwrap();
}

#[test]
fn test_reviews_from_file() {
    let products_path = generate_products(2, 200);
    let reviews_path = tmp_path("parquet");

    let cols = Columns {
        id: "id".to_string(),
        name: "product_name".to_string(),
        category: Some("product_category".to_string()),
    };
    let reader = ProductReader::try_new(&products_path, &cols, 64).unwrap();
    assert_eq!(reader.total_rows(), 200);

    let sinks = Sinks {
        products: None,
        reviews: Some(
            writer::create(
                &reviews_path,
                Dataset::Reviews,
                reviews_schema(),
                &Options::default(),
            )
            .unwrap(),
        ),
    };
    let summary = scenario(2, false, true).run_reviews(reader, sinks).unwrap();
    assert!(summary.products.is_none());

    let products = read(&products_path);
    let reviews = read(&reviews_path);
    assert_eq!(reviews.num_rows(), summary.reviews.unwrap().rows);

    let names = products
        .column_by_name("product_name")
        .unwrap()
        .as_string::<i32>();
    let by_id = ids(&products, "id")
        .into_iter()
        .enumerate()
        .map(|(row, id)| (id, names.value(row).to_string()))
        .collect::<HashMap<_, _>>();

    let review_names = reviews
        .column_by_name("product_name")
        .unwrap()
        .as_string::<i32>();
    for (row, id) in ids(&reviews, "product_id").into_iter().enumerate() {
        assert_eq!(by_id[&id], review_names.value(row));
    }

    fs::remove_file(products_path).unwrap();
    fs::remove_file(reviews_path).unwrap();
}

#[test]
fn test_csv_reviews() {
    let products_path = tmp_path("csv");
    let reviews_path = tmp_path("tsv");
    let opts = Options::default();
    let sinks = Sinks {
        products: Some(
            writer::create(&products_path, Dataset::Products, products_schema(), &opts).unwrap(),
        ),
        reviews: Some(
            writer::create(&reviews_path, Dataset::Reviews, reviews_schema(), &opts).unwrap(),
        ),
    };
    let summary = scenario(2, true, true).run_products(150, sinks).unwrap();

    let products = fs::read_to_string(&products_path).unwrap();
    let mut lines = products.lines();
    assert_eq!(
        lines.next(),
        Some("id,product_category,product_name,price_usd,inventory_count,margin")
    );
    assert_eq!(summary.products.unwrap().rows, 150);

    let reviews = fs::read_to_string(&reviews_path).unwrap();
    let header = reviews.lines().next().unwrap();
    assert!(header.starts_with("review_id\tproduct_id\t"));
    // header appears once even though several batches were written
    assert_eq!(reviews.matches("review_id\t").count(), 1);
    assert!(summary.reviews.unwrap().batches > 1);

    fs::remove_file(products_path).unwrap();
    fs::remove_file(reviews_path).unwrap();
}

#[test]
fn test_reviews_missing_column() {
    let products_path = generate_products(1, 10);
    let cols = Columns {
        id: "product_id".to_string(),
        name: "product_name".to_string(),
        category: None,
    };

    assert!(ProductReader::try_new(&products_path, &cols, 64).is_err());
    fs::remove_file(products_path).unwrap();
}

#[test]
fn test_csv_review_date_format() {
    let products_path = tmp_path("parquet");
    let reviews_path = tmp_path("csv");
    let opts = Options::default();
    let sinks = Sinks {
        products: Some(
            writer::create(&products_path, Dataset::Products, products_schema(), &opts).unwrap(),
        ),
        reviews: Some(
            writer::create(&reviews_path, Dataset::Reviews, reviews_schema(), &opts).unwrap(),
        ),
    };
    let gen = ReviewGenerator::try_new(reviews::Config {
        max_reviews: 5,
        to_date: Utc.with_ymd_and_hms(2024, 5, 1, 15, 4, 5).unwrap(),
        period: Duration::zero(),
    })
    .unwrap();
    let scenario = Scenario::new(Config {
        seed: 1,
        batch_size: 20,
        partitions: 2,
        products: Some(ProductGenerator::try_new().unwrap()),
        reviews: Some(gen),
        progress: ProgressBar::hidden(),
    });
    let summary = scenario.run_products(40, sinks).unwrap();
    let rows = summary.reviews.unwrap().rows;
    assert!(rows > 0);

    let csv = fs::read_to_string(&reviews_path).unwrap();
    let lines = csv.lines().collect::<Vec<_>>();
    assert!(lines[0].ends_with(",review_date"));
    assert_eq!(lines.len(), rows + 1);
    for line in &lines[1..] {
        assert!(line.ends_with(",2024-05-01 03:04:05 PM"), "{line}");
    }

    fs::remove_file(products_path).unwrap();
    fs::remove_file(reviews_path).unwrap();
}
