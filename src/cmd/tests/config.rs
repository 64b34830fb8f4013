use std::env::temp_dir;
use std::fs;
use std::path::PathBuf;

use cmd::config::Config;
use cmd::config::LogLevel;
use common::types::Compression;
use common::types::OutputFormat;
use tracing::level_filters::LevelFilter;
use uuid::Uuid;

fn load(path: PathBuf) -> Config {
    config::Config::builder()
        .add_source(config::File::from(path))
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap()
}

#[test]
fn test_shipped_config_matches_defaults() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../config/datagen.toml");
    assert_eq!(load(path), Config::default());
}

#[test]
fn test_partial_config() {
    let path = temp_dir().join(format!("{}.toml", Uuid::new_v4()));
    fs::write(
        &path,
        r#"
[log]
level = "debug"

[output]
format = "tsv"
compression = "zstd"

[reviews]
period = "30 days"
to_date = "2024-01-31"
category_column = ""
"#,
    )
    .unwrap();

    let cfg = load(path.clone());
    assert_eq!(cfg.log.level, LogLevel::Debug);
    assert_eq!(cfg.output.format, Some(OutputFormat::Tsv));
    assert_eq!(cfg.output.compression, Compression::Zstd);
    // untouched sections keep defaults
    assert_eq!(cfg.products.rows, 1_000_000);

    let cfg: common::config::Config = cfg.try_into().unwrap();
    assert_eq!(cfg.log.level, LevelFilter::DEBUG);
    assert_eq!(cfg.reviews.period, chrono::Duration::days(30));
    assert!(cfg.reviews.columns.category.is_empty());
    fs::remove_file(path).unwrap();
}
