// Small dev utility: seed a record store with sample fields and inputs, then export it.
//
// Usage:
//   cargo run --bin generate_sample_data -- [export_dir]
//
// Without an argument the export directory comes from the app config.

use anyhow::Context;
use farmtech::config::AppConfig;
use farmtech::i18n::{t, t_with_args};
use farmtech::{i18n, logging, CollectionKind, RecordStore};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load_or_default().context("加载配置失败")?;
    logging::init(&config.log_filter);
    i18n::set_locale(&config.locale);

    let export_dir = std::env::args()
        .nth(1)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| config.export_dir.clone());

    println!("{}", t("sample.start"));
    let mut store = RecordStore::new();

    println!("{}", t("sample.soy_areas"));
    store.add_soy_area(100.0, 200.0); // 20.000 m²
    store.add_soy_area(150.0, 180.0); // 27.000 m²
    store.add_soy_area(120.0, 250.0); // 30.000 m²

    println!("{}", t("sample.corn_areas"));
    store.add_corn_area(50.0); // ~7.854 m²
    store.add_corn_area(75.0); // ~17.671 m²
    store.add_corn_area(60.0); // ~11.310 m²

    println!("{}", t("sample.inputs"));
    store.add_soy_input("Fosfato", 500.0, 20, 100.0);
    store.add_soy_input("Herbicida", 300.0, 15, 150.0);
    store.add_corn_input("Fertilizante NPK", 250.0, 2.5);
    store.add_corn_input("Ureia", 150.0, 1.8);

    println!("{}", t("sample.exporting"));
    let report = store
        .export(&export_dir)
        .with_context(|| format!("导出失败: {}", export_dir.display()))?;

    println!("{}", t("sample.done"));
    println!(
        "{}",
        t_with_args("sample.timestamp", &[("timestamp", report.timestamp.as_str())])
    );
    println!("{}", t("sample.totals"));
    let summary = store.summary();
    for collection in CollectionKind::ALL {
        println!(
            "{}",
            t_with_args(
                "sample.total_line",
                &[
                    ("collection", t(collection.label_key()).as_str()),
                    ("count", summary.count(collection).to_string().as_str()),
                ],
            )
        );
    }
    Ok(())
}
