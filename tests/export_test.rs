// ==========================================
// CSV 导出集成测试
// ==========================================
// 测试目标: 文件命名、表头、合并文件空白列、回读行数
// ==========================================

mod test_helpers;

use farmtech::exporter::{read_consolidated, CsvExporter, CONSOLIDATED_STEM};
use farmtech::{CollectionKind, CropType, RecordStore};
use std::fs;
use test_helpers::{create_export_dir, file_names, fixed_export_time, scenario_store};

#[test]
fn test_scenario_export_writes_five_files() {
    let dir = create_export_dir();
    let store = scenario_store();

    let report = CsvExporter::new(dir.path())
        .export_at(&store, fixed_export_time())
        .expect("export should succeed");

    assert_eq!(report.timestamp, "20250120_143000");
    assert_eq!(report.files.len(), 4);
    assert_eq!(
        file_names(dir.path()),
        vec![
            "all_areas_20250120_143000.csv",
            "corn_areas_20250120_143000.csv",
            "corn_inputs_20250120_143000.csv",
            "soy_areas_20250120_143000.csv",
            "soy_inputs_20250120_143000.csv",
        ]
    );
}

#[test]
fn test_consolidated_rows_leave_geometry_blank() {
    let dir = create_export_dir();
    let report = CsvExporter::new(dir.path())
        .export_at(&scenario_store(), fixed_export_time())
        .unwrap();
    let path = report.consolidated.expect("consolidated file expected");

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines[0],
        "id,cropType,areaSquareMeters,width,length,radius,timestamp"
    );
    assert!(lines[1].starts_with("soy_1,soy,20000.0,100.0,200.0,,"));
    assert!(lines[2].starts_with("corn_1,corn,"));
    assert!(lines[2].contains(",,,50.0,2025-01-20 14:30:00"));

    let rows = read_consolidated(&path).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].crop_type, CropType::Soy);
    assert_eq!(rows[0].radius, None);
    assert_eq!(rows[1].crop_type, CropType::Corn);
    assert_eq!((rows[1].width, rows[1].length), (None, None));
    assert!((rows[1].area_square_meters - 7853.981_633_974_483).abs() < 1e-6);
}

#[test]
fn test_round_trip_row_count_matches_area_entries() {
    let dir = create_export_dir();
    let mut store = RecordStore::new();
    for w in [100.0, 150.0, 120.0] {
        store.add_soy_area(w, 200.0);
    }
    for r in [50.0, 75.0] {
        store.add_corn_area(r);
    }

    let report = store.export(dir.path()).unwrap();
    let path = dir
        .path()
        .join(format!("{}_{}.csv", CONSOLIDATED_STEM, report.timestamp));
    let rows = read_consolidated(&path).unwrap();

    assert_eq!(rows.len(), store.summary().total_areas());
    let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["soy_1", "soy_2", "soy_3", "corn_1", "corn_2"]);
}

#[test]
fn test_inputs_only_skip_consolidated_file() {
    let dir = create_export_dir();
    let mut store = RecordStore::new();
    store.add_soy_input("Fosfato", 500.0, 20, 100.0);

    let report = CsvExporter::new(dir.path())
        .export_at(&store, fixed_export_time())
        .unwrap();

    assert!(report.consolidated.is_none());
    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].0, CollectionKind::SoyInput);
    assert_eq!(file_names(dir.path()), vec!["soy_inputs_20250120_143000.csv"]);
}

#[test]
fn test_corn_input_header_and_row() {
    let dir = create_export_dir();
    let mut store = RecordStore::new();
    store.add_corn_input("NPK", 250.0, 2.5);

    CsvExporter::new(dir.path())
        .export_at(&store, fixed_export_time())
        .unwrap();

    let content =
        fs::read_to_string(dir.path().join("corn_inputs_20250120_143000.csv")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec!["product,kgPerHectare,hectares,requiredKg", "NPK,250.0,2.5,625.0"]
    );
}
