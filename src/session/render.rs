// ==========================================
// FarmTech 农场记录系统 - 列表渲染
// ==========================================
// 面积 / 用量保留两位小数; 录入字段原样显示
// 顺序: 插入顺序,编号 1 基
// ==========================================

use crate::domain::{CollectionKind, CornArea, CornInput, SoyArea, SoyInput};
use crate::exporter::ExportError;
use crate::i18n::{t, t_with_args};
use crate::repository::{RecordStore, StoreSummary};

fn two_decimals(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn soy_area_line(r: &SoyArea) -> String {
    t_with_args(
        "list.soy_area",
        &[
            ("width", r.width_m.to_string().as_str()),
            ("length", r.length_m.to_string().as_str()),
            ("area", two_decimals(r.area_m2()).as_str()),
        ],
    )
}

pub fn corn_area_line(r: &CornArea) -> String {
    t_with_args(
        "list.corn_area",
        &[
            ("radius", r.radius_m.to_string().as_str()),
            ("area", two_decimals(r.area_m2()).as_str()),
        ],
    )
}

pub fn soy_input_line(r: &SoyInput) -> String {
    t_with_args(
        "list.soy_input",
        &[
            ("product", r.product.as_str()),
            ("liters", two_decimals(r.required_liters()).as_str()),
            ("ml_per_meter", r.ml_per_meter.to_string().as_str()),
            ("rows", r.row_count.to_string().as_str()),
            ("meters_per_row", r.meters_per_row.to_string().as_str()),
        ],
    )
}

pub fn corn_input_line(r: &CornInput) -> String {
    t_with_args(
        "list.corn_input",
        &[
            ("product", r.product.as_str()),
            ("kg", two_decimals(r.required_kg()).as_str()),
            ("kg_per_hectare", r.kg_per_hectare.to_string().as_str()),
            ("hectares", r.hectares.to_string().as_str()),
        ],
    )
}

/// 某集合的编号行: "  1. ..."
pub fn numbered_entries(store: &RecordStore, collection: CollectionKind) -> Vec<String> {
    let lines: Vec<String> = match collection {
        CollectionKind::SoyArea => store.soy_areas().iter().map(soy_area_line).collect(),
        CollectionKind::CornArea => store.corn_areas().iter().map(corn_area_line).collect(),
        CollectionKind::SoyInput => store.soy_inputs().iter().map(soy_input_line).collect(),
        CollectionKind::CornInput => store.corn_inputs().iter().map(corn_input_line).collect(),
    };
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| format!("  {}. {}", i + 1, line))
        .collect()
}

/// 完整列表: 按作物分组,每组先面积后投入品,各带计数
pub fn listing_lines(store: &RecordStore) -> Vec<String> {
    let summary = store.summary();
    let groups = [
        (
            "list.soy_header",
            CollectionKind::SoyArea,
            CollectionKind::SoyInput,
        ),
        (
            "list.corn_header",
            CollectionKind::CornArea,
            CollectionKind::CornInput,
        ),
    ];

    let mut lines = vec![t("list.title")];
    for (header_key, area, input) in groups {
        lines.push(String::new());
        lines.push(t(header_key));
        lines.push(count_line("list.area_count", summary.count(area)));
        lines.extend(numbered_entries(store, area));
        lines.push(String::new());
        lines.push(count_line("list.input_count", summary.count(input)));
        lines.extend(numbered_entries(store, input));
    }
    lines
}

/// 导出前的各集合计数
pub fn summary_lines(summary: &StoreSummary) -> Vec<String> {
    CollectionKind::ALL
        .iter()
        .map(|collection| {
            t_with_args(
                "export.summary_line",
                &[
                    ("collection", t(collection.label_key()).as_str()),
                    ("count", summary.count(*collection).to_string().as_str()),
                ],
            )
        })
        .collect()
}

/// 导出失败原因 (按当前语言)
pub fn export_error_line(err: &ExportError) -> String {
    let (key, path, reason) = match err {
        ExportError::CreateDir { path, source } => {
            ("export_error.create_dir", path, source.to_string())
        }
        ExportError::Write { path, source } => ("export_error.write", path, source.to_string()),
        ExportError::FileNotFound(path) => ("export_error.not_found", path, String::new()),
        ExportError::Csv { path, source } => ("export_error.csv", path, source.to_string()),
    };
    t_with_args(
        key,
        &[
            ("path", path.display().to_string().as_str()),
            ("reason", reason.as_str()),
        ],
    )
}

fn count_line(key: &str, count: usize) -> String {
    t_with_args(key, &[("count", count.to_string().as_str())])
}
