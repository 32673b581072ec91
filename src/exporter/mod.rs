// ==========================================
// FarmTech 农场记录系统 - 导出层
// ==========================================
// 职责: 将记录集合序列化为 CSV 文件,供下游分析使用
// 文件: 每个非空集合一个文件 + 一个面积合并文件
// 命名: <collection>_<YYYYMMDD_HHMMSS>.csv
// ==========================================

pub mod csv_exporter;
pub mod error;
pub mod rows;

pub use csv_exporter::{
    file_timestamp, read_consolidated, CsvExporter, ExportReport, CONSOLIDATED_STEM,
};
pub use error::{ExportError, ExportResult};
pub use rows::{ConsolidatedAreaRow, CornAreaRow, CornInputRow, SoyAreaRow, SoyInputRow};
