// ==========================================
// FarmTech 农场记录系统 - CSV 导出器
// ==========================================
// 写入: 先写 <name>.csv.part,刷盘后重命名为 <name>.csv
// 红线: 任何写入失败都返回错误,不留下看似完整的文件
// ==========================================

use crate::domain::CollectionKind;
use crate::exporter::error::{ExportError, ExportResult};
use crate::exporter::rows::{
    ConsolidatedAreaRow, CornAreaRow, CornInputRow, SoyAreaRow, SoyInputRow,
};
use crate::repository::RecordStore;
use chrono::{Local, NaiveDateTime};
use csv::{ReaderBuilder, Writer};
use serde::Serialize;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// 面积合并文件名主干
pub const CONSOLIDATED_STEM: &str = "all_areas";

const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const ROW_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const PARTIAL_SUFFIX: &str = "part";

/// 文件名时间戳: YYYYMMDD_HHMMSS
pub fn file_timestamp(generated_at: NaiveDateTime) -> String {
    generated_at.format(FILE_TIMESTAMP_FORMAT).to_string()
}

// ==========================================
// ExportReport - 导出结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub timestamp: String,                     // 文件名使用的时间戳
    pub files: Vec<(CollectionKind, PathBuf)>, // 各集合文件 (仅非空集合)
    pub consolidated: Option<PathBuf>,         // 面积合并文件 (无面积记录时为 None)
}

impl ExportReport {
    /// 本次写出的全部文件
    pub fn all_files(&self) -> Vec<&Path> {
        self.files
            .iter()
            .map(|(_, p)| p.as_path())
            .chain(self.consolidated.as_deref())
            .collect()
    }
}

// ==========================================
// CsvExporter
// ==========================================
pub struct CsvExporter {
    output_dir: PathBuf,
}

impl CsvExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// 以当前本地时间导出
    pub fn export(&self, store: &RecordStore) -> ExportResult<ExportReport> {
        self.export_at(store, Local::now().naive_local())
    }

    /// 以指定生成时间导出
    ///
    /// # 返回
    /// - Ok(ExportReport): 时间戳与写出的文件列表
    /// - Err(ExportError): 目录创建或任一文件写入失败
    pub fn export_at(
        &self,
        store: &RecordStore,
        generated_at: NaiveDateTime,
    ) -> ExportResult<ExportReport> {
        fs::create_dir_all(&self.output_dir).map_err(|source| ExportError::CreateDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let timestamp = file_timestamp(generated_at);
        let row_timestamp = generated_at.format(ROW_TIMESTAMP_FORMAT).to_string();
        let mut files = Vec::new();

        for collection in CollectionKind::ALL {
            if store.len(collection) == 0 {
                continue;
            }
            let path = self.file_path(collection.file_stem(), &timestamp);
            match collection {
                CollectionKind::SoyArea => {
                    write_csv(&path, store.soy_areas().iter().map(SoyAreaRow::from))?
                }
                CollectionKind::CornArea => {
                    write_csv(&path, store.corn_areas().iter().map(CornAreaRow::from))?
                }
                CollectionKind::SoyInput => {
                    write_csv(&path, store.soy_inputs().iter().map(SoyInputRow::from))?
                }
                CollectionKind::CornInput => {
                    write_csv(&path, store.corn_inputs().iter().map(CornInputRow::from))?
                }
            }
            files.push((collection, path));
        }

        let consolidated = if store.summary().total_areas() > 0 {
            let path = self.file_path(CONSOLIDATED_STEM, &timestamp);
            write_csv(&path, consolidated_rows(store, &row_timestamp))?;
            Some(path)
        } else {
            None
        };

        let report = ExportReport {
            timestamp,
            files,
            consolidated,
        };
        tracing::info!(
            dir = %self.output_dir.display(),
            timestamp = %report.timestamp,
            file_count = report.all_files().len(),
            "导出完成"
        );
        Ok(report)
    }

    fn file_path(&self, stem: &str, timestamp: &str) -> PathBuf {
        self.output_dir.join(format!("{}_{}.csv", stem, timestamp))
    }
}

/// 合并行: 先大豆后玉米,各自按插入顺序
fn consolidated_rows(store: &RecordStore, timestamp: &str) -> Vec<ConsolidatedAreaRow> {
    let soy = store
        .soy_areas()
        .iter()
        .enumerate()
        .map(|(i, r)| ConsolidatedAreaRow::from_soy(i + 1, r, timestamp));
    let corn = store
        .corn_areas()
        .iter()
        .enumerate()
        .map(|(i, r)| ConsolidatedAreaRow::from_corn(i + 1, r, timestamp));
    soy.chain(corn).collect()
}

// ==========================================
// 文件写入
// ==========================================
fn write_csv<T, I>(path: &Path, rows: I) -> ExportResult<()>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let partial = path.with_extension(format!("csv.{}", PARTIAL_SUFFIX));
    let result = write_partial(&partial, rows).and_then(|()| {
        fs::rename(&partial, path).map_err(|source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        })
    });

    if let Err(e) = &result {
        tracing::error!(path = %path.display(), error = %e, "导出文件写入失败");
        // 清理残留的临时文件,忽略清理失败
        let _ = fs::remove_file(&partial);
    }
    result
}

fn write_partial<T, I>(partial: &Path, rows: I) -> ExportResult<()>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let write_err = |source| ExportError::Write {
        path: partial.to_path_buf(),
        source,
    };
    let csv_err = |source| ExportError::Csv {
        path: partial.to_path_buf(),
        source,
    };

    let file = File::create(partial).map_err(write_err)?;
    let mut wtr = Writer::from_writer(file);
    for row in rows {
        wtr.serialize(row).map_err(csv_err)?;
    }
    wtr.flush().map_err(write_err)?;

    let file = wtr.into_inner().map_err(|e| write_err(e.into_error()))?;
    file.sync_all().map_err(write_err)?;
    Ok(())
}

// ==========================================
// 合并文件回读
// ==========================================

/// 读取面积合并文件
///
/// # 返回
/// - Ok(Vec<ConsolidatedAreaRow>): 按文件顺序的数据行 (不含表头)
/// - Err(ExportError::FileNotFound): 文件不存在
pub fn read_consolidated(path: impl AsRef<Path>) -> ExportResult<Vec<ConsolidatedAreaRow>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ExportError::FileNotFound(path.to_path_buf()));
    }

    let csv_err = |source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(csv_err)?;

    let mut rows = Vec::new();
    for result in reader.deserialize::<ConsolidatedAreaRow>() {
        rows.push(result.map_err(csv_err)?);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(9, 5, 7)
            .unwrap()
    }

    #[test]
    fn test_file_timestamp_format() {
        assert_eq!(file_timestamp(fixed_time()), "20240315_090507");
    }

    #[test]
    fn test_empty_store_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("nested").join("exports");
        let exporter = CsvExporter::new(&out);

        let report = exporter.export_at(&RecordStore::new(), fixed_time()).unwrap();

        assert!(out.is_dir(), "导出目录应被创建");
        assert!(report.all_files().is_empty());
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }

    #[test]
    fn test_only_non_empty_collections_are_written() {
        let dir = TempDir::new().unwrap();
        let mut store = RecordStore::new();
        store.add_corn_input("Ureia", 150.0, 1.8);

        let report = CsvExporter::new(dir.path())
            .export_at(&store, fixed_time())
            .unwrap();

        assert_eq!(report.files.len(), 1);
        assert_eq!(report.files[0].0, CollectionKind::CornInput);
        assert!(report.consolidated.is_none());
        assert!(dir.path().join("corn_inputs_20240315_090507.csv").exists());
    }

    #[test]
    fn test_soy_input_file_contents() {
        let dir = TempDir::new().unwrap();
        let mut store = RecordStore::new();
        store.add_soy_input("Fosfato", 500.0, 20, 100.0);

        let report = CsvExporter::new(dir.path())
            .export_at(&store, fixed_time())
            .unwrap();

        let content = fs::read_to_string(&report.files[0].1).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("product,mlPerMeter,rowCount,metersPerRow,totalMeters,requiredLiters")
        );
        assert_eq!(lines.next(), Some("Fosfato,500.0,20,100.0,2000.0,1000.0"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_no_partial_files_left_behind() {
        let dir = TempDir::new().unwrap();
        let mut store = RecordStore::new();
        store.add_soy_area(1.0, 2.0);

        CsvExporter::new(dir.path())
            .export_at(&store, fixed_time())
            .unwrap();

        let leftovers = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.path().extension().is_some_and(|ext| ext == PARTIAL_SUFFIX))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn test_export_into_file_path_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, "x").unwrap();

        let mut store = RecordStore::new();
        store.add_corn_area(2.0);

        let err = CsvExporter::new(&blocker)
            .export_at(&store, fixed_time())
            .unwrap_err();
        assert!(matches!(err, ExportError::CreateDir { .. }));
    }

    #[test]
    fn test_read_consolidated_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_consolidated(dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, ExportError::FileNotFound(_)));
    }
}
