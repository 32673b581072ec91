// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供示例数据、脚本化会话与临时导出目录
// ==========================================

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use farmtech::{logging, RecordStore, Session};
use std::io::Cursor;
use std::path::Path;
use tempfile::TempDir;

pub const EPSILON: f64 = 1e-9;

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// 固定的导出时间,便于断言文件名
pub fn fixed_export_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 20)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap()
}

pub fn create_export_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// 典型场景: 每个集合各一条
pub fn scenario_store() -> RecordStore {
    let mut store = RecordStore::new();
    store.add_soy_area(100.0, 200.0);
    store.add_corn_area(50.0);
    store.add_soy_input("Fosfato", 500.0, 20, 100.0);
    store.add_corn_input("NPK", 250.0, 2.5);
    store
}

/// 用脚本化输入运行会话,返回最终存储与全部输出
pub fn run_session(store: RecordStore, script: &str, export_dir: &Path) -> (RecordStore, String) {
    logging::init_test();
    let mut session = Session::new(
        store,
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
        export_dir,
    );
    session.run().expect("session should end cleanly");
    let (store, output) = session.finish();
    (store, String::from_utf8(output).expect("output should be utf-8"))
}

/// 目录中的文件名 (排序后)
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read dir")
        .filter_map(Result::ok)
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
