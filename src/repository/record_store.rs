// ==========================================
// FarmTech 农场记录系统 - 记录存储
// ==========================================
// 持有: 大豆面积 / 玉米面积 / 大豆投入品 / 玉米投入品
// 顺序: 插入顺序 = 展示顺序 = 更新/删除使用的索引
// 红线: 越界操作不修改任何集合
// ==========================================

use crate::domain::{CollectionKind, CornArea, CornInput, SoyArea, SoyInput};
use crate::exporter::{CsvExporter, ExportReport, ExportResult};
use crate::repository::error::{StoreError, StoreResult};
use serde::Serialize;
use std::path::Path;

// ==========================================
// RecordFields - 更新用的新字段
// ==========================================
// 变体决定目标集合; 派生量由领域模型重新计算
#[derive(Debug, Clone, PartialEq)]
pub enum RecordFields {
    SoyArea(SoyArea),
    CornArea(CornArea),
    SoyInput(SoyInput),
    CornInput(CornInput),
}

impl RecordFields {
    pub fn collection(&self) -> CollectionKind {
        match self {
            RecordFields::SoyArea(_) => CollectionKind::SoyArea,
            RecordFields::CornArea(_) => CollectionKind::CornArea,
            RecordFields::SoyInput(_) => CollectionKind::SoyInput,
            RecordFields::CornInput(_) => CollectionKind::CornInput,
        }
    }
}

// ==========================================
// StoreSummary - 各集合记录数
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreSummary {
    pub soy_areas: usize,
    pub corn_areas: usize,
    pub soy_inputs: usize,
    pub corn_inputs: usize,
}

impl StoreSummary {
    pub fn count(&self, collection: CollectionKind) -> usize {
        match collection {
            CollectionKind::SoyArea => self.soy_areas,
            CollectionKind::CornArea => self.corn_areas,
            CollectionKind::SoyInput => self.soy_inputs,
            CollectionKind::CornInput => self.corn_inputs,
        }
    }

    pub fn total(&self) -> usize {
        self.soy_areas + self.corn_areas + self.soy_inputs + self.corn_inputs
    }

    /// 面积记录总数 (合并导出行数)
    pub fn total_areas(&self) -> usize {
        self.soy_areas + self.corn_areas
    }
}

// ==========================================
// RecordStore - 会话记录存储
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    soy_areas: Vec<SoyArea>,
    corn_areas: Vec<CornArea>,
    soy_inputs: Vec<SoyInput>,
    corn_inputs: Vec<CornInput>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ==========================================
    // 新增 (返回派生量)
    // ==========================================

    /// 新增大豆矩形田块,返回面积 (平方米)
    pub fn add_soy_area(&mut self, width_m: f64, length_m: f64) -> f64 {
        let record = SoyArea::new(width_m, length_m);
        let area = record.area_m2();
        self.soy_areas.push(record);
        tracing::info!(width_m, length_m, area, "新增大豆田块");
        area
    }

    /// 新增玉米圆形田块,返回面积 (平方米)
    pub fn add_corn_area(&mut self, radius_m: f64) -> f64 {
        let record = CornArea::new(radius_m);
        let area = record.area_m2();
        self.corn_areas.push(record);
        tracing::info!(radius_m, area, "新增玉米田块");
        area
    }

    /// 新增大豆液体投入品,返回所需升数
    pub fn add_soy_input(
        &mut self,
        product: &str,
        ml_per_meter: f64,
        row_count: u32,
        meters_per_row: f64,
    ) -> f64 {
        let record = SoyInput::new(product, ml_per_meter, row_count, meters_per_row);
        let liters = record.required_liters();
        self.soy_inputs.push(record);
        tracing::info!(product, liters, "新增大豆投入品");
        liters
    }

    /// 新增玉米颗粒投入品,返回所需公斤数
    pub fn add_corn_input(&mut self, product: &str, kg_per_hectare: f64, hectares: f64) -> f64 {
        let record = CornInput::new(product, kg_per_hectare, hectares);
        let kg = record.required_kg();
        self.corn_inputs.push(record);
        tracing::info!(product, kg, "新增玉米投入品");
        kg
    }

    // ==========================================
    // 按位置更新 / 删除
    // ==========================================

    /// 按位置替换记录 (index 为 0 基)
    ///
    /// # 返回
    /// - Ok(()): 已替换,派生量随新字段重新计算
    /// - Err(StoreError::IndexOutOfRange): 越界,集合保持不变
    pub fn update_at(&mut self, index: usize, fields: RecordFields) -> StoreResult<()> {
        let collection = fields.collection();
        match fields {
            RecordFields::SoyArea(r) => replace_at(&mut self.soy_areas, collection, index, r)?,
            RecordFields::CornArea(r) => replace_at(&mut self.corn_areas, collection, index, r)?,
            RecordFields::SoyInput(r) => replace_at(&mut self.soy_inputs, collection, index, r)?,
            RecordFields::CornInput(r) => replace_at(&mut self.corn_inputs, collection, index, r)?,
        }
        tracing::info!(%collection, index, "记录已更新");
        Ok(())
    }

    /// 按位置删除记录 (index 为 0 基),后续记录前移一位
    pub fn delete_at(&mut self, collection: CollectionKind, index: usize) -> StoreResult<()> {
        match collection {
            CollectionKind::SoyArea => remove_at(&mut self.soy_areas, collection, index)?,
            CollectionKind::CornArea => remove_at(&mut self.corn_areas, collection, index)?,
            CollectionKind::SoyInput => remove_at(&mut self.soy_inputs, collection, index)?,
            CollectionKind::CornInput => remove_at(&mut self.corn_inputs, collection, index)?,
        }
        tracing::info!(%collection, index, "记录已删除");
        Ok(())
    }

    // ==========================================
    // 查询
    // ==========================================

    pub fn soy_areas(&self) -> &[SoyArea] {
        &self.soy_areas
    }

    pub fn corn_areas(&self) -> &[CornArea] {
        &self.corn_areas
    }

    pub fn soy_inputs(&self) -> &[SoyInput] {
        &self.soy_inputs
    }

    pub fn corn_inputs(&self) -> &[CornInput] {
        &self.corn_inputs
    }

    pub fn len(&self, collection: CollectionKind) -> usize {
        self.summary().count(collection)
    }

    /// 四个集合均为空
    pub fn is_empty(&self) -> bool {
        self.summary().total() == 0
    }

    pub fn summary(&self) -> StoreSummary {
        StoreSummary {
            soy_areas: self.soy_areas.len(),
            corn_areas: self.corn_areas.len(),
            soy_inputs: self.soy_inputs.len(),
            corn_inputs: self.corn_inputs.len(),
        }
    }

    // ==========================================
    // 导出
    // ==========================================

    /// 导出到目标目录 (不存在时创建),返回本次使用的时间戳与文件列表
    pub fn export(&self, destination_dir: impl AsRef<Path>) -> ExportResult<ExportReport> {
        CsvExporter::new(destination_dir.as_ref()).export(self)
    }
}

fn check_index(collection: CollectionKind, index: usize, len: usize) -> StoreResult<()> {
    if index < len {
        return Ok(());
    }
    tracing::warn!(%collection, index, len, "索引越界,未修改记录");
    Err(StoreError::IndexOutOfRange {
        collection,
        index,
        len,
    })
}

fn replace_at<T>(
    items: &mut [T],
    collection: CollectionKind,
    index: usize,
    value: T,
) -> StoreResult<()> {
    check_index(collection, index, items.len())?;
    items[index] = value;
    Ok(())
}

fn remove_at<T>(items: &mut Vec<T>, collection: CollectionKind, index: usize) -> StoreResult<()> {
    check_index(collection, index, items.len())?;
    items.remove(index);
    Ok(())
}
