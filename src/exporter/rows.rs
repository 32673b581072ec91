// ==========================================
// FarmTech 农场记录系统 - 导出行结构
// ==========================================
// 表头 = 字段名 (camelCase),与下游分析脚本对齐
// 每行包含录入字段 + 派生量
// ==========================================

use crate::domain::{CornArea, CornInput, CropType, SoyArea, SoyInput};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoyAreaRow {
    pub width: f64,
    pub length: f64,
    pub area: f64,
}

impl From<&SoyArea> for SoyAreaRow {
    fn from(r: &SoyArea) -> Self {
        Self {
            width: r.width_m,
            length: r.length_m,
            area: r.area_m2(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CornAreaRow {
    pub radius: f64,
    pub area: f64,
}

impl From<&CornArea> for CornAreaRow {
    fn from(r: &CornArea) -> Self {
        Self {
            radius: r.radius_m,
            area: r.area_m2(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoyInputRow {
    pub product: String,
    pub ml_per_meter: f64,
    pub row_count: u32,
    pub meters_per_row: f64,
    pub total_meters: f64,
    pub required_liters: f64,
}

impl From<&SoyInput> for SoyInputRow {
    fn from(r: &SoyInput) -> Self {
        Self {
            product: r.product.clone(),
            ml_per_meter: r.ml_per_meter,
            row_count: r.row_count,
            meters_per_row: r.meters_per_row,
            total_meters: r.total_meters(),
            required_liters: r.required_liters(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CornInputRow {
    pub product: String,
    pub kg_per_hectare: f64,
    pub hectares: f64,
    pub required_kg: f64,
}

impl From<&CornInput> for CornInputRow {
    fn from(r: &CornInput) -> Self {
        Self {
            product: r.product.clone(),
            kg_per_hectare: r.kg_per_hectare,
            hectares: r.hectares,
            required_kg: r.required_kg(),
        }
    }
}

// ==========================================
// ConsolidatedAreaRow - 面积合并行
// ==========================================
// 列: id, cropType, areaSquareMeters, width, length, radius, timestamp
// 大豆行 radius 留空; 玉米行 width/length 留空
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidatedAreaRow {
    pub id: String, // soy_<n> / corn_<n>, n 为集合内 1 基位置
    pub crop_type: CropType,
    pub area_square_meters: f64,
    pub width: Option<f64>,
    pub length: Option<f64>,
    pub radius: Option<f64>,
    pub timestamp: String,
}

impl ConsolidatedAreaRow {
    pub fn from_soy(position: usize, r: &SoyArea, timestamp: &str) -> Self {
        Self {
            id: synthetic_id(CropType::Soy, position),
            crop_type: CropType::Soy,
            area_square_meters: r.area_m2(),
            width: Some(r.width_m),
            length: Some(r.length_m),
            radius: None,
            timestamp: timestamp.to_string(),
        }
    }

    pub fn from_corn(position: usize, r: &CornArea, timestamp: &str) -> Self {
        Self {
            id: synthetic_id(CropType::Corn, position),
            crop_type: CropType::Corn,
            area_square_meters: r.area_m2(),
            width: None,
            length: None,
            radius: Some(r.radius_m),
            timestamp: timestamp.to_string(),
        }
    }
}

fn synthetic_id(crop: CropType, position: usize) -> String {
    format!("{}_{}", crop.id_prefix(), position)
}
