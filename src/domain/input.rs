// ==========================================
// FarmTech 农场记录系统 - 投入品领域模型
// ==========================================
// 大豆: 液体投入品,按行线性施用 (毫升/米)
// 玉米: 颗粒投入品,按面积施用 (公斤/公顷)
// ==========================================

use serde::{Deserialize, Serialize};

/// 毫升 → 升
pub const ML_PER_LITER: f64 = 1000.0;

// ==========================================
// SoyInput - 大豆液体投入品
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoyInput {
    pub product: String,     // 产品名称
    pub ml_per_meter: f64,   // 施用量 (毫升/米)
    pub row_count: u32,      // 行数
    pub meters_per_row: f64, // 每行长度 (米)
}

impl SoyInput {
    pub fn new(
        product: impl Into<String>,
        ml_per_meter: f64,
        row_count: u32,
        meters_per_row: f64,
    ) -> Self {
        Self {
            product: product.into(),
            ml_per_meter,
            row_count,
            meters_per_row,
        }
    }

    /// 总施用长度 (米) = 行数 × 每行长度
    pub fn total_meters(&self) -> f64 {
        f64::from(self.row_count) * self.meters_per_row
    }

    /// 所需体积 (升) = 毫升/米 × 总长度 / 1000
    pub fn required_liters(&self) -> f64 {
        self.ml_per_meter * self.total_meters() / ML_PER_LITER
    }
}

// ==========================================
// CornInput - 玉米颗粒投入品
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CornInput {
    pub product: String,     // 产品名称
    pub kg_per_hectare: f64, // 施用量 (公斤/公顷)
    pub hectares: f64,       // 面积 (公顷)
}

impl CornInput {
    pub fn new(product: impl Into<String>, kg_per_hectare: f64, hectares: f64) -> Self {
        Self {
            product: product.into(),
            kg_per_hectare,
            hectares,
        }
    }

    /// 所需质量 (公斤) = 公斤/公顷 × 公顷
    pub fn required_kg(&self) -> f64 {
        self.kg_per_hectare * self.hectares
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soy_input_liters() {
        let input = SoyInput::new("Fosfato", 500.0, 20, 100.0);
        assert!((input.total_meters() - 2_000.0).abs() < 1e-9);
        assert!((input.required_liters() - 1_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_soy_input_zero_rows() {
        let input = SoyInput::new("Herbicida", 300.0, 0, 150.0);
        assert_eq!(input.total_meters(), 0.0);
        assert_eq!(input.required_liters(), 0.0);
    }

    #[test]
    fn test_corn_input_kg() {
        let input = CornInput::new("NPK", 250.0, 2.5);
        assert!((input.required_kg() - 625.0).abs() < 1e-9);
    }
}
