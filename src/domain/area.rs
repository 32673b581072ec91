// ==========================================
// FarmTech 农场记录系统 - 田块面积领域模型
// ==========================================
// 大豆: 矩形田块 (宽 × 长)
// 玉米: 圆形田块 (π × 半径²)
// 单位: 米 / 平方米
// ==========================================

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

// ==========================================
// SoyArea - 大豆矩形田块
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoyArea {
    pub width_m: f64,  // 宽度 (米)
    pub length_m: f64, // 长度 (米)
}

impl SoyArea {
    pub fn new(width_m: f64, length_m: f64) -> Self {
        Self { width_m, length_m }
    }

    /// 面积 (平方米) = 宽 × 长
    pub fn area_m2(&self) -> f64 {
        self.width_m * self.length_m
    }
}

// ==========================================
// CornArea - 玉米圆形田块
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CornArea {
    pub radius_m: f64, // 半径 (米)
}

impl CornArea {
    pub fn new(radius_m: f64) -> Self {
        Self { radius_m }
    }

    /// 面积 (平方米) = π × r²
    pub fn area_m2(&self) -> f64 {
        PI * self.radius_m.powi(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soy_area_is_width_times_length() {
        let area = SoyArea::new(100.0, 200.0);
        assert!((area.area_m2() - 20_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_corn_area_uses_pi() {
        let area = CornArea::new(50.0);
        assert!((area.area_m2() - 7_853.981_633_974_483).abs() < 1e-6);
        assert_eq!(format!("{:.2}", area.area_m2()), "7853.98");
    }

    #[test]
    fn test_area_follows_field_changes() {
        let mut area = SoyArea::new(10.0, 10.0);
        area.width_m = 20.0;
        assert!((area.area_m2() - 200.0).abs() < 1e-9);
    }
}
