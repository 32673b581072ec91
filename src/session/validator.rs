// ==========================================
// FarmTech 农场记录系统 - 输入校验器
// ==========================================
// 职责: 数值输入的解析与范围校验
// 返回: 校验失败时给出提示消息的翻译键
// ==========================================

/// 数值范围规则
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberRule {
    /// > 0 (宽度 / 长度 / 半径)
    Positive,
    /// >= 0 (施用量 / 长度 / 面积)
    NonNegative,
}

impl NumberRule {
    /// 校验数值
    ///
    /// # 返回
    /// - Ok(()): 满足规则
    /// - Err(&str): 提示消息的翻译键
    pub fn check(&self, value: f64) -> Result<(), &'static str> {
        match self {
            NumberRule::Positive if value <= 0.0 => Err("input.must_be_positive"),
            NumberRule::NonNegative if value < 0.0 => Err("input.must_be_non_negative"),
            _ => Ok(()),
        }
    }
}

/// 解析小数,接受逗号作为小数分隔符 ("2,5" → 2.5)
///
/// 非有限值 (NaN / inf) 视为无效输入
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replace(',', ".");
    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// 解析非负整数
pub fn parse_count(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

/// 确认回答: 仅 s / sim,不区分大小写; 其余一律视为取消
pub fn is_affirmative(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "s" | "sim")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("100"), Some(100.0));
        assert_eq!(parse_decimal(" 2.5 "), Some(2.5));
        assert_eq!(parse_decimal("2,5"), Some(2.5));
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal("inf"), None);
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("20"), Some(20));
        assert_eq!(parse_count("0"), Some(0));
        assert_eq!(parse_count("-1"), None);
        assert_eq!(parse_count("1.5"), None);
    }

    #[test]
    fn test_number_rules() {
        assert!(NumberRule::Positive.check(0.1).is_ok());
        assert_eq!(NumberRule::Positive.check(0.0), Err("input.must_be_positive"));
        assert!(NumberRule::NonNegative.check(0.0).is_ok());
        assert_eq!(
            NumberRule::NonNegative.check(-1.0),
            Err("input.must_be_non_negative")
        );
    }

    #[test]
    fn test_is_affirmative() {
        for yes in ["s", "S", "sim", "SIM", " Sim "] {
            assert!(is_affirmative(yes), "{yes:?} 应视为确认");
        }
        for no in ["n", "nao", "", "si", "ok", "y", "yes", "YES"] {
            assert!(!is_affirmative(no), "{no:?} 不应视为确认");
        }
    }
}
