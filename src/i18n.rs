// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持葡萄牙语（默认, pt-BR）和英文 (en)
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 支持的语言代码
pub const SUPPORTED_LOCALES: [&str; 2] = ["pt-BR", "en"];

/// 默认语言
pub const DEFAULT_LOCALE: &str = "pt-BR";

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"pt-BR" 或 "en"）; 不支持的代码回退到默认语言
pub fn set_locale(locale: &str) {
    if SUPPORTED_LOCALES.contains(&locale) {
        rust_i18n::set_locale(locale);
    } else {
        tracing::warn!(locale, fallback = DEFAULT_LOCALE, "不支持的语言,使用默认语言");
        rust_i18n::set_locale(DEFAULT_LOCALE);
    }
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use farmtech::i18n::t;
/// let msg = t("menu.choose");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use farmtech::i18n::t_with_args;
/// let msg = t_with_args("list.area_count", &[("count", "3")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}
