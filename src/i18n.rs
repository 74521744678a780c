// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持中文（默认）和英文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言（"zh-CN" 或 "en"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 按当前语言翻译
///
/// # 示例
/// ```no_run
/// use dga_duval::i18n::t;
/// let msg = t("common.success");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 按指定语言翻译,不改动全局语言
pub fn t_in(locale: &str, key: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}

/// 展示标签翻译
///
/// 中文直接返回 fallback; 其它语言缺失翻译时同样回落到 fallback
pub fn label_in(locale: &str, key: &str, fallback: &str) -> String {
    if locale.starts_with("zh") {
        return fallback.to_string();
    }
    let translated = t_in(locale, key);
    if translated == key || translated.ends_with(key) {
        fallback.to_string()
    } else {
        translated
    }
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use dga_duval::i18n::t_with_args;
/// let msg = t_with_args("config.file_not_found", &[("path", "/tmp/dga.json")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}
