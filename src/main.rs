// ==========================================
// FarmTech 农场记录系统 - 控制台主入口
// ==========================================
// 启动顺序: 配置 → 日志 → 语言 → 会话主循环
// 退出码: 正常退出为 0
// ==========================================

use anyhow::Context;
use farmtech::config::AppConfig;
use farmtech::{i18n, logging, RecordStore, Session};
use std::io;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load_or_default().context("加载配置失败")?;

    // 初始化日志系统
    logging::init(&config.log_filter);
    i18n::set_locale(&config.locale);

    tracing::info!(
        app = farmtech::APP_NAME,
        version = farmtech::VERSION,
        locale = %config.locale,
        "系统启动"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(
        RecordStore::new(),
        stdin.lock(),
        stdout.lock(),
        &config.export_dir,
    );
    session.run().context("会话异常终止")?;

    tracing::info!("系统已退出");
    Ok(())
}
