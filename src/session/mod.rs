// ==========================================
// FarmTech 农场记录系统 - 交互式会话
// ==========================================
// 职责: 主菜单循环、子流程提示、结果与列表输出、导出确认
// 流向: Session → RecordStore (存储层不回调会话层)
// 状态: 仅"等待主菜单选择"; 每个子流程执行完毕后回到主循环
// ==========================================

pub mod error;
pub mod menu;
pub mod prompt;
pub mod render;
pub mod validator;

pub use error::{SessionError, SessionResult};
pub use menu::MainAction;
pub use prompt::Prompter;

use crate::domain::{CollectionKind, CornArea, CornInput, SoyArea, SoyInput};
use crate::exporter::CsvExporter;
use crate::i18n::{t, t_with_args};
use crate::repository::{RecordFields, RecordStore, StoreError};
use menu::{parse_collection, parse_crop, EntryKind};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use validator::{is_affirmative, NumberRule};

const RULE_WIDTH: usize = 50;

/// 主循环单步结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

// ==========================================
// Session - 交互式会话
// ==========================================
pub struct Session<R, W> {
    store: RecordStore,
    prompter: Prompter<R, W>,
    export_dir: PathBuf,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// 创建会话
    ///
    /// # 参数
    /// - store: 会话持有的记录存储
    /// - input / output: 控制台读写端 (测试中可用内存缓冲)
    /// - export_dir: 导出目录
    pub fn new(store: RecordStore, input: R, output: W, export_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            prompter: Prompter::new(input, output),
            export_dir: export_dir.into(),
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// 结束会话,交还记录存储与输出端
    pub fn finish(self) -> (RecordStore, W) {
        (self.store, self.prompter.into_output())
    }

    /// 运行主循环,直到选择退出或输入流结束
    pub fn run(&mut self) -> SessionResult<()> {
        tracing::info!(export_dir = %self.export_dir.display(), "会话开始");
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    tracing::info!("用户选择退出");
                    return Ok(());
                }
                Err(SessionError::InputClosed) => {
                    tracing::info!("输入流结束,会话退出");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn step(&mut self) -> SessionResult<Flow> {
        self.show_main_menu()?;
        let choice = self.prompter.ask(&t("menu.choose"))?;

        let Some(action) = MainAction::parse(&choice) else {
            tracing::debug!(choice = %choice, "无效的主菜单选择");
            self.prompter.say(&t("menu.invalid"))?;
            return Ok(Flow::Continue);
        };
        tracing::debug!(?action, "主菜单选择");

        match action {
            MainAction::Create => self.create_entry()?,
            MainAction::List => self.list_entries()?,
            MainAction::Update => self.update_entry()?,
            MainAction::Delete => self.delete_entry()?,
            MainAction::Export => self.export_all()?,
            MainAction::Exit => {
                self.prompter.blank()?;
                self.prompter.say(&t("app.farewell"))?;
                self.prompter.say(&t("app.tagline"))?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn show_main_menu(&mut self) -> SessionResult<()> {
        let rule = "=".repeat(RULE_WIDTH);
        self.prompter.blank()?;
        self.prompter.say(&rule)?;
        self.prompter.say(&t("app.title"))?;
        self.prompter.say(&rule)?;
        for key in MainAction::MENU_KEYS {
            self.prompter.say(&t(key))?;
        }
        self.prompter.say(&rule)
    }

    // ==========================================
    // 1. 录入
    // ==========================================
    fn create_entry(&mut self) -> SessionResult<()> {
        self.prompter.blank()?;
        self.prompter.say(&t("entry.title"))?;
        self.prompter.say(&t("entry.option_area"))?;
        self.prompter.say(&t("entry.option_input"))?;

        let Some(kind) = EntryKind::parse(&self.prompter.ask(&t("menu.choose"))?) else {
            return self.prompter.say(&t("menu.invalid"));
        };

        self.prompter.blank()?;
        let option_keys = match kind {
            EntryKind::Area => ["entry.area_crops", "entry.area_soy", "entry.area_corn"],
            EntryKind::Input => ["entry.input_crops", "entry.input_soy", "entry.input_corn"],
        };
        for key in option_keys {
            self.prompter.say(&t(key))?;
        }

        let Some(crop) = parse_crop(&self.prompter.ask(&t("entry.choose_crop"))?) else {
            return self.prompter.say(&t("menu.invalid"));
        };

        let message = match self.read_fields(kind.collection(crop))? {
            RecordFields::SoyArea(r) => {
                let area = self.store.add_soy_area(r.width_m, r.length_m);
                t_with_args("entry.soy_area_added", &[("area", format!("{:.2}", area).as_str())])
            }
            RecordFields::CornArea(r) => {
                let area = self.store.add_corn_area(r.radius_m);
                t_with_args("entry.corn_area_added", &[("area", format!("{:.2}", area).as_str())])
            }
            RecordFields::SoyInput(r) => {
                let liters = self.store.add_soy_input(
                    &r.product,
                    r.ml_per_meter,
                    r.row_count,
                    r.meters_per_row,
                );
                t_with_args(
                    "entry.soy_input_added",
                    &[("liters", format!("{:.2}", liters).as_str())],
                )
            }
            RecordFields::CornInput(r) => {
                let kg = self
                    .store
                    .add_corn_input(&r.product, r.kg_per_hectare, r.hectares);
                t_with_args("entry.corn_input_added", &[("kg", format!("{:.2}", kg).as_str())])
            }
        };
        self.prompter.say(&message)
    }

    /// 依次提示目标集合的录入字段
    fn read_fields(&mut self, collection: CollectionKind) -> SessionResult<RecordFields> {
        let p = &mut self.prompter;
        let fields = match collection {
            CollectionKind::SoyArea => {
                let width = p.ask_decimal(&t("prompt.width"), NumberRule::Positive)?;
                let length = p.ask_decimal(&t("prompt.length"), NumberRule::Positive)?;
                RecordFields::SoyArea(SoyArea::new(width, length))
            }
            CollectionKind::CornArea => {
                let radius = p.ask_decimal(&t("prompt.radius"), NumberRule::Positive)?;
                RecordFields::CornArea(CornArea::new(radius))
            }
            CollectionKind::SoyInput => {
                let product = p.ask_text(&t("prompt.product"))?;
                let ml_per_meter =
                    p.ask_decimal(&t("prompt.ml_per_meter"), NumberRule::NonNegative)?;
                let row_count = p.ask_count(&t("prompt.row_count"))?;
                let meters_per_row =
                    p.ask_decimal(&t("prompt.meters_per_row"), NumberRule::NonNegative)?;
                RecordFields::SoyInput(SoyInput::new(
                    product,
                    ml_per_meter,
                    row_count,
                    meters_per_row,
                ))
            }
            CollectionKind::CornInput => {
                let product = p.ask_text(&t("prompt.product"))?;
                let kg_per_hectare =
                    p.ask_decimal(&t("prompt.kg_per_hectare"), NumberRule::NonNegative)?;
                let hectares = p.ask_decimal(&t("prompt.hectares"), NumberRule::NonNegative)?;
                RecordFields::CornInput(CornInput::new(product, kg_per_hectare, hectares))
            }
        };
        Ok(fields)
    }

    // ==========================================
    // 2. 列表
    // ==========================================
    fn list_entries(&mut self) -> SessionResult<()> {
        self.prompter.blank()?;
        for line in render::listing_lines(&self.store) {
            self.prompter.say(&line)?;
        }
        Ok(())
    }

    // ==========================================
    // 3. 更新 / 4. 删除
    // ==========================================
    fn update_entry(&mut self) -> SessionResult<()> {
        let Some((collection, index)) = self.select_entry("update.title", "update.ask_position")?
        else {
            return Ok(());
        };

        let fields = self.read_fields(collection)?;
        match self.store.update_at(index, fields) {
            Ok(()) => self.prompter.say(&done_message("update.done", collection, index)),
            Err(e) => self.report_store_error(&e),
        }
    }

    fn delete_entry(&mut self) -> SessionResult<()> {
        let Some((collection, index)) = self.select_entry("delete.title", "delete.ask_position")?
        else {
            return Ok(());
        };

        match self.store.delete_at(collection, index) {
            Ok(()) => self.prompter.say(&done_message("delete.done", collection, index)),
            Err(e) => self.report_store_error(&e),
        }
    }

    /// 选择集合并按显示编号选择记录
    ///
    /// # 返回
    /// - Some((集合, 0 基索引)): 选择有效
    /// - None: 选项无效、集合为空或编号越界 (已提示用户)
    fn select_entry(
        &mut self,
        title_key: &str,
        position_key: &str,
    ) -> SessionResult<Option<(CollectionKind, usize)>> {
        self.prompter.blank()?;
        self.prompter.say(&t(title_key))?;
        for (i, collection) in CollectionKind::ALL.iter().enumerate() {
            let line = t_with_args(
                "collection.option",
                &[
                    ("number", (i + 1).to_string().as_str()),
                    ("label", t(collection.label_key()).as_str()),
                ],
            );
            self.prompter.say(&line)?;
        }

        let Some(collection) = parse_collection(&self.prompter.ask(&t("menu.choose"))?) else {
            self.prompter.say(&t("menu.invalid"))?;
            return Ok(None);
        };

        let len = self.store.len(collection);
        if len == 0 {
            let label = t(collection.label_key());
            self.prompter
                .say(&t_with_args("entries.empty", &[("collection", label.as_str())]))?;
            return Ok(None);
        }

        self.prompter.say(&t("entries.available"))?;
        for line in render::numbered_entries(&self.store, collection) {
            self.prompter.say(&line)?;
        }

        let position = self.prompter.ask_count(&t(position_key))? as usize;
        match position.checked_sub(1).filter(|index| *index < len) {
            Some(index) => Ok(Some((collection, index))),
            None => {
                tracing::warn!(%collection, position, len, "显示编号越界");
                self.report_out_of_range(position, len)?;
                Ok(None)
            }
        }
    }

    fn report_store_error(&mut self, err: &StoreError) -> SessionResult<()> {
        match err {
            StoreError::IndexOutOfRange { index, len, .. } => {
                self.report_out_of_range(index + 1, *len)
            }
        }
    }

    fn report_out_of_range(&mut self, position: usize, len: usize) -> SessionResult<()> {
        self.prompter.say(&t_with_args(
            "entries.out_of_range",
            &[
                ("position", position.to_string().as_str()),
                ("count", len.to_string().as_str()),
            ],
        ))
    }

    // ==========================================
    // 5. 导出
    // ==========================================
    fn export_all(&mut self) -> SessionResult<()> {
        self.prompter.blank()?;
        self.prompter.say(&t("export.title"))?;

        if self.store.is_empty() {
            return self.prompter.say(&t("export.nothing"));
        }

        self.prompter.say(&t("export.summary"))?;
        for line in render::summary_lines(&self.store.summary()) {
            self.prompter.say(&line)?;
        }

        let answer = self.prompter.ask(&t("export.confirm"))?;
        if !is_affirmative(&answer) {
            tracing::info!(answer = %answer, "导出已取消");
            return self.prompter.say(&t("export.cancelled"));
        }

        let exporter = CsvExporter::new(&self.export_dir);
        match exporter.export(&self.store) {
            Ok(report) => {
                self.prompter.say(&t_with_args(
                    "export.done",
                    &[
                        ("dir", self.export_dir.display().to_string().as_str()),
                        ("timestamp", report.timestamp.as_str()),
                    ],
                ))?;
                for file in report.all_files() {
                    let name = file
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| file.display().to_string());
                    self.prompter
                        .say(&t_with_args("export.file_line", &[("file", name.as_str())]))?;
                }
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "导出失败");
                let reason = render::export_error_line(&e);
                self.prompter
                    .say(&t_with_args("export.failed", &[("error", reason.as_str())]))
            }
        }
    }
}

fn done_message(key: &str, collection: CollectionKind, index: usize) -> String {
    t_with_args(
        key,
        &[
            ("collection", t(collection.label_key()).as_str()),
            ("position", (index + 1).to_string().as_str()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(store: RecordStore, script: &str) -> RecordStore {
        let mut session = Session::new(
            store,
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            std::env::temp_dir().join("farmtech-session-unit"),
        );
        session.run().unwrap();
        session.finish().0
    }

    #[test]
    fn test_exit_choice_ends_session() {
        let store = run_script(RecordStore::new(), "6\n1\n1\n1\n5\n5\n");
        assert!(store.is_empty(), "退出后的输入不应被处理");
    }

    #[test]
    fn test_invalid_choice_redisplays_menu() {
        let mut session = Session::new(
            RecordStore::new(),
            Cursor::new(b"9\n6\n".to_vec()),
            Vec::new(),
            std::env::temp_dir(),
        );
        session.run().unwrap();
        let (_, output) = session.finish();
        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.matches(&"=".repeat(RULE_WIDTH)).count(), 6);
    }

    #[test]
    fn test_create_soy_area_with_bad_input_reprompts() {
        let store = run_script(RecordStore::new(), "1\n1\n1\nlargo\n100\n200\n6\n");
        assert_eq!(store.soy_areas(), &[SoyArea::new(100.0, 200.0)]);
    }

    #[test]
    fn test_delete_out_of_range_changes_nothing() {
        let mut store = RecordStore::new();
        store.add_corn_area(5.0);
        let store = run_script(store, "4\n2\n3\n6\n");
        assert_eq!(store.corn_areas().len(), 1);
    }

    #[test]
    fn test_update_zero_position_is_out_of_range() {
        let mut store = RecordStore::new();
        store.add_corn_area(5.0);
        let store = run_script(store, "3\n2\n0\n6\n");
        assert_eq!(store.corn_areas(), &[CornArea::new(5.0)]);
    }

    #[test]
    fn test_export_declined_writes_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut store = RecordStore::new();
        store.add_soy_area(1.0, 1.0);

        let mut session = Session::new(
            store,
            Cursor::new(b"5\nn\n6\n".to_vec()),
            Vec::new(),
            dir.path().join("out"),
        );
        session.run().unwrap();
        assert!(!dir.path().join("out").exists());
        assert_eq!(session.store().summary().total(), 1);
    }
}
