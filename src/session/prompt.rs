// ==========================================
// FarmTech 农场记录系统 - 控制台提示器
// ==========================================
// 行式输入: 输出提示 → 读取一行 → 解析
// 解析失败时提示并重新询问,不中断会话
// ==========================================

use crate::i18n::t;
use crate::session::error::{SessionError, SessionResult};
use crate::session::validator::{parse_count, parse_decimal, NumberRule};
use std::io::{BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// 输出一行
    pub fn say(&mut self, line: &str) -> SessionResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// 输出空行
    pub fn blank(&mut self) -> SessionResult<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// 输出提示并读取一行 (去除首尾空白)
    ///
    /// # 返回
    /// - Err(SessionError::InputClosed): 输入流已结束
    pub fn ask(&mut self, label: &str) -> SessionResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// 读取非空文本
    pub fn ask_text(&mut self, label: &str) -> SessionResult<String> {
        loop {
            let raw = self.ask(label)?;
            if !raw.is_empty() {
                return Ok(raw);
            }
            self.say(&t("input.empty_text"))?;
        }
    }

    /// 读取满足规则的小数
    pub fn ask_decimal(&mut self, label: &str, rule: NumberRule) -> SessionResult<f64> {
        loop {
            let raw = self.ask(label)?;
            let Some(value) = parse_decimal(&raw) else {
                tracing::warn!(input = %raw, "数值解析失败,重新询问");
                self.say(&t("input.not_a_number"))?;
                continue;
            };
            match rule.check(value) {
                Ok(()) => return Ok(value),
                Err(message_key) => {
                    tracing::warn!(value, ?rule, "数值超出范围,重新询问");
                    self.say(&t(message_key))?;
                }
            }
        }
    }

    /// 读取非负整数 (行数 / 列表位置)
    pub fn ask_count(&mut self, label: &str) -> SessionResult<u32> {
        loop {
            let raw = self.ask(label)?;
            match parse_count(&raw) {
                Some(value) => return Ok(value),
                None => {
                    tracing::warn!(input = %raw, "整数解析失败,重新询问");
                    self.say(&t("input.not_an_integer"))?;
                }
            }
        }
    }
}
