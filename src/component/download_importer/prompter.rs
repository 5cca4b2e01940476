//! 匯入過程的確認提示
//!
//! 互動模式使用 dialoguer；`AutoPrompter` 以固定答案回覆，用於腳本化執行

use anyhow::Result;
use dialoguer::Confirm;

/// 匯入時需要使用者確認的動作
pub trait ImportPrompter {
    fn confirm(&self, question: &str) -> Result<bool>;
}

/// 透過終端機詢問使用者
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter;

impl ImportPrompter for DialoguerPrompter {
    fn confirm(&self, question: &str) -> Result<bool> {
        let confirmed = Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact()?;
        Ok(confirmed)
    }
}

/// 不詢問，直接回傳固定答案
#[derive(Debug, Clone, Copy)]
pub struct AutoPrompter {
    answer: bool,
}

impl AutoPrompter {
    #[must_use]
    pub const fn new(answer: bool) -> Self {
        Self { answer }
    }
}

impl ImportPrompter for AutoPrompter {
    fn confirm(&self, _question: &str) -> Result<bool> {
        Ok(self.answer)
    }
}
