use crate::domain::a001_bill_of_lading::import::{ImportBatch, ImportRow};
use serde::{Deserialize, Serialize};

/// Превью батча перед подтверждением: счётчики, журнал ошибок и строки
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchPreview {
    pub total: usize,
    #[serde(rename = "validCount")]
    pub valid_count: usize,
    #[serde(rename = "invalidCount")]
    pub invalid_count: usize,
    #[serde(rename = "errorLog")]
    pub error_log: Vec<String>,
    pub rows: Vec<ImportRow>,
}

impl BatchPreview {
    pub fn from_batch(batch: &ImportBatch) -> Self {
        Self {
            total: batch.total(),
            valid_count: batch.valid_count(),
            invalid_count: batch.invalid_count(),
            error_log: batch.error_log(),
            rows: batch.rows.clone(),
        }
    }
}

/// Ответ на запуск отправки батча
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitResponse {
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
    pub status: CommitStartStatus,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitStartStatus {
    /// Отправка запущена, прогресс доступен по session_id
    Started,
    /// Валидных строк нет; это no-op, а не ошибка
    NothingToCommit,
}
