use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Итог одной попытки отправки строки
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitOutcome {
    #[serde(rename = "rowNumber")]
    pub row_number: usize,
    pub succeeded: bool,
    /// Сообщение удалённого хранилища для неуспеха; у успеха отсутствует
    pub message: Option<String>,
}

/// Сводка по завершённой (или отменённой) отправке батча
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitSummary {
    #[serde(rename = "successCount")]
    pub success_count: usize,
    #[serde(rename = "failureCount")]
    pub failure_count: usize,
    pub outcomes: Vec<CommitOutcome>,
    pub status: CommitStatus,
}

impl CommitSummary {
    /// Счётчики всегда выводятся из списка итогов
    pub fn from_outcomes(status: CommitStatus, outcomes: Vec<CommitOutcome>) -> Self {
        let success_count = outcomes.iter().filter(|o| o.succeeded).count();
        Self {
            success_count,
            failure_count: outcomes.len() - success_count,
            outcomes,
            status,
        }
    }

    pub fn nothing_to_commit() -> Self {
        Self::from_outcomes(CommitStatus::NothingToCommit, Vec::new())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitStatus {
    /// Отправка идёт
    Running,

    /// Все строки отправлены успешно
    Completed,

    /// Отправка дошла до конца, часть строк отклонена
    CompletedWithErrors,

    /// Остановлена между строками по запросу пользователя
    Cancelled,

    /// В батче не было валидных строк
    NothingToCommit,
}

/// Фаза последовательного цикла отправки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CommitPhase {
    Pending,
    InFlight {
        #[serde(rename = "rowNumber")]
        row_number: usize,
    },
    Done,
}

/// Текущий прогресс отправки (для real-time мониторинга)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitProgress {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    pub status: CommitStatus,
    pub phase: CommitPhase,
    #[serde(rename = "startedAt")]
    pub started_at: DateTime<Utc>,
    #[serde(rename = "completedAt")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,

    /// Сколько строк предстоит отправить
    #[serde(rename = "totalToAttempt")]
    pub total_to_attempt: usize,
    #[serde(rename = "successCount")]
    pub success_count: usize,
    #[serde(rename = "failureCount")]
    pub failure_count: usize,
    pub outcomes: Vec<CommitOutcome>,

    /// Запрошена отмена; сработает между строками
    #[serde(rename = "cancelRequested")]
    pub cancel_requested: bool,
}

impl CommitProgress {
    pub fn new(session_id: String, total_to_attempt: usize) -> Self {
        let now = Utc::now();
        Self {
            session_id,
            status: CommitStatus::Running,
            phase: CommitPhase::Pending,
            started_at: now,
            completed_at: None,
            updated_at: now,
            total_to_attempt,
            success_count: 0,
            failure_count: 0,
            outcomes: Vec::new(),
            cancel_requested: false,
        }
    }

    /// Строка ушла в работу
    pub fn begin_row(&mut self, row_number: usize) {
        self.phase = CommitPhase::InFlight { row_number };
        self.updated_at = Utc::now();
    }

    /// Зафиксировать итог строки
    pub fn record_outcome(&mut self, outcome: CommitOutcome) {
        if outcome.succeeded {
            self.success_count += 1;
        } else {
            self.failure_count += 1;
        }
        self.outcomes.push(outcome);
        self.updated_at = Utc::now();
    }

    /// Завершить сессию с итоговым статусом
    pub fn finish(&mut self, status: CommitStatus) {
        self.status = status;
        self.phase = CommitPhase::Done;
        let now = Utc::now();
        self.completed_at = Some(now);
        self.updated_at = now;
    }
}
