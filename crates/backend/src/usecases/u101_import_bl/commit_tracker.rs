use contracts::usecases::u101_import_bl::progress::{CommitOutcome, CommitProgress, CommitStatus};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Трекер сессий отправки (in-memory, для real-time мониторинга)
#[derive(Clone, Default)]
pub struct CommitTracker {
    sessions: Arc<RwLock<HashMap<String, CommitProgress>>>,
}

impl CommitTracker {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Создать новую сессию отправки
    pub fn create_session(&self, session_id: String, total_to_attempt: usize) {
        let mut sessions = self.sessions.write().unwrap();
        sessions.insert(
            session_id.clone(),
            CommitProgress::new(session_id, total_to_attempt),
        );
    }

    /// Получить текущий прогресс сессии
    pub fn get_progress(&self, session_id: &str) -> Option<CommitProgress> {
        let sessions = self.sessions.read().unwrap();
        sessions.get(session_id).cloned()
    }

    /// Строка ушла в работу
    pub fn begin_row(&self, session_id: &str, row_number: usize) {
        let mut sessions = self.sessions.write().unwrap();
        if let Some(progress) = sessions.get_mut(session_id) {
            progress.begin_row(row_number);
        }
    }

    /// Зафиксировать итог строки
    pub fn record_outcome(&self, session_id: &str, outcome: CommitOutcome) {
        let mut sessions = self.sessions.write().unwrap();
        if let Some(progress) = sessions.get_mut(session_id) {
            progress.record_outcome(outcome);
        }
    }

    /// Запросить отмену; сработает между строками.
    /// false — сессия неизвестна либо уже завершена.
    pub fn request_cancel(&self, session_id: &str) -> bool {
        let mut sessions = self.sessions.write().unwrap();
        match sessions.get_mut(session_id) {
            Some(progress) if progress.status == CommitStatus::Running => {
                progress.cancel_requested = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_cancel_requested(&self, session_id: &str) -> bool {
        let sessions = self.sessions.read().unwrap();
        sessions
            .get(session_id)
            .map(|p| p.cancel_requested)
            .unwrap_or(false)
    }

    /// Завершить сессию с итоговым статусом
    pub fn complete_session(&self, session_id: &str, status: CommitStatus) {
        let mut sessions = self.sessions.write().unwrap();
        if let Some(progress) = sessions.get_mut(session_id) {
            progress.finish(status);
        }
    }
}
