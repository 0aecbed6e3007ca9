use contracts::domain::a001_bill_of_lading::aggregate::BillOfLading;
use contracts::domain::a001_bill_of_lading::import::ImportBatch;
use contracts::usecases::u101_import_bl::progress::{
    CommitOutcome, CommitProgress, CommitStatus, CommitSummary,
};
use contracts::usecases::u101_import_bl::response::{CommitResponse, CommitStartStatus};
use std::sync::Arc;
use uuid::Uuid;

use super::commit_tracker::CommitTracker;
use super::remote_store::BillOfLadingStore;
use crate::shared::data::local_cache;

/// Executor отправки батча в удалённое хранилище.
///
/// Строки уходят строго последовательно, по одной: это ограничивает
/// нагрузку на хранилище, а порядок итогов совпадает с порядком строк
/// в файле. Неуспех строки не останавливает цикл и не откатывает уже
/// принятые строки — каждая строка самостоятельная единица работы.
#[derive(Clone)]
pub struct ImportExecutor {
    store: Arc<dyn BillOfLadingStore>,
    tracker: CommitTracker,
}

impl ImportExecutor {
    pub fn new(store: Arc<dyn BillOfLadingStore>, tracker: CommitTracker) -> Self {
        Self { store, tracker }
    }

    /// Запустить отправку: создаёт сессию, уводит цикл в фон и сразу
    /// возвращает session_id для опроса прогресса. Батч без валидных
    /// строк — no-op со статусом NothingToCommit, не ошибка.
    pub async fn start_commit(&self, batch: ImportBatch) -> CommitResponse {
        let to_attempt = batch.valid_count();
        if to_attempt == 0 {
            return CommitResponse {
                session_id: None,
                status: CommitStartStatus::NothingToCommit,
                message: "No valid rows to submit".to_string(),
            };
        }

        let session_id = Uuid::new_v4().to_string();
        self.tracker.create_session(session_id.clone(), to_attempt);

        let executor = self.clone();
        let task_session_id = session_id.clone();
        tokio::spawn(async move {
            let summary = executor.commit_batch(&task_session_id, &batch).await;
            tracing::info!(
                "Commit session {} finished: {} ok, {} failed",
                task_session_id,
                summary.success_count,
                summary.failure_count
            );
        });

        CommitResponse {
            session_id: Some(session_id),
            status: CommitStartStatus::Started,
            message: format!("Submitting {} rows", to_attempt),
        }
    }

    /// Текущий прогресс сессии
    pub fn get_progress(&self, session_id: &str) -> Option<CommitProgress> {
        self.tracker.get_progress(session_id)
    }

    /// Запросить отмену; сработает между строками
    pub fn request_cancel(&self, session_id: &str) -> bool {
        self.tracker.request_cancel(session_id)
    }

    /// Последовательный цикл отправки валидных строк батча.
    ///
    /// Итоговые счётчики всегда сходятся: success + failure равно числу
    /// реально попытанных строк. Ошибки транспорта учитываются как
    /// неуспех строки, из цикла не выбрасывается ничего.
    pub async fn commit_batch(&self, session_id: &str, batch: &ImportBatch) -> CommitSummary {
        let mut outcomes: Vec<CommitOutcome> = Vec::new();
        let mut cancelled = false;

        for row in batch.valid_rows() {
            // Отмена проверяется на границе строк: запрос в полёте
            // не прерывается
            if self.tracker.is_cancel_requested(session_id) {
                tracing::info!(
                    "Commit session {} cancelled after {} rows",
                    session_id,
                    outcomes.len()
                );
                cancelled = true;
                break;
            }

            self.tracker.begin_row(session_id, row.row_number);

            let outcome = match self.store.create(&row.candidate).await {
                Ok(ack) => {
                    // Оптимистичная запись: документ виден в рабочем
                    // наборе до следующего чтения удалённого хранилища
                    let record = BillOfLading::from_candidate(ack.id, &row.candidate);
                    if let Err(e) = local_cache::upsert(&record).await {
                        tracing::warn!("Local cache write failed for {}: {}", record.mbl_no, e);
                    }
                    CommitOutcome {
                        row_number: row.row_number,
                        succeeded: true,
                        message: None,
                    }
                }
                Err(err) => {
                    tracing::warn!(
                        "Row {} rejected by remote store: {}",
                        row.row_number,
                        err
                    );
                    CommitOutcome {
                        row_number: row.row_number,
                        succeeded: false,
                        message: Some(err.outcome_message()),
                    }
                }
            };

            self.tracker.record_outcome(session_id, outcome.clone());
            outcomes.push(outcome);
        }

        let status = if cancelled {
            CommitStatus::Cancelled
        } else if outcomes.is_empty() {
            CommitStatus::NothingToCommit
        } else if outcomes.iter().all(|o| o.succeeded) {
            CommitStatus::Completed
        } else {
            CommitStatus::CompletedWithErrors
        };

        self.tracker.complete_session(session_id, status);
        CommitSummary::from_outcomes(status, outcomes)
    }
}
