use crate::domain::a001_bill_of_lading::import::Cell;
use serde::{Deserialize, Serialize};

/// POST /api/import/bl/preview
///
/// Строки уже декодированы из файла внешним коллаборатором;
/// первая строка — заголовок шаблона, парсер её игнорирует.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewRequest {
    pub rows: Vec<Vec<Cell>>,
}

/// POST /api/import/bl/commit
///
/// Сервер заново собирает и проверяет батч из сырых строк:
/// preview носит справочный характер, доверять клиентской
/// разметке валидности нельзя.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRequest {
    pub rows: Vec<Vec<Cell>>,
}
