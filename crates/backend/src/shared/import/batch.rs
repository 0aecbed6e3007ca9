use contracts::domain::a001_bill_of_lading::import::{Cell, ImportBatch, ImportRow};

use super::parser::{is_blank_row, parse_row};
use super::validator::validate;

/// Собрать батч одной загрузки.
///
/// Первая строка файла — заголовок шаблона, игнорируется. Строки
/// данных нумеруются с 1 в порядке файла; пустые строки выбывают
/// молча, но номер не освобождают — номера в журнале ошибок совпадают
/// с файлом пользователя. Чистая трансформация без побочных эффектов:
/// результат показывается для подтверждения, автокоммита нет.
pub fn build_batch(raw_rows: &[Vec<Cell>]) -> ImportBatch {
    let mut rows = Vec::new();

    for (idx, cells) in raw_rows.iter().skip(1).enumerate() {
        if is_blank_row(cells) {
            continue;
        }
        let candidate = parse_row(cells);
        let validation = validate(&candidate);
        rows.push(ImportRow {
            row_number: idx + 1,
            candidate,
            validation,
        });
    }

    ImportBatch { rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    fn header() -> Vec<Cell> {
        vec![text("MBL No"), text("HBL No")]
    }

    fn data_row(mbl: &str, hbl: &str, pol: &str, pod: &str) -> Vec<Cell> {
        vec![
            text(mbl),
            text(hbl),
            Cell::Empty,
            Cell::Empty,
            text(pol),
            text(pod),
        ]
    }

    #[test]
    fn header_is_skipped_and_rows_numbered_from_one() {
        let rows = vec![header(), data_row("MBL-1", "HBL-1", "CNSHA", "KRPUS")];
        let batch = build_batch(&rows);
        assert_eq!(batch.total(), 1);
        assert_eq!(batch.rows[0].row_number, 1);
    }

    #[test]
    fn blank_rows_are_excluded_but_keep_numbering() {
        let rows = vec![
            header(),
            data_row("MBL-1", "HBL-1", "CNSHA", "KRPUS"),
            vec![Cell::Empty],
            data_row("MBL-3", "", "CNSHA", "KRPUS"),
        ];
        let batch = build_batch(&rows);
        assert_eq!(batch.total(), 2);
        // пустая строка 2 выбыла, но строка 3 сохранила свой номер
        assert_eq!(batch.rows[1].row_number, 3);
        // кандидатов с пустым первым столбцом в батче не бывает
        assert!(batch.rows.iter().all(|r| !r.candidate.mbl_no.is_empty()));
    }

    #[test]
    fn counts_always_reconcile() {
        let rows = vec![
            header(),
            data_row("MBL-1", "HBL-1", "CNSHA", "KRPUS"),
            data_row("MBL-2", "", "CNSHA", "KRPUS"),
            data_row("MBL-3", "HBL-3", "", ""),
        ];
        let batch = build_batch(&rows);
        assert_eq!(batch.total(), 3);
        assert_eq!(batch.valid_count(), 1);
        assert_eq!(batch.invalid_count(), 2);
        assert_eq!(batch.valid_count() + batch.invalid_count(), batch.total());
    }

    #[test]
    fn error_log_references_row_numbers_and_violations() {
        let rows = vec![
            header(),
            data_row("MBL-1", "HBL-1", "CNSHA", "KRPUS"),
            data_row("MBL-2", "", "", "KRPUS"),
        ];
        let batch = build_batch(&rows);
        let log = batch.error_log();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0], "row 2: HBL No required, POL required");
    }

    #[test]
    fn order_is_preserved() {
        let rows = vec![
            header(),
            data_row("MBL-B", "HBL-1", "CNSHA", "KRPUS"),
            data_row("MBL-A", "HBL-2", "CNSHA", "KRPUS"),
        ];
        let batch = build_batch(&rows);
        assert_eq!(batch.rows[0].candidate.mbl_no, "MBL-B");
        assert_eq!(batch.rows[1].candidate.mbl_no, "MBL-A");
    }

    #[test]
    fn vessel_blank_still_valid_when_required_fields_present() {
        let rows = vec![
            header(),
            vec![
                text("MBL-1"),
                text("HBL-1"),
                text(""),
                text(""),
                text("CNSHA"),
                text("KRPUS"),
                text("2026-01-25"),
                text("2026-01-28"),
            ],
        ];
        let batch = build_batch(&rows);
        assert_eq!(batch.valid_count(), 1);
        assert_eq!(batch.rows[0].candidate.etd, "2026-01-25");
    }
}
