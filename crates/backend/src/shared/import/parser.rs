use contracts::domain::a001_bill_of_lading::aggregate::FreightTerm;
use contracts::domain::a001_bill_of_lading::import::{Cell, ImportCandidate};
use uuid::Uuid;

use super::normalize::normalize_date;

/// Позиция → поле. Порядок колонок — внешний контракт с шаблоном
/// загрузки (см. template.rs); заголовок файла игнорируется,
/// разбор строго позиционный.
pub mod col {
    pub const MBL_NO: usize = 0;
    pub const HBL_NO: usize = 1;
    pub const VESSEL_NAME: usize = 2;
    pub const VOYAGE_NO: usize = 3;
    pub const POL_CODE: usize = 4;
    pub const POD_CODE: usize = 5;
    pub const ETD: usize = 6;
    pub const ETA: usize = 7;
    pub const SHIPPER: usize = 8;
    pub const CONSIGNEE: usize = 9;
    pub const NOTIFY_PARTY: usize = 10;
    pub const PACKAGE_QTY: usize = 11;
    pub const PACKAGE_TYPE: usize = 12;
    pub const GROSS_WEIGHT: usize = 13;
    pub const CBM: usize = 14;
    pub const REMARK: usize = 15;
    pub const FREIGHT_TERM: usize = 16;
}

/// Пустая строка — не данные, а разметка файла: нет ячеек либо пуст
/// первый столбец (MBL No; строка из одних пробелов тоже пустая).
/// Такие строки молча исключаются до разбора и не попадают в батч
/// даже как невалидные.
pub fn is_blank_row(cells: &[Cell]) -> bool {
    match cells.first() {
        None => true,
        Some(first) => first.is_blank(),
    }
}

/// Разобрать строку данных в кандидата.
///
/// Чистая функция. Каждое поле всегда получает значение: строки
/// трактуются с trim, числа — мягким разбором с нулём по умолчанию,
/// даты проходят нормализацию. Достаточность данных здесь не
/// проверяется — это работа валидатора.
pub fn parse_row(cells: &[Cell]) -> ImportCandidate {
    ImportCandidate {
        mbl_no: text_at(cells, col::MBL_NO),
        hbl_no: text_at(cells, col::HBL_NO),
        vessel_name: text_at(cells, col::VESSEL_NAME),
        voyage_no: text_at(cells, col::VOYAGE_NO),
        pol_code: text_at(cells, col::POL_CODE),
        pod_code: text_at(cells, col::POD_CODE),
        etd: date_at(cells, col::ETD),
        eta: date_at(cells, col::ETA),
        shipper: text_at(cells, col::SHIPPER),
        consignee: text_at(cells, col::CONSIGNEE),
        notify_party: text_at(cells, col::NOTIFY_PARTY),
        package_qty: number_at(cells, col::PACKAGE_QTY) as i64,
        package_type: text_at(cells, col::PACKAGE_TYPE),
        gross_weight: number_at(cells, col::GROSS_WEIGHT),
        cbm: number_at(cells, col::CBM),
        remark: text_at(cells, col::REMARK),
        freight_term: FreightTerm::parse_or_default(&text_at(cells, col::FREIGHT_TERM)),
        client_key: Uuid::new_v4(),
    }
}

fn text_at(cells: &[Cell], idx: usize) -> String {
    cells.get(idx).map(Cell::as_trimmed_text).unwrap_or_default()
}

fn number_at(cells: &[Cell], idx: usize) -> f64 {
    cells.get(idx).map(Cell::as_number).unwrap_or(0.0)
}

fn date_at(cells: &[Cell], idx: usize) -> String {
    cells.get(idx).map(normalize_date).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    #[test]
    fn blank_row_rule_pins_the_boundary() {
        assert!(is_blank_row(&[]));
        assert!(is_blank_row(&[Cell::Empty, text("HBL-1")]));
        // первая ячейка из одних пробелов — тоже пустая строка
        assert!(is_blank_row(&[text("   "), text("HBL-1")]));
        assert!(!is_blank_row(&[text("MBL-1")]));
    }

    #[test]
    fn every_field_gets_a_value_on_short_row() {
        let c = parse_row(&[text(" MBL-1 ")]);
        assert_eq!(c.mbl_no, "MBL-1");
        assert_eq!(c.hbl_no, "");
        assert_eq!(c.pol_code, "");
        assert_eq!(c.etd, "");
        assert_eq!(c.package_qty, 0);
        assert_eq!(c.gross_weight, 0.0);
        assert_eq!(c.cbm, 0.0);
        assert_eq!(c.freight_term, FreightTerm::Prepaid);
    }

    #[test]
    fn numeric_fields_coerce_leniently() {
        let mut cells = vec![Cell::Empty; 17];
        cells[col::MBL_NO] = text("MBL-1");
        cells[col::PACKAGE_QTY] = Cell::Number(120.0);
        cells[col::GROSS_WEIGHT] = text("3500.5");
        cells[col::CBM] = text("n/a");
        let c = parse_row(&cells);
        assert_eq!(c.package_qty, 120);
        assert_eq!(c.gross_weight, 3500.5);
        assert_eq!(c.cbm, 0.0);
    }

    #[test]
    fn dates_are_normalized_in_place() {
        let mut cells = vec![Cell::Empty; 17];
        cells[col::MBL_NO] = text("MBL-1");
        cells[col::ETD] = text("2026/01/25");
        cells[col::ETA] = Cell::Number(46050.0);
        let c = parse_row(&cells);
        assert_eq!(c.etd, "2026-01-25");
        assert_eq!(c.eta, "2026-01-28");
    }

    #[test]
    fn freight_term_parses_or_defaults() {
        let mut cells = vec![Cell::Empty; 17];
        cells[col::MBL_NO] = text("MBL-1");
        cells[col::FREIGHT_TERM] = text("collect");
        assert_eq!(parse_row(&cells).freight_term, FreightTerm::Collect);

        cells[col::FREIGHT_TERM] = Cell::Empty;
        assert_eq!(parse_row(&cells).freight_term, FreightTerm::Prepaid);
    }

    #[test]
    fn each_candidate_gets_its_own_client_key() {
        let cells = [text("MBL-1")];
        let a = parse_row(&cells);
        let b = parse_row(&cells);
        assert_ne!(a.client_key, b.client_key);
    }
}
