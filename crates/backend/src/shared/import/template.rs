use anyhow::Result;

/// Заголовок шаблона загрузки. Порядок колонок — несущий контракт:
/// парсер читает строго по позициям (parser::col), заголовок в файле
/// служит только подсказкой пользователю.
pub const TEMPLATE_HEADERS: [&str; 17] = [
    "MBL No",
    "HBL No",
    "Vessel",
    "Voyage No",
    "POL",
    "POD",
    "ETD",
    "ETA",
    "Shipper",
    "Consignee",
    "Notify Party",
    "Qty",
    "Package",
    "Weight(KG)",
    "CBM",
    "Description",
    "Freight Term",
];

pub const TEMPLATE_FILE_NAME: &str = "bl_import_template.csv";

/// Пример данных в шаблоне
const SAMPLE_ROW: [&str; 17] = [
    "MBLX2026010001",
    "HBLS2026010001",
    "HMM NURI",
    "0012E",
    "CNSHA",
    "KRPUS",
    "2026-01-25",
    "2026-01-28",
    "SHANGHAI TRADING CO LTD",
    "BUSAN IMPORT CO LTD",
    "SAME AS CONSIGNEE",
    "120",
    "CTN",
    "3500",
    "28.5",
    "AUTO PARTS",
    "PREPAID",
];

/// Сформировать CSV шаблона: заголовок + одна строка примера
pub fn sample_template_csv() -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(TEMPLATE_HEADERS)?;
    writer.write_record(SAMPLE_ROW)?;
    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("csv writer: {}", e.error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::import::build_batch;
    use contracts::domain::a001_bill_of_lading::import::Cell;

    #[test]
    fn header_row_matches_documented_column_order() {
        let bytes = sample_template_csv().unwrap();
        let content = String::from_utf8(bytes).unwrap();
        let first_line = content.lines().next().unwrap();
        assert_eq!(first_line, TEMPLATE_HEADERS.join(","));
    }

    #[test]
    fn header_width_matches_parser_contract() {
        use crate::shared::import::parser::col;
        assert_eq!(TEMPLATE_HEADERS.len(), col::FREIGHT_TERM + 1);
        assert_eq!(SAMPLE_ROW.len(), TEMPLATE_HEADERS.len());
    }

    #[test]
    fn sample_row_parses_into_a_valid_candidate() {
        let rows: Vec<Vec<Cell>> = [TEMPLATE_HEADERS, SAMPLE_ROW]
            .iter()
            .map(|row| row.iter().map(|s| Cell::Text(s.to_string())).collect())
            .collect();
        let batch = build_batch(&rows);
        assert_eq!(batch.total(), 1);
        assert_eq!(batch.valid_count(), 1);
        let c = &batch.rows[0].candidate;
        assert_eq!(c.package_qty, 120);
        assert_eq!(c.cbm, 28.5);
    }
}
