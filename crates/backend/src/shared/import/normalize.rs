use chrono::{Duration, NaiveDate};
use contracts::domain::a001_bill_of_lading::import::Cell;

/// Привести ячейку даты к канонической строке `YYYY-MM-DD`.
///
/// Порядок правил:
/// 1. число — серийная дата формата xlsx (база 1899-12-30);
///    вне диапазона — падаем в текстовую ветку;
/// 2. `YYYY-MM-DD` — как есть;
/// 3. `YYYY/MM/DD` — слэши меняются на дефисы;
/// 4. всё остальное — текст с trim без изменений.
///
/// Никогда не ошибается: кривое значение деградирует до текста,
/// вопрос «дата ли это» решает валидатор. Идемпотентна для уже
/// нормализованных строк.
pub fn normalize_date(cell: &Cell) -> String {
    if let Cell::Number(n) = cell {
        if let Some(iso) = serial_to_iso(*n) {
            return iso;
        }
    }

    let text = cell.as_trimmed_text();
    if matches_date_shape(&text, b'-') {
        return text;
    }
    if matches_date_shape(&text, b'/') {
        return text.replace('/', "-");
    }
    text
}

// Серийник 1 соответствует 1900-01-01; база 1899-12-30 воспроизводит
// историческую обработку 1900 года так же, как сам формат xlsx.
// Верхняя граница — 9999-12-31. Дробная часть (время суток) отбрасывается.
fn serial_to_iso(serial: f64) -> Option<String> {
    if !serial.is_finite() {
        return None;
    }
    let days = serial.trunc() as i64;
    if !(1..=2_958_465).contains(&days) {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    let date = epoch.checked_add_signed(Duration::days(days))?;
    Some(date.format("%Y-%m-%d").to_string())
}

fn matches_date_shape(s: &str, sep: u8) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[4] == sep
        && b[7] == sep
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_date_renders_iso() {
        assert_eq!(normalize_date(&Cell::Number(46047.0)), "2026-01-25");
        // время суток отбрасывается
        assert_eq!(normalize_date(&Cell::Number(46047.75)), "2026-01-25");
        assert_eq!(normalize_date(&Cell::Number(61.0)), "1900-03-01");
    }

    #[test]
    fn out_of_range_serial_degrades_to_text() {
        assert_eq!(normalize_date(&Cell::Number(0.0)), "0");
        assert_eq!(normalize_date(&Cell::Number(-5.0)), "-5");
        assert_eq!(normalize_date(&Cell::Number(3_000_000.0)), "3000000");
    }

    #[test]
    fn iso_string_passes_through() {
        assert_eq!(
            normalize_date(&Cell::Text("2026-01-25".to_string())),
            "2026-01-25"
        );
    }

    #[test]
    fn slash_form_becomes_dashes() {
        assert_eq!(
            normalize_date(&Cell::Text("2026/01/25".to_string())),
            "2026-01-25"
        );
    }

    #[test]
    fn free_text_is_trimmed_unchanged() {
        assert_eq!(normalize_date(&Cell::Text("  TBA  ".to_string())), "TBA");
        assert_eq!(normalize_date(&Cell::Empty), "");
        // неполная дата — не дата
        assert_eq!(
            normalize_date(&Cell::Text("2026-1-25".to_string())),
            "2026-1-25"
        );
    }

    #[test]
    fn idempotent_on_normalized_input() {
        for raw in ["2026-01-25", "2026/01/25", "TBA", ""] {
            let once = normalize_date(&Cell::Text(raw.to_string()));
            let twice = normalize_date(&Cell::Text(once.clone()));
            assert_eq!(once, twice);
        }
    }
}
