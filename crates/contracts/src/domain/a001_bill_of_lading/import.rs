use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::aggregate::FreightTerm;

/// Ячейка загруженной таблицы.
///
/// Файл разбирает внешний коллаборатор (SPA), сюда приходит уже
/// декодированный 2-D массив примитивов: строка, число или пусто.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    /// Пустая ячейка: null либо строка из одних пробелов
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }

    /// Текстовое представление с trim; числа без хвостового ".0"
    pub fn as_trimmed_text(&self) -> String {
        match self {
            Cell::Text(s) => s.trim().to_string(),
            Cell::Number(n) => format_cell_number(*n),
            Cell::Empty => String::new(),
        }
    }

    /// Числовое значение; нераспознанный текст и пусто дают 0, никогда NaN
    pub fn as_number(&self) -> f64 {
        let value = match self {
            Cell::Number(n) => *n,
            Cell::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            Cell::Empty => 0.0,
        };
        if value.is_finite() {
            value
        } else {
            0.0
        }
    }
}

/// Число без хвостового ".0" для целых значений
pub fn format_cell_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Кандидат импорта: разобранная, но ещё не проверенная строка файла.
///
/// Инвариант: каждое поле всегда присутствует (пустая строка / ноль),
/// парсер никогда не решает вопрос достаточности данных — это дело
/// валидатора.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportCandidate {
    #[serde(rename = "mblNo")]
    pub mbl_no: String,
    #[serde(rename = "hblNo")]
    pub hbl_no: String,
    #[serde(rename = "vesselName")]
    pub vessel_name: String,
    #[serde(rename = "voyageNo")]
    pub voyage_no: String,
    #[serde(rename = "polCode")]
    pub pol_code: String,
    #[serde(rename = "podCode")]
    pub pod_code: String,
    #[serde(rename = "etd")]
    pub etd: String,
    #[serde(rename = "eta")]
    pub eta: String,
    #[serde(rename = "shipper")]
    pub shipper: String,
    #[serde(rename = "consignee")]
    pub consignee: String,
    #[serde(rename = "notifyParty")]
    pub notify_party: String,
    #[serde(rename = "packageQty")]
    pub package_qty: i64,
    #[serde(rename = "packageType")]
    pub package_type: String,
    #[serde(rename = "grossWeight")]
    pub gross_weight: f64,
    #[serde(rename = "cbm")]
    pub cbm: f64,
    #[serde(rename = "remark")]
    pub remark: String,
    #[serde(rename = "freightTerm")]
    pub freight_term: FreightTerm,
    /// Клиентский ключ идемпотентности, назначается при разборе строки;
    /// удалённое хранилище дедуплицирует create по нему
    #[serde(rename = "clientKey")]
    pub client_key: Uuid,
}

/// Результат проверки кандидата
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowValidation {
    #[serde(rename = "isValid")]
    pub is_valid: bool,
    /// Нарушения в порядке проверки полей
    pub violations: Vec<String>,
}

impl RowValidation {
    /// Единственный способ построить результат: is_valid выводится из
    /// списка нарушений и не может разъехаться с ним
    pub fn from_violations(violations: Vec<String>) -> Self {
        Self {
            is_valid: violations.is_empty(),
            violations,
        }
    }
}

/// Строка батча: кандидат + результат проверки + позиция в файле
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRow {
    /// Номер строки данных (1-based, заголовок не считается;
    /// пропущенные пустые строки номер не освобождают)
    #[serde(rename = "rowNumber")]
    pub row_number: usize,
    pub candidate: ImportCandidate,
    #[serde(flatten)]
    pub validation: RowValidation,
}

/// Батч одной загрузки: упорядоченные строки, счётчики всегда
/// вычисляются из rows и нигде не хранятся отдельно
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportBatch {
    pub rows: Vec<ImportRow>,
}

impl ImportBatch {
    pub fn total(&self) -> usize {
        self.rows.len()
    }

    pub fn valid_count(&self) -> usize {
        self.rows.iter().filter(|r| r.validation.is_valid).count()
    }

    pub fn invalid_count(&self) -> usize {
        self.total() - self.valid_count()
    }

    /// Строки, допущенные к отправке
    pub fn valid_rows(&self) -> impl Iterator<Item = &ImportRow> {
        self.rows.iter().filter(|r| r.validation.is_valid)
    }

    /// Плоский журнал ошибок: одна строка на каждую невалидную запись
    pub fn error_log(&self) -> Vec<String> {
        self.rows
            .iter()
            .filter(|r| !r.validation.is_valid)
            .map(|r| format!("row {}: {}", r.row_number, r.validation.violations.join(", ")))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_deserializes_from_json_primitives() {
        let cells: Vec<Cell> = serde_json::from_str(r#"["MBL-1", 42.5, null, ""]"#).unwrap();
        assert_eq!(cells[0], Cell::Text("MBL-1".to_string()));
        assert_eq!(cells[1], Cell::Number(42.5));
        assert_eq!(cells[2], Cell::Empty);
        assert_eq!(cells[3], Cell::Text(String::new()));
    }

    #[test]
    fn cell_blank_covers_whitespace_text() {
        assert!(Cell::Empty.is_blank());
        assert!(Cell::Text("   ".to_string()).is_blank());
        assert!(!Cell::Text(" x ".to_string()).is_blank());
        assert!(!Cell::Number(0.0).is_blank());
    }

    #[test]
    fn cell_number_coercion_never_nan() {
        assert_eq!(Cell::Text("12.5".to_string()).as_number(), 12.5);
        assert_eq!(Cell::Text("abc".to_string()).as_number(), 0.0);
        assert_eq!(Cell::Empty.as_number(), 0.0);
        assert_eq!(Cell::Number(f64::NAN).as_number(), 0.0);
    }

    #[test]
    fn number_text_drops_trailing_zero() {
        assert_eq!(Cell::Number(42.0).as_trimmed_text(), "42");
        assert_eq!(Cell::Number(42.5).as_trimmed_text(), "42.5");
    }

    #[test]
    fn validation_invariant_holds() {
        assert!(RowValidation::from_violations(vec![]).is_valid);
        let v = RowValidation::from_violations(vec!["MBL No required".to_string()]);
        assert!(!v.is_valid);
    }
}
