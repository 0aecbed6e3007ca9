use contracts::domain::a001_bill_of_lading::import::{ImportCandidate, RowValidation};

/// Фиксированный словарь нарушений по обязательным полям
pub const MSG_MBL_REQUIRED: &str = "MBL No required";
pub const MSG_HBL_REQUIRED: &str = "HBL No required";
pub const MSG_POL_REQUIRED: &str = "POL required";
pub const MSG_POD_REQUIRED: &str = "POD required";

/// Проверить кандидата.
///
/// Обязательные поля: MBL No, HBL No, POL, POD. Проверяется только
/// наличие; формат дат и чисел не контролируется — кривая дата
/// деградирует до текста и строку не валит (решение зафиксировано
/// в DESIGN.md). Детерминирована, внешнее состояние не читает.
pub fn validate(candidate: &ImportCandidate) -> RowValidation {
    let mut violations = Vec::new();

    if candidate.mbl_no.trim().is_empty() {
        violations.push(MSG_MBL_REQUIRED.to_string());
    }
    if candidate.hbl_no.trim().is_empty() {
        violations.push(MSG_HBL_REQUIRED.to_string());
    }
    if candidate.pol_code.trim().is_empty() {
        violations.push(MSG_POL_REQUIRED.to_string());
    }
    if candidate.pod_code.trim().is_empty() {
        violations.push(MSG_POD_REQUIRED.to_string());
    }

    RowValidation::from_violations(violations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::import::parser::parse_row;
    use contracts::domain::a001_bill_of_lading::import::Cell;

    fn candidate(mbl: &str, hbl: &str, pol: &str, pod: &str) -> ImportCandidate {
        let cells: Vec<Cell> = vec![
            Cell::Text(mbl.to_string()),
            Cell::Text(hbl.to_string()),
            Cell::Empty,
            Cell::Empty,
            Cell::Text(pol.to_string()),
            Cell::Text(pod.to_string()),
        ];
        parse_row(&cells)
    }

    #[test]
    fn all_required_fields_present_is_valid() {
        let v = validate(&candidate("MBL-1", "HBL-1", "CNSHA", "KRPUS"));
        assert!(v.is_valid);
        assert!(v.violations.is_empty());
    }

    #[test]
    fn required_fields_only_presence_is_checked() {
        // нулевые числа и пустые необязательные поля валидность не трогают
        let c = candidate("MBL-1", "HBL-1", "CNSHA", "KRPUS");
        assert_eq!(c.package_qty, 0);
        assert_eq!(c.vessel_name, "");
        assert!(validate(&c).is_valid);
    }

    #[test]
    fn missing_fields_reported_in_field_order() {
        let v = validate(&candidate("", "", "CNSHA", ""));
        assert!(!v.is_valid);
        assert_eq!(
            v.violations,
            vec![
                MSG_MBL_REQUIRED.to_string(),
                MSG_HBL_REQUIRED.to_string(),
                MSG_POD_REQUIRED.to_string(),
            ]
        );
    }

    #[test]
    fn malformed_date_does_not_fail_validation() {
        let mut c = candidate("MBL-1", "HBL-1", "CNSHA", "KRPUS");
        c.etd = "25 Jan".to_string();
        assert!(validate(&c).is_valid);
    }

    #[test]
    fn same_candidate_same_result() {
        let c = candidate("MBL-1", "", "CNSHA", "KRPUS");
        assert_eq!(validate(&c).violations, validate(&c).violations);
    }
}
