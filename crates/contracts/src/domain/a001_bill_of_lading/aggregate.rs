use crate::domain::common::{AggregateId, BaseAggregate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::import::ImportCandidate;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BillOfLadingId(pub Uuid);

impl BillOfLadingId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for BillOfLadingId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(BillOfLadingId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Freight term
// ============================================================================

/// Условие оплаты фрахта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FreightTerm {
    Prepaid,
    Collect,
}

impl FreightTerm {
    /// Разобрать текст ячейки; пустое значение и незнакомый текст дают default
    pub fn parse_or_default(text: &str) -> Self {
        match text.trim().to_ascii_uppercase().as_str() {
            "COLLECT" => FreightTerm::Collect,
            _ => FreightTerm::Prepaid,
        }
    }
}

impl Default for FreightTerm {
    fn default() -> Self {
        FreightTerm::Prepaid
    }
}

impl std::fmt::Display for FreightTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FreightTerm::Prepaid => write!(f, "PREPAID"),
            FreightTerm::Collect => write!(f, "COLLECT"),
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Коносамент (bill of lading) — учётная запись морской/авиа отправки
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillOfLading {
    #[serde(flatten)]
    pub base: BaseAggregate<BillOfLadingId>,

    #[serde(rename = "mblNo")]
    pub mbl_no: String,

    #[serde(rename = "hblNo")]
    pub hbl_no: String,

    #[serde(rename = "vesselName", default)]
    pub vessel_name: String,

    #[serde(rename = "voyageNo", default)]
    pub voyage_no: String,

    /// Порт погрузки (UN/LOCODE, например "CNSHA")
    #[serde(rename = "polCode", default)]
    pub pol_code: String,

    /// Порт выгрузки (UN/LOCODE, например "KRPUS")
    #[serde(rename = "podCode", default)]
    pub pod_code: String,

    /// Плановая дата отхода, ISO-строка "YYYY-MM-DD" либо исходный текст
    #[serde(rename = "etd", default)]
    pub etd: String,

    /// Плановая дата прихода
    #[serde(rename = "eta", default)]
    pub eta: String,

    #[serde(rename = "shipper", default)]
    pub shipper: String,

    #[serde(rename = "consignee", default)]
    pub consignee: String,

    #[serde(rename = "notifyParty", default)]
    pub notify_party: String,

    #[serde(rename = "packageQty", default)]
    pub package_qty: i64,

    #[serde(rename = "packageType", default)]
    pub package_type: String,

    /// Брутто-вес, кг
    #[serde(rename = "grossWeight", default)]
    pub gross_weight: f64,

    /// Объём, куб. м
    #[serde(rename = "cbm", default)]
    pub cbm: f64,

    #[serde(rename = "remark", default)]
    pub remark: String,

    #[serde(rename = "freightTerm", default)]
    pub freight_term: FreightTerm,
}

impl BillOfLading {
    /// Собрать агрегат из кандидата импорта и идентификатора,
    /// который вернуло удалённое хранилище
    pub fn from_candidate(id: Uuid, c: &ImportCandidate) -> Self {
        Self {
            base: BaseAggregate::new(
                BillOfLadingId::new(id),
                c.mbl_no.clone(),
                format!("{} / {}", c.pol_code, c.pod_code),
            ),
            mbl_no: c.mbl_no.clone(),
            hbl_no: c.hbl_no.clone(),
            vessel_name: c.vessel_name.clone(),
            voyage_no: c.voyage_no.clone(),
            pol_code: c.pol_code.clone(),
            pod_code: c.pod_code.clone(),
            etd: c.etd.clone(),
            eta: c.eta.clone(),
            shipper: c.shipper.clone(),
            consignee: c.consignee.clone(),
            notify_party: c.notify_party.clone(),
            package_qty: c.package_qty,
            package_type: c.package_type.clone(),
            gross_weight: c.gross_weight,
            cbm: c.cbm,
            remark: c.remark.clone(),
            freight_term: c.freight_term,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freight_term_defaults_to_prepaid() {
        assert_eq!(FreightTerm::parse_or_default(""), FreightTerm::Prepaid);
        assert_eq!(FreightTerm::parse_or_default("collect"), FreightTerm::Collect);
        assert_eq!(FreightTerm::parse_or_default("COLLECT"), FreightTerm::Collect);
        assert_eq!(FreightTerm::parse_or_default("cad"), FreightTerm::Prepaid);
    }
}
