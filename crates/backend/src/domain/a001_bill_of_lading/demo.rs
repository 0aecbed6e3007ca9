use contracts::domain::a001_bill_of_lading::aggregate::{
    BillOfLading, BillOfLadingId, FreightTerm,
};
use contracts::domain::common::BaseAggregate;
use uuid::{uuid, Uuid};

/// Встроенный демо-набор для пустых/новых сред.
///
/// Подставляется только когда и удалённое хранилище, и локальный кэш
/// пусты; идентификаторы фиксированные, чтобы набор был стабилен между
/// перезапусками.
pub fn demo_records() -> Vec<BillOfLading> {
    vec![
        demo_record(
            uuid!("7b5df1a2-0a51-4c7e-9a83-20a5b6b90001"),
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
            120,
            "CTN",
            3500.0,
            28.5,
            "AUTO PARTS",
            FreightTerm::Prepaid,
        ),
        demo_record(
            uuid!("7b5df1a2-0a51-4c7e-9a83-20a5b6b90002"),
            "MBLX2026010002",
            "HBLS2026010002",
            "EVER GIVEN",
            "118W",
            "KRPUS",
            "NLRTM",
            "2026-02-02",
            "2026-03-05",
            "PUSAN STEEL EXPORT",
            "ROTTERDAM METALS BV",
            8,
            "COIL",
            96000.0,
            42.0,
            "HOT ROLLED STEEL COIL",
            FreightTerm::Collect,
        ),
        demo_record(
            uuid!("7b5df1a2-0a51-4c7e-9a83-20a5b6b90003"),
            "MBLX2026010003",
            "HBLS2026010003",
            "",
            "",
            "KRICN",
            "JPNRT",
            "2026-02-10",
            "2026-02-10",
            "SEOUL ELECTRONICS CO",
            "NARITA DISTRIBUTION KK",
            45,
            "PLT",
            1200.0,
            9.8,
            "CONSUMER ELECTRONICS / AIR",
            FreightTerm::Prepaid,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn demo_record(
    id: Uuid,
    mbl_no: &str,
    hbl_no: &str,
    vessel_name: &str,
    voyage_no: &str,
    pol_code: &str,
    pod_code: &str,
    etd: &str,
    eta: &str,
    shipper: &str,
    consignee: &str,
    package_qty: i64,
    package_type: &str,
    gross_weight: f64,
    cbm: f64,
    remark: &str,
    freight_term: FreightTerm,
) -> BillOfLading {
    BillOfLading {
        base: BaseAggregate::new(
            BillOfLadingId::new(id),
            mbl_no.to_string(),
            format!("{} / {}", pol_code, pod_code),
        ),
        mbl_no: mbl_no.to_string(),
        hbl_no: hbl_no.to_string(),
        vessel_name: vessel_name.to_string(),
        voyage_no: voyage_no.to_string(),
        pol_code: pol_code.to_string(),
        pod_code: pod_code.to_string(),
        etd: etd.to_string(),
        eta: eta.to_string(),
        shipper: shipper.to_string(),
        consignee: consignee.to_string(),
        notify_party: "SAME AS CONSIGNEE".to_string(),
        package_qty,
        package_type: package_type.to_string(),
        gross_weight,
        cbm,
        remark: remark.to_string(),
        freight_term,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::AggregateId;
    use std::collections::HashSet;

    #[test]
    fn demo_ids_are_stable_and_unique() {
        let first = demo_records();
        let second = demo_records();
        let ids: HashSet<String> = first.iter().map(|r| r.base.id.as_string()).collect();
        assert_eq!(ids.len(), first.len());
        assert_eq!(
            first[0].base.id.as_string(),
            second[0].base.id.as_string()
        );
    }
}
