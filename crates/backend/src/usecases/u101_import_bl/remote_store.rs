use async_trait::async_trait;
use chrono::Utc;
use contracts::domain::a001_bill_of_lading::aggregate::{
    BillOfLading, BillOfLadingId, FreightTerm,
};
use contracts::domain::a001_bill_of_lading::import::ImportCandidate;
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::shared::config::RemoteStoreConfig;

/// Ошибка удалённого хранилища документов
#[derive(Debug, Error)]
pub enum StoreError {
    /// Хранилище ответило структурированной ошибкой
    #[error("{0}")]
    Rejected(String),
    /// Транспортный сбой, человекочитаемого ответа хранилища нет
    #[error("transport: {0}")]
    Transport(String),
}

impl StoreError {
    /// Текст для журнала итогов: сообщение хранилища, если оно есть,
    /// иначе общий "submission failed"
    pub fn outcome_message(&self) -> String {
        match self {
            StoreError::Rejected(msg) => msg.clone(),
            StoreError::Transport(_) => "submission failed".to_string(),
        }
    }
}

/// Подтверждение create: идентификатор, назначенный хранилищем
#[derive(Debug, Clone)]
pub struct CreateAck {
    pub id: Uuid,
}

/// Интерфейс удалённого хранилища коносаментов.
///
/// Шов для оркестратора: в проде — HTTP-клиент, в тестах — память.
#[async_trait]
pub trait BillOfLadingStore: Send + Sync {
    async fn create(&self, candidate: &ImportCandidate) -> Result<CreateAck, StoreError>;
    async fn delete_by_ids(&self, ids: &[Uuid]) -> Result<(), StoreError>;
    async fn list(&self) -> Result<Vec<BillOfLading>, StoreError>;
}

// ============================================================================
// Wire-модели хранилища (его собственный словарь)
// ============================================================================

#[derive(Debug, Serialize)]
struct CreateDocumentRequest<'a> {
    #[serde(rename = "masterBlNo")]
    master_bl_no: &'a str,
    #[serde(rename = "houseBlNo")]
    house_bl_no: &'a str,
    vessel: &'a str,
    voyage: &'a str,
    #[serde(rename = "portOfLoading")]
    port_of_loading: &'a str,
    #[serde(rename = "portOfDischarge")]
    port_of_discharge: &'a str,
    etd: &'a str,
    eta: &'a str,
    shipper: &'a str,
    consignee: &'a str,
    #[serde(rename = "notifyParty")]
    notify_party: &'a str,
    #[serde(rename = "packageCount")]
    package_count: i64,
    #[serde(rename = "packageUnit")]
    package_unit: &'a str,
    #[serde(rename = "grossWeightKg")]
    gross_weight_kg: f64,
    #[serde(rename = "measurementCbm")]
    measurement_cbm: f64,
    #[serde(rename = "cargoDescription")]
    cargo_description: &'a str,
    #[serde(rename = "freightPayment")]
    freight_payment: String,
    /// Ключ идемпотентности: хранилище дедуплицирует create по нему
    #[serde(rename = "clientKey")]
    client_key: String,
}

impl<'a> CreateDocumentRequest<'a> {
    fn from_candidate(c: &'a ImportCandidate) -> Self {
        Self {
            master_bl_no: &c.mbl_no,
            house_bl_no: &c.hbl_no,
            vessel: &c.vessel_name,
            voyage: &c.voyage_no,
            port_of_loading: &c.pol_code,
            port_of_discharge: &c.pod_code,
            etd: &c.etd,
            eta: &c.eta,
            shipper: &c.shipper,
            consignee: &c.consignee,
            notify_party: &c.notify_party,
            package_count: c.package_qty,
            package_unit: &c.package_type,
            gross_weight_kg: c.gross_weight,
            measurement_cbm: c.cbm,
            cargo_description: &c.remark,
            freight_payment: c.freight_term.to_string(),
            client_key: c.client_key.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CreateDocumentResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

#[derive(Debug, Serialize)]
struct DeleteDocumentsRequest {
    ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct DocumentListResponse {
    items: Vec<DocumentDto>,
}

#[derive(Debug, Deserialize)]
struct DocumentDto {
    id: String,
    #[serde(rename = "masterBlNo")]
    master_bl_no: String,
    #[serde(rename = "houseBlNo", default)]
    house_bl_no: String,
    #[serde(default)]
    vessel: String,
    #[serde(default)]
    voyage: String,
    #[serde(rename = "portOfLoading", default)]
    port_of_loading: String,
    #[serde(rename = "portOfDischarge", default)]
    port_of_discharge: String,
    #[serde(default)]
    etd: String,
    #[serde(default)]
    eta: String,
    #[serde(default)]
    shipper: String,
    #[serde(default)]
    consignee: String,
    #[serde(rename = "notifyParty", default)]
    notify_party: String,
    #[serde(rename = "packageCount", default)]
    package_count: i64,
    #[serde(rename = "packageUnit", default)]
    package_unit: String,
    #[serde(rename = "grossWeightKg", default)]
    gross_weight_kg: f64,
    #[serde(rename = "measurementCbm", default)]
    measurement_cbm: f64,
    #[serde(rename = "cargoDescription", default)]
    cargo_description: String,
    #[serde(rename = "freightPayment", default)]
    freight_payment: String,
    #[serde(rename = "createdAt")]
    created_at: Option<chrono::DateTime<Utc>>,
    #[serde(rename = "updatedAt")]
    updated_at: Option<chrono::DateTime<Utc>>,
}

impl From<DocumentDto> for BillOfLading {
    fn from(d: DocumentDto) -> Self {
        let metadata = EntityMetadata {
            created_at: d.created_at.unwrap_or_else(Utc::now),
            updated_at: d.updated_at.unwrap_or_else(Utc::now),
            is_deleted: false,
            version: 0,
        };
        let uuid = Uuid::parse_str(&d.id).unwrap_or_else(|_| Uuid::new_v4());

        BillOfLading {
            base: BaseAggregate::with_metadata(
                BillOfLadingId::new(uuid),
                d.master_bl_no.clone(),
                format!("{} / {}", d.port_of_loading, d.port_of_discharge),
                None,
                metadata,
            ),
            mbl_no: d.master_bl_no,
            hbl_no: d.house_bl_no,
            vessel_name: d.vessel,
            voyage_no: d.voyage,
            pol_code: d.port_of_loading,
            pod_code: d.port_of_discharge,
            etd: d.etd,
            eta: d.eta,
            shipper: d.shipper,
            consignee: d.consignee,
            notify_party: d.notify_party,
            package_qty: d.package_count,
            package_type: d.package_unit,
            gross_weight: d.gross_weight_kg,
            cbm: d.measurement_cbm,
            remark: d.cargo_description,
            freight_term: FreightTerm::parse_or_default(&d.freight_payment),
        }
    }
}

// ============================================================================
// HTTP-клиент
// ============================================================================

/// HTTP-клиент хранилища документов
pub struct HttpBillOfLadingStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpBillOfLadingStore {
    pub fn from_config(config: &RemoteStoreConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(config.timeout_secs))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Превратить не-2xx ответ в StoreError::Rejected с сообщением
    /// хранилища, когда оно есть
    async fn rejection(response: reqwest::Response) -> StoreError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|b| b.message);
        match message {
            Some(msg) => StoreError::Rejected(msg),
            None => StoreError::Rejected(format!("submission failed (status {})", status)),
        }
    }
}

#[async_trait]
impl BillOfLadingStore for HttpBillOfLadingStore {
    async fn create(&self, candidate: &ImportCandidate) -> Result<CreateAck, StoreError> {
        let response = self
            .client
            .post(self.url("/api/v1/bl-documents"))
            .header("X-Api-Key", &self.api_key)
            .json(&CreateDocumentRequest::from_candidate(candidate))
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let ack: CreateDocumentResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        let id = Uuid::parse_str(&ack.id)
            .map_err(|e| StoreError::Transport(format!("bad id in ack: {}", e)))?;
        Ok(CreateAck { id })
    }

    async fn delete_by_ids(&self, ids: &[Uuid]) -> Result<(), StoreError> {
        let request = DeleteDocumentsRequest {
            ids: ids.iter().map(Uuid::to_string).collect(),
        };
        let response = self
            .client
            .post(self.url("/api/v1/bl-documents/delete"))
            .header("X-Api-Key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<BillOfLading>, StoreError> {
        let response = self
            .client
            .get(self.url("/api/v1/bl-documents"))
            .header("X-Api-Key", &self.api_key)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let body: DocumentListResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        Ok(body.items.into_iter().map(Into::into).collect())
    }
}
