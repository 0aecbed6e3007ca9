use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::shared::config;
use crate::usecases::u101_import_bl::HttpBillOfLadingStore;

pub mod a001_bill_of_lading;
pub mod u101_import_bl;

/// Общий клиент удалённого хранилища документов
pub(crate) static REMOTE_STORE: Lazy<Arc<HttpBillOfLadingStore>> =
    Lazy::new(|| Arc::new(HttpBillOfLadingStore::from_config(&config::get().remote_store)));
