use anyhow::Result;
use chrono::Utc;
use contracts::domain::a001_bill_of_lading::aggregate::BillOfLading;
use contracts::domain::common::AggregateId;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::db::get_connection;

/// Локальный резервный кэш коносаментов.
///
/// Одна запись — один документ; payload хранит сериализованный агрегат
/// как есть. Кэш переживает перезапуски и очищается только явно.
/// Недоступность базы деградирует до пустого кэша, пайплайн не валится.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_bl_local_cache")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub payload: String,
    pub saved_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Прочитать весь кэш в порядке сохранения
pub async fn read_all() -> Result<Vec<BillOfLading>> {
    let Some(conn) = get_connection() else {
        tracing::debug!("Local cache read skipped: database not initialized");
        return Ok(Vec::new());
    };

    let models = Entity::find()
        .order_by_asc(Column::SavedAt)
        .order_by_asc(Column::Id)
        .all(conn)
        .await?;

    let mut records = Vec::with_capacity(models.len());
    for model in models {
        match serde_json::from_str::<BillOfLading>(&model.payload) {
            Ok(record) => records.push(record),
            Err(e) => {
                // Битая запись не блокирует остальной кэш
                tracing::warn!("Skipping corrupt cache entry {}: {}", model.id, e);
            }
        }
    }
    Ok(records)
}

/// Записать или обновить один документ (оптимистичная запись после create)
pub async fn upsert(record: &BillOfLading) -> Result<()> {
    let Some(conn) = get_connection() else {
        tracing::debug!("Local cache upsert skipped: database not initialized");
        return Ok(());
    };

    let id = record.base.id.as_string();
    let payload = serde_json::to_string(record)?;

    let existing = Entity::find_by_id(id.clone()).one(conn).await?;
    if let Some(model) = existing {
        let mut active: ActiveModel = model.into();
        active.payload = Set(payload);
        active.saved_at = Set(Utc::now().to_rfc3339());
        active.update(conn).await?;
    } else {
        let active = ActiveModel {
            id: Set(id),
            payload: Set(payload),
            saved_at: Set(Utc::now().to_rfc3339()),
        };
        active.insert(conn).await?;
    }
    Ok(())
}

/// Полностью заменить содержимое кэша
pub async fn replace_all(records: &[BillOfLading]) -> Result<()> {
    let Some(conn) = get_connection() else {
        tracing::debug!("Local cache replace skipped: database not initialized");
        return Ok(());
    };

    Entity::delete_many().exec(conn).await?;

    for record in records {
        let active = ActiveModel {
            id: Set(record.base.id.as_string()),
            payload: Set(serde_json::to_string(record)?),
            saved_at: Set(Utc::now().to_rfc3339()),
        };
        active.insert(conn).await?;
    }
    Ok(())
}

/// Удалить записи по списку идентификаторов
pub async fn remove_ids(ids: &[Uuid]) -> Result<u64> {
    let Some(conn) = get_connection() else {
        return Ok(0);
    };

    let id_strings: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    let result = Entity::delete_many()
        .filter(Column::Id.is_in(id_strings))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

/// Очистить кэш
pub async fn clear() -> Result<u64> {
    let Some(conn) = get_connection() else {
        return Ok(0);
    };
    let result = Entity::delete_many().exec(conn).await?;
    Ok(result.rows_affected)
}
