use chrono::{DateTime, SubsecRound, TimeDelta, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveValue::Set, QueryOrder, TransactionTrait};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;
use util::filters::{FilterField, FilterKind, FilterValue, ListQuery, SortOrder};

/// A single record in the `examples` table.
///
/// Serialized with camelCase keys (`isComplete`, `createdAt`), which is the
/// shape clients see on the wire.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "examples")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Store-assigned primary key.
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Required, non-empty label.
    pub name: String,
    /// Completion flag; `None` until first set.
    pub is_complete: Option<bool>,
    /// Set once at insert time.
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Query-string keys the list endpoint may filter on.
pub const FILTER_FIELDS: &[FilterField] = &[
    FilterField {
        key: "name",
        column: "name",
        kind: FilterKind::String,
    },
    FilterField {
        key: "isComplete",
        column: "is_complete",
        kind: FilterKind::Bool,
    },
];

/// The only key `sort` may name.
pub const SORT_FIELD: &str = "createdAt";

/// Current time rounded up to the next whole millisecond, so the stored value
/// never precedes the moment of the request.
fn created_now() -> DateTime<Utc> {
    let now = Utc::now();
    let millis = now.trunc_subsecs(3);
    if millis < now {
        millis + TimeDelta::milliseconds(1)
    } else {
        millis
    }
}

fn ensure_name(name: &str) -> Result<(), DbErr> {
    if name.trim().is_empty() {
        return Err(DbErr::Custom("name must not be empty".into()));
    }
    Ok(())
}

impl Model {
    /// Inserts a new example. `id` comes from the store, `created_at` from the
    /// clock, rounded up to millisecond precision.
    pub async fn create(
        db: &DatabaseConnection,
        name: &str,
        is_complete: Option<bool>,
    ) -> Result<Model, DbErr> {
        ensure_name(name)?;

        let example = ActiveModel {
            name: Set(name.to_owned()),
            is_complete: Set(is_complete),
            created_at: Set(created_now()),
            ..Default::default()
        };

        let created = example.insert(db).await?;
        debug!(id = created.id, "example created");
        Ok(created)
    }

    /// Returns every example matching `query`, ordered by creation time
    /// (ties broken by id in the same direction).
    pub async fn find_all(db: &DatabaseConnection, query: &ListQuery) -> Result<Vec<Model>, DbErr> {
        let mut select = Entity::find();

        for filter in &query.filters {
            let column = Column::from_str(&filter.column)
                .map_err(|_| DbErr::Custom(format!("Invalid column name: {}", filter.column)))?;

            select = match &filter.value {
                FilterValue::String(s) => select.filter(column.eq(s.as_str())),
                FilterValue::Bool(b) => select.filter(column.eq(*b)),
            };
        }

        select = match query.sort {
            SortOrder::Asc => select
                .order_by_asc(Column::CreatedAt)
                .order_by_asc(Column::Id),
            SortOrder::Desc => select
                .order_by_desc(Column::CreatedAt)
                .order_by_desc(Column::Id),
        };

        select.all(db).await
    }

    pub async fn get_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Flips `is_complete` in a single UPDATE (an unset flag counts as `false`)
    /// and returns the row as it is after the write.
    pub async fn toggle_complete(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, DbErr> {
        let txn = db.begin().await?;

        let res = Entity::update_many()
            .col_expr(
                Column::IsComplete,
                Expr::cust("NOT COALESCE(is_complete, FALSE)"),
            )
            .filter(Column::Id.eq(id))
            .exec(&txn)
            .await?;

        if res.rows_affected == 0 {
            return Ok(None);
        }

        let updated = Entity::find_by_id(id).one(&txn).await?;
        txn.commit().await?;

        debug!(id, is_complete = ?updated.as_ref().and_then(|m| m.is_complete), "example toggled");
        Ok(updated)
    }

    /// Overwrites `name` only and returns the updated row.
    pub async fn rename(db: &DatabaseConnection, id: i64, name: &str) -> Result<Option<Model>, DbErr> {
        ensure_name(name)?;

        let txn = db.begin().await?;

        let res = Entity::update_many()
            .col_expr(Column::Name, Expr::value(name))
            .filter(Column::Id.eq(id))
            .exec(&txn)
            .await?;

        if res.rows_affected == 0 {
            return Ok(None);
        }

        let updated = Entity::find_by_id(id).one(&txn).await?;
        txn.commit().await?;
        Ok(updated)
    }

    /// Overwrites every user-settable field. `id` and `created_at` are kept;
    /// an absent flag is stored as NULL.
    pub async fn replace(
        db: &DatabaseConnection,
        id: i64,
        name: &str,
        is_complete: Option<bool>,
    ) -> Result<Option<Model>, DbErr> {
        ensure_name(name)?;

        let txn = db.begin().await?;

        let res = Entity::update_many()
            .col_expr(Column::Name, Expr::value(name))
            .col_expr(Column::IsComplete, Expr::value(is_complete))
            .filter(Column::Id.eq(id))
            .exec(&txn)
            .await?;

        if res.rows_affected == 0 {
            return Ok(None);
        }

        let updated = Entity::find_by_id(id).one(&txn).await?;
        txn.commit().await?;
        Ok(updated)
    }

    /// Deletes the row permanently and returns the snapshot taken just before.
    pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, DbErr> {
        let txn = db.begin().await?;

        let Some(existing) = Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        debug!(id, "example deleted");
        Ok(Some(existing))
    }
}
