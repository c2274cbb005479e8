use crate::db::models::{DbRecord, ENVELOPE_KEYS};
use crate::db::schema::init_statements;
use crate::error::VitrineError;
use chrono::Utc;
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use serde_json::{Map, Value};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, time::Duration};
use tracing::info;
use vitrine_content::Entity;

#[derive(Debug)]
pub enum DbActorMessage {
    /// List all rows of an entity, ordered by position (id tie-break).
    List(Entity, RpcReplyPort<Result<Vec<Value>, VitrineError>>),

    /// Read the singleton row of an entity, if any.
    First(Entity, RpcReplyPort<Result<Option<Value>, VitrineError>>),

    /// Insert a row (logical update for singletons that already have one).
    Insert(Entity, Value, RpcReplyPort<Result<Value, VitrineError>>),

    /// Merge the supplied fields over an existing row.
    Update(Entity, i64, Value, RpcReplyPort<Result<Value, VitrineError>>),

    /// Delete a row by id; deleting a missing id is a no-op.
    Delete(Entity, i64, RpcReplyPort<Result<(), VitrineError>>),
}

#[derive(Clone)]
pub struct DbActorHandle {
    actor: ActorRef<DbActorMessage>,
}

impl DbActorHandle {
    pub async fn list(&self, entity: Entity) -> Result<Vec<Value>, VitrineError> {
        ractor::call!(self.actor, DbActorMessage::List, entity)
            .map_err(|e| VitrineError::RactorError(format!("DbActor List RPC failed: {e}")))?
    }

    pub async fn first(&self, entity: Entity) -> Result<Option<Value>, VitrineError> {
        ractor::call!(self.actor, DbActorMessage::First, entity)
            .map_err(|e| VitrineError::RactorError(format!("DbActor First RPC failed: {e}")))?
    }

    pub async fn insert(&self, entity: Entity, body: Value) -> Result<Value, VitrineError> {
        ractor::call!(self.actor, DbActorMessage::Insert, entity, body)
            .map_err(|e| VitrineError::RactorError(format!("DbActor Insert RPC failed: {e}")))?
    }

    pub async fn update(
        &self,
        entity: Entity,
        id: i64,
        body: Value,
    ) -> Result<Value, VitrineError> {
        ractor::call!(self.actor, DbActorMessage::Update, entity, id, body)
            .map_err(|e| VitrineError::RactorError(format!("DbActor Update RPC failed: {e}")))?
    }

    pub async fn delete(&self, entity: Entity, id: i64) -> Result<(), VitrineError> {
        ractor::call!(self.actor, DbActorMessage::Delete, entity, id)
            .map_err(|e| VitrineError::RactorError(format!("DbActor Delete RPC failed: {e}")))?
    }
}

struct DbActorState {
    pool: SqlitePool,
}

struct DbActor;

#[ractor::async_trait]
impl Actor for DbActor {
    type Msg = DbActorMessage;
    type State = DbActorState;
    type Arguments = String;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        database_url: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        let connect_opts = SqliteConnectOptions::from_str(database_url.as_str())
            .map_err(|e| ActorProcessingErr::from(format!("invalid database url: {e}")))?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .connect_with(connect_opts)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db connect failed: {e}")))?;

        apply_schema(&pool)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db schema init failed: {e}")))?;

        info!("DbActor initialized");
        Ok(DbActorState { pool })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            DbActorMessage::List(entity, reply) => {
                let res = self.list(&state.pool, entity).await;
                let _ = reply.send(res);
            }
            DbActorMessage::First(entity, reply) => {
                let res = self
                    .first_record(&state.pool, entity)
                    .await
                    .map(|row| row.map(DbRecord::into_value));
                let _ = reply.send(res);
            }
            DbActorMessage::Insert(entity, body, reply) => {
                let res = self.insert(&state.pool, entity, body).await;
                let _ = reply.send(res);
            }
            DbActorMessage::Update(entity, id, body, reply) => {
                let res = self.update(&state.pool, entity, id, body).await;
                let _ = reply.send(res);
            }
            DbActorMessage::Delete(entity, id, reply) => {
                let res = self.delete(&state.pool, entity, id).await;
                let _ = reply.send(res);
            }
        }
        Ok(())
    }
}

impl DbActor {
    async fn list(&self, pool: &SqlitePool, entity: Entity) -> Result<Vec<Value>, VitrineError> {
        let rows = sqlx::query_as::<_, DbRecord>(&format!(
            "SELECT id, position, data, created_at, updated_at FROM {} \
             ORDER BY position ASC, id ASC",
            entity.table()
        ))
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(DbRecord::into_value).collect())
    }

    async fn first_record(
        &self,
        pool: &SqlitePool,
        entity: Entity,
    ) -> Result<Option<DbRecord>, VitrineError> {
        let row = sqlx::query_as::<_, DbRecord>(&format!(
            "SELECT id, position, data, created_at, updated_at FROM {} \
             ORDER BY position ASC, id ASC LIMIT 1",
            entity.table()
        ))
        .fetch_optional(pool)
        .await?;

        Ok(row)
    }

    async fn count(&self, pool: &SqlitePool, entity: Entity) -> Result<i64, VitrineError> {
        let count: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", entity.table()))
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    async fn insert(
        &self,
        pool: &SqlitePool,
        entity: Entity,
        body: Value,
    ) -> Result<Value, VitrineError> {
        let mut fields = into_field_object(body)?;
        let position = take_position(&mut fields);

        // A singleton has at most one persisted row; creating over an
        // existing one is a logical update of that row.
        if entity.is_singleton() {
            if let Some(existing) = self.first_record(pool, entity).await? {
                return self
                    .apply_update(pool, entity, existing, fields, position)
                    .await;
            }
        }

        let position = match position {
            Some(p) => p,
            // Unspecified order appends to the end of the list.
            None => self.count(pool, entity).await?,
        };

        let now = Utc::now();
        let data = Value::Object(fields).to_string();
        let id: i64 = sqlx::query_scalar(&format!(
            "INSERT INTO {} (position, data, created_at, updated_at) \
             VALUES (?, ?, ?, ?) RETURNING id",
            entity.table()
        ))
        .bind(position)
        .bind(&data)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(DbRecord {
            id,
            position,
            data,
            created_at: now,
            updated_at: now,
        }
        .into_value())
    }

    async fn update(
        &self,
        pool: &SqlitePool,
        entity: Entity,
        id: i64,
        body: Value,
    ) -> Result<Value, VitrineError> {
        let mut fields = into_field_object(body)?;
        let position = take_position(&mut fields);

        let existing = sqlx::query_as::<_, DbRecord>(&format!(
            "SELECT id, position, data, created_at, updated_at FROM {} WHERE id = ?",
            entity.table()
        ))
        .bind(id)
        .fetch_one(pool)
        .await?;

        self.apply_update(pool, entity, existing, fields, position)
            .await
    }

    /// Shallow-merges the supplied fields over the stored document. Last
    /// write wins; concurrent writers are not detected.
    async fn apply_update(
        &self,
        pool: &SqlitePool,
        entity: Entity,
        existing: DbRecord,
        patch: Map<String, Value>,
        position: Option<i64>,
    ) -> Result<Value, VitrineError> {
        let mut data = match serde_json::from_str(&existing.data) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        for (key, value) in patch {
            data.insert(key, value);
        }

        let position = position.unwrap_or(existing.position);
        let now = Utc::now();
        let data = Value::Object(data).to_string();

        sqlx::query(&format!(
            "UPDATE {} SET position = ?, data = ?, updated_at = ? WHERE id = ?",
            entity.table()
        ))
        .bind(position)
        .bind(&data)
        .bind(now)
        .bind(existing.id)
        .execute(pool)
        .await?;

        Ok(DbRecord {
            id: existing.id,
            position,
            data,
            created_at: existing.created_at,
            updated_at: now,
        }
        .into_value())
    }

    async fn delete(
        &self,
        pool: &SqlitePool,
        entity: Entity,
        id: i64,
    ) -> Result<(), VitrineError> {
        sqlx::query(&format!("DELETE FROM {} WHERE id = ?", entity.table()))
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}

/// Accepts only a JSON object body and strips the server-owned envelope keys.
fn into_field_object(body: Value) -> Result<Map<String, Value>, VitrineError> {
    let Value::Object(mut fields) = body else {
        return Err(VitrineError::Payload(
            "request body must be a JSON object".to_string(),
        ));
    };
    for key in ENVELOPE_KEYS {
        if key != "order" {
            fields.remove(key);
        }
    }
    Ok(fields)
}

/// Pops the client-supplied display position, if it is a usable integer.
fn take_position(fields: &mut Map<String, Value>) -> Option<i64> {
    fields.remove("order").and_then(|v| v.as_i64())
}

/// Spawn the database actor and return a cloneable handle.
pub async fn spawn(database_url: &str) -> DbActorHandle {
    let (actor, _jh) = ractor::Actor::spawn(
        Some("DbActor".to_string()),
        DbActor,
        database_url.to_string(),
    )
    .await
    .expect("failed to spawn DbActor");

    DbActorHandle { actor }
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), VitrineError> {
    for statement in init_statements() {
        sqlx::query(&statement).execute(pool).await?;
    }
    Ok(())
}
