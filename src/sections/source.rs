use crate::db::DbActorHandle;
use crate::error::VitrineError;
use crate::sections::binding::SectionSource;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use vitrine_content::{Entity, Record};

/// Reads a list section from the content store, typed at the data-access
/// boundary: each row deserializes through [`Record`], which is where icon
/// and gradient strings resolve into the closed asset enums.
pub struct ListSource<T> {
    db: Option<DbActorHandle>,
    entity: Entity,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ListSource<T> {
    pub fn new(db: Option<DbActorHandle>, entity: Entity) -> Self {
        Self {
            db,
            entity,
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<T> SectionSource for ListSource<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    type Data = Vec<T>;

    async fn fetch(&self) -> Result<Option<Vec<T>>, VitrineError> {
        // An unconfigured store reads as empty, which the binding maps to
        // fallback content.
        let Some(db) = &self.db else { return Ok(None) };

        let rows = db.list(self.entity).await?;
        if rows.is_empty() {
            return Ok(None);
        }

        let records = rows
            .into_iter()
            .map(serde_json::from_value::<Record<T>>)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(records.into_iter().map(|r| r.fields).collect()))
    }
}

/// Reads a singleton section from the content store.
pub struct SingletonSource<T> {
    db: Option<DbActorHandle>,
    entity: Entity,
    _marker: PhantomData<fn() -> T>,
}

impl<T> SingletonSource<T> {
    pub fn new(db: Option<DbActorHandle>, entity: Entity) -> Self {
        Self {
            db,
            entity,
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<T> SectionSource for SingletonSource<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    type Data = T;

    async fn fetch(&self) -> Result<Option<T>, VitrineError> {
        let Some(db) = &self.db else { return Ok(None) };

        match db.first(self.entity).await? {
            Some(row) => {
                let record: Record<T> = serde_json::from_value(row)?;
                Ok(Some(record.fields))
            }
            None => Ok(None),
        }
    }
}
