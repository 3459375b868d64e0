use std::sync::Arc;

use deadpool_diesel::postgres::{Manager, Pool};
use deadpool_diesel::Runtime;
use diesel::{PgConnection, QueryResult};

use crate::drafts::PropertyDrafts;
use crate::errors::StoreError;
use crate::settings::Settings;

/// Handle to the LightBnB data: a Postgres connection pool plus the in-memory
/// property drafts. Cheap to clone; clones share both.
#[derive(Clone)]
pub struct Store {
    pool: Pool,
    drafts: Arc<PropertyDrafts>,
}

impl Store {
    /// Builds the pool and, if configured, seeds the drafts. Connections are
    /// established lazily on first use.
    pub fn open(settings: &Settings) -> Result<Self, StoreError> {
        let manager = Manager::new(settings.database_url.clone(), Runtime::Tokio1);
        let pool = Pool::builder(manager)
            .max_size(settings.pool_size)
            .build()?;

        let drafts = match &settings.drafts_seed_path {
            Some(path) => {
                let drafts = PropertyDrafts::from_json_file(path)?;
                tracing::info!(path = %path.display(), count = drafts.len(), "Seeded property drafts");
                drafts
            }
            None => PropertyDrafts::new(),
        };

        tracing::info!(pool_size = settings.pool_size, "Opened store");
        Ok(Self::with_parts(pool, drafts))
    }

    pub fn with_parts(pool: Pool, drafts: PropertyDrafts) -> Self {
        Self {
            pool,
            drafts: Arc::new(drafts),
        }
    }

    pub fn drafts(&self) -> &PropertyDrafts {
        &self.drafts
    }

    /// Closes the pool. Pending and future checkouts fail.
    pub fn close(&self) {
        self.pool.close();
        tracing::info!("Closed store");
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }

    /// Runs `query` on a pooled connection, logging any failure under `operation`.
    pub(crate) async fn interact<F, R>(&self, operation: &'static str, query: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut PgConnection) -> QueryResult<R> + Send + 'static,
        R: Send + 'static,
    {
        let result: Result<R, StoreError> = async {
            let conn = self.pool.get().await?;
            let rows = conn
                .interact(query)
                .await
                .map_err(|e| StoreError::Interact(e.to_string()))??;
            Ok(rows)
        }
        .await;

        if let Err(err) = &result {
            tracing::error!(operation, error = %err, "Store operation failed");
        }
        result
    }
}
