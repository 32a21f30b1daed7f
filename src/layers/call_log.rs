use axum::{Extension, middleware::AddExtension};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower::Layer;

use crate::repositories::call_log::{CallLogRepo, SqliteCallLogRepo};

/// Makes a [`CallLogRepo`] available to handlers as an extension.
#[derive(Clone)]
pub struct CallLogRepoLayer(pub CallLogRepo);

impl CallLogRepoLayer {
    pub fn sqlite(pool: Arc<SqlitePool>) -> Self {
        Self(Arc::new(SqliteCallLogRepo::new(pool)))
    }
}

impl<S> Layer<S> for CallLogRepoLayer {
    type Service = AddExtension<S, CallLogRepo>;

    fn layer(&self, inner: S) -> Self::Service {
        Extension(self.0.clone()).layer(inner)
    }
}
