use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    models::{CallLog, CallLogFilter, CallLogSummary, NewCallLog},
    utils::now_timestamp,
};

use super::CallLogRepository;

const NAME_LEN: usize = 10;

pub struct SqliteCallLogRepo(Arc<SqlitePool>);

impl SqliteCallLogRepo {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self(pool)
    }
}

fn new_record_name() -> String {
    Uuid::new_v4().simple().to_string()[..NAME_LEN].to_string()
}

#[async_trait]
impl CallLogRepository for SqliteCallLogRepo {
    #[instrument(
        name = "sqlite_call_log_repo.insert",
        skip_all,
        fields(name = tracing::field::Empty)
    )]
    async fn insert(&self, log: &NewCallLog) -> anyhow::Result<CallLog> {
        let creation = now_timestamp()?;
        let record = CallLog {
            name: new_record_name(),
            caller_name: log.caller_name.clone(),
            phone_number: log.phone_number.clone(),
            intent: log.intent.clone(),
            summary: log.summary.clone(),
            transcript: log.transcript.clone(),
            timestamp: log.timestamp.clone().unwrap_or_else(|| creation.clone()),
            status: log.status.clone(),
            creation,
        };
        tracing::Span::current().record("name", record.name.as_str());

        sqlx::query(
            r#"
            INSERT INTO voice_agent_call_logs (
                name,
                caller_name,
                phone_number,
                intent,
                summary,
                transcript,
                timestamp,
                status,
                creation
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.name)
        .bind(&record.caller_name)
        .bind(&record.phone_number)
        .bind(&record.intent)
        .bind(&record.summary)
        .bind(&record.transcript)
        .bind(&record.timestamp)
        .bind(&record.status)
        .bind(&record.creation)
        .execute(&*self.0)
        .await?;

        Ok(record)
    }

    #[instrument(name = "sqlite_call_log_repo.get_by_name", skip(self))]
    async fn get_by_name(&self, name: &str) -> anyhow::Result<Option<CallLog>> {
        let record = sqlx::query_as::<_, CallLog>(
            r#"
            SELECT
                name,
                caller_name,
                phone_number,
                intent,
                summary,
                transcript,
                timestamp,
                status,
                creation
            FROM voice_agent_call_logs
            WHERE name = ?
            "#,
        )
        .bind(name)
        .fetch_optional(&*self.0)
        .await?;

        Ok(record)
    }

    #[instrument(name = "sqlite_call_log_repo.list", skip(self))]
    async fn list(&self, filter: &CallLogFilter) -> anyhow::Result<Vec<CallLogSummary>> {
        let mut query = QueryBuilder::<Sqlite>::new(
            r#"
            SELECT
                name,
                caller_name,
                phone_number,
                intent,
                summary,
                status,
                creation
            FROM voice_agent_call_logs
            WHERE 1 = 1
            "#,
        );

        if let Some(status) = &filter.status {
            query.push(" AND status = ").push_bind(status.clone());
        }

        if let Some(search) = &filter.search {
            let pattern = format!("%{search}%");
            query
                .push(" AND (caller_name LIKE ")
                .push_bind(pattern.clone())
                .push(" OR phone_number LIKE ")
                .push_bind(pattern.clone())
                .push(" OR intent LIKE ")
                .push_bind(pattern)
                .push(")");
        }

        if let Some(from) = &filter.created_from {
            query
                .push(" AND creation >= ")
                .push_bind(format!("{from} 00:00:00"));
        }

        if let Some(to) = &filter.created_to {
            query
                .push(" AND creation <= ")
                .push_bind(format!("{to} 23:59:59.999999"));
        }

        // rowid breaks ties between inserts within the same microsecond
        query
            .push(" ORDER BY creation DESC, rowid DESC LIMIT ")
            .push_bind(filter.limit)
            .push(" OFFSET ")
            .push_bind(filter.offset);

        Ok(query
            .build_query_as::<CallLogSummary>()
            .fetch_all(&*self.0)
            .await?)
    }
}
