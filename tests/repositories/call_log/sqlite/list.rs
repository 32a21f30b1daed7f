use std::sync::Arc;

use sqlx::SqlitePool;
use time::macros::date;

use call_log_server::{
    models::CallLogFilter,
    repositories::call_log::{CallLogRepository, SqliteCallLogRepo},
};

use super::connect;

fn filter() -> CallLogFilter {
    CallLogFilter {
        status: None,
        search: None,
        created_from: None,
        created_to: None,
        limit: 20,
        offset: 0,
    }
}

async fn seed(pool: &SqlitePool) {
    let logs = [
        ("log1", "Alice Smith", "555-0001", "booking", "Lead", "2025-01-01 09:00:00.000000"),
        ("log2", "Bob Jones", "555-0002", "support", "Converted", "2025-01-02 09:00:00.000000"),
        ("log3", "Carol", "555-0003", "Booking change", "Lead", "2025-01-03 09:00:00.000000"),
    ];

    for (name, caller_name, phone_number, intent, status, creation) in logs {
        sqlx::query(
            r#"
            INSERT INTO voice_agent_call_logs
                (name, caller_name, phone_number, intent, timestamp, status, creation)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(name)
        .bind(caller_name)
        .bind(phone_number)
        .bind(intent)
        .bind(creation)
        .bind(status)
        .bind(creation)
        .execute(pool)
        .await
        .unwrap();
    }
}

#[tokio::test]
async fn success_newest_first() {
    let pool = connect().await.unwrap();
    seed(&pool).await;
    let repo = SqliteCallLogRepo::new(Arc::new(pool.clone()));

    let list = repo.list(&filter()).await.unwrap();

    assert_eq!(list.len(), 3);
    assert_eq!(list[0].name, "log3");
    assert_eq!(list[1].name, "log2");
    assert_eq!(list[2].name, "log1");
}

#[tokio::test]
async fn success_status_filter() {
    let pool = connect().await.unwrap();
    seed(&pool).await;
    let repo = SqliteCallLogRepo::new(Arc::new(pool.clone()));

    let list = repo
        .list(&CallLogFilter {
            status: Some("Lead".to_string()),
            ..filter()
        })
        .await
        .unwrap();

    let names: Vec<_> = list.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["log3", "log1"]);
}

#[tokio::test]
async fn success_search_matches_name_phone_or_intent() {
    let pool = connect().await.unwrap();
    seed(&pool).await;
    let repo = SqliteCallLogRepo::new(Arc::new(pool.clone()));

    let by_intent = repo
        .list(&CallLogFilter {
            search: Some("booking".to_string()),
            ..filter()
        })
        .await
        .unwrap();
    let names: Vec<_> = by_intent.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["log3", "log1"]);

    let by_phone = repo
        .list(&CallLogFilter {
            search: Some("0002".to_string()),
            ..filter()
        })
        .await
        .unwrap();
    assert_eq!(by_phone.len(), 1);
    assert_eq!(by_phone[0].caller_name, "Bob Jones");
}

#[tokio::test]
async fn success_creation_date_range_is_inclusive() {
    let pool = connect().await.unwrap();
    seed(&pool).await;
    sqlx::query(
        r#"
        INSERT INTO voice_agent_call_logs (name, timestamp, creation)
        VALUES ('late2', '2025-01-02 23:59:59.900000', '2025-01-02 23:59:59.900000')
        "#,
    )
    .execute(&pool)
    .await
    .unwrap();
    let repo = SqliteCallLogRepo::new(Arc::new(pool.clone()));

    let list = repo
        .list(&CallLogFilter {
            created_from: Some(date!(2025 - 01 - 02)),
            created_to: Some(date!(2025 - 01 - 02)),
            ..filter()
        })
        .await
        .unwrap();

    let names: Vec<_> = list.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["late2", "log2"]);
}

#[tokio::test]
async fn success_open_ended_date_range() {
    let pool = connect().await.unwrap();
    seed(&pool).await;
    let repo = SqliteCallLogRepo::new(Arc::new(pool.clone()));

    let since = repo
        .list(&CallLogFilter {
            created_from: Some(date!(2025 - 01 - 02)),
            ..filter()
        })
        .await
        .unwrap();
    let names: Vec<_> = since.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["log3", "log2"]);

    let until = repo
        .list(&CallLogFilter {
            created_to: Some(date!(2025 - 01 - 01)),
            ..filter()
        })
        .await
        .unwrap();
    let names: Vec<_> = until.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["log1"]);
}

#[tokio::test]
async fn success_limit_and_offset() {
    let pool = connect().await.unwrap();
    seed(&pool).await;
    let repo = SqliteCallLogRepo::new(Arc::new(pool.clone()));

    let list = repo
        .list(&CallLogFilter {
            limit: 1,
            offset: 1,
            ..filter()
        })
        .await
        .unwrap();

    assert_eq!(list.len(), 1);
    assert_eq!(list[0].name, "log2");
}

#[tokio::test]
async fn success_empty_table() {
    let pool = connect().await.unwrap();
    let repo = SqliteCallLogRepo::new(Arc::new(pool.clone()));

    let list = repo.list(&filter()).await.unwrap();
    assert!(list.is_empty());
}
