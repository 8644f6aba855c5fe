//! Integration tests for the reporting repository.

use std::collections::HashSet;

use chrono::{Duration, Utc};
use sqlx::PgPool;
use turnstile_core::types::DbId;
use turnstile_db::models::member::CreateMember;
use turnstile_db::repositories::{EntryRepo, MemberRepo, ReportRepo};

async fn register(pool: &PgPool, name: &str, mobile: &str, membership_id: &str) -> DbId {
    MemberRepo::create(
        pool,
        &CreateMember {
            name: name.to_string(),
            age: 30,
            mobile_number: mobile.to_string(),
            membership_id: membership_id.to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test(migrations = "./migrations")]
async fn not_entered_partitions_the_member_set(pool: PgPool) {
    let asha = register(&pool, "Asha", "9998887770", "MEM-00001").await;
    let ravi = register(&pool, "Ravi", "8887776660", "MEM-00002").await;
    let mina = register(&pool, "Mina", "7776665550", "MEM-00003").await;

    let today = Utc::now().date_naive();
    EntryRepo::create(&pool, asha, today).await.unwrap();

    let entered: HashSet<DbId> = EntryRepo::list_on_date(&pool, today)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.member_id)
        .collect();
    let not_entered: HashSet<DbId> = ReportRepo::members_not_entered_on(&pool, today)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.id)
        .collect();

    // Union covers everyone, intersection is empty.
    assert!(entered.is_disjoint(&not_entered));
    let all: HashSet<DbId> = entered.union(&not_entered).copied().collect();
    assert_eq!(all, HashSet::from([asha, ravi, mina]));

    assert_eq!(
        ReportRepo::members_entered_on_count(&pool, today)
            .await
            .unwrap(),
        1
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn not_entered_is_ordered_by_name(pool: PgPool) {
    register(&pool, "Zoya", "9998887770", "MEM-00001").await;
    register(&pool, "Asha", "8887776660", "MEM-00002").await;

    let today = Utc::now().date_naive();
    let names: Vec<String> = ReportRepo::members_not_entered_on(&pool, today)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.name)
        .collect();

    assert_eq!(names, vec!["Asha".to_string(), "Zoya".to_string()]);
}

#[sqlx::test(migrations = "./migrations")]
async fn daily_entry_trend_groups_and_descends(pool: PgPool) {
    let asha = register(&pool, "Asha", "9998887770", "MEM-00001").await;
    let ravi = register(&pool, "Ravi", "8887776660", "MEM-00002").await;

    let today = Utc::now().date_naive();
    let yesterday = today - Duration::days(1);

    EntryRepo::create(&pool, asha, yesterday).await.unwrap();
    EntryRepo::create(&pool, ravi, yesterday).await.unwrap();
    EntryRepo::create(&pool, asha, today).await.unwrap();

    let trend = ReportRepo::daily_entry_trend(&pool, today - Duration::days(7), today)
        .await
        .unwrap();

    // Two buckets, descending by date; empty days produce no bucket.
    assert_eq!(trend.len(), 2);
    assert_eq!(trend[0].date, today);
    assert_eq!(trend[0].count, 1);
    assert_eq!(trend[1].date, yesterday);
    assert_eq!(trend[1].count, 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn registration_trend_counts_by_registration_date(pool: PgPool) {
    register(&pool, "Asha", "9998887770", "MEM-00001").await;
    register(&pool, "Ravi", "8887776660", "MEM-00002").await;

    let today = Utc::now().date_naive();
    let trend = ReportRepo::registration_trend(&pool, today - Duration::days(7), today)
        .await
        .unwrap();

    // Both registrations happened just now, so a single bucket for today.
    assert_eq!(trend.len(), 1);
    assert_eq!(trend[0].date, today);
    assert_eq!(trend[0].count, 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn trend_window_excludes_outside_dates(pool: PgPool) {
    let asha = register(&pool, "Asha", "9998887770", "MEM-00001").await;
    let today = Utc::now().date_naive();
    let long_ago = today - Duration::days(30);

    EntryRepo::create(&pool, asha, long_ago).await.unwrap();
    EntryRepo::create(&pool, asha, today).await.unwrap();

    let trend = ReportRepo::daily_entry_trend(&pool, today - Duration::days(7), today)
        .await
        .unwrap();
    assert_eq!(trend.len(), 1);
    assert_eq!(trend[0].date, today);
}
