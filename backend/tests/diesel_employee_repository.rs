//! Integration tests for `DieselEmployeeRepository` against PostgreSQL.
//!
//! The suite targets the database named by `TEST_DATABASE_URL`. When the
//! variable is unset every test returns early after printing a skip notice.
//! Tests share one table, so each holds `DB_LOCK` and starts from an empty
//! table.

use std::sync::{Mutex, MutexGuard, PoisonError};

use personnel::domain::ports::EmployeeRepository;
use personnel::domain::{EmployeeDetails, EmployeeId};
use personnel::example_data::{SeedOutcome, seed_employees};
use personnel::outbound::persistence::{
    DbPool, DieselEmployeeRepository, PoolConfig, run_migrations_blocking,
};
use rstest::{fixture, rstest};

const TEST_DATABASE_URL: &str = "TEST_DATABASE_URL";

static DB_LOCK: Mutex<()> = Mutex::new(());

struct TestContext {
    repository: DieselEmployeeRepository,
    _guard: MutexGuard<'static, ()>,
}

async fn setup() -> Option<TestContext> {
    let Ok(database_url) = std::env::var(TEST_DATABASE_URL) else {
        eprintln!("SKIP-TEST-CLUSTER: {TEST_DATABASE_URL} is not set");
        return None;
    };
    let guard = DB_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

    run_migrations_blocking(database_url.clone())
        .await
        .expect("migrations apply");
    let pool = DbPool::new(PoolConfig::new(database_url).with_min_idle(Some(1)))
        .await
        .expect("pool builds");
    let repository = DieselEmployeeRepository::new(pool);
    for employee in repository.list().await.expect("list existing") {
        repository
            .delete(&employee.id())
            .await
            .expect("clear existing");
    }

    Some(TestContext {
        repository,
        _guard: guard,
    })
}

#[fixture]
fn ivan() -> EmployeeDetails {
    EmployeeDetails::new("Иван", "ivan@x.com", 25, "IT", 50_000).expect("valid details")
}

#[rstest]
#[tokio::test]
async fn insert_then_find_returns_equal_fields(ivan: EmployeeDetails) {
    let Some(ctx) = setup().await else { return };

    let created = ctx.repository.insert(&ivan).await.expect("insert");
    let found = ctx
        .repository
        .find_by_id(&created.id())
        .await
        .expect("find")
        .expect("row present");

    assert_eq!(found, created);
    assert_eq!(found.details(), &ivan);
}

#[rstest]
#[tokio::test]
async fn update_overwrites_every_field(ivan: EmployeeDetails) {
    let Some(ctx) = setup().await else { return };
    let created = ctx.repository.insert(&ivan).await.expect("insert");
    let changed =
        EmployeeDetails::new("Иван Петров", "ivan.p@x.com", 26, "Ops", 55_000).expect("valid");

    let updated = ctx
        .repository
        .update(&created.id(), &changed)
        .await
        .expect("update")
        .expect("row present");

    assert_eq!(updated.id(), created.id());
    assert_eq!(updated.details(), &changed);
}

#[rstest]
#[tokio::test]
async fn delete_removes_row(ivan: EmployeeDetails) {
    let Some(ctx) = setup().await else { return };
    let created = ctx.repository.insert(&ivan).await.expect("insert");

    let deleted = ctx.repository.delete(&created.id()).await.expect("delete");

    assert_eq!(deleted, Some(created.clone()));
    assert!(
        ctx.repository
            .find_by_id(&created.id())
            .await
            .expect("find")
            .is_none()
    );
}

#[rstest]
#[tokio::test]
async fn unknown_ids_report_absence(ivan: EmployeeDetails) {
    let Some(ctx) = setup().await else { return };
    let id = EmployeeId::random();

    assert!(ctx.repository.find_by_id(&id).await.expect("find").is_none());
    assert!(
        ctx.repository
            .update(&id, &ivan)
            .await
            .expect("update")
            .is_none()
    );
    assert!(ctx.repository.delete(&id).await.expect("delete").is_none());
}

#[rstest]
#[tokio::test]
async fn list_returns_persisted_set(ivan: EmployeeDetails) {
    let Some(ctx) = setup().await else { return };
    let second = EmployeeDetails::new("Мария", "maria@x.com", 31, "HR", 48_000).expect("valid");

    let first = ctx.repository.insert(&ivan).await.expect("insert");
    let later = ctx.repository.insert(&second).await.expect("insert");

    let listed = ctx.repository.list().await.expect("list");
    assert_eq!(listed.len(), 2);
    assert!(listed.contains(&first));
    assert!(listed.contains(&later));
    assert_eq!(ctx.repository.count().await.expect("count"), 2);
}

#[rstest]
#[tokio::test]
async fn seeding_runs_once() {
    let Some(ctx) = setup().await else { return };

    let first = seed_employees(&ctx.repository).await.expect("seed");
    let second = seed_employees(&ctx.repository).await.expect("seed again");

    assert_eq!(first, SeedOutcome::Applied { inserted: 6 });
    assert_eq!(second, SeedOutcome::AlreadySeeded { existing: 6 });
}
