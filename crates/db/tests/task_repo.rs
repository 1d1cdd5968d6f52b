//! Integration tests for `TaskRepo` against a real database:
//! - Project-scoped listing uses the same predicate for page and count
//! - Foreign key enforcement on create
//! - Full-record update without reparenting
//! - Status persisted as text

use assert_matches::assert_matches;
use sqlx::PgPool;
use taskdeck_core::pagination::PageRequest;
use taskdeck_db::error::StorageError;
use taskdeck_db::models::project::ProjectView;
use taskdeck_db::models::status::TaskStatus;
use taskdeck_db::models::task::{TaskRecord, TaskView};
use taskdeck_db::repositories::{ProjectRepo, TaskRepo};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_project(pool: &PgPool, name: &str) -> Uuid {
    let record = ProjectView {
        name: name.to_string(),
        ..Default::default()
    }
    .into_record(None);
    ProjectRepo::create(pool, &record).await.unwrap().id
}

fn new_task(project_id: Uuid, title: &str) -> TaskRecord {
    TaskView {
        project_id,
        title: title.to_string(),
        ..Default::default()
    }
    .into_record(None)
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_task_defaults_to_todo(pool: PgPool) {
    let project_id = create_project(&pool, "P").await;
    let task = TaskRepo::create(&pool, &new_task(project_id, "Write docs"))
        .await
        .unwrap();
    assert_eq!(task.project_id, project_id);
    assert_eq!(task.title, "Write docs");
    assert_eq!(task.status, TaskStatus::Todo);

    let (stored,): (String,) = sqlx::query_as("SELECT status FROM tasks WHERE id = $1")
        .bind(task.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, "Todo", "status is stored as its textual name");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_task_for_missing_project_rejected(pool: PgPool) {
    let missing = Uuid::new_v4();
    let result = TaskRepo::create(&pool, &new_task(missing, "Orphan")).await;
    assert_matches!(
        result,
        Err(StorageError::MissingReference { entity: "Task", referenced: "Project", referenced_id })
            if referenced_id == missing
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_task_identifier_rejected(pool: PgPool) {
    let project_id = create_project(&pool, "P").await;
    let input = new_task(project_id, "First");
    TaskRepo::create(&pool, &input).await.unwrap();

    let again = TaskRecord {
        title: "Second".to_string(),
        ..input.clone()
    };
    let result = TaskRepo::create(&pool, &again).await;
    assert_matches!(
        result,
        Err(StorageError::Duplicate { entity: "Task", id }) if id == input.id
    );

    let stored = TaskRepo::find_by_id(&pool, input.id).await.unwrap().unwrap();
    assert_eq!(stored.title, "First");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_every_status_round_trips(pool: PgPool) {
    let project_id = create_project(&pool, "P").await;
    for status in TaskStatus::ALL {
        let record = TaskView {
            project_id,
            status,
            ..Default::default()
        }
        .into_record(None);
        let created = TaskRepo::create(&pool, &record).await.unwrap();
        let found = TaskRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(found.status, status);
    }
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_project_round_trip(pool: PgPool) {
    let project_id = create_project(&pool, "P").await;
    let task = TaskRepo::create(&pool, &new_task(project_id, "Only")).await.unwrap();

    let page = TaskRepo::list_by_project(&pool, project_id, PageRequest::new(1, 10))
        .await
        .unwrap();
    assert_eq!(page.total_records, 1);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.records.len(), 1);
    assert_eq!(page.records[0].id, task.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_project_counts_with_same_filter(pool: PgPool) {
    let mine = create_project(&pool, "Mine").await;
    let theirs = create_project(&pool, "Theirs").await;
    let mut expected = Vec::new();
    for i in 0..3 {
        expected.push(TaskRepo::create(&pool, &new_task(mine, &format!("m{i}"))).await.unwrap().id);
    }
    for i in 0..4 {
        TaskRepo::create(&pool, &new_task(theirs, &format!("t{i}"))).await.unwrap();
    }

    let first = TaskRepo::list_by_project(&pool, mine, PageRequest::new(1, 2))
        .await
        .unwrap();
    let second = TaskRepo::list_by_project(&pool, mine, PageRequest::new(2, 2))
        .await
        .unwrap();

    assert_eq!(first.total_records, 3, "count must ignore other projects");
    assert_eq!(first.total_pages, 2);
    assert_eq!(second.records.len(), 1);
    let listed: Vec<Uuid> = first
        .records
        .iter()
        .chain(second.records.iter())
        .map(|t| t.id)
        .collect();
    assert_eq!(listed, expected);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_unknown_project_is_empty(pool: PgPool) {
    let page = TaskRepo::list_by_project(&pool, Uuid::new_v4(), PageRequest::default())
        .await
        .unwrap();
    assert_eq!(page.total_records, 0);
    assert_eq!(page.total_pages, 0);
    assert!(page.records.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_project_orders_same_transaction_inserts(pool: PgPool) {
    let project_id = create_project(&pool, "P").await;
    let ids: Vec<Uuid> = (1..=3u128).rev().map(Uuid::from_u128).collect();

    let mut tx = pool.begin().await.unwrap();
    for id in &ids {
        sqlx::query("INSERT INTO tasks (id, project_id, title) VALUES ($1, $2, 'same instant')")
            .bind(id)
            .bind(project_id)
            .execute(&mut *tx)
            .await
            .unwrap();
    }
    tx.commit().await.unwrap();

    let page = TaskRepo::list_by_project(&pool, project_id, PageRequest::default())
        .await
        .unwrap();
    let listed: Vec<Uuid> = page.records.iter().map(|t| t.id).collect();
    assert_eq!(listed, ids);

    let project = ProjectRepo::find_by_id(&pool, project_id).await.unwrap().unwrap();
    let loaded: Vec<Uuid> = project.tasks.iter().map(|t| t.id).collect();
    assert_eq!(loaded, ids);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_page_spans_projects(pool: PgPool) {
    let a = create_project(&pool, "A").await;
    let b = create_project(&pool, "B").await;
    for project_id in [a, b, a, b, a] {
        TaskRepo::create(&pool, &new_task(project_id, "x")).await.unwrap();
    }

    let page = TaskRepo::list_page(&pool, PageRequest::new(2, 3)).await.unwrap();
    assert_eq!(page.total_records, 5);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.current_page, 2);
    assert_eq!(page.records.len(), 2);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_overwrites_every_field(pool: PgPool) {
    let project_id = create_project(&pool, "P").await;
    let original = TaskRepo::create(
        &pool,
        &TaskView {
            project_id,
            title: "Draft".into(),
            description: "details".into(),
            status: TaskStatus::InProgress,
            ..Default::default()
        }
        .into_record(None),
    )
    .await
    .unwrap();

    // The replacement omits description and status.
    let replacement = TaskView {
        project_id,
        title: "Final".into(),
        ..Default::default()
    }
    .into_record(Some(original.id));
    let updated = TaskRepo::update(&pool, &replacement).await.unwrap().unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.title, "Final");
    assert_eq!(updated.description, "");
    assert_eq!(updated.status, TaskStatus::Todo);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_cannot_reparent(pool: PgPool) {
    let owner = create_project(&pool, "Owner").await;
    let other = create_project(&pool, "Other").await;
    let task = TaskRepo::create(&pool, &new_task(owner, "Stay")).await.unwrap();

    let moved = TaskView {
        project_id: other,
        title: "Moved".into(),
        ..Default::default()
    }
    .into_record(Some(task.id));
    assert!(TaskRepo::update(&pool, &moved).await.unwrap().is_none());

    let found = TaskRepo::find_by_id(&pool, task.id).await.unwrap().unwrap();
    assert_eq!(found.project_id, owner);
    assert_eq!(found.title, "Stay");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_task_returns_none(pool: PgPool) {
    let project_id = create_project(&pool, "P").await;
    let result = TaskRepo::update(&pool, &new_task(project_id, "Ghost")).await.unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_twice_succeeds(pool: PgPool) {
    let project_id = create_project(&pool, "P").await;
    let task = TaskRepo::create(&pool, &new_task(project_id, "Once")).await.unwrap();

    assert!(TaskRepo::delete(&pool, task.id).await.unwrap());
    assert!(!TaskRepo::delete(&pool, task.id).await.unwrap());
    assert!(TaskRepo::find_by_id(&pool, task.id).await.unwrap().is_none());
}
