//! Demo runs through the library entry point.

use common::{Context, CreatePolicy};
use todo_service_lib::config::TodoServiceConfig;
use todo_service_lib::container::ContractShape;
use todo_service_lib::demo::{self, SAMPLE_TODO_ID};

#[tokio::test]
async fn test_both_shapes_produce_the_same_outcome() {
    let config = TodoServiceConfig::default();
    let shapes = [ContractShape::Unified, ContractShape::Segmented];

    let reports = todo_service_lib::run_demo(&config, &shapes, Context::background())
        .await
        .unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].contract, ContractShape::Unified);
    assert_eq!(reports[1].contract, ContractShape::Segmented);
    for report in &reports {
        assert_eq!(report.todos_after.len(), 1);
        assert_eq!(report.todos_after[0].id, SAMPLE_TODO_ID);
        assert!(report.todos_after[0].completed);
        assert_eq!(report.missing_user_error.as_deref(), Some("USER_NOT_FOUND"));
    }
}

#[tokio::test]
async fn test_upsert_policy_runs_the_same_demo() {
    let mut config = TodoServiceConfig::default();
    config.store.create_policy = CreatePolicy::Upsert;

    let reports = todo_service_lib::run_demo(&config, &[ContractShape::Segmented], Context::background())
        .await
        .unwrap();

    assert!(demo::render(&reports[0]).contains("(done)"));
}

#[tokio::test]
async fn test_report_serializes_to_json() {
    let reports = todo_service_lib::run_demo(
        &TodoServiceConfig::default(),
        &[ContractShape::Unified],
        Context::background(),
    )
    .await
    .unwrap();

    let json = serde_json::to_value(&reports[0]).unwrap();

    assert_eq!(json["contract"], "unified");
    assert_eq!(json["user"]["id"], "user1");
    assert_eq!(json["todos_after"][0]["completed"], true);
}
