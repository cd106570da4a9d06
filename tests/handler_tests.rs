//! MCP tool handler tests
mod common;

use bcbid_checklist::{ChecklistDefinition, ChecklistServerHandler, Progress};
use common::get_test_handler;

#[tokio::test]
async fn test_toggle_item_single() {
    let (handler, _temp_file) = get_test_handler();

    let result = handler
        .handle_toggle_item(vec!["bceid".to_string()])
        .await
        .unwrap();
    assert!(result.contains("Toggled 1 item:"));
    assert!(result.contains("- Obtain Business BCeID (bceid): done"));
    assert!(result.contains("BC Bid Readiness: 5% (1 of 21 items)"));

    assert!(handler.store().is_checked("bceid"));
}

#[tokio::test]
async fn test_toggle_item_batch_with_failures() {
    let (handler, _temp_file) = get_test_handler();

    let result = handler
        .handle_toggle_item(vec![
            "bceid".to_string(),
            " bcbid-account ".to_string(),
            "nonexistent".to_string(),
        ])
        .await
        .unwrap();
    assert!(result.contains("Toggled 2 items:"));
    assert!(result.contains("Failed to toggle 1 item:"));
    assert!(result.contains("- nonexistent: not found"));
    assert!(result.contains("10% (2 of 21 items)"));
}

#[tokio::test]
async fn test_toggle_item_all_unknown_is_error() {
    let (handler, _temp_file) = get_test_handler();

    let result = handler
        .handle_toggle_item(vec!["nonexistent".to_string()])
        .await;
    assert!(result.is_err());
    assert!(handler.store().checked_items().is_empty());
}

#[tokio::test]
async fn test_toggle_item_empty_ids_is_error() {
    let (handler, _temp_file) = get_test_handler();
    assert!(handler.handle_toggle_item(Vec::new()).await.is_err());
}

#[tokio::test]
async fn test_toggle_item_persists_to_file() {
    let (handler, temp_file) = get_test_handler();
    handler
        .handle_toggle_item(vec!["cgl".to_string()])
        .await
        .unwrap();
    drop(handler);

    let reopened = ChecklistServerHandler::new(temp_file.path(), ChecklistDefinition::default());
    assert_eq!(reopened.store().total_progress(), Progress::new(1, 21));
}

#[tokio::test]
async fn test_toggle_category() {
    let (handler, _temp_file) = get_test_handler();

    let result = handler
        .handle_toggle_category("optional".to_string())
        .await
        .unwrap();
    assert!(result.starts_with("Category optional expanded"));
    assert!(result.contains("Gold Seal Certification"));

    let result = handler
        .handle_toggle_category("optional".to_string())
        .await
        .unwrap();
    assert!(result.starts_with("Category optional collapsed"));
    assert!(!result.contains("Gold Seal Certification"));

    assert!(
        handler
            .handle_toggle_category("missing".to_string())
            .await
            .is_err()
    );
}

#[tokio::test]
async fn test_checklist_view_follows_expansion() {
    let (handler, _temp_file) = get_test_handler();

    let view = handler.handle_checklist(None).await.unwrap();
    assert!(view.starts_with("BC Bid Readiness: 0% (0 of 21 items)"));
    assert!(view.contains("Obtain Business BCeID"));
    assert!(!view.contains("BC Social Procurement Initiative"));

    handler
        .handle_toggle_category("registration".to_string())
        .await
        .unwrap();
    let view = handler.handle_checklist(None).await.unwrap();
    assert!(!view.contains("Obtain Business BCeID"));
}

#[tokio::test]
async fn test_checklist_single_category() {
    let (handler, _temp_file) = get_test_handler();

    let view = handler
        .handle_checklist(Some("optional".to_string()))
        .await
        .unwrap();
    assert!(view.contains("BC Social Procurement Initiative"));
    assert!(view.contains("Contact IPI: mailto:ipi@gov.bc.ca"));

    assert!(
        handler
            .handle_checklist(Some("missing".to_string()))
            .await
            .is_err()
    );
}

#[tokio::test]
async fn test_progress_ready_banner() {
    let handler = ChecklistServerHandler::in_memory(ChecklistDefinition::default());
    let ids = common::all_item_ids();
    handler.handle_toggle_item(ids).await.unwrap();

    let progress = handler.handle_progress().await.unwrap();
    assert!(progress.starts_with("BC Bid Readiness: 100% (21 of 21 items)"));
    assert!(progress.contains("Ready to bid on BC Bid!"));
    assert!(progress.contains("- 3. Insurance Requirements: 4/4 (100%)"));
}

#[tokio::test]
async fn test_resources() {
    let (handler, _temp_file) = get_test_handler();
    let text = handler.handle_resources().await.unwrap();
    assert!(text.starts_with("Quick Links:"));
    assert!(text.contains("Need Help?"));
}
