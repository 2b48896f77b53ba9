mod common;

use pretty_assertions::assert_eq;

use common::{ScriptedBackend, memory_db, scripted_service, seed_item, service};
use ready_core::enums::ActionType;
use ready_core::history::{HistoryQuery, parse_action_filter};
use ready_core::inputs::NewItem;
use ready_service::ServiceError;

#[tokio::test]
async fn history_is_newest_first_and_counts_exactly() {
    let service = service().await;
    let item = service
        .create_item(&NewItem::new("Rivets", 100, 10))
        .await
        .unwrap();
    for _ in 0..11 {
        service.withdraw(item.id, 1, None).await.unwrap();
    }

    let first = service.history(HistoryQuery::page(1, 10)).await.unwrap();
    assert_eq!(first.total, 12);
    assert_eq!(first.rows.len(), 10);
    assert_eq!(first.page_count(), 2);
    assert!(first
        .rows
        .iter()
        .all(|row| row.transaction.action_type == ActionType::Withdraw));

    let second = service.history(HistoryQuery::page(2, 10)).await.unwrap();
    assert_eq!(second.rows.len(), 2);
    assert_eq!(second.rows[1].transaction.action_type, ActionType::Create);
    assert_eq!(second.rows[1].item_name.as_deref(), Some("Rivets"));

    let ids: Vec<i64> = first
        .rows
        .iter()
        .chain(second.rows.iter())
        .map(|row| row.transaction.id)
        .collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(ids, sorted);
}

#[tokio::test]
async fn history_filter_selects_one_action() {
    let service = service().await;
    let item = service
        .create_item(&NewItem::new("Rivets", 10, 1))
        .await
        .unwrap();
    service.receive(item.id, 4, None).await.unwrap();
    service.withdraw(item.id, 2, None).await.unwrap();

    let filter = parse_action_filter("receive").unwrap();
    let page = service
        .history(HistoryQuery::default().with_filter(filter))
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.rows[0].transaction.amount, 4);

    let all = service
        .history(HistoryQuery::default().with_filter(parse_action_filter("all").unwrap()))
        .await
        .unwrap();
    assert_eq!(all.total, 3);
}

#[tokio::test]
async fn page_zero_is_rejected_without_backend_call() {
    let service = scripted_service(ScriptedBackend::new(memory_db().await));
    let err = service.history(HistoryQuery::page(0, 10)).await.unwrap_err();
    assert!(matches!(err, ServiceError::Core(_)));
    assert!(service.backend().calls().is_empty());
}

#[tokio::test]
async fn repeated_history_reads_hit_the_cache_until_a_mutation() {
    let backend = ScriptedBackend::new(memory_db().await);
    let item = seed_item(&backend.inner, "Rivets", 10, 1).await;
    let service = scripted_service(backend);

    service.history(HistoryQuery::default()).await.unwrap();
    service.history(HistoryQuery::default()).await.unwrap();
    let reads = |calls: Vec<&str>| calls.iter().filter(|c| **c == "query_transactions").count();
    assert_eq!(reads(service.backend().calls()), 1);

    service.receive(item.id, 1, None).await.unwrap();
    let page = service.history(HistoryQuery::default()).await.unwrap();
    assert_eq!(reads(service.backend().calls()), 2);
    assert_eq!(page.total, 1);
}

#[tokio::test]
async fn dashboard_summarizes_active_items() {
    let service = service().await.with_recent_limit(2);
    let gloves = service
        .create_item(&NewItem::new("Gloves", 30, 5))
        .await
        .unwrap();
    let masks = service
        .create_item(&NewItem::new("Masks", 4, 5))
        .await
        .unwrap();
    let gone = service
        .create_item(&NewItem::new("Visors", 8, 2))
        .await
        .unwrap();
    service.delete_item(gone.id).await.unwrap();
    service.withdraw(gloves.id, 25, None).await.unwrap();

    let stats = service.dashboard().await.unwrap();
    assert_eq!(stats.total_items, 2);
    assert_eq!(stats.total_quantity, 5 + masks.quantity);
    assert_eq!(stats.low_stock_count, 2);
    assert_eq!(stats.recent_transactions.len(), 2);
    assert_eq!(
        stats.recent_transactions[0].transaction.action_type,
        ActionType::Withdraw
    );
    assert_eq!(
        stats.recent_transactions[1].transaction.action_type,
        ActionType::Delete
    );
}

#[tokio::test]
async fn empty_inventory_dashboard() {
    let service = service().await;
    let stats = service.dashboard().await.unwrap();
    assert_eq!(stats.total_items, 0);
    assert_eq!(stats.total_quantity, 0);
    assert_eq!(stats.low_stock_count, 0);
    assert!(stats.recent_transactions.is_empty());
}
