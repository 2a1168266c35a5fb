//! Macro-generated test suite for `OrderStore` contract validation.
//!
//! The `order_store_tests!` macro generates a test module that validates an
//! `OrderStore` over any backend: validated creation, list ordering and
//! filters, status changes, deletion and search.
//!
//! # Generated Tests
//!
//! ## Create
//! - `test_create_and_list`: created order is immediately listed with its fields
//! - `test_create_missing_image`: absent or empty image is rejected, nothing stored
//! - `test_create_blank_name`: empty and whitespace names are rejected
//! - `test_create_trims_name`
//! - `test_create_lenient_price`: malformed price text stores zero
//! - `test_create_negative_price`: rejected, nothing stored
//! - `test_create_unique_ids`
//! - `test_duplicate_id_rejected_by_backend`
//!
//! ## List
//! - `test_list_empty`
//! - `test_list_insertion_order`
//! - `test_list_idempotent`: two calls without mutation are identical
//! - `test_list_status_tabs`: open and closed partition all
//! - `test_query_sort_and_paginate`
//! - `test_placed_within_month`
//!
//! ## Delete / Status / Search
//! - `test_delete_existing`, `test_delete_unknown`
//! - `test_set_status_unknown`
//! - `test_search_fields`

/// Generate a full `OrderStore` conformance test suite.
///
/// `$factory` must evaluate to a fresh, empty `OrderStore`. It is re-evaluated
/// for each test to ensure isolation.
#[macro_export]
macro_rules! order_store_tests {
    ($factory:expr) => {
        mod order_store_contract_tests {
            use super::*;
            use rust_decimal::Decimal;
            use rust_decimal_macros::dec;
            use shoppier::prelude::*;
            use std::collections::HashSet;

            // ==================================================================
            // Create
            // ==================================================================

            #[tokio::test]
            async fn test_create_and_list() {
                let store = $factory;

                let created = store
                    .create("Bag A", "199.90", Some(placed(0)), photo())
                    .await
                    .unwrap();
                assert_eq!(created.name, "Bag A");
                assert_eq!(created.price, dec!(199.90));
                assert_eq!(created.date, placed(0));
                assert_eq!(created.image, JPEG.to_vec());
                assert_eq!(created.status, OrderStatus::Open);

                let all = store.list(StatusFilter::All).await.unwrap();
                assert_eq!(all.len(), 1);
                assert_eq!(all[0], created);
                assert_eq!(store.get(&created.id).await.unwrap(), created);
            }

            #[tokio::test]
            async fn test_create_missing_image() {
                let store = $factory;

                for image in [None, Some(Vec::new())] {
                    let err = store
                        .create("Bag A", "10", Some(placed(0)), image)
                        .await
                        .unwrap_err();
                    assert!(matches!(
                        err,
                        OrderError::Validation(ValidationError::MissingImage)
                    ));
                }

                assert_eq!(store.len().await.unwrap(), 0);
            }

            #[tokio::test]
            async fn test_create_blank_name() {
                let store = $factory;

                for name in ["", "   ", "\t\n"] {
                    let err = store.create(name, "10", None, photo()).await.unwrap_err();
                    assert!(matches!(
                        err,
                        OrderError::Validation(ValidationError::EmptyName)
                    ));
                }

                assert!(store.is_empty().await.unwrap());
            }

            #[tokio::test]
            async fn test_create_trims_name() {
                let store = $factory;
                let created = store.create("  Tote  ", "5", None, photo()).await.unwrap();
                assert_eq!(created.name, "Tote");
            }

            #[tokio::test]
            async fn test_create_lenient_price() {
                let store = $factory;

                let created = store.create("Bag B", "abc", None, photo()).await.unwrap();
                assert_eq!(created.price, Decimal::ZERO);

                let created = store.create("Bag C", "12,5", None, photo()).await.unwrap();
                assert_eq!(created.price, dec!(12.5));
            }

            #[tokio::test]
            async fn test_create_negative_price() {
                let store = $factory;

                let err = store.create("Bag", "-3", None, photo()).await.unwrap_err();
                assert_eq!(err.error_code(), "NEGATIVE_PRICE");
                assert!(store.is_empty().await.unwrap());
            }

            #[tokio::test]
            async fn test_create_unique_ids() {
                let store = $factory;
                let mut ids = HashSet::new();

                for (name, price) in sample_inputs(10) {
                    let order = store.create(&name, &price, None, photo()).await.unwrap();
                    assert!(ids.insert(order.id), "ids must be unique");
                }
                assert_eq!(store.len().await.unwrap(), 10);
            }

            #[tokio::test]
            async fn test_duplicate_id_rejected_by_backend() {
                let store = $factory;
                let created = store.create("Bag", "1", None, photo()).await.unwrap();

                let mut copy = created.clone();
                copy.name = "Copy".to_string();
                let err = store.service().insert(copy).await.unwrap_err();
                assert!(matches!(err, StorageError::DuplicateId { id } if id == created.id));

                let all = store.list(StatusFilter::All).await.unwrap();
                assert_eq!(all, vec![created]);
            }

            // ==================================================================
            // List
            // ==================================================================

            #[tokio::test]
            async fn test_list_empty() {
                let store = $factory;
                assert!(store.list(StatusFilter::All).await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_list_insertion_order() {
                let store = $factory;
                let mut expected = Vec::new();

                // Dates deliberately out of order
                for (i, (name, price)) in sample_inputs(12).into_iter().enumerate() {
                    let date = placed(if i % 2 == 0 { 30 - i as i64 } else { i as i64 });
                    let order = store.create(&name, &price, Some(date), photo()).await.unwrap();
                    expected.push(order.id);
                }

                let ids: Vec<Uuid> = store
                    .list(StatusFilter::All)
                    .await
                    .unwrap()
                    .iter()
                    .map(|o| o.id)
                    .collect();
                assert_eq!(ids, expected);
            }

            #[tokio::test]
            async fn test_list_idempotent() {
                let store = $factory;
                for (name, price) in sample_inputs(3) {
                    store.create(&name, &price, None, photo()).await.unwrap();
                }

                let first = store.list(StatusFilter::All).await.unwrap();
                let second = store.list(StatusFilter::All).await.unwrap();
                assert_eq!(first, second);
            }

            #[tokio::test]
            async fn test_list_status_tabs() {
                let store = $factory;
                let mut created = Vec::new();
                for (name, price) in sample_inputs(4) {
                    created.push(store.create(&name, &price, None, photo()).await.unwrap());
                }

                store
                    .set_status(&created[1].id, OrderStatus::Closed)
                    .await
                    .unwrap();
                store
                    .set_status(&created[3].id, OrderStatus::Closed)
                    .await
                    .unwrap();

                let open = store.list(StatusFilter::Open).await.unwrap();
                let closed = store.list(StatusFilter::Closed).await.unwrap();
                let all = store.list(StatusFilter::All).await.unwrap();

                assert_eq!(
                    open.iter().map(|o| o.id).collect::<Vec<_>>(),
                    vec![created[0].id, created[2].id]
                );
                assert_eq!(
                    closed.iter().map(|o| o.id).collect::<Vec<_>>(),
                    vec![created[1].id, created[3].id]
                );
                assert_eq!(open.len() + closed.len(), all.len());

                // Reopening moves it back without changing its position
                store
                    .set_status(&created[1].id, OrderStatus::Open)
                    .await
                    .unwrap();
                let open = store.list(StatusFilter::Open).await.unwrap();
                assert_eq!(open[1].id, created[1].id);
            }

            #[tokio::test]
            async fn test_query_sort_and_paginate() {
                let store = $factory;
                let old = store.create("old", "1", Some(placed(-3)), photo()).await.unwrap();
                let new = store.create("new", "1", Some(placed(3)), photo()).await.unwrap();
                let mid = store.create("mid", "1", Some(placed(0)), photo()).await.unwrap();

                let page = store
                    .query(&OrderQuery::default().sorted(SortOrder::DateDesc))
                    .await
                    .unwrap();
                assert_eq!(
                    page.data.iter().map(|o| o.id).collect::<Vec<_>>(),
                    vec![new.id, mid.id, old.id]
                );

                let page = store
                    .query(
                        &OrderQuery::default()
                            .sorted(SortOrder::DateAsc)
                            .paginate(1, 2),
                    )
                    .await
                    .unwrap();
                assert_eq!(
                    page.data.iter().map(|o| o.id).collect::<Vec<_>>(),
                    vec![old.id, mid.id]
                );
                let meta = page.pagination.unwrap();
                assert_eq!(meta.total, 3);
                assert!(meta.has_next);
            }

            #[tokio::test]
            async fn test_placed_within_month() {
                let store = $factory;
                let january = store.create("jan", "1", Some(placed(0)), photo()).await.unwrap();
                store.create("feb", "1", Some(placed(40)), photo()).await.unwrap();

                let found = store
                    .placed_within(DateRange::month(placed(10)))
                    .await
                    .unwrap();
                assert_eq!(found, vec![january]);
            }

            // ==================================================================
            // Delete / Status / Search
            // ==================================================================

            #[tokio::test]
            async fn test_delete_existing() {
                let store = $factory;
                let keep = store.create("keep", "1", None, photo()).await.unwrap();
                let gone = store.create("gone", "1", None, photo()).await.unwrap();

                store.delete(&gone.id).await.unwrap();

                let all = store.list(StatusFilter::All).await.unwrap();
                assert_eq!(all, vec![keep]);
                assert!(matches!(
                    store.get(&gone.id).await,
                    Err(OrderError::NotFound { .. })
                ));
            }

            #[tokio::test]
            async fn test_delete_unknown() {
                let store = $factory;
                store.create("keep", "1", None, photo()).await.unwrap();

                let unknown = Uuid::new_v4();
                let err = store.delete(&unknown).await.unwrap_err();
                assert!(matches!(err, OrderError::NotFound { id } if id == unknown));
                assert_eq!(store.len().await.unwrap(), 1);
            }

            #[tokio::test]
            async fn test_set_status_unknown() {
                let store = $factory;
                let err = store
                    .set_status(&Uuid::new_v4(), OrderStatus::Closed)
                    .await
                    .unwrap_err();
                assert!(matches!(err, OrderError::NotFound { .. }));
            }

            #[tokio::test]
            async fn test_search_fields() {
                let store = $factory;
                let tote = store.create("Tote", "45", Some(placed(0)), photo()).await.unwrap();
                store.create("Clutch", "99.99", Some(placed(1)), photo()).await.unwrap();

                assert_eq!(store.search("name", "Tote").await.unwrap(), vec![tote.clone()]);
                assert_eq!(store.search("price", "45.00").await.unwrap(), vec![tote.clone()]);
                assert_eq!(
                    store
                        .search("date", "2024-01-05T10:00:00Z")
                        .await
                        .unwrap(),
                    vec![tote.clone()]
                );
                assert_eq!(
                    store.search("id", &tote.id.to_string()).await.unwrap(),
                    vec![tote]
                );
                assert_eq!(store.search("status", "open").await.unwrap().len(), 2);
                assert!(store.search("image", "x").await.unwrap().is_empty());
            }
        }
    };
}
