use book_catalog::adapters::memory::InMemoryBookRepository;
use book_catalog::application::book::{
    BookError, add_book, delete_book, find_all_books, get_book_by_id, update_book,
    update_book_name, update_book_price,
};
use book_catalog::domain::{Book, BookId};
use book_catalog::ports::BookRepository;
use std::collections::HashSet;
use std::sync::Arc;

mod common;

use common::{memory_deps, new_book};

fn stored(id: i32, name: &str) -> Book {
    Book {
        id: BookId::from_i32(id),
        name: name.to_string(),
        price: 10.0,
        amount: 1,
        published: false,
    }
}

// ============================================================================
// 採番
// ============================================================================

#[tokio::test]
async fn test_add_to_empty_store_assigns_id_one() {
    let deps = memory_deps(InMemoryBookRepository::new());

    let added = add_book(&deps, new_book("A", 10.0, 5, false))
        .await
        .unwrap();

    assert_eq!(added.id.value(), 1);
    assert_eq!(find_all_books(&deps).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_after_deleted_id_uses_current_max() {
    let deps = memory_deps(InMemoryBookRepository::from_books(vec![
        stored(1, "A"),
        stored(2, "B"),
        stored(4, "D"),
    ]));

    let added = add_book(&deps, new_book("E", 1.0, 1, false)).await.unwrap();

    assert_eq!(added.id.value(), 5);
}

#[tokio::test]
async fn test_add_after_max_id_is_operation_failed() {
    let deps = memory_deps(InMemoryBookRepository::from_books(vec![stored(i32::MAX, "Z")]));

    let result = add_book(&deps, new_book("A", 1.0, 1, false)).await;

    assert!(matches!(result, Err(BookError::OperationFailed(_))));
    assert_eq!(
        find_all_books(&deps).await.unwrap(),
        vec![stored(i32::MAX, "Z")]
    );
}

#[tokio::test]
async fn test_added_book_is_found_by_id() {
    let deps = memory_deps(InMemoryBookRepository::new());

    let added = add_book(&deps, new_book("A", 10.0, 5, true)).await.unwrap();
    let found = get_book_by_id(&deps, added.id).await.unwrap();

    assert_eq!(found, added);
    assert_eq!(found.name, "A");
    assert!(found.published);
}

// ============================================================================
// 取得・更新・削除
// ============================================================================

#[tokio::test]
async fn test_get_missing_book_is_not_found() {
    let deps = memory_deps(InMemoryBookRepository::with_seed_books());

    let result = get_book_by_id(&deps, BookId::from_i32(99)).await;

    match result {
        Err(BookError::NotFound(msg)) => assert!(msg.contains("99")),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_update_book_price_changes_only_price() {
    let deps = memory_deps(InMemoryBookRepository::with_seed_books());
    let before = get_book_by_id(&deps, BookId::from_i32(2)).await.unwrap();

    update_book_price(&deps, BookId::from_i32(2), 25.0)
        .await
        .unwrap();

    let after = get_book_by_id(&deps, BookId::from_i32(2)).await.unwrap();
    assert_eq!(after.price, 25.0);
    assert_eq!(after.id, before.id);
    assert_eq!(after.name, before.name);
    assert_eq!(after.amount, before.amount);
    assert_eq!(after.published, before.published);
}

#[tokio::test]
async fn test_update_book_name_changes_only_name() {
    let deps = memory_deps(InMemoryBookRepository::with_seed_books());
    let before = get_book_by_id(&deps, BookId::from_i32(3)).await.unwrap();

    update_book_name(&deps, BookId::from_i32(3), "Renamed".to_string())
        .await
        .unwrap();

    let after = get_book_by_id(&deps, BookId::from_i32(3)).await.unwrap();
    assert_eq!(after.name, "Renamed");
    assert_eq!(after.price, before.price);
    assert_eq!(after.amount, before.amount);
}

#[tokio::test]
async fn test_update_missing_book_leaves_store_unchanged() {
    let deps = memory_deps(InMemoryBookRepository::with_seed_books());
    let before = find_all_books(&deps).await.unwrap();

    let result = update_book(&deps, BookId::from_i32(50), new_book("X", 1.0, 1, true)).await;

    assert!(matches!(result, Err(BookError::OperationFailed(_))));
    assert_eq!(find_all_books(&deps).await.unwrap(), before);
}

#[tokio::test]
async fn test_delete_book_then_delete_again_is_not_found() {
    let deps = memory_deps(InMemoryBookRepository::with_seed_books());

    delete_book(&deps, BookId::from_i32(3)).await.unwrap();

    let books = find_all_books(&deps).await.unwrap();
    assert!(books.iter().all(|book| book.id != BookId::from_i32(3)));
    assert!(matches!(
        get_book_by_id(&deps, BookId::from_i32(3)).await,
        Err(BookError::NotFound(_))
    ));
    assert!(matches!(
        delete_book(&deps, BookId::from_i32(3)).await,
        Err(BookError::NotFound(_))
    ));
}

// ============================================================================
// 並行性
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_adds_assign_unique_ids() {
    let repository = Arc::new(InMemoryBookRepository::new());

    let writers: Vec<_> = (0..8)
        .map(|writer| {
            let repository = Arc::clone(&repository);
            tokio::spawn(async move {
                for n in 0..50 {
                    let name = format!("writer-{}-{}", writer, n);
                    repository
                        .add(new_book(&name, 1.0, 1, false))
                        .await
                        .unwrap()
                        .unwrap();
                }
            })
        })
        .collect();

    for writer in writers {
        writer.await.unwrap();
    }

    let books = repository.find_all().await.unwrap();
    let ids: HashSet<i32> = books.iter().map(|book| book.id.value()).collect();
    assert_eq!(books.len(), 400);
    assert_eq!(ids.len(), 400);
    assert_eq!(ids, (1..=400).collect::<HashSet<i32>>());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_readers_only_observe_complete_snapshots() {
    let repository = Arc::new(InMemoryBookRepository::new());

    let writer = {
        let repository = Arc::clone(&repository);
        tokio::spawn(async move {
            for n in 0..300 {
                repository
                    .add(new_book(&format!("book-{}", n), 1.0, 1, false))
                    .await
                    .unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let repository = Arc::clone(&repository);
            tokio::spawn(async move {
                for _ in 0..300 {
                    let snapshot = repository.snapshot();
                    // 空ストアからの追加のみなので、どのスナップショットもIDが1..=nで連続する
                    let ids: Vec<i32> = snapshot.iter().map(|book| book.id.value()).collect();
                    let expected: Vec<i32> = (1..=snapshot.len() as i32).collect();
                    assert_eq!(ids, expected);
                    tokio::task::yield_now().await;
                }
            })
        })
        .collect();

    writer.await.unwrap();
    for reader in readers {
        reader.await.unwrap();
    }

    assert_eq!(repository.snapshot().len(), 300);
}
