use chrono::{Datelike, Local};
use libquest::config::StoragePaths;
use libquest::management::LibraryManager;
use libquest::types::{Genre, NewBook};
use tempfile::TempDir;

#[tokio::test]
async fn test_finishing_dune() {
    let dir = TempDir::new().unwrap();
    let mut manager = LibraryManager::load(&StoragePaths::in_dir(dir.path())).await;

    manager
        .add(NewBook::new("Dune", "Herbert", 1965, Genre::SciFi))
        .await
        .unwrap();

    let books = manager.list_all();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, 1);
    assert_eq!(books[0].progress, 0);
    assert!(!books[0].read);

    let change = manager.update_progress(1, 100).await.unwrap();
    assert!(change.is_persisted());
    assert!(change.value.completed);

    let dune = manager.get(1).unwrap();
    assert!(dune.read);
    assert_eq!(dune.progress, 100);

    let snapshot = manager.snapshot();
    assert_eq!(snapshot.streak, 1);
    assert_eq!(snapshot.read_this_month, 1);
    assert_eq!(snapshot.last_date, Some(Local::now().date_naive()));
}

#[tokio::test]
async fn test_session_survives_restart() {
    let dir = TempDir::new().unwrap();
    let paths = StoragePaths::in_dir(dir.path());

    let mut manager = LibraryManager::load(&paths).await;
    manager
        .add(NewBook::new("Dune", "Herbert", 1965, Genre::SciFi))
        .await
        .unwrap();
    manager
        .add(NewBook::new("Emma", "Austen", 1815, Genre::Romance))
        .await
        .unwrap();
    manager.update_progress(1, 100).await.unwrap();
    manager.update_progress(2, 30).await.unwrap();
    manager.set_monthly_goal(3).await;

    let reloaded = LibraryManager::load(&paths).await;
    assert_eq!(reloaded.list_all(), manager.list_all());
    assert_eq!(reloaded.snapshot(), manager.snapshot());
    assert_eq!(reloaded.snapshot().goal, 3);
}

#[tokio::test]
async fn test_corrupt_progress_does_not_block_books() {
    let dir = TempDir::new().unwrap();
    let paths = StoragePaths::in_dir(dir.path());

    let mut manager = LibraryManager::load(&paths).await;
    manager
        .add(NewBook::new("Dune", "Herbert", 1965, Genre::SciFi))
        .await
        .unwrap();
    std::fs::write(&paths.user_data, "garbage").unwrap();

    let reloaded = LibraryManager::load(&paths).await;
    assert_eq!(reloaded.list_all().len(), 1);
    assert_eq!(reloaded.snapshot().streak, 0);
    assert_eq!(reloaded.snapshot().month, Local::now().month());
}

#[tokio::test]
async fn test_corrupt_library_does_not_block_progress() {
    let dir = TempDir::new().unwrap();
    let paths = StoragePaths::in_dir(dir.path());

    let mut manager = LibraryManager::load(&paths).await;
    manager.set_monthly_goal(5).await;
    std::fs::write(&paths.library, "garbage").unwrap();

    let reloaded = LibraryManager::load(&paths).await;
    assert!(reloaded.list_all().is_empty());
    assert_eq!(reloaded.snapshot().goal, 5);
}

#[tokio::test]
async fn test_progress_write_failure_is_surfaced() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "a file, not a directory").unwrap();
    let paths = StoragePaths {
        library: dir.path().join("library.json"),
        user_data: blocker.join("user_data.json"),
    };

    let mut manager = LibraryManager::load(&paths).await;
    manager
        .add(NewBook::new("Dune", "Herbert", 1965, Genre::SciFi))
        .await
        .unwrap();
    let change = manager.update_progress(1, 100).await.unwrap();

    // the library was written, the progress file was not
    assert_eq!(change.warnings.len(), 1);
    assert!(change.value.completed);
    assert_eq!(manager.snapshot().read_this_month, 1);

    let reloaded = LibraryManager::load(&paths).await;
    assert!(reloaded.get(1).unwrap().read);
    assert_eq!(reloaded.snapshot().read_this_month, 0);
}

#[test]
fn test_storage_paths() {
    let paths = StoragePaths::in_dir("/data/quest");
    assert_eq!(paths.library, std::path::Path::new("/data/quest/library.json"));
    assert_eq!(paths.user_data, std::path::Path::new("/data/quest/user_data.json"));
}
