use std::sync::Mutex;

use farmbook_core::storage::JsonStore;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the
/// test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated store backed by a unique directory for each test.
pub fn setup_test_store() -> JsonStore {
    let temp = TempDir::new().expect("create temp dir");
    let store = JsonStore::new(Some(temp.path().to_path_buf())).expect("create json store");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    store
}
