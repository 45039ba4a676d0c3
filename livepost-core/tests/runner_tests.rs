// tests/runner_tests.rs

use livepost_core::config::{AppConfig, RedditConfig, StorageConfig, TwitchConfig};
use livepost_core::lock::RunLock;
use livepost_core::services::run_once;
use livepost_core::Error;

fn config_with_db(db_path: &str) -> AppConfig {
    AppConfig {
        twitch: TwitchConfig {
            client_id: "cid".into(),
            client_secret: "csecret".into(),
            channel: "somechannel".into(),
        },
        reddit: RedditConfig {
            client_id: "rid".into(),
            client_secret: "rsecret".into(),
            username: "bot".into(),
            password: "hunter2".into(),
            subreddit: "somesub".into(),
            user_agent: None,
        },
        storage: StorageConfig { db_path: db_path.into() },
    }
}

#[tokio::test]
async fn missing_config_aborts_before_lock_or_store() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("state/livepost.db");
    let mut config = config_with_db(db_path.to_str().unwrap());
    config.twitch.channel = String::new();

    let err = run_once(&config).await.unwrap_err();

    assert!(matches!(err, Error::Config(_)), "got {err:?}");
    assert!(!db_path.exists());
    assert!(!config.storage.lock_path().exists());
    assert!(!dir.path().join("state").exists());
}

#[tokio::test]
async fn held_lock_rejects_a_concurrent_run() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("livepost.db");
    let config = config_with_db(db_path.to_str().unwrap());

    let _held = RunLock::acquire(config.storage.lock_path()).unwrap();
    let err = run_once(&config).await.unwrap_err();

    assert!(matches!(err, Error::AlreadyRunning(_)), "got {err:?}");
    assert!(!db_path.exists(), "store is not opened without the lock");
}
