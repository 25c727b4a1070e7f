//! Environment override for the database path
//!
//! Kept in its own test binary: it changes the process environment, and
//! this file contains no other tests and starts no other threads.

use std::path::PathBuf;
use gymdesk::{DB_PATH_ENV, DeskConfig, GymDesk};
use tempfile::TempDir;

#[test]
fn test_config_file_and_env_override() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("gymdesk.json");
    let env_db: PathBuf = temp_dir.path().join("from-env.db");

    DeskConfig {
        database_path: temp_dir.path().join("from-file.db"),
        provision_default_admin: false,
    }
    .save(&config_path)
    .unwrap();

    // SAFETY: this is the only test in the binary, so while the variable is
    // set and removed no other thread of this process exists to read the environment.
    unsafe { std::env::set_var(DB_PATH_ENV, &env_db) };
    let config = DeskConfig::load(&config_path).unwrap().with_env_overrides();
    unsafe { std::env::remove_var(DB_PATH_ENV) };

    assert_eq!(config.database_path, env_db);
    assert!(!config.provision_default_admin);

    let desk = GymDesk::open(config).unwrap();
    assert!(env_db.exists());
    assert!(!temp_dir.path().join("from-file.db").exists());
    assert_eq!(desk.count_employees().unwrap(), 0);
}
