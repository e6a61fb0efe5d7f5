#![allow(dead_code)]
use rsqlconnector::Connector;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Route connector logs to the test output when RUST_LOG is set.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    init_tracing();
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rsqlconnector.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Run a statement that returns nothing, failing the test on error
pub fn exec(conn: &mut Connector, sql: &str) {
    conn.set_query(sql).expect("set query");
    conn.execute().expect("execute");
}

/// Fresh database with table t(k, v) holding the given pairs, left connected
/// in update mode.
pub fn connector_with_pairs(name: &str, pairs: &[(&str, &str)]) -> Connector {
    let db_path = setup_test_db(name);
    let mut conn = Connector::new();
    conn.create_file(db_path.as_str(), true, "create")
        .expect("create db");
    exec(&mut conn, "CREATE TABLE t(k, v)");
    for (k, v) in pairs {
        exec(&mut conn, &format!("INSERT INTO t VALUES('{k}','{v}')"));
    }
    conn
}
