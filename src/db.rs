// ==========================================
// 库存可用性报价系统 - SQLite 连接初始化
// ==========================================
// 目标:
// - 统一所有 Connection::open 的 PRAGMA 行为，避免“部分模块外键开启/部分不开启”
// - 统一 busy_timeout：读写竞争时有界等待后失败，而不是无限阻塞
// ==========================================

use rusqlite::Connection;
use std::path::PathBuf;
use std::time::Duration;

/// 默认 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 数据库路径环境变量
pub const DB_PATH_ENV: &str = "AVAILABILITY_DB_PATH";

/// 默认数据库路径（仓库相对）
pub const DEFAULT_DB_PATH: &str = "data/availability.sqlite";

/// 解析数据库路径
///
/// 优先级:
/// 1) 显式参数
/// 2) AVAILABILITY_DB_PATH 环境变量
/// 3) 默认: data/availability.sqlite
pub fn resolve_db_path(explicit: Option<&str>) -> PathBuf {
    if let Some(path) = explicit {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    if let Ok(env) = std::env::var(DB_PATH_ENV) {
        if !env.is_empty() {
            return PathBuf::from(env);
        }
    }

    PathBuf::from(DEFAULT_DB_PATH)
}

/// 配置 SQLite 连接的统一 PRAGMA
///
/// 说明：
/// - foreign_keys 需要“每个连接”单独开启
/// - busy_timeout 需要“每个连接”单独配置
/// - WAL 模式减少读写互相阻塞
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON; PRAGMA journal_mode = WAL;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// 打开 SQLite 连接并应用统一配置
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    // 父目录缺失时先补建；补建失败交由 Connection::open 报错
    if let Some(parent) = std::path::Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            let _ = std::fs::create_dir_all(parent);
        }
    }

    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}
