// ==========================================
// 库存可用性报价系统 - 可用性仓储 (SQLite)
// ==========================================
// 职责: BOM 展开 + 组件库存点查
// 策略: 一次报价的两步读在同一把连接锁内完成，保证读自同一快照
// ==========================================

use rusqlite::Connection;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::{BomEntry, Component};
use crate::engine::store::{AvailabilityStore, QuoteSnapshot};
use crate::repository::error::{RepositoryError, RepositoryResult};

/// 构建 IN 子句的 SQL 片段
///
/// 空列表返回永假条件，确保 SQL 语法正确。
fn build_in_clause(column_name: &str, len: usize) -> String {
    if len == 0 {
        return "1 = 0".to_string();
    }

    let placeholders = (0..len).map(|_| "?").collect::<Vec<_>>().join(", ");
    format!("{} IN ({})", column_name, placeholders)
}

/// 可用性仓储
///
/// 存储契约 [`AvailabilityStore`] 的 SQLite 实现。
/// 连接统一由 `db::open_sqlite_connection` 打开（busy_timeout 已配置，
/// 竞争超时经 `From<rusqlite::Error>` 归类为可重试的 StorageUnavailable）。
pub struct AvailabilityRepository {
    conn: Arc<Mutex<Connection>>,
}

impl AvailabilityRepository {
    /// 创建新的 AvailabilityRepository 实例
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 获取连接锁
    fn lock_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// BOM 展开（给定连接）
    fn query_bom_entries(
        conn: &Connection,
        product_ids: &[i64],
    ) -> RepositoryResult<Vec<BomEntry>> {
        if product_ids.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "SELECT product_id, component_id, component_qty \
             FROM bill_of_materials \
             WHERE {} \
             ORDER BY product_id ASC, component_id ASC",
            build_in_clause("product_id", product_ids.len())
        );

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(rusqlite::params_from_iter(product_ids.iter()), |row| {
            Ok(BomEntry {
                product_id: row.get(0)?,
                component_id: row.get(1)?,
                component_qty: row.get(2)?,
            })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }

    /// 组件库存点查（给定连接）
    fn query_components(
        conn: &Connection,
        component_ids: &[i64],
    ) -> RepositoryResult<HashMap<i64, Component>> {
        if component_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let sql = format!(
            "SELECT id, component_name, quantity_on_hand, lead_time_days \
             FROM components \
             WHERE {}",
            build_in_clause("id", component_ids.len())
        );

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(rusqlite::params_from_iter(component_ids.iter()), |row| {
            Ok(Component {
                id: row.get(0)?,
                component_name: row.get(1)?,
                quantity_on_hand: row.get(2)?,
                lead_time_days: row.get(3)?,
            })
        })?;

        let mut components = HashMap::new();
        for row in rows {
            let component: Component = row?;
            components.insert(component.id, component);
        }
        Ok(components)
    }
}

impl AvailabilityStore for AvailabilityRepository {
    fn bom_entries_for_products(&self, product_ids: &[i64]) -> RepositoryResult<Vec<BomEntry>> {
        let conn = self.lock_conn()?;
        Self::query_bom_entries(&conn, product_ids)
    }

    fn components_by_ids(
        &self,
        component_ids: &[i64],
    ) -> RepositoryResult<HashMap<i64, Component>> {
        let conn = self.lock_conn()?;
        Self::query_components(&conn, component_ids)
    }

    /// 覆盖默认实现：两次读取持同一把连接锁，需求与现货读自同一快照
    fn load_snapshot(&self, product_ids: &[i64]) -> RepositoryResult<QuoteSnapshot> {
        let conn = self.lock_conn()?;

        let bom_entries = Self::query_bom_entries(&conn, product_ids)?;

        let mut component_ids: Vec<i64> =
            bom_entries.iter().map(|entry| entry.component_id).collect();
        component_ids.sort_unstable();
        component_ids.dedup();

        let components = Self::query_components(&conn, &component_ids)?;

        tracing::debug!(
            products = product_ids.len(),
            bom_rows = bom_entries.len(),
            components = components.len(),
            "报价快照读取完成"
        );

        Ok(QuoteSnapshot {
            bom_entries,
            components,
        })
    }
}
