// ==========================================
// 库存可用性报价系统 - 存储协作方契约
// ==========================================
// 职责: 定义引擎对存储协作方的只读契约
// 红线: 引擎不拼 SQL；任何存储技术实现本契约即可（关系库/嵌入式 KV/内存映射）
// ==========================================

use std::collections::HashMap;

use crate::domain::{BomEntry, Component};
use crate::repository::error::RepositoryResult;

/// 一次报价所需的读快照
#[derive(Debug, Clone, Default)]
pub struct QuoteSnapshot {
    /// 请求产品集的全部 BOM 条目
    pub bom_entries: Vec<BomEntry>,
    /// 按组件 ID 索引的库存记录
    pub components: HashMap<i64, Component>,
}

/// 存储协作方的只读契约
///
/// 两个读能力，不需要任何写能力。
/// 读在有界等待内未完成时，实现方必须返回可重试的
/// `RepositoryError::StorageUnavailable`，而不是无限阻塞。
pub trait AvailabilityStore {
    /// 读能力 1: 给定产品 ID 集合，返回这些产品的全部 BOM 条目
    fn bom_entries_for_products(&self, product_ids: &[i64]) -> RepositoryResult<Vec<BomEntry>>;

    /// 读能力 2: 给定组件 ID 集合，返回每个组件的库存与提前期
    fn components_by_ids(
        &self,
        component_ids: &[i64],
    ) -> RepositoryResult<HashMap<i64, Component>>;

    /// 组合读：先展开 BOM，再按引用到的组件查库存
    ///
    /// 默认实现顺序调用两个读能力；实现方可覆盖本方法，
    /// 在单一一致性快照内完成两次读取，保证需求与现货相互一致。
    fn load_snapshot(&self, product_ids: &[i64]) -> RepositoryResult<QuoteSnapshot> {
        let bom_entries = self.bom_entries_for_products(product_ids)?;

        let mut component_ids: Vec<i64> =
            bom_entries.iter().map(|entry| entry.component_id).collect();
        component_ids.sort_unstable();
        component_ids.dedup();

        let components = self.components_by_ids(&component_ids)?;

        Ok(QuoteSnapshot {
            bom_entries,
            components,
        })
    }
}
