// ==========================================
// 库存可用性报价系统 - 需求解析引擎
// ==========================================
// 职责: 将订单行经 BOM 展开为组件级聚合需求
// 输入: 订单行 + 请求产品集的 BOM 条目
// 输出: 组件 ID -> 聚合需求数量
// ==========================================

use std::collections::{BTreeMap, HashSet};

use crate::domain::{BomEntry, OrderLine};

/// 需求解析引擎
///
/// 订单行在构造点已完成合法性校验，这里只做纯聚合。
pub struct RequirementResolver;

impl RequirementResolver {
    /// 聚合组件需求
    ///
    /// 对每个订单行、每条产品匹配的 BOM 条目，累加
    /// `quantity * component_qty`。加法可交换，结果与订单行顺序无关。
    ///
    /// 无 BOM 条目的产品（含存储中不存在的产品 ID）静默不贡献需求，
    /// 不视为错误；返回空映射表示“请求中无任何产品存在 BOM 记录”，
    /// 该边界情形由履约评估引擎消费。
    ///
    /// # 参数
    /// - lines: 订单行（非空）
    /// - bom_entries: 请求产品集的全部 BOM 条目
    ///
    /// # 返回
    /// - 组件 ID -> 聚合需求数量（按组件 ID 升序迭代）
    pub fn resolve(lines: &[OrderLine], bom_entries: &[BomEntry]) -> BTreeMap<i64, i64> {
        let mut required: BTreeMap<i64, i64> = BTreeMap::new();

        for line in lines {
            for entry in bom_entries
                .iter()
                .filter(|entry| entry.product_id == line.product_id())
            {
                *required.entry(entry.component_id).or_insert(0) +=
                    line.quantity() * entry.component_qty;
            }
        }

        required
    }

    /// 去重后的请求产品 ID（升序）
    ///
    /// 供存储读使用：BOM 展开按产品 ID 集合查询。
    pub fn distinct_product_ids(lines: &[OrderLine]) -> Vec<i64> {
        let mut ids: Vec<i64> = lines.iter().map(|line| line.product_id()).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// 无任何 BOM 条目的请求产品 ID（升序）
    ///
    /// Strict 策略下用于拒绝请求；Lenient 策略下不使用。
    pub fn products_without_bom(lines: &[OrderLine], bom_entries: &[BomEntry]) -> Vec<i64> {
        let with_bom: HashSet<i64> = bom_entries.iter().map(|entry| entry.product_id).collect();

        let mut missing: Vec<i64> = lines
            .iter()
            .map(|line| line.product_id())
            .filter(|id| !with_bom.contains(id))
            .collect();
        missing.sort_unstable();
        missing.dedup();
        missing
    }
}
