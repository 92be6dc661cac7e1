// ==========================================
// 库存可用性报价系统 - 履约评估引擎
// ==========================================
// 职责: 聚合需求 vs 现货，划分短缺，确定限制性提前期
// 输入: 组件聚合需求 + 组件库存快照
// 输出: 履约结论（可立即满足 / 受限 + 瓶颈序列）
// ==========================================

use std::collections::{BTreeMap, HashMap};

use crate::domain::Component;

/// 短缺明细
///
/// 尚未附带日期；`available_on` 由日期投影引擎补全。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortageLine {
    /// 组件 ID
    pub component_id: i64,
    /// 组件名称
    pub component_name: String,
    /// 聚合需求数量
    pub required_qty: i64,
    /// 现有库存数量
    pub quantity_on_hand: i64,
    /// 短缺数量 = max(required_qty - quantity_on_hand, 0)
    pub shortage: i64,
    /// 补货提前期（天）
    pub lead_time_days: i64,
}

/// 履约评估结论
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FulfillmentOutcome {
    /// 可立即满足：请求中无任何 BOM 记录
    ///
    /// 简化处理：缺少 BOM 关联不视为短缺证据。
    BuildableNoBom,

    /// 可立即满足：全部需求被现货覆盖
    BuildableFromStock,

    /// 受限：存在短缺组件
    Constrained {
        /// 瓶颈序列，按 (短缺 desc, 提前期 desc, 组件 ID asc) 排序，
        /// 首位即“头号瓶颈”，驱动解释文本
        bottlenecks: Vec<ShortageLine>,
        /// 短缺组件中的最大提前期
        max_lead_time_days: i64,
    },
}

impl FulfillmentOutcome {
    /// 是否可立即满足
    pub fn can_fulfill_now(&self) -> bool {
        !matches!(self, FulfillmentOutcome::Constrained { .. })
    }

    /// 日期投影使用的限制性提前期（可立即满足时为 0）
    pub fn limiting_lead_time_days(&self) -> i64 {
        match self {
            FulfillmentOutcome::Constrained {
                max_lead_time_days, ..
            } => *max_lead_time_days,
            _ => 0,
        }
    }
}

/// 履约评估引擎
pub struct FulfillmentEvaluator;

impl FulfillmentEvaluator {
    /// 评估聚合需求对现货的可满足性
    ///
    /// 对每个组件计算 `shortage = max(required - on_hand, 0)`；
    /// 只有 shortage > 0 的组件进入瓶颈序列。
    ///
    /// components 中缺失的组件 ID 直接跳过，与存储侧内连接语义一致
    /// （BOM 外键保证正常数据不会出现缺失）。
    ///
    /// # 参数
    /// - required: 组件 ID -> 聚合需求数量
    /// - components: 组件 ID -> 库存记录
    ///
    /// # 返回
    /// - FulfillmentOutcome: 三种终态之一
    pub fn evaluate(
        required: &BTreeMap<i64, i64>,
        components: &HashMap<i64, Component>,
    ) -> FulfillmentOutcome {
        if required.is_empty() {
            return FulfillmentOutcome::BuildableNoBom;
        }

        let mut bottlenecks: Vec<ShortageLine> = Vec::new();
        let mut max_lead_time_days: i64 = 0;

        for (&component_id, &required_qty) in required {
            let Some(component) = components.get(&component_id) else {
                continue;
            };

            let shortage = (required_qty - component.quantity_on_hand).max(0);
            if shortage > 0 {
                max_lead_time_days = max_lead_time_days.max(component.lead_time_days);
                bottlenecks.push(ShortageLine {
                    component_id,
                    component_name: component.component_name.clone(),
                    required_qty,
                    quantity_on_hand: component.quantity_on_hand,
                    shortage,
                    lead_time_days: component.lead_time_days,
                });
            }
        }

        if bottlenecks.is_empty() {
            return FulfillmentOutcome::BuildableFromStock;
        }

        // 三键排序: 短缺降序 → 提前期降序 → 组件 ID 升序
        bottlenecks.sort_by(|a, b| {
            b.shortage
                .cmp(&a.shortage)
                .then(b.lead_time_days.cmp(&a.lead_time_days))
                .then(a.component_id.cmp(&b.component_id))
        });

        FulfillmentOutcome::Constrained {
            bottlenecks,
            max_lead_time_days,
        }
    }
}
