// ==========================================
// 库存可用性报价系统 - 领域实体：报价输出
// ==========================================
// 职责: 定义引擎的派生输出对象（瓶颈组件 + 可用性报价）
// 日期字段按 ISO 日历日 (YYYY-MM-DD) 序列化，用于交换
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 瓶颈组件
///
/// 短缺 (shortage > 0) 的组件，用于解释发货日期为何被推迟。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BottleneckComponent {
    /// 组件 ID
    pub component_id: i64,

    /// 组件名称
    pub component_name: String,

    /// 聚合需求数量（跨全部订单行）
    pub required_qty: i64,

    /// 现有库存数量
    pub quantity_on_hand: i64,

    /// 短缺数量 = max(required_qty - quantity_on_hand, 0)
    pub shortage: i64,

    /// 补货提前期（天）
    pub lead_time_days: i64,

    /// 该短缺预计解除日期 = today + lead_time_days
    ///
    /// 只看该组件自身的提前期，与整单发货日期无关。
    pub available_on: NaiveDate,
}

impl std::fmt::Display for BottleneckComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (short {}, lead {} days)",
            self.component_name, self.shortage, self.lead_time_days
        )
    }
}

/// 可用性报价（引擎唯一输出）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityQuote {
    /// 是否可立即满足；当且仅当瓶颈列表为空时为 true
    pub can_fulfill_now: bool,

    /// 最早发货日期
    pub earliest_ship_date: NaiveDate,

    /// 预计送达日期
    pub estimated_delivery_date: NaiveDate,

    /// 瓶颈组件列表（只含 shortage > 0 的组件，
    /// 按 短缺降序 → 提前期降序 → 组件 ID 升序 排列）
    pub bottleneck_components: Vec<BottleneckComponent>,

    /// 人类可读解释文本（固定模板 + 插值，不做本地化）
    pub explanation: String,
}
