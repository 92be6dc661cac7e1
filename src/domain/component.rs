// ==========================================
// 库存可用性报价系统 - 领域实体：组件与 BOM
// ==========================================
// 职责: 定义组件库存记录与产品-组件用量关系
// ==========================================

use serde::{Deserialize, Serialize};

/// 组件库存记录
///
/// 每次报价现查现用，不做缓存；一次报价反映一个时间点的库存快照。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// 组件 ID
    pub id: i64,

    /// 组件名称
    pub component_name: String,

    /// 现有库存数量 (>= 0)
    pub quantity_on_hand: i64,

    /// 补货提前期（天, >= 0）：需求超过库存后，补足一单位所需的天数
    pub lead_time_days: i64,
}

/// BOM 条目：一个产品对一个组件的单位用量
///
/// 一个产品可以有零条、一条或多条；一个组件可以出现在多个产品的 BOM 中。
/// 本模型中产品不由其他产品组成，不存在环。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomEntry {
    /// 产品 ID
    pub product_id: i64,

    /// 组件 ID
    pub component_id: i64,

    /// 生产一个产品消耗的组件数量 (>= 1)
    pub component_qty: i64,
}
