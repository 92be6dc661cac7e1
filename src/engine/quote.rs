// ==========================================
// 库存可用性报价系统 - 报价组装引擎
// ==========================================
// 职责: 把 需求解析 → 履约评估 → 日期投影 + 解释生成 组装为单一输出
// 红线: 输入校验通过后管线全函数，无部分失败、无部分结果
// ==========================================

use chrono::NaiveDate;

use crate::domain::{AvailabilityQuote, BottleneckComponent, OrderLine};
use crate::engine::explanation::ExplanationBuilder;
use crate::engine::fulfillment::{FulfillmentEvaluator, FulfillmentOutcome};
use crate::engine::projection::DateProjector;
use crate::engine::requirement::RequirementResolver;
use crate::engine::store::QuoteSnapshot;

/// 报价组装引擎
pub struct QuoteEngine;

impl QuoteEngine {
    /// 基于一份存储快照计算报价（纯函数）
    ///
    /// 相同输入（含相同 today）+ 相同快照 => 逐字节相同输出。
    ///
    /// # 参数
    /// - lines: 订单行；调用方保证非空（API 边界已校验）
    /// - snapshot: 一致性读快照（BOM 条目 + 组件库存）
    /// - today: 计算基准日，显式注入
    /// - handling_days: 发货前固定处理天数
    /// - shipping_days: 运输天数
    pub fn assemble(
        lines: &[OrderLine],
        snapshot: &QuoteSnapshot,
        today: NaiveDate,
        handling_days: u32,
        shipping_days: u32,
    ) -> AvailabilityQuote {
        let required = RequirementResolver::resolve(lines, &snapshot.bom_entries);
        let outcome = FulfillmentEvaluator::evaluate(&required, &snapshot.components);

        let projection = DateProjector::project(
            today,
            outcome.limiting_lead_time_days(),
            handling_days,
            shipping_days,
        );
        let explanation = ExplanationBuilder::build(&outcome, projection.earliest_ship_date);

        let bottleneck_components = match &outcome {
            FulfillmentOutcome::Constrained { bottlenecks, .. } => bottlenecks
                .iter()
                .map(|line| BottleneckComponent {
                    component_id: line.component_id,
                    component_name: line.component_name.clone(),
                    required_qty: line.required_qty,
                    quantity_on_hand: line.quantity_on_hand,
                    shortage: line.shortage,
                    lead_time_days: line.lead_time_days,
                    available_on: DateProjector::component_available_on(
                        today,
                        line.lead_time_days,
                    ),
                })
                .collect(),
            _ => Vec::new(),
        };

        AvailabilityQuote {
            can_fulfill_now: outcome.can_fulfill_now(),
            earliest_ship_date: projection.earliest_ship_date,
            estimated_delivery_date: projection.estimated_delivery_date,
            bottleneck_components,
            explanation,
        }
    }
}
