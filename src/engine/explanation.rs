// ==========================================
// 库存可用性报价系统 - 解释文本生成引擎
// ==========================================
// 职责: 按履约结论生成确定性的人类可读摘要
// 红线: 履约结论的纯函数；固定模板 + 插值，不做本地化
// ==========================================

use chrono::NaiveDate;

use crate::engine::fulfillment::FulfillmentOutcome;

/// 解释文本生成引擎
pub struct ExplanationBuilder;

impl ExplanationBuilder {
    /// 生成解释文本
    ///
    /// 四种模板:
    /// 1. 无 BOM 记录，按可立即生产处理
    /// 2. 现货全覆盖，可立即发货
    /// 3. 单一瓶颈：点名组件，给出需求/现货/提前期/发货日期
    /// 4. 多重瓶颈：给出短缺组件数，只点名头号瓶颈；
    ///    其余瓶颈在结构化输出中可见，不进入文本
    pub fn build(outcome: &FulfillmentOutcome, earliest_ship_date: NaiveDate) -> String {
        match outcome {
            FulfillmentOutcome::BuildableNoBom => {
                "No BOM rows found for the requested products; assuming buildable now.".to_string()
            }
            FulfillmentOutcome::BuildableFromStock => {
                "All required components are available on hand; the order can be fulfilled now."
                    .to_string()
            }
            FulfillmentOutcome::Constrained { bottlenecks, .. } => {
                match bottlenecks.as_slice() {
                    // 评估引擎保证 Constrained 非空；空序列按现货充足兜底
                    [] => "All required components are available on hand; the order can be fulfilled now."
                        .to_string(),
                    [only] => format!(
                        "Order is short on {} (need {}, have {}). Lead time is {} days; earliest ship date is {}.",
                        only.component_name,
                        only.required_qty,
                        only.quantity_on_hand,
                        only.lead_time_days,
                        earliest_ship_date
                    ),
                    [top, ..] => format!(
                        "Order cannot be fulfilled immediately; {} components are short. The bottleneck is {} (short {}, lead {} days), so earliest ship date is {}.",
                        bottlenecks.len(),
                        top.component_name,
                        top.shortage,
                        top.lead_time_days,
                        earliest_ship_date
                    ),
                }
            }
        }
    }
}
