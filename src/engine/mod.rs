// ==========================================
// 库存可用性报价系统 - 引擎层
// ==========================================
// 职责: 实现报价业务规则，纯同步计算
// 红线: Engine 不拼 SQL；所有结论必须可解释
// 数据流: 需求解析 → 履约评估 → 日期投影 + 解释生成 → 报价组装
// ==========================================

pub mod explanation;
pub mod fulfillment;
pub mod projection;
pub mod quote;
pub mod requirement;
pub mod store;

// 重导出核心引擎
pub use explanation::ExplanationBuilder;
pub use fulfillment::{FulfillmentEvaluator, FulfillmentOutcome, ShortageLine};
pub use projection::{DateProjection, DateProjector};
pub use quote::QuoteEngine;
pub use requirement::RequirementResolver;
pub use store::{AvailabilityStore, QuoteSnapshot};
