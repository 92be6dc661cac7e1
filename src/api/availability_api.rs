// ==========================================
// 库存可用性报价系统 - 可用性 API
// ==========================================
// 职责: 编排 存储读 → 报价引擎，对外暴露 quote_availability
// 红线: 无状态只读投影；不预留库存、不修改在手数量、不管理订单生命周期
// ==========================================

use chrono::{Local, NaiveDate};
use std::sync::Arc;
use tracing::instrument;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::{AvailabilityQuote, OrderLine};
use crate::engine::quote::QuoteEngine;
use crate::engine::requirement::RequirementResolver;
use crate::engine::store::AvailabilityStore;

/// 默认发货前处理天数
pub const DEFAULT_HANDLING_DAYS: u32 = 2;

/// 默认运输天数
pub const DEFAULT_SHIPPING_DAYS: u32 = 5;

/// 未知产品处理策略
///
/// 请求中出现“没有任何 BOM 条目的产品”时的处理方式。
/// 存储契约只提供 BOM 展开与组件点查两个读能力，没有产品存在性查询，
/// 因此 Strict 无法区分“产品存在但 BOM 为空”与“产品 ID 不存在”，两者一并拒绝。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownProductPolicy {
    /// 宽松（默认，与历史行为一致）：无 BOM 的产品静默不贡献需求
    #[default]
    Lenient,
    /// 严格：任一请求产品无 BOM 条目即拒绝，报 InvalidInput
    Strict,
}

/// 报价参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteOptions {
    /// 发货前固定处理天数
    pub handling_days: u32,

    /// 运输天数
    pub shipping_days: u32,

    /// 计算基准日；None 表示在 API 边界取当前日期
    ///
    /// 测试与可复现场景应显式注入。
    pub today: Option<NaiveDate>,

    /// 未知产品处理策略
    pub unknown_product_policy: UnknownProductPolicy,
}

impl Default for QuoteOptions {
    fn default() -> Self {
        Self {
            handling_days: DEFAULT_HANDLING_DAYS,
            shipping_days: DEFAULT_SHIPPING_DAYS,
            today: None,
            unknown_product_policy: UnknownProductPolicy::default(),
        }
    }
}

/// 可用性 API
///
/// 对外唯一操作: [`AvailabilityApi::quote_availability`]。
/// 多个报价可并发执行，互不协调：每次报价基于独立的只读快照，
/// 产出独立输出（相同输入 + 相同快照 => 引用透明）。
pub struct AvailabilityApi<S: AvailabilityStore> {
    store: Arc<S>,
}

impl<S: AvailabilityStore> AvailabilityApi<S> {
    /// 创建新的 AvailabilityApi 实例
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// 计算可用性报价
    ///
    /// # 参数
    /// - lines: 订单行（非空；每行在构造点已校验 product_id >= 1, quantity >= 1）
    /// - options: 处理/运输天数、基准日、未知产品策略
    ///
    /// # 返回
    /// - Ok(AvailabilityQuote): 完整报价；不返回部分结果
    /// - Err(ApiError::InvalidInput): 订单行为空，或 Strict 策略下存在无 BOM 产品
    /// - Err(ApiError::StorageUnavailable): 存储读有界等待超时，可重试
    #[instrument(skip(self, lines), fields(line_count = lines.len()))]
    pub fn quote_availability(
        &self,
        lines: &[OrderLine],
        options: QuoteOptions,
    ) -> ApiResult<AvailabilityQuote> {
        // 先校验再触达存储
        if lines.is_empty() {
            return Err(ApiError::InvalidInput("订单行不能为空".to_string()));
        }

        let today = options.today.unwrap_or_else(|| Local::now().date_naive());

        let product_ids = RequirementResolver::distinct_product_ids(lines);
        let snapshot = self.store.load_snapshot(&product_ids)?;

        if options.unknown_product_policy == UnknownProductPolicy::Strict {
            let missing = RequirementResolver::products_without_bom(lines, &snapshot.bom_entries);
            if !missing.is_empty() {
                return Err(ApiError::InvalidInput(format!(
                    "产品缺少 BOM 记录: {:?}",
                    missing
                )));
            }
        }

        let quote = QuoteEngine::assemble(
            lines,
            &snapshot,
            today,
            options.handling_days,
            options.shipping_days,
        );

        tracing::info!(
            can_fulfill_now = quote.can_fulfill_now,
            bottlenecks = quote.bottleneck_components.len(),
            earliest_ship_date = %quote.earliest_ship_date,
            "可用性报价完成"
        );

        Ok(quote)
    }
}
