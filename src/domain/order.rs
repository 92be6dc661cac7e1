// ==========================================
// 库存可用性报价系统 - 领域实体：订单行
// ==========================================
// 职责: 定义调用方提交的订单行，并在构造点完成严格校验
// 红线: 非法订单行不得进入需求解析引擎
// ==========================================

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 订单行校验错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidOrderLine {
    #[error("无效订单行: product_id={0}（必须 >= 1）")]
    ProductId(i64),

    #[error("无效订单行: quantity={0}（必须 >= 1）")]
    Quantity(i64),
}

/// 订单行（调用方提供，引擎不落库）
///
/// 字段私有：只能通过 [`OrderLine::new`] 构造，构造成功即合法。
/// 反序列化同样经过构造器校验，不存在“半合法”实例。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOrderLine", into = "RawOrderLine")]
pub struct OrderLine {
    product_id: i64,
    quantity: i64,
}

impl OrderLine {
    /// 构造合法订单行
    ///
    /// # 参数
    /// - product_id: 产品 ID (>= 1)
    /// - quantity: 订购数量 (>= 1)
    ///
    /// # 返回
    /// - Ok(OrderLine): 合法订单行
    /// - Err(InvalidOrderLine): product_id 或 quantity 非法
    pub fn new(product_id: i64, quantity: i64) -> Result<Self, InvalidOrderLine> {
        if product_id < 1 {
            return Err(InvalidOrderLine::ProductId(product_id));
        }
        if quantity < 1 {
            return Err(InvalidOrderLine::Quantity(quantity));
        }
        Ok(Self {
            product_id,
            quantity,
        })
    }

    /// 产品 ID
    pub fn product_id(&self) -> i64 {
        self.product_id
    }

    /// 订购数量
    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}

/// serde 中转结构：反序列化必须经过 [`OrderLine::new`]
#[derive(Serialize, Deserialize)]
struct RawOrderLine {
    product_id: i64,
    quantity: i64,
}

impl TryFrom<RawOrderLine> for OrderLine {
    type Error = InvalidOrderLine;

    fn try_from(raw: RawOrderLine) -> Result<Self, Self::Error> {
        OrderLine::new(raw.product_id, raw.quantity)
    }
}

impl From<OrderLine> for RawOrderLine {
    fn from(line: OrderLine) -> Self {
        Self {
            product_id: line.product_id,
            quantity: line.quantity,
        }
    }
}
