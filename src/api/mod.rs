// ==========================================
// 库存可用性报价系统 - API 层
// ==========================================
// 职责: 对外暴露唯一业务操作 quote_availability
// 红线: 输入校验在触达存储之前完成；错误同步上报，无延迟错误通道
// ==========================================

pub mod availability_api;
pub mod error;

// 重导出
pub use availability_api::{
    AvailabilityApi, QuoteOptions, UnknownProductPolicy, DEFAULT_HANDLING_DAYS,
    DEFAULT_SHIPPING_DAYS,
};
pub use error::{ApiError, ApiResult};
