// ==========================================
// 库存可用性报价系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: 无状态只读报价引擎 (决策支持)
// 核心问题: 一组产品订单行，当前组件库存能否立即生产？不能的话何时能？
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 引擎层 - 业务规则
pub mod engine;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    AvailabilityQuote, BomEntry, BottleneckComponent, Component, InvalidOrderLine, OrderLine,
};

// 引擎
pub use engine::{
    AvailabilityStore, DateProjection, DateProjector, ExplanationBuilder, FulfillmentEvaluator,
    FulfillmentOutcome, QuoteEngine, QuoteSnapshot, RequirementResolver, ShortageLine,
};

// 仓储
pub use repository::{AvailabilityRepository, RepositoryError, RepositoryResult};

// API
pub use api::{
    ApiError, ApiResult, AvailabilityApi, QuoteOptions, UnknownProductPolicy,
    DEFAULT_HANDLING_DAYS, DEFAULT_SHIPPING_DAYS,
};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "库存可用性报价系统";

// 数据库版本
pub const DB_VERSION: &str = "v0.1";

// ==========================================
// 预编译检查
// ==========================================
