// ==========================================
// 库存可用性报价系统 - 领域层
// ==========================================
// 职责: 定义引擎消费与产出的实体类型
// 红线: 引擎只读，实体生命周期（建表/灌数/变更）归外部存储协作方
// ==========================================

pub mod component;
pub mod order;
pub mod quote;

// 重导出领域实体
pub use component::{BomEntry, Component};
pub use order::{InvalidOrderLine, OrderLine};
pub use quote::{AvailabilityQuote, BottleneckComponent};
