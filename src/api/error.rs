// ==========================================
// 库存可用性报价系统 - API 层错误类型
// ==========================================
// 职责: 定义对调用方的错误分类，转换仓储层错误
// 分类: InvalidInput（不可重试）/ StorageUnavailable（可重试）/ 其余
// ==========================================

use crate::domain::order::InvalidOrderLine;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== 业务规则错误 =====
    /// 请求被拒绝：订单行为空或字段非法
    ///
    /// 在任何存储访问之前抛出；不可重试。
    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ===== 数据访问错误 =====
    /// 存储读在有界等待内未完成
    ///
    /// 调用方可带退避重试；引擎自身不重试（重试策略归调用方/传输层）。
    #[error("存储暂不可用: {0}")]
    StorageUnavailable(String),

    #[error("数据库错误: {0}")]
    DatabaseError(String),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 RepositoryError 转换
// 目的: 保留 StorageUnavailable 的可重试语义，其余归并为数据库/内部错误
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::StorageUnavailable(msg) => ApiError::StorageUnavailable(msg),
            RepositoryError::NotFound { entity, id } => {
                ApiError::DatabaseError(format!("{}(id={})不存在", entity, id))
            }
            RepositoryError::DatabaseConnectionError(msg)
            | RepositoryError::DatabaseQueryError(msg) => ApiError::DatabaseError(msg),
            RepositoryError::LockError(msg) => {
                ApiError::InternalError(format!("数据库锁获取失败: {}", msg))
            }
            RepositoryError::InternalError(msg) => ApiError::InternalError(msg),
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

// 订单行构造失败 -> 无效输入
impl From<InvalidOrderLine> for ApiError {
    fn from(err: InvalidOrderLine) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
