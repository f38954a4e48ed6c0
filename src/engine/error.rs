// ==========================================
// 短路电流计算器 - 引擎层错误类型
// ==========================================
// 职责: 计算过程的错误分级
// 说明: 参数错误终止整个计算; 其余错误仅终止所属记录集
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    // ===== 参数错误（整个计算终止，先于任何记录集处理）=====
    #[error("参数为空: {0}")]
    EmptyParameter(&'static str),

    #[error("母线名与显示名称的条目数量必须相同（母线名 {keys} 个, 显示名称 {names} 个）")]
    ParameterLengthMismatch { keys: usize, names: usize },

    // ===== 输入形状错误（仅该记录集终止）=====
    #[error("缺少必要列: {0}")]
    MissingColumn(String),

    #[error("列数不足，缺少短路电流数据（第{expected}列）")]
    InsufficientColumns { expected: usize },

    // ===== 匹配错误（仅该记录集终止）=====
    #[error("未找到任何匹配的单相或三相故障数据")]
    NoMatchedData,

    #[error("所有母线名均未匹配到任何记录")]
    NoKeyMatched,

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EngineError {
    /// 是否为参数错误（终止整个计算，而非单个记录集）
    pub fn is_parameter_error(&self) -> bool {
        matches!(
            self,
            EngineError::EmptyParameter(_) | EngineError::ParameterLengthMismatch { .. }
        )
    }
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
