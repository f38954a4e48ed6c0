// ==========================================
// 短路电流计算器 - 导出模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导出模块错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("没有可导出的结果")]
    NothingToExport,

    #[error("Excel 写入失败: {0}")]
    XlsxError(#[from] rust_xlsxwriter::XlsxError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;
