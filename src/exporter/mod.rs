// ==========================================
// 短路电流计算器 - 导出层
// ==========================================
// 职责: 结果文档序列化,每记录集一个工作表
// ==========================================

pub mod error;
pub mod excel_writer;

// 重导出核心类型
pub use error::{ExportError, ExportResult};
pub use excel_writer::{ExcelExporter, EXPORT_HEADERS};
