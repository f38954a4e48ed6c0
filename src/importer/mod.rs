// ==========================================
// 短路电流计算器 - 导入层
// ==========================================
// 职责: 外部文件读取与解码,生成内部记录集
// 支持: CSV (GBK/UTF-8), Excel
// ==========================================

// 模块声明
pub mod error;
pub mod file_parser;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, RecordSetParser, UniversalFileParser};
