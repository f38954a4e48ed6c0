// ==========================================
// 短路电流计算器 - 核心库
// ==========================================
// 技术栈: Rust + CSV/Excel 解析 + Excel 导出
// 系统定位: 故障电流匹配汇总引擎（交互式小数据量）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 外部数据
pub mod importer;

// 引擎层 - 分类/匹配/合并
pub mod engine;

// 结果存储 - 计算结果会话状态
pub mod store;

// 导出层 - Excel 序列化
pub mod exporter;

// 配置层 - 列名/故障类型字面量
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// 应用层 - 会话状态与计算入口
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    parse_current, round_to_tenth, ClassifiedEntry, FaultCategory, LookupTable, MergedRow,
    RecordSet, ResultTable, NOT_AVAILABLE,
};

// 引擎
pub use engine::{
    BufferSink, CalcOrchestrator, Classifier, ColumnSchema, EngineError, NotificationSink,
    PassSummary, ResolverMerger, Severity, TracingSink,
};

// 导入/导出
pub use exporter::ExcelExporter;
pub use importer::{CsvParser, ExcelParser, ImportError, UniversalFileParser};

// 结果存储
pub use store::ResultStore;

// 配置
pub use config::CalcConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "短路电流计算器";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
