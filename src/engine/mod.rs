// ==========================================
// 短路电流计算器 - 引擎层
// ==========================================
// 职责: 匹配汇总引擎的三个阶段
// 流程: 分类器 → 匹配合并 → 结果入库 (每记录集一次,严格单向)
// ==========================================

pub mod classifier;
pub mod error;
pub mod notification;
pub mod orchestrator;
pub mod resolver;

// 重导出核心引擎
pub use classifier::{ClassifiedEntries, Classifier, ColumnSchema};
pub use error::{EngineError, EngineResult};
pub use notification::{BufferSink, Notification, NotificationSink, Severity, TracingSink};
pub use orchestrator::{CalcOrchestrator, PassSummary};
pub use resolver::{MergeOutcome, ResolverMerger};
