// ==========================================
// 短路电流计算器 - 领域层
// ==========================================
// 职责: 定义实体与值类型,不含业务流程
// ==========================================

pub mod lookup;
pub mod record_set;
pub mod result;
pub mod types;

// 重导出核心类型
pub use lookup::{LookupPair, LookupTable};
pub use record_set::RecordSet;
pub use result::{ClassifiedEntry, MergedRow, ResultTable};
pub use types::{parse_current, round_to_tenth, FaultCategory, NOT_AVAILABLE};
