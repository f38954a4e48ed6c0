// ==========================================
// 短路电流计算器 - 应用层
// ==========================================
// 职责: 会话状态与对外入口
// ==========================================

pub mod state;

// 重导出核心类型
pub use state::AppState;
