// ==========================================
// 短路电流计算器 - 配置层
// ==========================================
// 职责: 输入列名契约与故障类型字面量
// 说明: 列名按调用方语言环境配置，默认中文源数据
// ==========================================

use serde::{Deserialize, Serialize};

/// 计算配置
///
/// 输入数据的显式模式契约：母线名列、故障类型列按列名定位，
/// 短路电流固定取第 5 列（从 0 计数的下标 4）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalcConfig {
    /// 母线名列名
    pub substation_column: String,

    /// 故障类型列名
    pub fault_type_column: String,

    /// 短路电流列下标（0 起）
    pub current_column_index: usize,

    /// 三相故障字面量
    pub three_phase_literal: String,

    /// 单相故障字面量
    pub single_phase_literal: String,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            substation_column: "母线名".to_string(),
            fault_type_column: "故障类型".to_string(),
            current_column_index: 4,
            three_phase_literal: "三相".to_string(),
            single_phase_literal: "单相".to_string(),
        }
    }
}

impl CalcConfig {
    /// 输入数据要求的最小列数（电流列下标 + 1）
    pub fn min_column_count(&self) -> usize {
        self.current_column_index + 1
    }
}
