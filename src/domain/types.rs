// ==========================================
// 短路电流计算器 - 基础类型与数值规整
// ==========================================
// 职责: 故障类别枚举 / 电流数值的解析与舍入
// ==========================================

use serde::{Deserialize, Serialize};

/// 缺失值展示标记
///
/// 电流缺失或无法解析时的展示符号，与 0 严格区分。
pub const NOT_AVAILABLE: &str = "-";

// ==========================================
// 故障类别
// ==========================================

/// 故障类别
///
/// 仅识别两类故障；其余故障类型的行在分类阶段被静默跳过。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaultCategory {
    /// 三相故障
    ThreePhase,
    /// 单相故障
    SinglePhase,
}

impl FaultCategory {
    /// 转换为字符串标识
    pub fn as_str(&self) -> &str {
        match self {
            FaultCategory::ThreePhase => "three_phase",
            FaultCategory::SinglePhase => "single_phase",
        }
    }
}

// ==========================================
// 电流数值规整
// ==========================================

/// 四舍五入到一位小数
///
/// 十进制小数在二进制下可能略小于标称值（如 10.05 的 f64 表示小于 10.05），
/// 直接乘 10 取整会得到 10.0。先按 1e-6 精度取整消除该偏差，再做一位小数舍入。
pub fn round_to_tenth(value: f64) -> f64 {
    ((value * 1e6).round() / 1e5).round() / 10.0
}

/// 解析电流单元格文本
///
/// # 返回
/// - `Some(值)`: 解析成功，已舍入到一位小数
/// - `None`: 空白或非数值文本，降级为缺失标记（不是错误）
pub fn parse_current(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(round_to_tenth)
}
