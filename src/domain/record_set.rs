// ==========================================
// 短路电流计算器 - 原始记录集
// ==========================================
// 职责: 一个上传批次解码后的表格数据
// ==========================================

use serde::{Deserialize, Serialize};

/// 原始记录集
///
/// 一个输入文件解码后的行列数据；每个记录集独立计算、独立报错。
/// 单元格一律保留为文本，数值规整推迟到合并阶段。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSet {
    /// 记录集标识（通常为文件名，导出时作为工作表名）
    pub id: String,

    /// 列名（已去除首尾空白）
    pub headers: Vec<String>,

    /// 数据行（与 headers 按位置对应，行长度允许不一致）
    pub rows: Vec<Vec<String>>,
}

impl RecordSet {
    /// 构造记录集
    pub fn new(id: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            id: id.into(),
            headers,
            rows,
        }
    }

    /// 按列名查找列下标
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// 列数（以表头为准）
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}
