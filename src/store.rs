// ==========================================
// 短路电流计算器 - 结果存储
// ==========================================
// 职责: 按记录集标识持有结果表的会话状态
// 生命周期: 进程启动时为空; 每次计算先清空再填充; 导出时只读
// ==========================================

use crate::domain::ResultTable;

/// 结果存储
///
/// 保持插入顺序；同一标识重复入库时整表替换。
/// 结果永远由一次计算整体生成，不跨计算增量合并。
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    tables: Vec<ResultTable>,
}

impl ResultStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self::default()
    }

    /// 清空全部结果表
    pub fn reset(&mut self) {
        self.tables.clear();
    }

    /// 插入或替换一张结果表（按记录集标识）
    pub fn store(&mut self, table: ResultTable) {
        match self
            .tables
            .iter_mut()
            .find(|t| t.record_set_id == table.record_set_id)
        {
            Some(existing) => *existing = table,
            None => self.tables.push(table),
        }
    }

    /// 按记录集标识查找结果表
    pub fn get(&self, record_set_id: &str) -> Option<&ResultTable> {
        self.tables
            .iter()
            .find(|t| t.record_set_id == record_set_id)
    }

    /// 全部结果表（插入顺序）
    pub fn tables(&self) -> &[ResultTable] {
        &self.tables
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// 结果表数量
    pub fn len(&self) -> usize {
        self.tables.len()
    }
}
