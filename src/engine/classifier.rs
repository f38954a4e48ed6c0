// ==========================================
// 短路电流计算器 - 故障分类器
// ==========================================
// 职责: 按故障类型把原始行分桶为三相/单相两个序列
// 规则: 列模式在入口处解析一次; 未识别的故障类型静默跳过; 不去重
// ==========================================

use crate::config::CalcConfig;
use crate::domain::{ClassifiedEntry, FaultCategory, RecordSet};
use crate::engine::error::{EngineError, EngineResult};

// ==========================================
// 列模式
// ==========================================

/// 列模式
///
/// 记录集的必要列下标，解析一次后全程复用（不做晚绑定按名查找）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSchema {
    /// 母线名列下标
    pub substation_idx: usize,

    /// 故障类型列下标
    pub fault_type_idx: usize,

    /// 短路电流列下标
    pub current_idx: usize,
}

impl ColumnSchema {
    /// 根据配置从记录集表头解析列模式
    ///
    /// # 错误
    /// - `EngineError::MissingColumn`: 缺少母线名列或故障类型列
    /// - `EngineError::InsufficientColumns`: 列数不足以容纳电流列
    pub fn resolve(record_set: &RecordSet, config: &CalcConfig) -> EngineResult<Self> {
        let substation_idx = record_set
            .column_index(&config.substation_column)
            .ok_or_else(|| EngineError::MissingColumn(config.substation_column.clone()))?;

        let fault_type_idx = record_set
            .column_index(&config.fault_type_column)
            .ok_or_else(|| EngineError::MissingColumn(config.fault_type_column.clone()))?;

        if record_set.column_count() < config.min_column_count() {
            return Err(EngineError::InsufficientColumns {
                expected: config.min_column_count(),
            });
        }

        Ok(Self {
            substation_idx,
            fault_type_idx,
            current_idx: config.current_column_index,
        })
    }
}

// ==========================================
// 分类结果
// ==========================================

/// 分类结果
///
/// 两个有序分类条目序列；行序保持原始记录集顺序。
#[derive(Debug, Clone, Default)]
pub struct ClassifiedEntries {
    /// 三相故障条目
    pub three_phase: Vec<ClassifiedEntry>,

    /// 单相故障条目
    pub single_phase: Vec<ClassifiedEntry>,
}

impl ClassifiedEntries {
    /// 按类别追加条目
    pub fn push(&mut self, category: FaultCategory, entry: ClassifiedEntry) {
        match category {
            FaultCategory::ThreePhase => self.three_phase.push(entry),
            FaultCategory::SinglePhase => self.single_phase.push(entry),
        }
    }

    /// 两类条目是否都为空
    pub fn is_empty(&self) -> bool {
        self.three_phase.is_empty() && self.single_phase.is_empty()
    }

    /// 全部条目的母线名迭代器（先三相后单相）
    pub fn substation_names(&self) -> impl Iterator<Item = &str> {
        self.three_phase
            .iter()
            .chain(self.single_phase.iter())
            .map(|e| e.substation.as_str())
    }
}

// ==========================================
// Classifier - 故障分类器
// ==========================================
pub struct Classifier {
    // 无状态引擎,不需要注入依赖
}

impl Classifier {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 分类一个记录集
    ///
    /// 故障类型与配置字面量相等的行进入对应分桶；其余行静默跳过（不是错误）。
    /// 重复母线名产生重复条目，不做去重。
    ///
    /// # 参数
    /// - `record_set`: 原始记录集
    /// - `schema`: 已解析的列模式
    /// - `config`: 故障类型字面量配置
    pub fn classify(
        &self,
        record_set: &RecordSet,
        schema: ColumnSchema,
        config: &CalcConfig,
    ) -> ClassifiedEntries {
        let mut result = ClassifiedEntries::default();

        for row in &record_set.rows {
            let substation = match row.get(schema.substation_idx) {
                Some(v) => v,
                None => continue,
            };
            let fault_type = match row.get(schema.fault_type_idx) {
                Some(v) => v,
                None => continue,
            };
            // 短行的电流单元格按缺失处理，合并阶段降级为缺失标记
            let current = row
                .get(schema.current_idx)
                .cloned()
                .unwrap_or_default();

            // 未识别的故障类型: 跳过
            let category = if fault_type == &config.three_phase_literal {
                FaultCategory::ThreePhase
            } else if fault_type == &config.single_phase_literal {
                FaultCategory::SinglePhase
            } else {
                continue;
            };
            result.push(category, ClassifiedEntry::new(substation.clone(), current));
        }

        tracing::debug!(
            record_set = %record_set.id,
            three_phase = result.three_phase.len(),
            single_phase = result.single_phase.len(),
            "分类完成"
        );

        result
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
