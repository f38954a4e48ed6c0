// ==========================================
// 短路电流计算器 - 计算编排器
// ==========================================
// 职责: 驱动一次完整计算: 逐记录集 分类 → 匹配合并 → 入库
// 红线: 单个记录集失败只终止自身,不影响批次中其余记录集
// ==========================================

use crate::config::CalcConfig;
use crate::domain::{LookupTable, RecordSet, ResultTable};
use crate::engine::classifier::{Classifier, ColumnSchema};
use crate::engine::error::EngineResult;
use crate::engine::notification::NotificationSink;
use crate::engine::resolver::ResolverMerger;
use crate::i18n::{t, t_with_args};
use crate::store::ResultStore;
use serde::{Deserialize, Serialize};

/// 一次计算的汇总
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassSummary {
    /// 成功入库的记录集数
    pub succeeded: usize,

    /// 失败（已报告并跳过）的记录集数
    pub failed: usize,
}

// ==========================================
// CalcOrchestrator - 计算编排器
// ==========================================
pub struct CalcOrchestrator {
    config: CalcConfig,
    classifier: Classifier,
    resolver: ResolverMerger,
}

impl CalcOrchestrator {
    /// 构造函数
    pub fn new(config: CalcConfig) -> Self {
        Self {
            config,
            classifier: Classifier::new(),
            resolver: ResolverMerger::new(),
        }
    }

    /// 使用默认配置构造
    pub fn with_default_config() -> Self {
        Self::new(CalcConfig::default())
    }

    /// 执行一次完整计算
    ///
    /// 先清空结果存储（结果永远整体替换，不跨次累积），再顺序处理
    /// 各记录集。任一记录集的致命错误在此处被拦截：报告后跳过该
    /// 记录集，已入库的结果不受影响。
    ///
    /// # 参数
    /// - `record_sets`: 待处理的记录集
    /// - `lookup`: 已通过参数校验的查询表
    /// - `store`: 结果存储（先 reset 再填充）
    /// - `sink`: 通知接收端
    pub fn run_pass(
        &self,
        record_sets: &[RecordSet],
        lookup: &LookupTable,
        store: &mut ResultStore,
        sink: &dyn NotificationSink,
    ) -> PassSummary {
        store.reset();

        let mut summary = PassSummary {
            succeeded: 0,
            failed: 0,
        };

        for record_set in record_sets {
            match self.process_record_set(record_set, lookup, sink) {
                Ok(table) => {
                    store.store(table);
                    summary.succeeded += 1;
                }
                Err(e) => {
                    summary.failed += 1;
                    tracing::error!(record_set = %record_set.id, error = %e, "记录集处理失败");
                    sink.error(t_with_args(
                        "calc.file_error",
                        &[("name", record_set.id.as_str()), ("error", &e.to_string())],
                    ));
                }
            }
        }

        if summary.failed == 0 && summary.succeeded > 0 {
            sink.info(t("calc.all_done"));
        } else if summary.succeeded > 0 {
            sink.info(t_with_args(
                "calc.partial_done",
                &[
                    ("ok", summary.succeeded.to_string().as_str()),
                    ("failed", summary.failed.to_string().as_str()),
                ],
            ));
        }

        summary
    }

    /// 处理单个记录集
    ///
    /// 分类 → 匹配合并 → 产出结果表；任何错误直接上抛给 run_pass
    /// 的逐记录集边界处理。
    fn process_record_set(
        &self,
        record_set: &RecordSet,
        lookup: &LookupTable,
        sink: &dyn NotificationSink,
    ) -> EngineResult<ResultTable> {
        let schema = ColumnSchema::resolve(record_set, &self.config)?;
        let classified = self.classifier.classify(record_set, schema, &self.config);
        let outcome = self.resolver.resolve_and_merge(&classified, lookup)?;

        // 单个 key 未匹配: 可恢复警告，继续处理
        for key in &outcome.unmatched_keys {
            sink.warning(t_with_args(
                "calc.key_not_found",
                &[("name", record_set.id.as_str()), ("key", key.as_str())],
            ));
        }

        Ok(ResultTable::new(record_set.id.clone(), outcome.rows))
    }
}

impl Default for CalcOrchestrator {
    fn default() -> Self {
        Self::with_default_config()
    }
}
