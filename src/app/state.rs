// ==========================================
// 短路电流计算器 - 应用状态
// ==========================================
// 职责: 管理会话级共享状态(结果存储)与计算/导出入口
// 说明: 结果存储在每次计算时整体替换,导出时只读
// ==========================================

use std::path::PathBuf;
use std::sync::Mutex;

use crate::config::CalcConfig;
use crate::domain::{LookupTable, ResultTable};
use crate::engine::{CalcOrchestrator, EngineResult, NotificationSink, PassSummary};
use crate::exporter::{ExcelExporter, ExportError, ExportResult};
use crate::i18n::t_with_args;
use crate::importer::UniversalFileParser;
use crate::store::ResultStore;

/// 应用状态
///
/// 持有计算编排器、导出器与跨次计算存活的结果存储。
pub struct AppState {
    orchestrator: CalcOrchestrator,
    exporter: ExcelExporter,
    store: Mutex<ResultStore>,
}

impl AppState {
    /// 创建新的 AppState 实例
    pub fn new(config: CalcConfig) -> Self {
        Self {
            orchestrator: CalcOrchestrator::new(config),
            exporter: ExcelExporter::new(),
            store: Mutex::new(ResultStore::new()),
        }
    }

    /// 使用默认配置创建
    pub fn with_default_config() -> Self {
        Self::new(CalcConfig::default())
    }

    /// 执行一次完整计算
    ///
    /// 流程:
    /// 1. 解析查询参数（参数错误终止整个计算，先于任何记录集处理）
    /// 2. 逐文件读取记录集（单个文件读取失败只影响该记录集）
    /// 3. 编排器跑一遍计算并填充结果存储
    ///
    /// # 参数
    /// - `files`: 输入文件路径列表
    /// - `keys_input`: 母线名，逗号分隔
    /// - `names_input`: 显示名称，逗号分隔
    /// - `sink`: 通知接收端
    pub fn run_calculation(
        &self,
        files: &[PathBuf],
        keys_input: &str,
        names_input: &str,
        sink: &dyn NotificationSink,
    ) -> EngineResult<PassSummary> {
        let lookup = match LookupTable::parse(keys_input, names_input) {
            Ok(lookup) => lookup,
            Err(e) => {
                sink.error(t_with_args("calc.param_error", &[("error", &e.to_string())]));
                return Err(e);
            }
        };

        let parser = UniversalFileParser;
        let mut record_sets = Vec::new();
        let mut read_failures = 0usize;

        for path in files {
            match parser.parse(path) {
                Ok(record_set) => record_sets.push(record_set),
                Err(e) => {
                    read_failures += 1;
                    let name = path.display().to_string();
                    tracing::error!(file = %name, error = %e, "文件读取失败");
                    sink.error(t_with_args(
                        "calc.file_error",
                        &[("name", name.as_str()), ("error", &e.to_string())],
                    ));
                }
            }
        }

        let mut store = self
            .store
            .lock()
            .map_err(|_| anyhow::anyhow!("结果存储锁被毒化"))?;
        let mut summary = self
            .orchestrator
            .run_pass(&record_sets, &lookup, &mut store, sink);
        summary.failed += read_failures;

        tracing::info!(
            succeeded = summary.succeeded,
            failed = summary.failed,
            "计算完成"
        );
        Ok(summary)
    }

    /// 导出当前结果为 xlsx 字节流
    pub fn export_results(&self) -> ExportResult<Vec<u8>> {
        let store = self
            .store
            .lock()
            .map_err(|_| ExportError::Other(anyhow::anyhow!("结果存储锁被毒化")))?;
        self.exporter.export(&store)
    }

    /// 当前结果表快照（展示用）
    pub fn result_tables(&self) -> Vec<ResultTable> {
        self.store
            .lock()
            .map(|store| store.tables().to_vec())
            .unwrap_or_default()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_default_config()
    }
}
