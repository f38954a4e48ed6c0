// ==========================================
// 短路电流计算器 - 引擎集成测试
// ==========================================
// 覆盖: 端到端计算 / 批次隔离 / 幂等 / 数值规整 / 优先级
// ==========================================


use short_circuit_calc::app::AppState;
use short_circuit_calc::engine::{BufferSink, EngineError, Severity};
use short_circuit_calc::logging;
use std::path::PathBuf;

fn path_of(file: &tempfile::NamedTempFile) -> PathBuf {
    file.path().to_path_buf()
}

#[test]
fn test_end_to_end_single_record_set() {
    logging::init_test();

    // 端到端场景: BusA 重命名为 Alpha, BusB 透传且单相缺失
    let file = test_helpers::write_csv(&test_helpers::standard_csv_lines(&[
        ("BusA-1", "三相", "10.05"),
        ("BusA-1", "单相", "2.22"),
        ("BusB", "三相", "5.0"),
    ]));

    let state = AppState::with_default_config();
    let sink = BufferSink::new();
    let summary = state
        .run_calculation(&[path_of(&file)], "BusA", "Alpha", &sink)
        .expect("计算不应失败");

    assert_eq!(summary.succeeded, 1);
    assert_eq!(summary.failed, 0);

    let tables = state.result_tables();
    assert_eq!(tables.len(), 1);
    let rows = &tables[0].rows;
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].sub_name, "Alpha");
    assert_eq!(rows[0].sc2, Some(10.1));
    assert_eq!(rows[0].sc1, Some(2.2));

    assert_eq!(rows[1].sub_name, "BusB");
    assert_eq!(rows[1].sc2, Some(5.0));
    assert_eq!(rows[1].sc1, None);

    assert_eq!(sink.count(Severity::Info), 1);
    assert_eq!(sink.count(Severity::Warning), 0);
    assert_eq!(sink.count(Severity::Error), 0);
}

#[test]
fn test_batch_isolation_on_missing_column() {
    logging::init_test();

    // 第一个文件缺少故障类型列: 该记录集致命; 第二个文件正常入库
    let broken = test_helpers::write_csv(&["母线名,电压等级", "BusA,110"]);
    let good = test_helpers::write_csv(&test_helpers::standard_csv_lines(&[(
        "BusA-1", "三相", "7.77",
    )]));

    let state = AppState::with_default_config();
    let sink = BufferSink::new();
    let summary = state
        .run_calculation(&[path_of(&broken), path_of(&good)], "BusA", "Alpha", &sink)
        .expect("批次不应整体失败");

    assert_eq!(summary.succeeded, 1);
    assert_eq!(summary.failed, 1);

    let tables = state.result_tables();
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].rows[0].sub_name, "Alpha");
    assert_eq!(tables[0].rows[0].sc2, Some(7.8));

    // 错误通知包含缺失列名
    let notifications = sink.take();
    let error = notifications
        .iter()
        .find(|n| n.severity == Severity::Error)
        .expect("应有致命错误通知");
    assert!(error.message.contains("故障类型"));
}

#[test]
fn test_recomputation_is_idempotent() {
    logging::init_test();

    let file = test_helpers::write_csv(&test_helpers::standard_csv_lines(&[
        ("BusA-1", "三相", "10.05"),
        ("BusA-1", "单相", "2.22"),
    ]));

    let state = AppState::with_default_config();
    let sink = BufferSink::new();
    let paths = [path_of(&file)];

    state
        .run_calculation(&paths, "BusA", "Alpha", &sink)
        .unwrap();
    let first = state.result_tables();

    state
        .run_calculation(&paths, "BusA", "Alpha", &sink)
        .unwrap();
    let second = state.result_tables();

    // 存储先清空再填充: 无累积、无漂移
    assert_eq!(first, second);
    assert_eq!(second.len(), 1);
}

#[test]
fn test_numeric_coercion_and_rounding() {
    logging::init_test();

    let file = test_helpers::write_csv(&test_helpers::standard_csv_lines(&[
        ("BusA-1", "三相", "12.34567"),
        ("BusA-1", "单相", "N/A"),
    ]));

    let state = AppState::with_default_config();
    let sink = BufferSink::new();
    state
        .run_calculation(&[path_of(&file)], "BusA", "Alpha", &sink)
        .unwrap();

    let tables = state.result_tables();
    let row = &tables[0].rows[0];
    assert_eq!(row.sc2, Some(12.3));
    // 非数值降级为缺失标记, 不是 0 也不是错误
    assert_eq!(row.sc1, None);
    assert_eq!(sink.count(Severity::Error), 0);
}

#[test]
fn test_lookup_precedence_order() {
    logging::init_test();

    // "Bus" 与 "BusA" 均命中 "BusA-1": 先配对者决定显示名
    let file = test_helpers::write_csv(&test_helpers::standard_csv_lines(&[(
        "BusA-1", "三相", "1.0",
    )]));

    let state = AppState::with_default_config();
    let sink = BufferSink::new();
    state
        .run_calculation(&[path_of(&file)], "Bus,BusA", "Generic,Alpha", &sink)
        .unwrap();

    let tables = state.result_tables();
    assert_eq!(tables[0].rows[0].sub_name, "Generic");
}

#[test]
fn test_no_key_matched_is_fatal_for_record_set() {
    logging::init_test();

    let file = test_helpers::write_csv(&test_helpers::standard_csv_lines(&[(
        "BusA-1", "三相", "1.0",
    )]));

    let state = AppState::with_default_config();
    let sink = BufferSink::new();
    let summary = state
        .run_calculation(&[path_of(&file)], "DS9", "Nine", &sink)
        .unwrap();

    assert_eq!(summary.succeeded, 0);
    assert_eq!(summary.failed, 1);
    assert!(state.result_tables().is_empty());
    assert_eq!(sink.count(Severity::Error), 1);
}

#[test]
fn test_parameter_error_rejected_before_processing() {
    logging::init_test();

    let file = test_helpers::write_csv(&test_helpers::standard_csv_lines(&[(
        "BusA-1", "三相", "1.0",
    )]));

    let state = AppState::with_default_config();
    let sink = BufferSink::new();
    let err = state
        .run_calculation(&[path_of(&file)], "DS1,DS2,DS3", "Name1,Name2", &sink)
        .unwrap_err();

    assert!(matches!(
        err,
        EngineError::ParameterLengthMismatch { keys: 3, names: 2 }
    ));
    // 任何记录集都不应被处理
    assert!(state.result_tables().is_empty());
}

#[test]
fn test_unrecognized_fault_types_silently_skipped() {
    logging::init_test();

    let file = test_helpers::write_csv(&test_helpers::standard_csv_lines(&[
        ("BusA-1", "三相", "4.0"),
        ("BusA-1", "两相短路", "9.0"),
        ("BusA-1", "接地", "8.0"),
    ]));

    let state = AppState::with_default_config();
    let sink = BufferSink::new();
    let summary = state
        .run_calculation(&[path_of(&file)], "BusA", "Alpha", &sink)
        .unwrap();

    assert_eq!(summary.succeeded, 1);
    let tables = state.result_tables();
    assert_eq!(tables[0].rows.len(), 1);
    assert_eq!(tables[0].rows[0].sc2, Some(4.0));
    assert_eq!(sink.count(Severity::Error), 0);
}
