// ==========================================
// 短路电流计算器 - 导出往返测试
// ==========================================
// 覆盖: 存储 → 导出 → calamine 回读, 数据逐格一致 (纯序列化)
// ==========================================

use calamine::{open_workbook, Data, Reader, Xlsx};
use short_circuit_calc::domain::{MergedRow, ResultTable};
use short_circuit_calc::exporter::{ExcelExporter, ExportError, EXPORT_HEADERS};
use short_circuit_calc::store::ResultStore;

fn cell_string(range: &calamine::Range<Data>, row: u32, col: u32) -> String {
    range
        .get_value((row, col))
        .map(|v| v.to_string())
        .unwrap_or_default()
}

fn cell_float(range: &calamine::Range<Data>, row: u32, col: u32) -> Option<f64> {
    match range.get_value((row, col)) {
        Some(Data::Float(v)) => Some(*v),
        Some(Data::Int(v)) => Some(*v as f64),
        _ => None,
    }
}

#[test]
fn test_store_export_roundtrip_preserves_rows() {
    let mut store = ResultStore::new();
    store.store(ResultTable::new(
        "f1.csv",
        vec![
            MergedRow {
                sub_name: "Alpha".to_string(),
                sc2: Some(10.1),
                sc1: Some(2.2),
            },
            MergedRow {
                sub_name: "BusB".to_string(),
                sc2: Some(5.0),
                sc1: None,
            },
        ],
    ));
    store.store(ResultTable::new(
        "f2.csv",
        vec![MergedRow {
            sub_name: "甲站主变".to_string(),
            sc2: None,
            sc1: Some(18.3),
        }],
    ));

    let bytes = ExcelExporter::new().export(&store).unwrap();

    // 写入临时文件后用 calamine 回读
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.xlsx");
    std::fs::write(&path, &bytes).unwrap();

    let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
    let sheet_names = workbook.sheet_names();
    assert_eq!(sheet_names, vec!["f1.csv".to_string(), "f2.csv".to_string()]);

    // ===== 第一个工作表 =====
    let range = workbook.worksheet_range("f1.csv").unwrap();

    // A1: 记录集标识
    assert_eq!(cell_string(&range, 0, 0), "f1.csv");

    // 第 2 行: 列头
    for (col, header) in EXPORT_HEADERS.iter().enumerate() {
        assert_eq!(cell_string(&range, 1, col as u32), *header);
    }

    // 数据行: 顺序与数值逐格一致, 不发生任何改写
    assert_eq!(cell_string(&range, 2, 0), "Alpha");
    assert_eq!(cell_float(&range, 2, 1), Some(10.1));
    assert_eq!(cell_float(&range, 2, 2), Some(2.2));

    assert_eq!(cell_string(&range, 3, 0), "BusB");
    assert_eq!(cell_float(&range, 3, 1), Some(5.0));
    // 缺失值导出为标记 "-", 与 0 严格区分
    assert_eq!(cell_string(&range, 3, 2), "-");
    assert_eq!(cell_float(&range, 3, 2), None);

    // ===== 第二个工作表 =====
    let range = workbook.worksheet_range("f2.csv").unwrap();
    assert_eq!(cell_string(&range, 0, 0), "f2.csv");
    assert_eq!(cell_string(&range, 2, 0), "甲站主变");
    assert_eq!(cell_string(&range, 2, 1), "-");
    assert_eq!(cell_float(&range, 2, 2), Some(18.3));
}

#[test]
fn test_export_empty_store_signals_nothing() {
    let store = ResultStore::new();
    let result = ExcelExporter::new().export(&store);
    assert!(matches!(result, Err(ExportError::NothingToExport)));
}
