// ==========================================
// 短路电流计算器 - Excel 导出实现
// ==========================================
// 职责: 把结果存储序列化为单个多工作表 xlsx 字节流
// 布局: A1 记录集标识 / 第 2 行列头 / 第 3 行起数据
// 红线: 纯序列化,不重命名/不重排/不重算已存储数据
// ==========================================

use crate::domain::NOT_AVAILABLE;
use crate::exporter::error::{ExportError, ExportResult};
use crate::store::ResultStore;
use rust_xlsxwriter::Workbook;

/// 导出列头（sc2 = 三相, sc1 = 单相）
pub const EXPORT_HEADERS: [&str; 3] = ["sub_name", "sc2", "sc1"];

// xlsx 工作表名约束: 至多 31 个字符, 不允许 [ ] : * ? / \
const SHEET_NAME_MAX_CHARS: usize = 31;

// ==========================================
// ExcelExporter - Excel 导出器
// ==========================================
pub struct ExcelExporter {
    // 无状态导出器,不需要注入依赖
}

impl ExcelExporter {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 导出结果存储为 xlsx 字节流
    ///
    /// 每张结果表一个工作表；存储为空时返回显式"无可导出"错误。
    ///
    /// # 返回
    /// - `Ok(bytes)`: xlsx 文件内容
    /// - `Err(ExportError::NothingToExport)`: 存储为空
    pub fn export(&self, store: &ResultStore) -> ExportResult<Vec<u8>> {
        if store.is_empty() {
            return Err(ExportError::NothingToExport);
        }

        let mut workbook = Workbook::new();
        let mut used_names: Vec<String> = Vec::new();

        for table in store.tables() {
            let sheet_name = unique_sheet_name(&table.record_set_id, &mut used_names);
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(&sheet_name)?;

            // 标题单元格: 记录集标识
            worksheet.write_string(0, 0, &table.record_set_id)?;

            // 列头行
            for (col, header) in EXPORT_HEADERS.iter().enumerate() {
                worksheet.write_string(1, col as u16, *header)?;
            }

            // 数据行（保持入库顺序，数值不做任何改写）
            for (i, row) in table.rows.iter().enumerate() {
                let excel_row = (i + 2) as u32;
                worksheet.write_string(excel_row, 0, &row.sub_name)?;
                write_current(worksheet, excel_row, 1, row.sc2)?;
                write_current(worksheet, excel_row, 2, row.sc1)?;
            }
        }

        let bytes = workbook.save_to_buffer()?;
        tracing::debug!(tables = store.len(), bytes = bytes.len(), "导出完成");
        Ok(bytes)
    }
}

impl Default for ExcelExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// 写入电流单元格（缺失时写缺失标记而非空单元格）
fn write_current(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    col: u16,
    value: Option<f64>,
) -> ExportResult<()> {
    match value {
        Some(v) => worksheet.write_number(row, col, v)?,
        None => worksheet.write_string(row, col, NOT_AVAILABLE)?,
    };
    Ok(())
}

/// 生成合法且不重复的工作表名
///
/// 记录集标识（通常为文件名）可能含 xlsx 禁用字符或超长；
/// 清洗/截断后若与已有表名冲突则追加序号。
fn unique_sheet_name(record_set_id: &str, used_names: &mut Vec<String>) -> String {
    let cleaned: String = record_set_id
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
            other => other,
        })
        .collect();

    let mut base: String = cleaned.chars().take(SHEET_NAME_MAX_CHARS).collect();
    if base.trim().is_empty() {
        base = "Sheet".to_string();
    }

    let mut name = base.clone();
    let mut suffix = 1;
    while used_names.iter().any(|n| n == &name) {
        suffix += 1;
        let tag = format!("~{}", suffix);
        let keep = SHEET_NAME_MAX_CHARS.saturating_sub(tag.chars().count());
        name = base.chars().take(keep).collect::<String>() + &tag;
    }

    used_names.push(name.clone());
    name
}
