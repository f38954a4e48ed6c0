// ==========================================
// 短路电流计算器 - 文件解析器实现
// ==========================================
// 支持: CSV (.csv, GBK/UTF-8) / Excel (.xlsx/.xls)
// 输出: 统一的 RecordSet（表头 + 文本单元格矩阵）
// ==========================================

use crate::domain::RecordSet;
use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook, Reader, Xlsx};
use csv::ReaderBuilder;
use std::path::Path;

/// 记录集解析器
///
/// 每种文件格式一个实现；解析结果统一为 RecordSet。
pub trait RecordSetParser {
    fn parse_record_set(&self, file_path: &Path) -> ImportResult<RecordSet>;
}

/// 记录集标识：取文件名（含扩展名）
fn record_set_id(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl CsvParser {
    /// 解码 CSV 文件字节
    ///
    /// 源数据通常为 GBK 编码；先尝试 UTF-8，失败则按 GBK 解码。
    fn decode(path: &Path, bytes: &[u8]) -> ImportResult<String> {
        if let Ok(text) = std::str::from_utf8(bytes) {
            return Ok(text.to_string());
        }

        let (text, _, had_errors) = encoding_rs::GBK.decode(bytes);
        if had_errors {
            return Err(ImportError::EncodingError(path.display().to_string()));
        }
        Ok(text.into_owned())
    }
}

impl RecordSetParser for CsvParser {
    fn parse_record_set(&self, file_path: &Path) -> ImportResult<RecordSet> {
        // 检查文件存在
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let bytes = std::fs::read(file_path)?;
        let text = Self::decode(file_path, &bytes)?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(text.as_bytes());

        // 读取表头
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        // 读取所有行
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let row: Vec<String> = record.iter().map(|v| v.trim().to_string()).collect();

            // 跳过完全空白的行
            if row.iter().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row);
        }

        Ok(RecordSet::new(record_set_id(file_path), headers, rows))
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl RecordSetParser for ExcelParser {
    fn parse_record_set(&self, file_path: &Path) -> ImportResult<RecordSet> {
        // 检查文件存在
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        // 打开 Excel 文件
        let mut workbook: Xlsx<_> = open_workbook(file_path)
            .map_err(|e: calamine::XlsxError| ImportError::ExcelParseError(e.to_string()))?;

        // 读取第一个 sheet
        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(ImportError::ExcelParseError(
                "Excel 文件无工作表".to_string(),
            ));
        }

        let sheet_name = sheet_names[0].clone();
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        // 提取表头（第一行）
        let mut range_rows = range.rows();
        let header_row = range_rows
            .next()
            .ok_or_else(|| ImportError::EmptyFile(file_path.display().to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        // 读取数据行
        let mut rows = Vec::new();
        for data_row in range_rows {
            let row: Vec<String> = data_row
                .iter()
                .map(|cell| cell.to_string().trim().to_string())
                .collect();

            // 跳过完全空白的行
            if row.iter().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row);
        }

        Ok(RecordSet::new(record_set_id(file_path), headers, rows))
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<RecordSet> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser.parse_record_set(path),
            "xlsx" | "xls" => ExcelParser.parse_record_set(path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn named_csv() -> NamedTempFile {
        tempfile::Builder::new().suffix(".csv").tempfile().unwrap()
    }

    #[test]
    fn test_csv_parser_valid_file() {
        let mut temp_file = named_csv();
        writeln!(temp_file, "母线名,故障类型,电压,基准,短路电流").unwrap();
        writeln!(temp_file, "DS1母线,三相,110,100,10.05").unwrap();
        writeln!(temp_file, "DS1母线,单相,110,100,2.22").unwrap();

        let parser = CsvParser;
        let rs = parser.parse_record_set(temp_file.path()).unwrap();

        assert_eq!(rs.rows.len(), 2);
        assert_eq!(rs.headers[0], "母线名");
        assert_eq!(rs.rows[0][1], "三相");
        assert_eq!(rs.rows[1][4], "2.22");
    }

    #[test]
    fn test_csv_parser_gbk_encoded() {
        // GBK 字节流解码（母线名,故障类型 两列 + 中文数据行）
        let (encoded, _, _) =
            encoding_rs::GBK.encode("母线名,故障类型,a,b,电流\n甲站母线,三相,1,2,5.0\n");
        let mut temp_file = named_csv();
        temp_file.write_all(&encoded).unwrap();
        temp_file.flush().unwrap();

        let rs = CsvParser.parse_record_set(temp_file.path()).unwrap();
        assert_eq!(rs.headers[0], "母线名");
        assert_eq!(rs.rows[0][0], "甲站母线");
    }

    #[test]
    fn test_csv_parser_file_not_found() {
        let result = CsvParser.parse_record_set(Path::new("non_existent.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_csv_parser_skip_empty_rows() {
        let mut temp_file = named_csv();
        writeln!(temp_file, "母线名,故障类型").unwrap();
        writeln!(temp_file, "DS1,三相").unwrap();
        writeln!(temp_file, ",").unwrap(); // 空行
        writeln!(temp_file, "DS2,单相").unwrap();

        let rs = CsvParser.parse_record_set(temp_file.path()).unwrap();

        // 应跳过空行
        assert_eq!(rs.rows.len(), 2);
    }

    #[test]
    fn test_universal_parser_unsupported_format() {
        let result = UniversalFileParser.parse(Path::new("data.txt"));
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }
}
