// ==========================================
// 运单 ETA 风险分类器 - 文件解析器实现
// ==========================================
// 支持: JSON (.json) / CSV (.csv)
// JSON 文档形态: 记录数组 / 单条记录 / {"shipments": [...]}
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::snapshot_importer_trait::{FileParser, RawRecords};
use csv::ReaderBuilder;
use serde_json::Value;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<RawRecords> {
        ensure_exists(file_path)?;
        let file = File::open(file_path)?;
        parse_csv_reader(file).map(RawRecords::Rows)
    }
}

/// 从任意 reader 解析 CSV（首行为表头）
pub fn parse_csv_reader<R: std::io::Read>(reader: R) -> ImportResult<Vec<HashMap<String, String>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // 允许行长度不一致
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        let mut row_map = HashMap::new();

        for (col_idx, value) in record.iter().enumerate() {
            if let Some(header) = headers.get(col_idx) {
                row_map.insert(header.clone(), value.trim().to_string());
            }
        }

        // 跳过完全空白的行
        if row_map.values().all(|v| v.is_empty()) {
            continue;
        }

        records.push(row_map);
    }

    Ok(records)
}

// ==========================================
// JSON Parser 实现
// ==========================================
pub struct JsonParser;

impl FileParser for JsonParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<RawRecords> {
        ensure_exists(file_path)?;
        let raw = std::fs::read_to_string(file_path)?;
        parse_json_document(&raw).map(RawRecords::Json)
    }
}

/// 解析 JSON 文档为记录列表
pub fn parse_json_document(raw: &str) -> ImportResult<Vec<Value>> {
    let document: Value = serde_json::from_str(raw)?;

    match document {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => match map.remove("shipments") {
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(ImportError::InvalidDocument(format!(
                "shipments 字段必须为数组，实际为 {}",
                other
            ))),
            None => Ok(vec![Value::Object(map)]),
        },
        other => Err(ImportError::InvalidDocument(format!(
            "顶层必须为数组或对象，实际为 {}",
            other
        ))),
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<RawRecords> {
        let path = file_path.as_ref();

        match extension_of(path).as_str() {
            "csv" => CsvParser.parse_to_raw_records(path),
            "json" => JsonParser.parse_to_raw_records(path),
            ext => Err(ImportError::UnsupportedFormat(ext.to_string())),
        }
    }
}
