// ==========================================
// 运单 ETA 风险分类器 - 字段映射器
// ==========================================
// 职责: 原始记录 → ShipmentSnapshot
// 红线: 全函数，不报错; 无法识别的字段一律视为缺失
// ==========================================
// JSON: 数值字段只接受 JSON number（字符串 "2" 视为非数值）
// CSV : 所有值均为文本，数值字段按文本解析
// ==========================================

use crate::domain::shipment::{ExternalConditions, ShipmentSnapshot};
use crate::domain::types::Stage;
use crate::importer::snapshot_importer_trait::RawRecords;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::collections::HashMap;

pub struct SnapshotMapper;

impl SnapshotMapper {
    /// 批量映射
    pub fn map_records(records: &RawRecords) -> Vec<ShipmentSnapshot> {
        match records {
            RawRecords::Rows(rows) => rows.iter().map(Self::from_row).collect(),
            RawRecords::Json(values) => values.iter().map(Self::from_json).collect(),
        }
    }

    // ==========================================
    // JSON 记录
    // ==========================================

    /// 非对象记录 → 全部字段缺失
    pub fn from_json(value: &Value) -> ShipmentSnapshot {
        let Some(obj) = value.as_object() else {
            tracing::debug!("记录不是对象，按全部字段缺失处理");
            return ShipmentSnapshot::default();
        };

        // 外部条件: 优先取嵌套 external，其次取顶层同名字段
        let nested = obj.get("external").and_then(Value::as_object);
        let external_number = |key: &str| {
            nested
                .and_then(|ext| json_number(ext, key))
                .or_else(|| json_number(obj, key))
        };

        ShipmentSnapshot {
            shipment_id: json_id(obj, "shipment_id"),
            lane: json_text(obj, "lane"),
            origin_iata: json_text(obj, "origin_iata"),
            destination_iata: json_text(obj, "destination_iata"),
            origin_country: json_raw_text(obj, "origin_country"),
            destination_country: json_raw_text(obj, "destination_country"),
            stage: obj.get("stage").and_then(Value::as_str).and_then(Stage::from_label),
            days_to_eta: json_number(obj, "days_to_eta"),
            scan_gap_hours: json_number(obj, "scan_gap_hours"),
            dwell_hours_current: json_number(obj, "dwell_hours_current"),
            baseline_90pct_hours: json_number(obj, "baseline_90pct_hours"),
            external: ExternalConditions {
                weather_index: external_number("weather_index"),
                port_congestion: external_number("port_congestion"),
            },
            eta_planned: json_text(obj, "eta_planned").and_then(|s| parse_timestamp(&s)),
            last_update_ts: json_text(obj, "last_update_ts").and_then(|s| parse_timestamp(&s)),
            severity: json_text(obj, "severity"),
            reason_code: json_labels(obj, "reason_code"),
            current_carrier_name: json_text(obj, "current_carrier_name"),
            owner: json_text(obj, "owner"),
        }
    }

    // ==========================================
    // CSV 行
    // ==========================================

    pub fn from_row(row: &HashMap<String, String>) -> ShipmentSnapshot {
        ShipmentSnapshot {
            shipment_id: row_text(row, "shipment_id"),
            lane: row_text(row, "lane"),
            origin_iata: row_text(row, "origin_iata"),
            destination_iata: row_text(row, "destination_iata"),
            origin_country: row_text(row, "origin_country"),
            destination_country: row_text(row, "destination_country"),
            stage: row_text(row, "stage").and_then(|s| Stage::from_label(&s)),
            days_to_eta: row_number(row, "days_to_eta"),
            scan_gap_hours: row_number(row, "scan_gap_hours"),
            dwell_hours_current: row_number(row, "dwell_hours_current"),
            baseline_90pct_hours: row_number(row, "baseline_90pct_hours"),
            external: ExternalConditions {
                weather_index: row_number(row, "weather_index"),
                port_congestion: row_number(row, "port_congestion"),
            },
            eta_planned: row_text(row, "eta_planned").and_then(|s| parse_timestamp(&s)),
            last_update_ts: row_text(row, "last_update_ts").and_then(|s| parse_timestamp(&s)),
            severity: row_text(row, "severity"),
            reason_code: row_text(row, "reason_code").map(|s| split_labels(&s)),
            current_carrier_name: row_text(row, "current_carrier_name"),
            owner: row_text(row, "owner"),
        }
    }
}

// ==========================================
// 字段提取辅助函数
// ==========================================

/// NULL 标准化: 空白 → None
fn normalize_null(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn json_text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).and_then(normalize_null)
}

/// 原样保留字符串（不 TRIM，空串也算存在）; 用于显式国家字段
fn json_raw_text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

/// 运单号允许数值形式
fn json_id(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key) {
        Some(Value::String(s)) => normalize_null(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

fn json_number(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    obj.get(key).and_then(Value::as_f64)
}

/// 标注原因码: 数组（仅取字符串元素）或分隔字符串
fn json_labels(obj: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    match obj.get(key) {
        Some(Value::Array(items)) => Some(
            items
                .iter()
                .filter_map(Value::as_str)
                .filter_map(normalize_null)
                .collect(),
        ),
        Some(Value::String(s)) => Some(split_labels(s)),
        _ => None,
    }
}

fn row_text(row: &HashMap<String, String>, key: &str) -> Option<String> {
    row.get(key).and_then(|v| normalize_null(v))
}

fn row_number(row: &HashMap<String, String>, key: &str) -> Option<f64> {
    let text = row_text(row, key)?;
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            tracing::trace!(field = key, value = %text, "数值字段无法解析，按缺失处理");
            None
        }
    }
}

fn split_labels(raw: &str) -> Vec<String> {
    raw.split([';', '|', ','])
        .filter_map(normalize_null)
        .collect()
}

/// ISO-8601 / RFC 3339 时间戳; 无法解析 → None
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_reference_record() {
        let value = json!({
            "shipment_id": "LDG-1066",
            "lane": "FRA→TLV",
            "origin_iata": "FRA",
            "destination_iata": "TLV",
            "origin_country": "DE",
            "destination_country": "IL",
            "stage": "Last-Mile",
            "eta_planned": "2025-09-10T10:12:00Z",
            "days_to_eta": 3,
            "severity": "medium",
            "reason_code": ["scan_gap"],
            "scan_gap_hours": 16,
            "dwell_hours_current": 4.0,
            "baseline_90pct_hours": 9.0,
            "external": { "weather_index": 2, "port_congestion": 1 },
            "current_carrier_name": "Israel Post",
            "owner": "LM-Central",
            "last_update_ts": "2025-09-07T09:58:00Z"
        });

        let s = SnapshotMapper::from_json(&value);

        assert_eq!(s.shipment_id.as_deref(), Some("LDG-1066"));
        assert_eq!(s.stage, Some(Stage::LastMile));
        assert_eq!(s.days_to_eta, Some(3.0));
        assert_eq!(s.scan_gap_hours, Some(16.0));
        assert_eq!(s.external.weather_index, Some(2.0));
        assert_eq!(s.external.port_congestion, Some(1.0));
        assert_eq!(s.reason_code, Some(vec!["scan_gap".to_string()]));
        assert_eq!(
            s.eta_planned.map(|t| t.to_rfc3339()),
            Some("2025-09-10T10:12:00+00:00".to_string())
        );
        assert_eq!(s.owner.as_deref(), Some("LM-Central"));
    }

    #[test]
    fn test_from_json_non_object_is_all_absent() {
        for value in [json!(null), json!(42), json!("LDG-1"), json!([1, 2])] {
            assert_eq!(SnapshotMapper::from_json(&value), ShipmentSnapshot::default());
        }
    }

    #[test]
    fn test_from_json_non_numeric_fields_absent() {
        let value = json!({
            "days_to_eta": "2",
            "scan_gap_hours": true,
            "dwell_hours_current": null,
            "stage": "In Transit",
            "eta_planned": "next tuesday"
        });

        let s = SnapshotMapper::from_json(&value);

        assert_eq!(s.days_to_eta, None);
        assert_eq!(s.scan_gap_hours, None);
        assert_eq!(s.dwell_hours_current, None);
        assert_eq!(s.stage, None);
        assert_eq!(s.eta_planned, None);
    }

    #[test]
    fn test_from_json_zero_values_present() {
        let value = json!({ "scan_gap_hours": 0, "days_to_eta": 0, "weather_index": 0 });

        let s = SnapshotMapper::from_json(&value);

        assert_eq!(s.scan_gap_hours, Some(0.0));
        assert_eq!(s.days_to_eta, Some(0.0));
        assert_eq!(s.external.weather_index, Some(0.0));
    }

    #[test]
    fn test_from_json_flat_external_fallback() {
        let value = json!({
            "weather_index": 4,
            "port_congestion": 8,
            "external": { "weather_index": 1 }
        });

        let s = SnapshotMapper::from_json(&value);

        // 嵌套优先，嵌套缺失时取顶层
        assert_eq!(s.external.weather_index, Some(1.0));
        assert_eq!(s.external.port_congestion, Some(8.0));
    }

    #[test]
    fn test_from_json_numeric_id_and_blank_country() {
        let value = json!({
            "shipment_id": 1029,
            "origin_country": "  ",
            "destination_country": "",
            "owner": "  "
        });

        let s = SnapshotMapper::from_json(&value);

        assert_eq!(s.shipment_id.as_deref(), Some("1029"));
        // 显式国家原样保留; 其他文本字段空白 → 缺失
        assert_eq!(s.origin_country.as_deref(), Some("  "));
        assert_eq!(s.destination_country.as_deref(), Some(""));
        assert_eq!(s.owner, None);
    }

    #[test]
    fn test_from_row_blank_country_absent() {
        let mut row = HashMap::new();
        row.insert("origin_country".to_string(), "".to_string());
        row.insert("origin_iata".to_string(), "JFK".to_string());

        let s = SnapshotMapper::from_row(&row);

        assert_eq!(s.origin_country, None);
        assert_eq!(s.origin_iata.as_deref(), Some("JFK"));
    }

    #[test]
    fn test_from_row_parses_text_numbers() {
        let mut row = HashMap::new();
        row.insert("shipment_id".to_string(), "LDG-1029".to_string());
        row.insert("stage".to_string(), "Linehaul".to_string());
        row.insert("days_to_eta".to_string(), "2".to_string());
        row.insert("scan_gap_hours".to_string(), "28".to_string());
        row.insert("baseline_90pct_hours".to_string(), "".to_string());
        row.insert("weather_index".to_string(), "n/a".to_string());
        row.insert("reason_code".to_string(), "scan_gap; excess_dwell".to_string());

        let s = SnapshotMapper::from_row(&row);

        assert_eq!(s.stage, Some(Stage::Linehaul));
        assert_eq!(s.days_to_eta, Some(2.0));
        assert_eq!(s.scan_gap_hours, Some(28.0));
        assert_eq!(s.baseline_90pct_hours, None);
        assert_eq!(s.external.weather_index, None);
        assert_eq!(
            s.reason_code,
            Some(vec!["scan_gap".to_string(), "excess_dwell".to_string()])
        );
    }

    #[test]
    fn test_from_row_rejects_non_finite_numbers() {
        let mut row = HashMap::new();
        row.insert("days_to_eta".to_string(), "NaN".to_string());
        row.insert("scan_gap_hours".to_string(), "inf".to_string());

        let s = SnapshotMapper::from_row(&row);

        assert_eq!(s.days_to_eta, None);
        assert_eq!(s.scan_gap_hours, None);
    }
}
