// ==========================================
// 快照导入 + 批量评估集成测试
// ==========================================
// 测试范围:
// 1. 参考样例文件加载与评估
// 2. 上游标注差异统计
// 3. CSV 导入与混合批量加载
// ==========================================

mod helpers;

use shipment_eta_risk::domain::types::{LaneType, ReasonCode, Stage};
use shipment_eta_risk::engine::ShipmentRiskClassifier;
use shipment_eta_risk::importer::{FileSnapshotLoader, ImportError, SnapshotLoader, SnapshotMapper};
use shipment_eta_risk::logging;
use std::io::Write;
use std::path::PathBuf;
use tempfile::Builder;

fn sample_three_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("sample_three.json")
}

fn temp_with_suffix(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[tokio::test]
async fn test_加载参考样例() {
    logging::init_test();

    let snapshots = FileSnapshotLoader::new()
        .load_file(&sample_three_path())
        .await
        .unwrap();

    assert_eq!(snapshots.len(), 3);
    assert_eq!(snapshots[0].shipment_id.as_deref(), Some("LDG-1029"));
    assert_eq!(snapshots[1].stage, Some(Stage::OriginHub));
    assert_eq!(snapshots[2].external.port_congestion, Some(1.0));
    assert_eq!(snapshots[2].current_carrier_name.as_deref(), Some("Israel Post"));
}

#[tokio::test]
async fn test_参考样例摘要输出() {
    let snapshots = FileSnapshotLoader::new()
        .load_file(&sample_three_path())
        .await
        .unwrap();
    let report = ShipmentRiskClassifier::new().evaluate_batch(&snapshots);

    let lines: Vec<String> = report.assessments.iter().map(|a| a.summary_line()).collect();
    assert_eq!(
        lines,
        vec![
            r#"LDG-1029  at_risk=true  reasons=["early_stage_near_eta","scan_gap","excess_dwell"]"#
                .to_string(),
            r#"LDG-1043  at_risk=true  reasons=["early_stage_near_eta"]"#.to_string(),
            r#"LDG-1066  at_risk=true  reasons=["scan_gap"]"#.to_string(),
        ]
    );
}

#[tokio::test]
async fn test_批量报表统计与标注差异() {
    let snapshots = FileSnapshotLoader::new()
        .load_file(&sample_three_path())
        .await
        .unwrap();
    let report = ShipmentRiskClassifier::new().evaluate_batch(&snapshots);

    assert_eq!(report.total_count, 3);
    assert_eq!(report.at_risk_count, 3);
    assert_eq!(report.reason_counts.get(&ReasonCode::EarlyStageNearEta), Some(&2));
    assert_eq!(report.reason_counts.get(&ReasonCode::ScanGap), Some(&2));
    assert_eq!(report.reason_counts.get(&ReasonCode::ExcessDwell), Some(&1));
    assert_eq!(report.reason_counts.get(&ReasonCode::ExternalRisk), None);

    // LDG-1029 上游漏标 early_stage_near_eta，其余一致
    assert_eq!(report.drifted_count, 1);
    let drift = report.assessments[0].label_drift.as_ref().unwrap();
    assert!(drift.missing.is_empty());
    assert_eq!(drift.extra, vec![ReasonCode::EarlyStageNearEta]);
    assert!(report.assessments[1].label_drift.as_ref().unwrap().is_consistent());

    assert_eq!(report.assessments[1].lane_type, LaneType::Domestic);
    assert_eq!(report.assessments[1].eta_window_days, 2);
}

#[tokio::test]
async fn test_报表json输出() {
    let snapshots = FileSnapshotLoader::new()
        .load_file(&sample_three_path())
        .await
        .unwrap();
    let report = ShipmentRiskClassifier::new().evaluate_batch(&snapshots);

    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["total_count"], 3);
    assert_eq!(value["reason_counts"]["scan_gap"], 2);
    assert_eq!(
        value["assessments"][2]["reasons"],
        serde_json::json!(["scan_gap"])
    );
    assert_eq!(value["assessments"][2]["lane_type"], "INTERNATIONAL");
}

#[tokio::test]
async fn test_csv与json混合批量加载() {
    let csv = temp_with_suffix(
        ".csv",
        "shipment_id,origin_iata,destination_iata,stage,days_to_eta,scan_gap_hours,reason_code\n\
         C-1,JFK,SFO,Linehaul,1,30,scan_gap\n\
         C-2,FRA,TLV,Delivered,0,99,\n",
    );
    let broken = temp_with_suffix(".json", "[{");
    let unsupported = temp_with_suffix(".xml", "<shipments/>");

    let results = FileSnapshotLoader::new()
        .batch_load(vec![
            csv.path().to_path_buf(),
            sample_three_path(),
            broken.path().to_path_buf(),
            unsupported.path().to_path_buf(),
        ])
        .await;

    assert_eq!(results.len(), 4);
    assert!(matches!(results[2].1, Err(ImportError::JsonParseError(_))));
    assert!(matches!(results[3].1, Err(ImportError::UnsupportedFormat(_))));

    let shipments: Vec<_> = results
        .into_iter()
        .filter_map(|(_, r)| r.ok())
        .flatten()
        .collect();
    assert_eq!(shipments.len(), 5);

    let report = ShipmentRiskClassifier::new().evaluate_batch(&shipments);

    // C-1: 国内(IATA 回退), 干线阶段滞后 + 扫描间隔
    assert_eq!(
        report.assessments[0].reasons.as_slice(),
        &[ReasonCode::EarlyStageNearEta, ReasonCode::ScanGap]
    );
    assert_eq!(
        report.assessments[0].label_drift.as_ref().unwrap().extra,
        vec![ReasonCode::EarlyStageNearEta]
    );
    // C-2: 已签收
    assert!(!report.assessments[1].at_risk);
    assert_eq!(report.at_risk_count, 4);
}

#[test]
fn test_json空国家字段保留并参与判定() {
    let value = serde_json::json!({
        "shipment_id": "B-2",
        "origin_country": "",
        "destination_country": "",
        "origin_iata": "JFK",
        "destination_iata": "TLV",
        "stage": "Linehaul",
        "days_to_eta": 3
    });

    let snapshot = SnapshotMapper::from_json(&value);
    let assessment = ShipmentRiskClassifier::new().assess(&snapshot);

    assert_eq!(assessment.origin_country.as_deref(), Some(""));
    assert_eq!(assessment.lane_type, LaneType::Domestic);
    assert_eq!(assessment.eta_window_days, 2);
    assert!(!assessment.at_risk);
}
