// ==========================================
// 运单 ETA 风险分类器 - 命令行入口
// ==========================================
// 用法: shipment-eta-risk [--config <path>] [--json] [--locale <code>] <file>...
// 输出: 每票一行摘要（或 --json 输出完整批量报表）
// ==========================================

use anyhow::{bail, Context, Result};
use shipment_eta_risk::config::{default_config_path, ConfigManager};
use shipment_eta_risk::i18n;
use shipment_eta_risk::importer::{FileSnapshotLoader, SnapshotLoader};
use shipment_eta_risk::{logging, ShipmentRiskClassifier, ShipmentSnapshot};
use std::path::PathBuf;

const USAGE: &str =
    "usage: shipment-eta-risk [--config <path>] [--json] [--locale <code>] <file>...";

#[derive(Debug, Default)]
struct CliArgs {
    config: Option<PathBuf>,
    json: bool,
    locale: Option<String>,
    files: Vec<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliArgs> {
    let mut parsed = CliArgs::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config 缺少路径参数")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--locale" => {
                parsed.locale = Some(args.next().context("--locale 缺少语言参数")?);
            }
            "--json" => parsed.json = true,
            "-h" | "--help" => bail!(USAGE),
            other if other.starts_with("--") => bail!("未知参数: {}\n{}", other, USAGE),
            other => parsed.files.push(PathBuf::from(other)),
        }
    }

    if parsed.files.is_empty() {
        bail!(USAGE);
    }
    Ok(parsed)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = parse_args(std::env::args().skip(1))?;

    logging::init();
    if let Some(locale) = &args.locale {
        i18n::set_locale(locale);
    }

    tracing::info!("{} v{}", shipment_eta_risk::APP_NAME, shipment_eta_risk::VERSION);

    // 配置: 显式路径必须存在; 默认路径缺失时使用标准阈值
    let config = match &args.config {
        Some(path) => ConfigManager::from_file(path)
            .await
            .with_context(|| format!("无法加载配置文件: {}", path.display()))?,
        None => match default_config_path() {
            Some(path) => ConfigManager::load_or_default(&path)
                .await
                .with_context(|| format!("无法加载配置文件: {}", path.display()))?,
            None => ConfigManager::new(),
        },
    };

    let classifier = ShipmentRiskClassifier::from_config(&config)
        .await
        .context("风险阈值配置无效")?;

    // 并发加载所有文件，单个文件失败不影响其他文件
    let results = FileSnapshotLoader::new().batch_load(args.files.clone()).await;

    let mut loaded_files = 0usize;
    let mut shipments: Vec<ShipmentSnapshot> = Vec::new();
    for (path, result) in results {
        match result {
            Ok(mut batch) => {
                loaded_files += 1;
                shipments.append(&mut batch);
            }
            Err(e) => {
                let path_text = path.display().to_string();
                let message = i18n::t_with_args("cli.file_failed", &[("path", &path_text)]);
                tracing::error!(error = %e, "{}", message);
            }
        }
    }

    if loaded_files == 0 {
        bail!(i18n::t("cli.no_input"));
    }

    let report = classifier.evaluate_batch(&shipments);

    if args.json {
        let output = serde_json::to_string_pretty(&report).context("报表序列化失败")?;
        println!("{}", output);
        return Ok(());
    }

    for assessment in &report.assessments {
        println!(
            "{}  lane={}",
            assessment.summary_line(),
            i18n::lane_type_label(assessment.lane_type)
        );
        for code in assessment.reasons.iter() {
            println!("    - {}: {}", code, i18n::reason_description(code));
        }
    }

    let total = report.total_count.to_string();
    let at_risk = report.at_risk_count.to_string();
    println!(
        "{}",
        i18n::t_with_args("cli.summary", &[("total", &total), ("at_risk", &at_risk)])
    );

    Ok(())
}
