// ==========================================
// 运单 ETA 风险分类器 - 线路国家解析
// ==========================================
// 职责: 确定始发/目的国家代码
// 规则（每一端独立）:
//   1) 显式国家字段存在 (Some，含空串) → 原样使用
//   2) 否则按 IATA 代码查内置映射表
//   3) 否则 → 未知 (None，不是错误)
// ==========================================

use crate::domain::shipment::ShipmentSnapshot;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// 内置 IATA → ISO-alpha-2 映射
const BUILTIN_IATA_COUNTRIES: &[(&str, &str)] = &[
    ("TLV", "IL"),
    ("LHR", "GB"),
    ("AMS", "NL"),
    ("FRA", "DE"),
    ("JFK", "US"),
    ("SFO", "US"),
    ("ORD", "US"),
    ("BOS", "US"),
    ("MIA", "US"),
    ("LAX", "US"),
    ("SEA", "US"),
    ("YVR", "CA"),
    ("HKG", "HK"),
    ("MAD", "ES"),
    ("CDG", "FR"),
    ("NRT", "JP"),
    ("SYD", "AU"),
    ("DUB", "IE"),
    ("SZX", "CN"),
];

static GLOBAL_TABLE: OnceLock<CountryTable> = OnceLock::new();

// ==========================================
// CountryTable - IATA 国家映射表
// ==========================================
// 构造后只读; Clone 只复制 Arc
#[derive(Debug, Clone)]
pub struct CountryTable {
    entries: Arc<HashMap<String, String>>,
}

impl CountryTable {
    /// 进程级内置映射表（首次访问时构造）
    pub fn global() -> &'static CountryTable {
        GLOBAL_TABLE.get_or_init(|| CountryTable::from_pairs(BUILTIN_IATA_COUNTRIES.iter().copied()))
    }

    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let entries = pairs
            .into_iter()
            .map(|(iata, country)| (iata.to_string(), country.to_string()))
            .collect();
        Self {
            entries: Arc::new(entries),
        }
    }

    /// 内置表 + 覆盖项（同名 IATA 以覆盖项为准）
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        if overrides.is_empty() {
            return Self::global().clone();
        }

        let mut entries: HashMap<String, String> = (*Self::global().entries).clone();
        for (iata, country) in overrides {
            entries.insert(iata.clone(), country.clone());
        }
        Self {
            entries: Arc::new(entries),
        }
    }

    /// 精确匹配查询（区分大小写）
    pub fn lookup(&self, iata: &str) -> Option<&str> {
        self.entries.get(iata).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ==========================================
// ResolvedLane - 解析后的线路两端国家
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedLane<'a> {
    pub origin_country: Option<&'a str>,
    pub destination_country: Option<&'a str>,
}

// ==========================================
// LaneResolver - 线路国家解析器
// ==========================================
#[derive(Debug, Clone)]
pub struct LaneResolver {
    table: CountryTable,
}

impl Default for LaneResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl LaneResolver {
    /// 使用内置映射表
    pub fn new() -> Self {
        Self {
            table: CountryTable::global().clone(),
        }
    }

    pub fn with_table(table: CountryTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &CountryTable {
        &self.table
    }

    pub fn resolve<'a>(&'a self, shipment: &'a ShipmentSnapshot) -> ResolvedLane<'a> {
        ResolvedLane {
            origin_country: self.resolve_side(
                shipment.origin_country.as_deref(),
                shipment.origin_iata.as_deref(),
            ),
            destination_country: self.resolve_side(
                shipment.destination_country.as_deref(),
                shipment.destination_iata.as_deref(),
            ),
        }
    }

    fn resolve_side<'a>(
        &'a self,
        explicit_country: Option<&'a str>,
        iata: Option<&'a str>,
    ) -> Option<&'a str> {
        // 显式字段存在即采用（含空字符串），缺失时才查 IATA
        explicit_country.or_else(|| iata.and_then(|code| self.table.lookup(code)))
    }
}
