//! 庫存狀態與補貨觸發類型

use serde::{Deserialize, Serialize};

/// 庫存狀態
///
/// 變體依庫存量由低到高排列，因此可直接以 `<` / `>` 比較：
/// 庫存減少時狀態只會往 Critical 方向移動
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// 危急（≤ 最低庫存的一半）
    Critical,
    /// 偏低（≤ 最低庫存）
    Low,
    /// 健康
    Healthy,
    /// 超儲（> 最高庫存）
    Overstocked,
}

impl StockStatus {
    /// 狀態代碼（與序列化格式一致）
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Critical => "critical",
            StockStatus::Low => "low",
            StockStatus::Healthy => "healthy",
            StockStatus::Overstocked => "overstocked",
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 補貨觸發原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestockTrigger {
    /// 庫存偏低
    StockLow,
    /// 庫存危急
    StockCritical,
    /// 補貨日到期
    DateDue,
    /// 庫存偏低且補貨日到期
    Both,
    /// 緊急（庫存危急且補貨日到期）
    Emergency,
}

impl RestockTrigger {
    /// 原因代碼（與序列化格式一致）
    pub fn as_str(&self) -> &'static str {
        match self {
            RestockTrigger::StockLow => "stock_low",
            RestockTrigger::StockCritical => "stock_critical",
            RestockTrigger::DateDue => "date_due",
            RestockTrigger::Both => "both",
            RestockTrigger::Emergency => "emergency",
        }
    }
}

impl std::fmt::Display for RestockTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
