//! # DDE 庫存評估引擎
//!
//! 庫存狀態分類、斷貨預測與補貨建議

pub mod assessor;
pub mod replenishment;
pub mod status;
pub mod stockout;

// Re-export 主要類型
pub use assessor::InventoryAssessor;
pub use replenishment::{ReplenishmentCalculator, RestockSuggestion, SuggestionBasis};
pub use status::{StatusAssessment, StatusCalculator};
pub use stockout::{StockoutCalculator, StockoutProjection};

use chrono::NaiveDate;
use dde_core::{RestockTrigger, StockStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 單筆庫存記錄的完整評估結果
///
/// 所有衍生欄位一次算齊，適合直接顯示或觸發下游通知流程
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryAssessment {
    /// 來源記錄ID
    pub record_id: Uuid,

    /// 庫存狀態
    pub stock_status: StockStatus,

    /// 是否需要補貨
    pub needs_restock: bool,

    /// 補貨觸發原因（needs_restock 為 false 時為 None）
    pub restock_trigger: Option<RestockTrigger>,

    /// 理想庫存
    pub ideal_stock: Decimal,

    /// 下次補貨日期
    pub next_restock_date: Option<NaiveDate>,

    /// 距離斷貨天數（無銷量訊號時為 None）
    pub days_until_stockout: Option<i64>,

    /// 預計斷貨日期
    pub projected_stockout_date: Option<NaiveDate>,

    /// 建議補貨量
    pub suggested_restock_quantity: Decimal,

    /// 建議量的決定依據
    pub suggestion_basis: SuggestionBasis,
}
