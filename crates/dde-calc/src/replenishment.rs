//! 補貨量建議

use dde_core::InventoryRecord;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// 建議量的決定依據（供人工稽核）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionBasis {
    /// 理想庫存缺口勝出
    DeficitFromIdeal,
    /// 週期預估銷量勝出
    ProjectedSales,
}

impl SuggestionBasis {
    /// 依據代碼（與序列化格式一致）
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionBasis::DeficitFromIdeal => "deficit_from_ideal",
            SuggestionBasis::ProjectedSales => "projected_sales",
        }
    }
}

/// 補貨建議
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestockSuggestion {
    /// 建議補貨量（≥ 0，整數單位）
    pub quantity: Decimal,

    /// 決定依據
    pub basis: SuggestionBasis,
}

/// 補貨量計算器
pub struct ReplenishmentCalculator;

impl ReplenishmentCalculator {
    /// 建議補貨量 = max(理想庫存缺口, 週期預估銷量, 0)，四捨五入到整數單位
    ///
    /// 理想庫存缺口 = 理想庫存 - 現有庫存（可為負），
    /// 週期預估銷量 = 日均銷量 × 補貨週期天數。
    /// 兩項相等時以理想庫存缺口為準
    pub fn suggest(record: &InventoryRecord) -> dde_core::Result<RestockSuggestion> {
        record.validate()?;

        let deficit_from_ideal = record.ideal_stock() - record.current_stock;
        let projected_sales =
            record.average_daily_sales * Decimal::from(record.restock_cycle_days);

        let (winner, basis) = if deficit_from_ideal >= projected_sales {
            (deficit_from_ideal, SuggestionBasis::DeficitFromIdeal)
        } else {
            (projected_sales, SuggestionBasis::ProjectedSales)
        };

        let quantity = winner
            .max(Decimal::ZERO)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        Ok(RestockSuggestion { quantity, basis })
    }
}
