//! 斷貨預測

use chrono::{Duration, NaiveDate};
use dde_core::{DdeError, InventoryRecord};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 斷貨預測結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockoutProjection {
    /// 距離斷貨天數
    pub days_until_stockout: Option<i64>,

    /// 預計斷貨日期
    pub projected_stockout_date: Option<NaiveDate>,
}

/// 斷貨預測計算器
pub struct StockoutCalculator;

impl StockoutCalculator {
    /// 預測斷貨日期
    ///
    /// 天數 = ceil(現有庫存 / 日均銷量)：不足一天的存量仍算一天，
    /// 一律無條件進位，不用四捨五入。日均銷量 ≤ 0 時無銷量訊號，
    /// 兩個欄位皆為 None（屬於合法輸入，不是錯誤）
    pub fn project(
        record: &InventoryRecord,
        today: NaiveDate,
    ) -> dde_core::Result<StockoutProjection> {
        record.validate()?;

        if record.average_daily_sales <= Decimal::ZERO {
            return Ok(StockoutProjection {
                days_until_stockout: None,
                projected_stockout_date: None,
            });
        }

        let days = (record.current_stock / record.average_daily_sales)
            .ceil()
            .to_i64()
            .ok_or_else(|| DdeError::CalculationError("斷貨天數超出範圍".to_string()))?;

        let date = today
            .checked_add_signed(Duration::days(days))
            .ok_or_else(|| DdeError::InvalidDate(format!("今天 + {} 天溢出", days)))?;

        Ok(StockoutProjection {
            days_until_stockout: Some(days),
            projected_stockout_date: Some(date),
        })
    }
}
