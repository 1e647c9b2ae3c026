//! 庫存狀態分類

use chrono::NaiveDate;
use dde_core::{InventoryRecord, RestockTrigger, StockStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 狀態分類結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusAssessment {
    /// 庫存狀態
    pub stock_status: StockStatus,

    /// 是否需要補貨
    pub needs_restock: bool,

    /// 補貨觸發原因
    pub restock_trigger: Option<RestockTrigger>,
}

/// 庫存狀態分類器
pub struct StatusCalculator;

impl StatusCalculator {
    /// 分類庫存狀態並判定補貨需求
    ///
    /// 規則依固定優先序評估，先符合者生效：
    /// 1. 現有庫存 ≤ 最低庫存 × 0.5 → 危急；若同時補貨日到期，原因為緊急
    /// 2. 現有庫存 ≤ 最低庫存 → 偏低；若同時補貨日到期，原因為 both
    /// 3. 現有庫存 > 最高庫存 → 超儲，不需補貨
    /// 4. 其餘 → 健康；僅在補貨日到期時需要補貨
    ///
    /// 門檻皆為含邊界比較（≤），不做任何前置捨入
    pub fn classify(
        record: &InventoryRecord,
        today: NaiveDate,
    ) -> dde_core::Result<StatusAssessment> {
        record.validate()?;

        let date_due = record
            .next_restock_date()
            .map_or(false, |next| next <= today);

        let half_minimum = record.minimum_stock / Decimal::from(2);

        let assessment = if record.current_stock <= half_minimum {
            StatusAssessment {
                stock_status: StockStatus::Critical,
                needs_restock: true,
                restock_trigger: Some(if date_due {
                    RestockTrigger::Emergency
                } else {
                    RestockTrigger::StockCritical
                }),
            }
        } else if record.current_stock <= record.minimum_stock {
            StatusAssessment {
                stock_status: StockStatus::Low,
                needs_restock: true,
                restock_trigger: Some(if date_due {
                    RestockTrigger::Both
                } else {
                    RestockTrigger::StockLow
                }),
            }
        } else if record.current_stock > record.maximum_stock {
            StatusAssessment {
                stock_status: StockStatus::Overstocked,
                needs_restock: false,
                restock_trigger: None,
            }
        } else if date_due {
            StatusAssessment {
                stock_status: StockStatus::Healthy,
                needs_restock: true,
                restock_trigger: Some(RestockTrigger::DateDue),
            }
        } else {
            StatusAssessment {
                stock_status: StockStatus::Healthy,
                needs_restock: false,
                restock_trigger: None,
            }
        };

        Ok(assessment)
    }
}
