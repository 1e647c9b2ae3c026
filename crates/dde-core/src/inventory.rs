//! 庫存記錄模型

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{DdeError, Result};

/// 庫存記錄（每個產品 × 據點一筆）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// 記錄ID
    pub id: Uuid,

    /// 產品ID
    pub product_id: String,

    /// 據點ID（門市或集貨中心）
    pub location_id: String,

    /// 現有庫存
    pub current_stock: Decimal,

    /// 最低庫存
    pub minimum_stock: Decimal,

    /// 最高庫存
    pub maximum_stock: Decimal,

    /// 理想庫存百分比（0-100，相對於最高庫存）
    pub ideal_stock_percentage: Decimal,

    /// 上次補貨日期
    pub last_restock_date: Option<NaiveDate>,

    /// 補貨週期（天）
    pub restock_cycle_days: u32,

    /// 日均銷量
    pub average_daily_sales: Decimal,

    /// 是否啟用（記錄不刪除，只停用）
    pub is_active: bool,
}

impl InventoryRecord {
    /// 創建新的庫存記錄
    pub fn new(
        product_id: String,
        location_id: String,
        current_stock: Decimal,
        minimum_stock: Decimal,
        maximum_stock: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            location_id,
            current_stock,
            minimum_stock,
            maximum_stock,
            ideal_stock_percentage: Decimal::from(80),
            last_restock_date: None,
            restock_cycle_days: 30,
            average_daily_sales: Decimal::ZERO,
            is_active: true,
        }
    }

    /// 建構器模式：設置理想庫存百分比
    pub fn with_ideal_stock_percentage(mut self, percentage: Decimal) -> Self {
        self.ideal_stock_percentage = percentage;
        self
    }

    /// 建構器模式：設置上次補貨日期
    pub fn with_last_restock_date(mut self, date: NaiveDate) -> Self {
        self.last_restock_date = Some(date);
        self
    }

    /// 建構器模式：設置補貨週期
    pub fn with_restock_cycle_days(mut self, days: u32) -> Self {
        self.restock_cycle_days = days;
        self
    }

    /// 建構器模式：設置日均銷量
    pub fn with_average_daily_sales(mut self, sales: Decimal) -> Self {
        self.average_daily_sales = sales;
        self
    }

    /// 理想庫存 = floor(最高庫存 × 理想百分比 / 100)
    ///
    /// 永遠重新計算，不另外儲存
    pub fn ideal_stock(&self) -> Decimal {
        (self.maximum_stock * self.ideal_stock_percentage / Decimal::from(100)).floor()
    }

    /// 下次補貨日期 = 上次補貨日期 + 補貨週期（日曆天，不跳過假日）
    pub fn next_restock_date(&self) -> Option<NaiveDate> {
        Self::next_restock_from(self.last_restock_date, self.restock_cycle_days)
    }

    /// 從上次補貨日期與週期推算下次補貨日期
    pub fn next_restock_from(
        last_restock_date: Option<NaiveDate>,
        cycle_days: u32,
    ) -> Option<NaiveDate> {
        last_restock_date.map(|date| {
            date.checked_add_signed(Duration::days(cycle_days as i64))
                .expect("日期溢出")
        })
    }

    /// 驗證記錄完整性
    ///
    /// 資料矛盾屬於輸入錯誤，直接拒絕，不做靜默修正
    pub fn validate(&self) -> Result<()> {
        if self.current_stock < Decimal::ZERO {
            return Err(DdeError::InvalidInventory(format!(
                "現有庫存不可為負: {}",
                self.current_stock
            )));
        }
        if self.minimum_stock < Decimal::ZERO {
            return Err(DdeError::InvalidInventory(format!(
                "最低庫存不可為負: {}",
                self.minimum_stock
            )));
        }
        if self.maximum_stock < self.minimum_stock {
            return Err(DdeError::InvalidInventory(format!(
                "最高庫存 {} 不可低於最低庫存 {}",
                self.maximum_stock, self.minimum_stock
            )));
        }
        if self.restock_cycle_days == 0 {
            return Err(DdeError::InvalidInventory(
                "補貨週期必須為正整數".to_string(),
            ));
        }
        if self.ideal_stock_percentage < Decimal::ZERO
            || self.ideal_stock_percentage > Decimal::from(100)
        {
            return Err(DdeError::InvalidInventory(format!(
                "理想庫存百分比必須介於 0-100: {}",
                self.ideal_stock_percentage
            )));
        }
        if self.average_daily_sales < Decimal::ZERO {
            return Err(DdeError::InvalidInventory(format!(
                "日均銷量不可為負: {}",
                self.average_daily_sales
            )));
        }
        Ok(())
    }

    /// 停用記錄（生命週期：不刪除，只停用）
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}
