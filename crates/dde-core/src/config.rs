//! 成本假設與可行性門檻配置

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{DdeError, Result};

/// 集貨中心成本假設（全域業務常數）
///
/// 配置在一批評估期間視為不可變；如需熱更新，必須整個物件一次替換，
/// 避免任何評估讀到只更新一半的假設
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubCostAssumptions {
    /// 每趟直送運費
    pub direct_shipping_cost: Decimal,

    /// 每家門市每月出貨趟數
    pub shipments_per_store_per_month: u32,

    /// 整批運送折扣率（0-1）
    pub bulk_discount_rate: Decimal,

    /// 每趟在地配送費
    pub local_delivery_cost: Decimal,

    /// 平均訂單金額
    pub average_order_value: Decimal,

    /// 預設建置成本
    pub default_setup_cost: Decimal,

    /// 預設每月倉儲費
    pub default_storage_fee: Decimal,

    /// 預設佣金率（%）
    pub default_commission_rate: Decimal,
}

impl HubCostAssumptions {
    /// 驗證配置完整性
    pub fn validate(&self) -> Result<()> {
        if self.bulk_discount_rate < Decimal::ZERO || self.bulk_discount_rate > Decimal::ONE {
            return Err(DdeError::InvalidAssumptions(format!(
                "整批運送折扣率必須介於 0-1: {}",
                self.bulk_discount_rate
            )));
        }
        if self.direct_shipping_cost < Decimal::ZERO
            || self.local_delivery_cost < Decimal::ZERO
            || self.average_order_value < Decimal::ZERO
            || self.default_setup_cost < Decimal::ZERO
            || self.default_storage_fee < Decimal::ZERO
        {
            return Err(DdeError::InvalidAssumptions(
                "成本與金額欄位不可為負".to_string(),
            ));
        }
        if self.default_commission_rate < Decimal::ZERO
            || self.default_commission_rate > Decimal::from(100)
        {
            return Err(DdeError::InvalidAssumptions(format!(
                "預設佣金率必須介於 0-100: {}",
                self.default_commission_rate
            )));
        }
        Ok(())
    }
}

impl Default for HubCostAssumptions {
    fn default() -> Self {
        Self {
            direct_shipping_cost: Decimal::from(15),
            shipments_per_store_per_month: 2,
            bulk_discount_rate: Decimal::new(4, 1), // 0.4
            local_delivery_cost: Decimal::from(5),
            average_order_value: Decimal::from(500),
            default_setup_cost: Decimal::from(5000),
            default_storage_fee: Decimal::from(200),
            default_commission_rate: Decimal::from(5),
        }
    }
}

/// 集貨中心可行性門檻
///
/// minimum_* / maximum_* 為硬性門檻（任一不過即不可行），
/// ideal_* 為理想門檻（決定評級層級）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubViabilityCriteria {
    /// 最低門市數（硬性）
    pub minimum_stores: u32,

    /// 最低每月節省金額（硬性）
    pub minimum_monthly_savings: Decimal,

    /// 最長可接受回本月數（硬性）
    pub maximum_break_even_months: u32,

    /// 理想門市數
    pub ideal_stores: u32,

    /// 理想每月節省金額
    pub ideal_monthly_savings: Decimal,

    /// 理想回本月數
    pub ideal_break_even_months: u32,
}

impl HubViabilityCriteria {
    /// 驗證門檻一致性（理想門檻必須不低於硬性門檻）
    pub fn validate(&self) -> Result<()> {
        if self.minimum_monthly_savings < Decimal::ZERO {
            return Err(DdeError::InvalidCriteria(format!(
                "最低每月節省金額不可為負: {}",
                self.minimum_monthly_savings
            )));
        }
        if self.ideal_stores < self.minimum_stores {
            return Err(DdeError::InvalidCriteria(format!(
                "理想門市數 {} 不可低於最低門市數 {}",
                self.ideal_stores, self.minimum_stores
            )));
        }
        if self.ideal_monthly_savings < self.minimum_monthly_savings {
            return Err(DdeError::InvalidCriteria(format!(
                "理想每月節省金額 {} 不可低於最低要求 {}",
                self.ideal_monthly_savings, self.minimum_monthly_savings
            )));
        }
        if self.ideal_break_even_months > self.maximum_break_even_months {
            return Err(DdeError::InvalidCriteria(format!(
                "理想回本月數 {} 不可長於最長可接受月數 {}",
                self.ideal_break_even_months, self.maximum_break_even_months
            )));
        }
        Ok(())
    }
}

impl Default for HubViabilityCriteria {
    fn default() -> Self {
        Self {
            minimum_stores: 5,
            minimum_monthly_savings: Decimal::from(100),
            maximum_break_even_months: 18,
            ideal_stores: 10,
            ideal_monthly_savings: Decimal::from(500),
            ideal_break_even_months: 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_assumptions() {
        let assumptions = HubCostAssumptions::default();

        assert_eq!(assumptions.direct_shipping_cost, Decimal::from(15));
        assert_eq!(assumptions.shipments_per_store_per_month, 2);
        assert_eq!(assumptions.bulk_discount_rate, Decimal::new(4, 1));
        assert_eq!(assumptions.average_order_value, Decimal::from(500));
        assert!(assumptions.validate().is_ok());
    }

    #[test]
    fn test_assumptions_reject_bad_discount() {
        let assumptions = HubCostAssumptions {
            bulk_discount_rate: Decimal::new(15, 1), // 1.5
            ..HubCostAssumptions::default()
        };

        assert!(assumptions.validate().is_err());
    }

    #[test]
    fn test_assumptions_reject_negative_cost() {
        let assumptions = HubCostAssumptions {
            local_delivery_cost: Decimal::from(-1),
            ..HubCostAssumptions::default()
        };

        assert!(assumptions.validate().is_err());
    }

    #[test]
    fn test_default_criteria_coherent() {
        let criteria = HubViabilityCriteria::default();

        assert!(criteria.validate().is_ok());
        assert!(criteria.ideal_stores >= criteria.minimum_stores);
        assert!(criteria.ideal_break_even_months <= criteria.maximum_break_even_months);
    }

    #[test]
    fn test_criteria_reject_incoherent_ideal() {
        let criteria = HubViabilityCriteria {
            ideal_stores: 3, // 低於最低門市數 5
            ..HubViabilityCriteria::default()
        };

        assert!(criteria.validate().is_err());
    }

    #[test]
    fn test_criteria_reject_ideal_break_even_above_max() {
        let criteria = HubViabilityCriteria {
            ideal_break_even_months: 24, // 長於最長可接受 18
            ..HubViabilityCriteria::default()
        };

        assert!(criteria.validate().is_err());
    }
}
