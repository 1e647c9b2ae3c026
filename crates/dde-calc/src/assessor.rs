//! 庫存評估主流程

use chrono::NaiveDate;
use dde_core::InventoryRecord;
use rayon::prelude::*;

use crate::{
    InventoryAssessment, ReplenishmentCalculator, StatusCalculator, StockoutCalculator,
};

/// 庫存評估器
///
/// 純計算，不持有狀態、不做 I/O；「今天」由呼叫端注入
pub struct InventoryAssessor;

impl InventoryAssessor {
    /// 評估單筆庫存記錄，一次算齊所有衍生欄位
    pub fn assess(
        record: &InventoryRecord,
        today: NaiveDate,
    ) -> dde_core::Result<InventoryAssessment> {
        record.validate()?;

        tracing::debug!(
            "評估庫存記錄: {} @ {} (現有 {})",
            record.product_id,
            record.location_id,
            record.current_stock
        );

        let status = StatusCalculator::classify(record, today)?;
        let stockout = StockoutCalculator::project(record, today)?;
        let suggestion = ReplenishmentCalculator::suggest(record)?;

        Ok(InventoryAssessment {
            record_id: record.id,
            stock_status: status.stock_status,
            needs_restock: status.needs_restock,
            restock_trigger: status.restock_trigger,
            ideal_stock: record.ideal_stock(),
            next_restock_date: record.next_restock_date(),
            days_until_stockout: stockout.days_until_stockout,
            projected_stockout_date: stockout.projected_stockout_date,
            suggested_restock_quantity: suggestion.quantity,
            suggestion_basis: suggestion.basis,
        })
    }

    /// 批次評估（並行）
    ///
    /// 各記錄之間無順序相依，可安全並行；停用的記錄不參與評估。
    /// 單筆驗證失敗只影響該筆，不中斷整批
    pub fn assess_batch(
        records: &[InventoryRecord],
        today: NaiveDate,
    ) -> Vec<dde_core::Result<InventoryAssessment>> {
        let active: Vec<&InventoryRecord> =
            records.iter().filter(|r| r.is_active).collect();

        tracing::info!(
            "開始批次庫存評估：{} 筆（{} 筆停用已略過）",
            active.len(),
            records.len() - active.len()
        );

        let results: Vec<_> = active
            .par_iter()
            .map(|record| Self::assess(record, today))
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        let need_restock = results
            .iter()
            .filter(|r| matches!(r, Ok(a) if a.needs_restock))
            .count();
        tracing::info!(
            "批次庫存評估完成：{} 筆需補貨，{} 筆驗證失敗",
            need_restock,
            failed
        );

        results
    }
}
