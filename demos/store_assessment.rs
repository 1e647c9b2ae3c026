//! 門市庫存評估示例

use chrono::NaiveDate;
use dde::dde_calc::InventoryAssessor;
use dde::dde_core::InventoryRecord;
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    println!("=== 門市庫存評估示例 ===\n");

    let today = NaiveDate::from_ymd_opt(2025, 11, 10).unwrap();

    // 建立三家門市的同一產品庫存快照
    let records = vec![
        InventoryRecord::new(
            "PROD-001".to_string(),
            "STORE-北門".to_string(),
            Decimal::from(10),
            Decimal::from(30),
            Decimal::from(50),
        )
        .with_last_restock_date(NaiveDate::from_ymd_opt(2025, 10, 1).unwrap())
        .with_restock_cycle_days(14)
        .with_average_daily_sales(Decimal::from(2)),
        InventoryRecord::new(
            "PROD-001".to_string(),
            "STORE-站前".to_string(),
            Decimal::from(40),
            Decimal::from(30),
            Decimal::from(50),
        )
        .with_average_daily_sales(Decimal::new(15, 1)),
        InventoryRecord::new(
            "PROD-001".to_string(),
            "STORE-西區".to_string(),
            Decimal::from(60),
            Decimal::from(30),
            Decimal::from(50),
        ),
    ];

    let results = InventoryAssessor::assess_batch(&records, today);

    for (record, result) in records.iter().zip(results) {
        match result {
            Ok(assessment) => {
                println!("據點: {}", record.location_id);
                println!("  狀態: {}", assessment.stock_status);
                println!("  需要補貨: {}", assessment.needs_restock);
                if let Some(trigger) = assessment.restock_trigger {
                    println!("  觸發原因: {}", trigger);
                }
                if let Some(days) = assessment.days_until_stockout {
                    println!("  預計 {} 天後斷貨", days);
                }
                println!("  建議補貨量: {}\n", assessment.suggested_restock_quantity);
            }
            Err(error) => println!("據點 {} 評估失敗: {}\n", record.location_id, error),
        }
    }

    Ok(())
}
