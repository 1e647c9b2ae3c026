//! # DDE Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod hub;
pub mod inventory;
pub mod status;

// Re-export 主要類型
pub use config::{HubCostAssumptions, HubViabilityCriteria};
pub use hub::{HubScenario, LocationCostProfile};
pub use inventory::InventoryRecord;
pub use status::{RestockTrigger, StockStatus};

/// DDE 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum DdeError {
    #[error("庫存記錄驗證失敗: {0}")]
    InvalidInventory(String),

    #[error("集貨中心方案驗證失敗: {0}")]
    InvalidScenario(String),

    #[error("成本假設配置錯誤: {0}")]
    InvalidAssumptions(String),

    #[error("可行性門檻配置錯誤: {0}")]
    InvalidCriteria(String),

    #[error("無效的日期: {0}")]
    InvalidDate(String),

    #[error("計算錯誤: {0}")]
    CalculationError(String),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DdeError>;
