//! # DDE
//!
//! 經銷配送決策引擎：庫存狀態與補貨判定、集貨中心經濟效益評估

pub use dde_calc;
pub use dde_core;
pub use dde_hub;
