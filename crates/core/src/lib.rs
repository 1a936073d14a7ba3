//! # Tollgate Core
//!
//! Domain types dùng chung cho toàn bộ workspace:
//! - [`VehicleCategory`] / [`Vehicle`]: loại xe qua trạm thu phí
//! - [`TimeBand`]: khung giờ trong ngày
//! - [`TollError`]: lỗi nghiệp vụ

pub mod error;
pub mod time_band;
pub mod vehicle;

pub use error::{TollError, TollResult};
pub use time_band::TimeBand;
pub use vehicle::{Vehicle, VehicleCategory};
