//! # TimeBand Module
//!
//! Khung giờ trong ngày dùng cho phụ phí giờ cao điểm.
//!
//! | Giờ      | Band         |
//! |----------|--------------|
//! | [0, 6)   | Overnight    |
//! | [6, 10)  | MorningRush  |
//! | [10, 16) | Daytime      |
//! | [16, 20) | EveningRush  |
//! | [20, 24) | Overnight    |

use crate::error::{TollError, TollResult};
use chrono::Timelike;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBand {
    /// Cao điểm sáng
    MorningRush,
    /// Ban ngày
    Daytime,
    /// Cao điểm chiều
    EveningRush,
    /// Ban đêm
    Overnight,
}

impl TimeBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeBand::MorningRush => "morning_rush",
            TimeBand::Daytime => "daytime",
            TimeBand::EveningRush => "evening_rush",
            TimeBand::Overnight => "overnight",
        }
    }

    /// Tất cả time bands, theo thứ tự khai báo
    pub fn all() -> [TimeBand; 4] {
        [
            TimeBand::MorningRush,
            TimeBand::Daytime,
            TimeBand::EveningRush,
            TimeBand::Overnight,
        ]
    }

    /// Xác định band từ giờ trong ngày.
    ///
    /// Giờ >= 24 nằm ngoài miền xác định, trả về `InvalidHour`.
    pub fn from_hour(hour: u32) -> TollResult<Self> {
        match hour {
            0..=5 => Ok(TimeBand::Overnight),
            6..=9 => Ok(TimeBand::MorningRush),
            10..=15 => Ok(TimeBand::Daytime),
            16..=19 => Ok(TimeBand::EveningRush),
            20..=23 => Ok(TimeBand::Overnight),
            _ => Err(TollError::InvalidHour(hour)),
        }
    }

    /// Band của một thời điểm. chrono đảm bảo `hour() < 24`.
    pub fn of<T: Timelike>(time: &T) -> Self {
        match time.hour() {
            0..=5 | 20.. => TimeBand::Overnight,
            6..=9 => TimeBand::MorningRush,
            10..=15 => TimeBand::Daytime,
            16..=19 => TimeBand::EveningRush,
        }
    }
}

impl fmt::Display for TimeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_from_hour_boundaries() {
        assert_eq!(TimeBand::from_hour(0), Ok(TimeBand::Overnight));
        assert_eq!(TimeBand::from_hour(5), Ok(TimeBand::Overnight));
        assert_eq!(TimeBand::from_hour(6), Ok(TimeBand::MorningRush));
        assert_eq!(TimeBand::from_hour(9), Ok(TimeBand::MorningRush));
        assert_eq!(TimeBand::from_hour(10), Ok(TimeBand::Daytime));
        assert_eq!(TimeBand::from_hour(15), Ok(TimeBand::Daytime));
        assert_eq!(TimeBand::from_hour(16), Ok(TimeBand::EveningRush));
        assert_eq!(TimeBand::from_hour(19), Ok(TimeBand::EveningRush));
        assert_eq!(TimeBand::from_hour(20), Ok(TimeBand::Overnight));
        assert_eq!(TimeBand::from_hour(23), Ok(TimeBand::Overnight));
    }

    #[test]
    fn test_from_hour_out_of_range() {
        assert_eq!(TimeBand::from_hour(24), Err(TollError::InvalidHour(24)));
        assert_eq!(
            TimeBand::from_hour(u32::MAX),
            Err(TollError::InvalidHour(u32::MAX))
        );
    }

    #[test]
    fn test_of_agrees_with_from_hour() {
        for hour in 0..24 {
            let time = NaiveTime::from_hms_opt(hour, 59, 59).unwrap();
            assert_eq!(Ok(TimeBand::of(&time)), TimeBand::from_hour(hour));
        }
    }
}
