//! # Vehicle Module
//!
//! Định nghĩa VehicleCategory và Vehicle cho trạm thu phí.
//! Tập loại xe là đóng: Car, Taxi, Bus, DeliveryTruck.

use crate::error::{TollError, TollResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Loại xe qua trạm.
///
/// Mỗi loại có đúng một mức phí cố định, không mở rộng lúc runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleCategory {
    /// Xe con
    Car,
    /// Taxi
    Taxi,
    /// Xe buýt
    Bus,
    /// Xe tải giao hàng
    DeliveryTruck,
}

impl VehicleCategory {
    /// Trả về code string
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCategory::Car => "car",
            VehicleCategory::Taxi => "taxi",
            VehicleCategory::Bus => "bus",
            VehicleCategory::DeliveryTruck => "delivery_truck",
        }
    }

    /// Tất cả loại xe, theo thứ tự khai báo
    pub fn all() -> [VehicleCategory; 4] {
        [
            VehicleCategory::Car,
            VehicleCategory::Taxi,
            VehicleCategory::Bus,
            VehicleCategory::DeliveryTruck,
        ]
    }

    /// Parse từ một tag có thể vắng mặt.
    ///
    /// # Returns
    /// - `Err(MissingCategory)` nếu tag là `None`
    /// - `Err(InvalidCategory)` nếu tag không thuộc tập loại xe
    pub fn from_tag(tag: Option<&str>) -> TollResult<Self> {
        match tag {
            None => Err(TollError::MissingCategory),
            Some(s) => s.parse(),
        }
    }
}

impl FromStr for VehicleCategory {
    type Err = TollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "car" => Ok(VehicleCategory::Car),
            "taxi" => Ok(VehicleCategory::Taxi),
            "bus" => Ok(VehicleCategory::Bus),
            "delivery_truck" | "delivery-truck" | "deliverytruck" | "truck" => {
                Ok(VehicleCategory::DeliveryTruck)
            }
            _ => Err(TollError::InvalidCategory(s.to_string())),
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Một chiếc xe cụ thể với các thuộc tính mô tả.
///
/// Các thuộc tính (số khách, số cuốc, tải trọng...) chỉ mang tính mô tả,
/// mức phí chỉ phụ thuộc vào [`VehicleCategory`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Vehicle {
    Car { passengers: u32 },
    Taxi { fares: u32 },
    Bus { capacity: u32, riders: u32 },
    DeliveryTruck { gross_weight_class: u32 },
}

impl Vehicle {
    pub fn car(passengers: u32) -> Self {
        Vehicle::Car { passengers }
    }

    pub fn taxi(fares: u32) -> Self {
        Vehicle::Taxi { fares }
    }

    pub fn bus(capacity: u32, riders: u32) -> Self {
        Vehicle::Bus { capacity, riders }
    }

    pub fn delivery_truck(gross_weight_class: u32) -> Self {
        Vehicle::DeliveryTruck { gross_weight_class }
    }

    /// Loại xe của chiếc xe này
    pub fn category(&self) -> VehicleCategory {
        match self {
            Vehicle::Car { .. } => VehicleCategory::Car,
            Vehicle::Taxi { .. } => VehicleCategory::Taxi,
            Vehicle::Bus { .. } => VehicleCategory::Bus,
            Vehicle::DeliveryTruck { .. } => VehicleCategory::DeliveryTruck,
        }
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vehicle::Car { passengers } => write!(f, "car ({} passengers)", passengers),
            Vehicle::Taxi { fares } => write!(f, "taxi ({} fares)", fares),
            Vehicle::Bus { capacity, riders } => {
                write!(f, "bus ({}/{} riders)", riders, capacity)
            }
            Vehicle::DeliveryTruck { gross_weight_class } => {
                write!(f, "delivery truck (class {})", gross_weight_class)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("car".parse::<VehicleCategory>(), Ok(VehicleCategory::Car));
        assert_eq!("TAXI".parse::<VehicleCategory>(), Ok(VehicleCategory::Taxi));
        assert_eq!(" bus ".parse::<VehicleCategory>(), Ok(VehicleCategory::Bus));
        assert_eq!(
            "delivery-truck".parse::<VehicleCategory>(),
            Ok(VehicleCategory::DeliveryTruck)
        );
        assert_eq!(
            "boat".parse::<VehicleCategory>(),
            Err(TollError::InvalidCategory("boat".to_string()))
        );
    }

    #[test]
    fn test_from_tag_distinguishes_missing_and_invalid() {
        assert_eq!(VehicleCategory::from_tag(None), Err(TollError::MissingCategory));
        assert_eq!(
            VehicleCategory::from_tag(Some("")),
            Err(TollError::InvalidCategory(String::new()))
        );
        assert_eq!(
            VehicleCategory::from_tag(Some("   ")),
            Err(TollError::InvalidCategory("   ".to_string()))
        );

        let err = VehicleCategory::from_tag(Some("this will fail")).unwrap_err();
        assert!(err.is_invalid_category());

        assert_eq!(
            VehicleCategory::from_tag(Some("Bus")),
            Ok(VehicleCategory::Bus)
        );
    }

    #[test]
    fn test_as_str_parses_back() {
        for category in VehicleCategory::all() {
            assert_eq!(category.as_str().parse::<VehicleCategory>(), Ok(category));
        }
    }

    #[test]
    fn test_vehicle_category() {
        assert_eq!(Vehicle::car(2).category(), VehicleCategory::Car);
        assert_eq!(Vehicle::taxi(0).category(), VehicleCategory::Taxi);
        assert_eq!(Vehicle::bus(90, 15).category(), VehicleCategory::Bus);
        assert_eq!(
            Vehicle::delivery_truck(7500).category(),
            VehicleCategory::DeliveryTruck
        );
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&VehicleCategory::DeliveryTruck).unwrap();
        assert_eq!(json, "\"delivery_truck\"");

        let json = serde_json::to_string(&Vehicle::bus(50, 10)).unwrap();
        assert_eq!(json, r#"{"type":"bus","capacity":50,"riders":10}"#);
    }
}
