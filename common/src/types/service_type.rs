use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Ways a restaurant can serve a customer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Delivery,
    Takeout,
    DineIn,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown service type: {0}")]
pub struct UnknownServiceType(pub String);

impl FromStr for ServiceType {
    type Err = UnknownServiceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "delivery" => Ok(ServiceType::Delivery),
            "takeout" => Ok(ServiceType::Takeout),
            "dine_in" => Ok(ServiceType::DineIn),
            other => Err(UnknownServiceType(other.to_string())),
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceType::Delivery => write!(f, "delivery"),
            ServiceType::Takeout => write!(f, "takeout"),
            ServiceType::DineIn => write!(f, "dine_in"),
        }
    }
}
