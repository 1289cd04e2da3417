use serde::{Deserialize, Serialize};

/// Вид шин для отдельного тарифа доставки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TireKind {
    Car,
    Truck,
}

impl TireKind {
    pub fn code(&self) -> &'static str {
        match self {
            TireKind::Car => "car",
            TireKind::Truck => "truck",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TireKind::Car => "Легковые шины",
            TireKind::Truck => "Грузовые шины",
        }
    }

    pub fn all() -> Vec<TireKind> {
        vec![TireKind::Car, TireKind::Truck]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "car" => Some(TireKind::Car),
            "truck" => Some(TireKind::Truck),
            _ => None,
        }
    }
}
