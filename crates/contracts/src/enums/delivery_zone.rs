use serde::{Deserialize, Serialize};

/// Зона доставки Kaspi
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryZone {
    City,
    Country,
}

impl DeliveryZone {
    /// Получить код зоны
    pub fn code(&self) -> &'static str {
        match self {
            DeliveryZone::City => "city",
            DeliveryZone::Country => "country",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            DeliveryZone::City => "По городу",
            DeliveryZone::Country => "По Казахстану",
        }
    }

    /// Получить все зоны доставки
    pub fn all() -> Vec<DeliveryZone> {
        vec![DeliveryZone::City, DeliveryZone::Country]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "city" => Some(DeliveryZone::City),
            "country" => Some(DeliveryZone::Country),
            _ => None,
        }
    }
}

impl std::fmt::Display for DeliveryZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
