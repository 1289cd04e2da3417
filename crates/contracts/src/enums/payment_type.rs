use serde::{Deserialize, Serialize};

/// Тип оплаты покупателем на Kaspi
///
/// Определяет, по какой таблице комиссий считается заказ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Gold,
    Red,
    Kredit,
    Installment12,
    Installment24,
}

impl PaymentType {
    /// Получить код типа оплаты
    pub fn code(&self) -> &'static str {
        match self {
            PaymentType::Gold => "gold",
            PaymentType::Red => "red",
            PaymentType::Kredit => "kredit",
            PaymentType::Installment12 => "installment12",
            PaymentType::Installment24 => "installment24",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentType::Gold => "Gold (обычная оплата)",
            PaymentType::Red => "Kaspi Red",
            PaymentType::Kredit => "Kaspi Kredit",
            PaymentType::Installment12 => "Рассрочка 0-0-12",
            PaymentType::Installment24 => "Рассрочка 0-0-24",
        }
    }

    /// Получить все типы оплаты
    pub fn all() -> Vec<PaymentType> {
        vec![
            PaymentType::Gold,
            PaymentType::Red,
            PaymentType::Kredit,
            PaymentType::Installment12,
            PaymentType::Installment24,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "gold" => Some(PaymentType::Gold),
            "red" => Some(PaymentType::Red),
            "kredit" => Some(PaymentType::Kredit),
            "installment12" => Some(PaymentType::Installment12),
            "installment24" => Some(PaymentType::Installment24),
            _ => None,
        }
    }

    /// Рассрочка считается по фиксированной ставке, без учета категории
    pub fn is_installment(&self) -> bool {
        matches!(self, PaymentType::Installment12 | PaymentType::Installment24)
    }
}

impl std::fmt::Display for PaymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
