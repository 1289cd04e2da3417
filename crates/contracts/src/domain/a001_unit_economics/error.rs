use thiserror::Error;

use super::aggregate::ListingField;

/// Ошибки расчета юнит-экономики
///
/// Калькулятор отклоняет некорректный ввод целиком, без нормализации.
/// Неизвестная категория ошибкой не считается: для нее есть ставка по умолчанию.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error("Себестоимость не может быть отрицательной: {0}")]
    NegativeCost(f64),

    #[error("Цена продажи не может быть отрицательной: {0}")]
    NegativeSellingPrice(f64),

    #[error("Вес товара должен быть больше нуля: {0}")]
    NonPositiveWeight(f64),

    #[error("Поле {0} должно быть конечным числом")]
    NotFinite(ListingField),

    #[error("Поле {field}: не удалось разобрать число '{value}'")]
    InvalidNumber { field: ListingField, value: String },

    #[error("Неизвестный тип оплаты: {0}")]
    UnknownPaymentType(String),

    #[error("Неизвестная зона доставки: {0}")]
    UnknownDeliveryZone(String),
}
