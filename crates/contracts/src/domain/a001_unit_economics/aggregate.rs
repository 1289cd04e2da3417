use serde::{Deserialize, Serialize};

use super::error::PricingError;
use crate::enums::{CategoryCode, DeliveryZone, PaymentType};

// ============================================================================
// Input
// ============================================================================

/// Данные товара для расчета юнит-экономики
///
/// Денежные поля в тенге. Значение неизменяемое: форма на каждое изменение
/// поля собирает новый экземпляр и пересчитывает результат.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingInput {
    /// Себестоимость товара
    pub cost: f64,
    /// Цена продажи на Kaspi
    pub selling_price: f64,
    pub category: CategoryCode,
    /// Вес товара, кг
    pub weight: f64,
    pub delivery_zone: DeliveryZone,
    pub payment_type: PaymentType,
}

impl Default for ListingInput {
    fn default() -> Self {
        Self {
            cost: 100_000.0,
            selling_price: 150_000.0,
            category: CategoryCode::Phones,
            weight: 1.0,
            delivery_zone: DeliveryZone::City,
            payment_type: PaymentType::Gold,
        }
    }
}

impl ListingInput {
    /// Валидация данных
    ///
    /// Себестоимость и цена должны быть неотрицательными, вес строго
    /// положительным. Убыточная цена (cost > price) допустима.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !self.cost.is_finite() {
            return Err(PricingError::NotFinite(ListingField::Cost));
        }
        if !self.selling_price.is_finite() {
            return Err(PricingError::NotFinite(ListingField::SellingPrice));
        }
        if !self.weight.is_finite() {
            return Err(PricingError::NotFinite(ListingField::Weight));
        }
        if self.cost < 0.0 {
            return Err(PricingError::NegativeCost(self.cost));
        }
        if self.selling_price < 0.0 {
            return Err(PricingError::NegativeSellingPrice(self.selling_price));
        }
        if self.weight <= 0.0 {
            return Err(PricingError::NonPositiveWeight(self.weight));
        }
        Ok(())
    }
}

/// Поле формы расчета
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListingField {
    Cost,
    SellingPrice,
    Category,
    Weight,
    DeliveryZone,
    PaymentType,
}

impl ListingField {
    /// Имя поля в JSON
    pub fn code(&self) -> &'static str {
        match self {
            ListingField::Cost => "cost",
            ListingField::SellingPrice => "sellingPrice",
            ListingField::Category => "category",
            ListingField::Weight => "weight",
            ListingField::DeliveryZone => "deliveryZone",
            ListingField::PaymentType => "paymentType",
        }
    }

    /// Подпись поля в форме
    pub fn display_name(&self) -> &'static str {
        match self {
            ListingField::Cost => "Себестоимость товара (₸)",
            ListingField::SellingPrice => "Цена продажи на Kaspi (₸)",
            ListingField::Category => "Категория товара",
            ListingField::Weight => "Вес товара (кг)",
            ListingField::DeliveryZone => "Доставка",
            ListingField::PaymentType => "Тип оплаты",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "cost" => Some(ListingField::Cost),
            "sellingPrice" => Some(ListingField::SellingPrice),
            "category" => Some(ListingField::Category),
            "weight" => Some(ListingField::Weight),
            "deliveryZone" => Some(ListingField::DeliveryZone),
            "paymentType" => Some(ListingField::PaymentType),
            _ => None,
        }
    }
}

impl std::fmt::Display for ListingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// Result
// ============================================================================

/// Результат расчета прибыльности одного товара
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    /// Комиссия Kaspi, ₸
    pub commission_amount: f64,
    /// Ставка комиссии, %
    pub commission_percent: f64,
    /// Стоимость доставки, ₸
    pub delivery_cost: f64,
    /// Чистая прибыль, ₸ (может быть отрицательной)
    pub profit: f64,
    /// Маржа, % с двумя знаками. `None` при нулевой цене продажи.
    pub profit_percent: Option<f64>,
}

impl PricingResult {
    pub fn is_loss(&self) -> bool {
        self.profit < 0.0
    }
}
