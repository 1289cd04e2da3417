use super::aggregate::{ListingField, ListingInput, PricingResult};
use super::calculator::try_compute_pricing;
use super::error::PricingError;
use crate::enums::{CategoryCode, DeliveryZone, PaymentType};

/// Состояние формы юнит-экономики
///
/// Хранит текущий ввод и результат последнего пересчета. Любое изменение
/// поля сразу синхронно пересчитывает результат. Для числовых полей
/// запоминается введенный текст, даже если он пока не разбирается
/// (`""`, `"0."`), чтобы поле ввода не затиралось на каждом нажатии.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitEconomicsForm {
    input: ListingInput,
    result: Result<PricingResult, PricingError>,
    cost_text: String,
    selling_price_text: String,
    weight_text: String,
}

impl Default for UnitEconomicsForm {
    fn default() -> Self {
        Self::new(ListingInput::default())
    }
}

impl UnitEconomicsForm {
    pub fn new(input: ListingInput) -> Self {
        let result = try_compute_pricing(&input);
        Self {
            input,
            result,
            cost_text: input.cost.to_string(),
            selling_price_text: input.selling_price.to_string(),
            weight_text: input.weight.to_string(),
        }
    }

    pub fn input(&self) -> &ListingInput {
        &self.input
    }

    /// Текст числового поля в том виде, как его ввели
    pub fn field_text(&self, field: ListingField) -> Option<&str> {
        match field {
            ListingField::Cost => Some(&self.cost_text),
            ListingField::SellingPrice => Some(&self.selling_price_text),
            ListingField::Weight => Some(&self.weight_text),
            _ => None,
        }
    }

    fn field_text_mut(&mut self, field: ListingField) -> Option<&mut String> {
        match field {
            ListingField::Cost => Some(&mut self.cost_text),
            ListingField::SellingPrice => Some(&mut self.selling_price_text),
            ListingField::Weight => Some(&mut self.weight_text),
            _ => None,
        }
    }

    /// Результат для текущего ввода или ошибка валидации
    pub fn current_result(&self) -> Result<&PricingResult, &PricingError> {
        self.result.as_ref()
    }

    /// Обновить одно поле из строкового значения элемента формы
    ///
    /// Если значение не разбирается, ввод не меняется, а ошибка становится
    /// текущим результатом.
    pub fn set_field(&mut self, field: ListingField, value: &str) -> Result<(), PricingError> {
        if let Some(text) = self.field_text_mut(field) {
            *text = value.to_string();
        }
        let mut next = self.input;
        let parsed = match field {
            ListingField::Cost => parse_number(field, value).map(|v| next.cost = v),
            ListingField::SellingPrice => {
                parse_number(field, value).map(|v| next.selling_price = v)
            }
            ListingField::Weight => parse_number(field, value).map(|v| next.weight = v),
            ListingField::Category => {
                next.category = CategoryCode::from_code(value);
                Ok(())
            }
            ListingField::DeliveryZone => DeliveryZone::from_code(value)
                .map(|zone| next.delivery_zone = zone)
                .ok_or_else(|| PricingError::UnknownDeliveryZone(value.to_string())),
            ListingField::PaymentType => PaymentType::from_code(value)
                .map(|payment| next.payment_type = payment)
                .ok_or_else(|| PricingError::UnknownPaymentType(value.to_string())),
        };

        if let Err(e) = parsed {
            self.result = Err(e.clone());
            return Err(e);
        }
        self.apply(next)
    }

    pub fn set_cost(&mut self, cost: f64) -> Result<(), PricingError> {
        self.cost_text = cost.to_string();
        self.apply(ListingInput { cost, ..self.input })
    }

    pub fn set_selling_price(&mut self, selling_price: f64) -> Result<(), PricingError> {
        self.selling_price_text = selling_price.to_string();
        self.apply(ListingInput {
            selling_price,
            ..self.input
        })
    }

    pub fn set_category(&mut self, category: CategoryCode) -> Result<(), PricingError> {
        self.apply(ListingInput {
            category,
            ..self.input
        })
    }

    pub fn set_weight(&mut self, weight: f64) -> Result<(), PricingError> {
        self.weight_text = weight.to_string();
        self.apply(ListingInput { weight, ..self.input })
    }

    pub fn set_delivery_zone(&mut self, delivery_zone: DeliveryZone) -> Result<(), PricingError> {
        self.apply(ListingInput {
            delivery_zone,
            ..self.input
        })
    }

    pub fn set_payment_type(&mut self, payment_type: PaymentType) -> Result<(), PricingError> {
        self.apply(ListingInput {
            payment_type,
            ..self.input
        })
    }

    fn apply(&mut self, next: ListingInput) -> Result<(), PricingError> {
        self.input = next;
        self.result = try_compute_pricing(&self.input);
        self.result.as_ref().map(|_| ()).map_err(|e| e.clone())
    }
}

/// Числа из полей ввода: пробелы между разрядами и запятая допускаются
fn parse_number(field: ListingField, value: &str) -> Result<f64, PricingError> {
    let normalized: String = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    normalized
        .parse::<f64>()
        .map_err(|_| PricingError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}
