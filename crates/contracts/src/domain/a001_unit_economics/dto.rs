use serde::{Deserialize, Serialize};

use super::aggregate::{ListingInput, PricingResult};
use crate::enums::{CategoryCode, DeliveryZone, PaymentType, TireKind};
use crate::shared::number_format::{format_money, format_percent};

// ============================================================================
// Calculation
// ============================================================================

/// Результат, отформатированный для показа пользователю
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedResult {
    pub commission: String,
    pub commission_percent: String,
    pub delivery: String,
    pub profit: String,
    pub profit_percent: String,
}

impl From<&PricingResult> for FormattedResult {
    fn from(result: &PricingResult) -> Self {
        Self {
            commission: format_money(result.commission_amount),
            commission_percent: format_percent(Some(result.commission_percent)),
            delivery: format_money(result.delivery_cost),
            profit: format_money(result.profit),
            profit_percent: format_percent(result.profit_percent),
        }
    }
}

/// Ответ на запрос расчета одного товара
///
/// `input` содержит нормализованный ввод: незнакомая категория возвращается
/// как `"Неизвестная категория"`, а не в исходном написании.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    pub input: ListingInput,
    pub result: PricingResult,
    pub formatted: FormattedResult,
}

impl CalculationResponse {
    pub fn new(input: ListingInput, result: PricingResult) -> Self {
        let formatted = FormattedResult::from(&result);
        Self {
            input,
            result,
            formatted,
        }
    }
}

/// Запрос на расчет нескольких товаров
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCalculationRequest {
    pub items: Vec<ListingInput>,
}

/// Результат расчета одного товара в пакете
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItemResult {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<PricingResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Ответ на пакетный расчет
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchCalculationResponse {
    pub items: Vec<BatchItemResult>,
    pub succeeded: usize,
    pub failed: usize,
}

// ============================================================================
// Options
// ============================================================================

/// Элемент выпадающего списка
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    pub code: String,
    pub label: String,
}

impl OptionItem {
    fn new(code: &str, label: &str) -> Self {
        Self {
            code: code.to_string(),
            label: label.to_string(),
        }
    }
}

/// Справочники для формы расчета
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorOptions {
    pub categories: Vec<OptionItem>,
    pub payment_types: Vec<OptionItem>,
    pub delivery_zones: Vec<OptionItem>,
    pub tire_kinds: Vec<OptionItem>,
}

impl CalculatorOptions {
    pub fn build() -> Self {
        Self {
            categories: CategoryCode::all()
                .iter()
                .map(|c| OptionItem::new(c.code(), c.display_name()))
                .collect(),
            payment_types: PaymentType::all()
                .iter()
                .map(|p| OptionItem::new(p.code(), p.display_name()))
                .collect(),
            delivery_zones: DeliveryZone::all()
                .iter()
                .map(|z| OptionItem::new(z.code(), z.display_name()))
                .collect(),
            tire_kinds: TireKind::all()
                .iter()
                .map(|t| OptionItem::new(t.code(), t.display_name()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_unit_economics::calculator::compute_pricing;

    #[test]
    fn test_formatted_default_result() {
        let input = ListingInput::default();
        let response = CalculationResponse::new(input, compute_pricing(&input));

        assert_eq!(response.formatted.commission, "22 500 ₸");
        assert_eq!(response.formatted.commission_percent, "15.00%");
        assert_eq!(response.formatted.delivery, "799 ₸");
        assert_eq!(response.formatted.profit, "26 701 ₸");
        assert_eq!(response.formatted.profit_percent, "17.80%");
    }

    #[test]
    fn test_unknown_category_is_echoed_normalized() {
        let input: ListingInput = serde_json::from_value(serde_json::json!({
            "cost": 100000,
            "sellingPrice": 150000,
            "category": "Яхты",
            "weight": 1,
            "deliveryZone": "city",
            "paymentType": "gold"
        }))
        .unwrap();
        let response = CalculationResponse::new(input, compute_pricing(&input));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["input"]["category"], "Неизвестная категория");
        assert_eq!(json["result"]["commissionPercent"], 12.0);
    }

    #[test]
    fn test_undefined_margin_serializes_as_null() {
        let input = ListingInput {
            selling_price: 0.0,
            ..ListingInput::default()
        };
        let json = serde_json::to_value(compute_pricing(&input)).unwrap();
        assert!(json["profitPercent"].is_null());
    }

    #[test]
    fn test_batch_item_omits_empty_fields() {
        let item = BatchItemResult {
            index: 2,
            result: None,
            error: Some("bad".into()),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["index"], 2);
        assert!(json.get("result").is_none());
        assert_eq!(json["error"], "bad");
    }

    #[test]
    fn test_options_lists() {
        let options = CalculatorOptions::build();
        assert_eq!(options.categories.len(), 23);
        assert_eq!(options.payment_types.len(), 5);
        assert_eq!(options.delivery_zones[1].label, "По Казахстану");
        assert_eq!(options.payment_types[3].code, "installment12");
    }
}
