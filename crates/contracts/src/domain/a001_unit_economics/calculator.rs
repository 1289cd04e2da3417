use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::aggregate::{ListingInput, PricingResult};
use super::error::PricingError;
use super::rates::{commission_percent_for, delivery_fee_for, FREE_DELIVERY_THRESHOLD};

/// Расчет прибыльности товара
///
/// Чистая функция: одинаковый ввод всегда дает одинаковый результат.
/// Ввод не валидируется, для проверенного расчета используйте
/// [`try_compute_pricing`]. Не паникует ни на каких значениях.
pub fn compute_pricing(input: &ListingInput) -> PricingResult {
    let commission_percent = commission_percent_for(input.category, input.payment_type);
    let commission_amount = input.selling_price * commission_percent / 100.0;
    let delivery_cost = delivery_cost_for(input);
    let profit = input.selling_price - input.cost - commission_amount - delivery_cost;

    PricingResult {
        commission_amount,
        commission_percent,
        delivery_cost,
        profit,
        profit_percent: margin_percent(profit, input.selling_price),
    }
}

/// Валидация и расчет
pub fn try_compute_pricing(input: &ListingInput) -> Result<PricingResult, PricingError> {
    input.validate()?;
    Ok(compute_pricing(input))
}

/// Доставка за счет продавца, кроме дешевых заказов
pub fn delivery_cost_for(input: &ListingInput) -> f64 {
    if input.selling_price < FREE_DELIVERY_THRESHOLD {
        return 0.0;
    }
    delivery_fee_for(input.delivery_zone, input.weight)
}

/// Маржа в процентах от цены продажи. При нулевой цене не определена.
fn margin_percent(profit: f64, selling_price: f64) -> Option<f64> {
    if selling_price == 0.0 {
        return None;
    }
    let percent = profit / selling_price * 100.0;
    percent.is_finite().then(|| round_to_cents(percent))
}

/// Округление до 2 знаков, половина от нуля
///
/// Округляется точное двоичное значение: 76.00499999999999545 дает 76.00,
/// хотя `value * 100.0` уже равно 7600.5. Значения вне диапазона `Decimal`
/// возвращаются как есть.
pub fn round_to_cents(value: f64) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}
