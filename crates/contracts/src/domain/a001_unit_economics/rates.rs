//! Тарифы Kaspi: комиссии по категориям и стоимость доставки по весу
//!
//! Таблицы неизменяемые и зашиты в код. Поиск по ним никогда не падает.

use serde::{Deserialize, Serialize};

use crate::enums::{CategoryCode, DeliveryZone, PaymentType, TireKind};

/// Ставка для рассрочки 0-0-12 и 0-0-24, не зависит от категории
pub const INSTALLMENT_COMMISSION_PERCENT: f64 = 15.0;

/// Ставка Gold для категорий, которых нет в таблице
pub const GOLD_FALLBACK_PERCENT: f64 = 12.0;

/// Ставка Red/Kredit для категорий, которых нет в таблице
pub const RED_KREDIT_FALLBACK_PERCENT: f64 = 10.0;

/// Заказы дешевле этой суммы доставляются бесплатно для продавца, ₸
pub const FREE_DELIVERY_THRESHOLD: f64 = 5_000.0;

// ============================================================================
// Commission
// ============================================================================

fn gold_rate(category: CategoryCode) -> Option<f64> {
    use CategoryCode::*;
    match category {
        AutoGoods => Some(12.0),
        Accessories => Some(15.0),
        Pharmacy => Some(10.0),
        HomeAppliances => Some(12.0),
        KidsGoods => Some(12.0),
        BooksLeisure => Some(12.0),
        Stationery => Some(12.0),
        Computers => Some(12.0),
        BeautyHealth => Some(12.0),
        Furniture => Some(12.0),
        Shoes => Some(12.0),
        Clothing => Some(12.0),
        Groceries => Some(7.0),
        TvAudioVideo => Some(15.0),
        Phones => Some(15.0),
        HomeGarden => Some(12.0),
        Pets => Some(10.0),
        Jewelry => Some(15.0),
        Cosmetics | Renovation | Sports | Electronics | Other | Unknown => None,
    }
}

fn red_kredit_rate(category: CategoryCode) -> Option<f64> {
    use CategoryCode::*;
    match category {
        AutoGoods => Some(7.0),
        Accessories => Some(10.0),
        Pharmacy => Some(5.0),
        Cosmetics => Some(10.0),
        Furniture => Some(7.0),
        Groceries => Some(5.0),
        Renovation => Some(7.0),
        Sports => Some(10.0),
        Electronics => Some(7.0),
        // в тарифе Kaspi одна строка "Одежда/Обувь"
        Clothing | Shoes => Some(10.0),
        Jewelry => Some(10.0),
        Other => Some(12.5),
        HomeAppliances | KidsGoods | BooksLeisure | Stationery | Computers | BeautyHealth
        | TvAudioVideo | Phones | HomeGarden | Pets | Unknown => None,
    }
}

/// Ставка комиссии Kaspi в процентах для категории и типа оплаты
pub fn commission_percent_for(category: CategoryCode, payment_type: PaymentType) -> f64 {
    match payment_type {
        PaymentType::Gold => gold_rate(category).unwrap_or(GOLD_FALLBACK_PERCENT),
        PaymentType::Red | PaymentType::Kredit => {
            red_kredit_rate(category).unwrap_or(RED_KREDIT_FALLBACK_PERCENT)
        }
        PaymentType::Installment12 | PaymentType::Installment24 => INSTALLMENT_COMMISSION_PERCENT,
    }
}

// ============================================================================
// Delivery
// ============================================================================

/// Весовой диапазон тарифа доставки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WeightBand {
    UpTo5Kg,
    UpTo15Kg,
    UpTo50Kg,
    Over50Kg,
}

impl WeightBand {
    /// Верхняя граница диапазона включительно, кг
    pub fn upper_bound_kg(&self) -> Option<f64> {
        match self {
            WeightBand::UpTo5Kg => Some(5.0),
            WeightBand::UpTo15Kg => Some(15.0),
            WeightBand::UpTo50Kg => Some(50.0),
            WeightBand::Over50Kg => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WeightBand::UpTo5Kg => "до 5 кг",
            WeightBand::UpTo15Kg => "5-15 кг",
            WeightBand::UpTo50Kg => "15-50 кг",
            WeightBand::Over50Kg => "свыше 50 кг",
        }
    }

    pub fn all() -> Vec<WeightBand> {
        vec![
            WeightBand::UpTo5Kg,
            WeightBand::UpTo15Kg,
            WeightBand::UpTo50Kg,
            WeightBand::Over50Kg,
        ]
    }

    /// Первый диапазон, верхняя граница которого не меньше веса.
    /// Вес ровно на границе попадает в более дешевый диапазон.
    pub fn for_weight(weight_kg: f64) -> Self {
        Self::all()
            .into_iter()
            .find(|band| band.upper_bound_kg().is_some_and(|upper| weight_kg <= upper))
            .unwrap_or(WeightBand::Over50Kg)
    }
}

/// Стоимость доставки для зоны и весового диапазона, ₸
pub fn band_fee(zone: DeliveryZone, band: WeightBand) -> f64 {
    match (zone, band) {
        (DeliveryZone::City, WeightBand::UpTo5Kg) => 799.0,
        (DeliveryZone::City, WeightBand::UpTo15Kg) => 999.0,
        (DeliveryZone::City, WeightBand::UpTo50Kg) => 2_299.0,
        (DeliveryZone::City, WeightBand::Over50Kg) => 3_999.0,
        (DeliveryZone::Country, WeightBand::UpTo5Kg) => 1_299.0,
        (DeliveryZone::Country, WeightBand::UpTo15Kg) => 1_699.0,
        (DeliveryZone::Country, WeightBand::UpTo50Kg) => 3_599.0,
        (DeliveryZone::Country, WeightBand::Over50Kg) => 6_499.0,
    }
}

/// Стоимость доставки товара заданного веса, ₸
pub fn delivery_fee_for(zone: DeliveryZone, weight_kg: f64) -> f64 {
    band_fee(zone, WeightBand::for_weight(weight_kg))
}

/// Фиксированный тариф доставки шин, ₸
pub fn tire_fee_for(zone: DeliveryZone, kind: TireKind) -> f64 {
    match (zone, kind) {
        (DeliveryZone::City, TireKind::Car) => 699.0,
        (DeliveryZone::City, TireKind::Truck) => 3_999.0,
        (DeliveryZone::Country, TireKind::Car) => 799.0,
        (DeliveryZone::Country, TireKind::Truck) => 5_699.0,
    }
}

// ============================================================================
// Catalog snapshot
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionRateRow {
    pub category: CategoryCode,
    pub gold_percent: f64,
    pub red_kredit_percent: f64,
    /// Ставка взята из значения по умолчанию, а не из таблицы
    pub gold_is_fallback: bool,
    pub red_kredit_is_fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRateRow {
    pub zone: DeliveryZone,
    pub band: WeightBand,
    pub upper_bound_kg: Option<f64>,
    pub fee: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TireRateRow {
    pub zone: DeliveryZone,
    pub kind: TireKind,
    pub fee: f64,
}

/// Снимок всех тарифов для отображения в интерфейсе
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateCatalog {
    pub commissions: Vec<CommissionRateRow>,
    pub installment_percent: f64,
    pub gold_fallback_percent: f64,
    pub red_kredit_fallback_percent: f64,
    pub free_delivery_threshold: f64,
    pub delivery: Vec<DeliveryRateRow>,
    pub tires: Vec<TireRateRow>,
}

pub fn rate_catalog() -> RateCatalog {
    let commissions = CategoryCode::all()
        .into_iter()
        .map(|category| CommissionRateRow {
            category,
            gold_percent: commission_percent_for(category, PaymentType::Gold),
            red_kredit_percent: commission_percent_for(category, PaymentType::Red),
            gold_is_fallback: gold_rate(category).is_none(),
            red_kredit_is_fallback: red_kredit_rate(category).is_none(),
        })
        .collect();

    let delivery = DeliveryZone::all()
        .into_iter()
        .flat_map(|zone| {
            WeightBand::all().into_iter().map(move |band| DeliveryRateRow {
                zone,
                band,
                upper_bound_kg: band.upper_bound_kg(),
                fee: band_fee(zone, band),
            })
        })
        .collect();

    let tires = DeliveryZone::all()
        .into_iter()
        .flat_map(|zone| {
            TireKind::all().into_iter().map(move |kind| TireRateRow {
                zone,
                kind,
                fee: tire_fee_for(zone, kind),
            })
        })
        .collect();

    RateCatalog {
        commissions,
        installment_percent: INSTALLMENT_COMMISSION_PERCENT,
        gold_fallback_percent: GOLD_FALLBACK_PERCENT,
        red_kredit_fallback_percent: RED_KREDIT_FALLBACK_PERCENT,
        free_delivery_threshold: FREE_DELIVERY_THRESHOLD,
        delivery,
        tires,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gold_rates() {
        assert_eq!(commission_percent_for(CategoryCode::Phones, PaymentType::Gold), 15.0);
        assert_eq!(commission_percent_for(CategoryCode::Groceries, PaymentType::Gold), 7.0);
        assert_eq!(commission_percent_for(CategoryCode::Pets, PaymentType::Gold), 10.0);
    }

    #[test]
    fn test_gold_fallback_for_unknown_and_missing() {
        assert_eq!(commission_percent_for(CategoryCode::Unknown, PaymentType::Gold), 12.0);
        // "Спорт" есть только в таблице Red/Kredit
        assert_eq!(commission_percent_for(CategoryCode::Sports, PaymentType::Gold), 12.0);
    }

    #[test]
    fn test_red_and_kredit_share_a_table() {
        for category in CategoryCode::all() {
            assert_eq!(
                commission_percent_for(category, PaymentType::Red),
                commission_percent_for(category, PaymentType::Kredit)
            );
        }
        assert_eq!(commission_percent_for(CategoryCode::Other, PaymentType::Red), 12.5);
        assert_eq!(commission_percent_for(CategoryCode::Pharmacy, PaymentType::Kredit), 5.0);
    }

    #[test]
    fn test_red_kredit_fallback() {
        assert_eq!(commission_percent_for(CategoryCode::Phones, PaymentType::Red), 10.0);
        assert_eq!(commission_percent_for(CategoryCode::Unknown, PaymentType::Kredit), 10.0);
    }

    #[test]
    fn test_installments_ignore_category() {
        let mut categories = CategoryCode::all();
        categories.push(CategoryCode::Unknown);
        for category in categories {
            assert_eq!(commission_percent_for(category, PaymentType::Installment12), 15.0);
            assert_eq!(commission_percent_for(category, PaymentType::Installment24), 15.0);
        }
    }

    #[test]
    fn test_weight_band_boundaries() {
        assert_eq!(delivery_fee_for(DeliveryZone::City, 5.0), 799.0);
        assert_eq!(delivery_fee_for(DeliveryZone::City, 5.0001), 999.0);
        assert_eq!(delivery_fee_for(DeliveryZone::City, 15.0), 999.0);
        assert_eq!(delivery_fee_for(DeliveryZone::City, 50.0), 2_299.0);
        assert_eq!(delivery_fee_for(DeliveryZone::City, 50.5), 3_999.0);
    }

    #[test]
    fn test_country_fees() {
        assert_eq!(delivery_fee_for(DeliveryZone::Country, 0.3), 1_299.0);
        assert_eq!(delivery_fee_for(DeliveryZone::Country, 10.0), 1_699.0);
        assert_eq!(delivery_fee_for(DeliveryZone::Country, 20.0), 3_599.0);
        assert_eq!(delivery_fee_for(DeliveryZone::Country, 120.0), 6_499.0);
    }

    #[test]
    fn test_zero_weight_takes_cheapest_band() {
        assert_eq!(WeightBand::for_weight(0.0), WeightBand::UpTo5Kg);
    }

    #[test]
    fn test_tire_fees() {
        assert_eq!(tire_fee_for(DeliveryZone::City, TireKind::Car), 699.0);
        assert_eq!(tire_fee_for(DeliveryZone::Country, TireKind::Truck), 5_699.0);
    }

    #[test]
    fn test_rate_catalog_shape() {
        let catalog = rate_catalog();
        assert_eq!(catalog.commissions.len(), CategoryCode::all().len());
        assert_eq!(catalog.delivery.len(), 8);
        assert_eq!(catalog.tires.len(), 4);

        let phones = catalog
            .commissions
            .iter()
            .find(|row| row.category == CategoryCode::Phones)
            .unwrap();
        assert_eq!(phones.gold_percent, 15.0);
        assert!(!phones.gold_is_fallback);
        assert!(phones.red_kredit_is_fallback);
    }
}
