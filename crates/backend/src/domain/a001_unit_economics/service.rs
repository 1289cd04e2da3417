use contracts::domain::a001_unit_economics::dto::{
    BatchCalculationResponse, BatchItemResult, CalculationResponse, CalculatorOptions,
};
use contracts::domain::a001_unit_economics::rates::{rate_catalog, RateCatalog};
use contracts::domain::a001_unit_economics::{try_compute_pricing, ListingInput, PricingError};
use once_cell::sync::Lazy;

use crate::shared::error::AppError;

static RATE_CATALOG: Lazy<RateCatalog> = Lazy::new(rate_catalog);
static OPTIONS: Lazy<CalculatorOptions> = Lazy::new(CalculatorOptions::build);

/// Расчет одного товара
pub fn calculate(input: ListingInput) -> Result<CalculationResponse, PricingError> {
    match try_compute_pricing(&input) {
        Ok(result) => {
            tracing::debug!(
                category = %input.category,
                payment_type = %input.payment_type,
                profit = result.profit,
                "unit economics calculated"
            );
            Ok(CalculationResponse::new(input, result))
        }
        Err(e) => {
            tracing::warn!("Rejected unit economics input: {}", e);
            Err(e)
        }
    }
}

/// Пакетный расчет. Ошибка в одном товаре не прерывает остальные.
pub fn calculate_batch(
    items: &[ListingInput],
    max_batch_size: usize,
) -> Result<BatchCalculationResponse, AppError> {
    if items.is_empty() {
        return Err(AppError::EmptyBatch);
    }
    if items.len() > max_batch_size {
        return Err(AppError::BatchTooLarge {
            count: items.len(),
            max: max_batch_size,
        });
    }

    let results: Vec<BatchItemResult> = items
        .iter()
        .enumerate()
        .map(|(index, input)| match try_compute_pricing(input) {
            Ok(result) => BatchItemResult {
                index,
                result: Some(result),
                error: None,
            },
            Err(e) => BatchItemResult {
                index,
                result: None,
                error: Some(e.to_string()),
            },
        })
        .collect();

    let failed = results.iter().filter(|r| r.error.is_some()).count();
    let succeeded = results.len() - failed;
    tracing::info!(
        "Batch unit economics: {} items, {} ok, {} failed",
        results.len(),
        succeeded,
        failed
    );

    Ok(BatchCalculationResponse {
        items: results,
        succeeded,
        failed,
    })
}

pub fn rates() -> &'static RateCatalog {
    &RATE_CATALOG
}

pub fn options() -> &'static CalculatorOptions {
    &OPTIONS
}

pub fn defaults() -> ListingInput {
    ListingInput::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_default() {
        let response = calculate(defaults()).unwrap();
        assert_eq!(response.result.profit, 26_701.0);
        assert_eq!(response.formatted.profit, "26 701 ₸");
    }

    #[test]
    fn test_calculate_rejects_negative_cost() {
        let input = ListingInput {
            cost: -1.0,
            ..defaults()
        };
        assert_eq!(calculate(input), Err(PricingError::NegativeCost(-1.0)));
    }

    #[test]
    fn test_batch_keeps_going_after_bad_item() {
        let items = vec![
            defaults(),
            ListingInput {
                weight: 0.0,
                ..defaults()
            },
            ListingInput {
                selling_price: 4_000.0,
                cost: 1_000.0,
                ..defaults()
            },
        ];
        let response = calculate_batch(&items, 10).unwrap();

        assert_eq!(response.succeeded, 2);
        assert_eq!(response.failed, 1);
        assert_eq!(response.items[1].index, 1);
        assert!(response.items[1].result.is_none());
        assert_eq!(response.items[2].result.unwrap().delivery_cost, 0.0);
    }

    #[test]
    fn test_batch_limits() {
        assert!(matches!(calculate_batch(&[], 10), Err(AppError::EmptyBatch)));

        let items = vec![defaults(); 3];
        assert!(matches!(
            calculate_batch(&items, 2),
            Err(AppError::BatchTooLarge { count: 3, max: 2 })
        ));
    }

    #[test]
    fn test_catalog_is_shared() {
        assert!(std::ptr::eq(rates(), rates()));
        assert_eq!(options().payment_types.len(), 5);
    }
}
