use contracts::domain::a001_unit_economics::{
    ListingField, ListingInput, PricingError, PricingResult, UnitEconomicsForm,
};
use leptos::prelude::*;

/// ViewModel for the unit economics calculator
///
/// Расчет синхронный: каждое изменение поля сразу пересчитывает результат
/// внутри `UnitEconomicsForm`.
#[derive(Clone, Copy)]
pub struct UnitEconomicsViewModel {
    pub form: RwSignal<UnitEconomicsForm>,
}

impl UnitEconomicsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(UnitEconomicsForm::default()),
        }
    }

    pub fn set_field(&self, field: ListingField, value: String) {
        self.form.update(|form| {
            if let Err(e) = form.set_field(field, &value) {
                log::debug!("unit economics: {} rejected: {}", field, e);
            }
        });
    }

    pub fn input(&self) -> ListingInput {
        self.form.with(|form| *form.input())
    }

    pub fn result(&self) -> Result<PricingResult, PricingError> {
        self.form
            .with(|form| form.current_result().copied().map_err(|e| e.clone()))
    }

    /// Введенный текст числового поля для `prop:value`
    pub fn number_value(&self, field: ListingField) -> String {
        self.form
            .with(|form| form.field_text(field).unwrap_or_default().to_string())
    }

    pub fn reset(&self) {
        self.form.set(UnitEconomicsForm::default());
    }
}

impl Default for UnitEconomicsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
