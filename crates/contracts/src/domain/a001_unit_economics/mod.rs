//! Юнит-экономика товара на Kaspi: комиссия, доставка, прибыль и маржа

pub mod aggregate;
pub mod calculator;
pub mod dto;
pub mod error;
pub mod form;
pub mod rates;

pub use aggregate::{ListingField, ListingInput, PricingResult};
pub use calculator::{compute_pricing, try_compute_pricing};
pub use error::PricingError;
pub use form::UnitEconomicsForm;
