//! Общие типы и расчеты, которые используют и backend, и frontend

pub mod domain;
pub mod enums;
pub mod shared;
