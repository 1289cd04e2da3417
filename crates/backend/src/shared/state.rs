use super::config::CalculatorConfig;

/// Общее состояние обработчиков. Только чтение, без изменяемых данных.
#[derive(Debug, Clone)]
pub struct AppState {
    pub calculator: CalculatorConfig,
}

impl AppState {
    pub fn new(calculator: CalculatorConfig) -> Self {
        Self { calculator }
    }
}
