use crate::domain::a001_unit_economics::ui::calculator::UnitEconomicsCalculator;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    log::info!("unit economics calculator started");

    view! {
        <main class="app-main">
            <UnitEconomicsCalculator />
        </main>
    }
}
