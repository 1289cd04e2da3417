use super::view_model::UnitEconomicsViewModel;
use contracts::domain::a001_unit_economics::dto::FormattedResult;
use contracts::domain::a001_unit_economics::ListingField;
use contracts::enums::{CategoryCode, DeliveryZone, PaymentType};
use contracts::shared::number_format::format_money;
use leptos::prelude::*;

#[component]
fn NumberField(vm: UnitEconomicsViewModel, field: ListingField) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=field.code()>{field.display_name()}</label>
            <input
                type="text"
                inputmode="decimal"
                id=field.code()
                prop:value=move || vm.number_value(field)
                on:input=move |ev| vm.set_field(field, event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn SelectField(
    vm: UnitEconomicsViewModel,
    field: ListingField,
    /// (code, label)
    options: Vec<(&'static str, &'static str)>,
    selected: Signal<&'static str>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=field.code()>{field.display_name()}</label>
            <select
                id=field.code()
                on:change=move |ev| vm.set_field(field, event_target_value(&ev))
                prop:value=move || selected.get().to_string()
            >
                {options
                    .into_iter()
                    .map(|(code, label)| {
                        view! {
                            <option value=code selected=move || selected.get() == code>
                                {label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
pub fn UnitEconomicsCalculator() -> impl IntoView {
    let vm = UnitEconomicsViewModel::new();

    let categories = CategoryCode::all()
        .iter()
        .map(|c| (c.code(), c.display_name()))
        .collect::<Vec<_>>();
    let zones = DeliveryZone::all()
        .iter()
        .map(|z| (z.code(), z.display_name()))
        .collect::<Vec<_>>();
    let payments = PaymentType::all()
        .iter()
        .map(|p| (p.code(), p.display_name()))
        .collect::<Vec<_>>();

    let selected_category = Signal::derive(move || vm.input().category.code());
    let selected_zone = Signal::derive(move || vm.input().delivery_zone.code());
    let selected_payment = Signal::derive(move || vm.input().payment_type.code());

    view! {
        <div class="page unit-economics">
            <div class="page-header">
                <h1>"💰 Юнит-экономика"</h1>
                <p class="muted">"Расчет прибыльности с учетом комиссий и доставки Kaspi"</p>
            </div>

            <div class="unit-economics__grid">
                <div class="card details-form">
                    <h3>"Данные для расчета"</h3>
                    <NumberField vm=vm field=ListingField::Cost />
                    <NumberField vm=vm field=ListingField::SellingPrice />
                    <SelectField
                        vm=vm
                        field=ListingField::Category
                        options=categories
                        selected=selected_category
                    />
                    <NumberField vm=vm field=ListingField::Weight />
                    <SelectField
                        vm=vm
                        field=ListingField::DeliveryZone
                        options=zones
                        selected=selected_zone
                    />
                    <SelectField
                        vm=vm
                        field=ListingField::PaymentType
                        options=payments
                        selected=selected_payment
                    />
                    <button class="btn btn-secondary" on:click=move |_| vm.reset()>
                        "Сбросить"
                    </button>
                </div>

                <div class="card unit-economics__result">
                    <h3>"Результат расчета"</h3>
                    {move || {
                        let input = vm.input();
                        match vm.result() {
                            Ok(result) => {
                                let formatted = FormattedResult::from(&result);
                                let profit_class = if result.is_loss() {
                                    "value value--loss"
                                } else {
                                    "value value--profit"
                                };
                                view! {
                                    <div class="result-grid">
                                        <span>"Себестоимость:"</span>
                                        <span class="value">{format_money(input.cost)}</span>
                                        <span>"Цена продажи:"</span>
                                        <span class="value">{format_money(input.selling_price)}</span>
                                        <span>"Комиссия Kaspi:"</span>
                                        <span class="value">
                                            {format!("{} ({})", formatted.commission, formatted.commission_percent)}
                                        </span>
                                        <span>"Стоимость доставки:"</span>
                                        <span class="value">{formatted.delivery}</span>
                                    </div>
                                    <div class="result-grid result-grid--total">
                                        <span>"Чистая прибыль:"</span>
                                        <span class=profit_class>{formatted.profit}</span>
                                        <span>"Маржа:"</span>
                                        <span class="value">{formatted.profit_percent}</span>
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(e) => view! { <div class="error">{e.to_string()}</div> }.into_any(),
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
