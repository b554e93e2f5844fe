use chrono::{Duration, NaiveDate, Utc};
use leptos::prelude::*;
use thaw::*;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse the value of an `<input type="date">`
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Two date inputs plus quick presets; reports `(from, to)` on every valid change
#[component]
pub fn DateRangePicker(
    #[prop(into)] date_from: Signal<NaiveDate>,
    #[prop(into)] date_to: Signal<NaiveDate>,
    on_change: Callback<(NaiveDate, NaiveDate)>,
    #[prop(optional)] label: Option<&'static str>,
) -> impl IntoView {
    let on_from_input = move |ev| {
        if let Some(from) = parse_input_date(&event_target_value(&ev)) {
            on_change.run((from, date_to.get_untracked()));
        }
    };

    let on_to_input = move |ev| {
        if let Some(to) = parse_input_date(&event_target_value(&ev)) {
            on_change.run((date_from.get_untracked(), to));
        }
    };

    let preset = move |days: i64| {
        let today = Utc::now().date_naive();
        on_change.run((today - Duration::days(days), today));
    };

    view! {
        <div class="date-range-picker">
            {label.map(|l| view! { <Label>{l}</Label> })}
            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                <input
                    type="date"
                    class="date-input"
                    prop:value=move || date_from.get().format(DATE_FORMAT).to_string()
                    on:change=on_from_input
                />
                <span>"–"</span>
                <input
                    type="date"
                    class="date-input"
                    prop:value=move || date_to.get().format(DATE_FORMAT).to_string()
                    on:change=on_to_input
                />
                <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| preset(7)>
                    "7 dias"
                </Button>
                <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| preset(30)>
                    "30 dias"
                </Button>
            </Flex>
        </div>
    }
}
