use leptos::prelude::*;

use crate::shared::list_query::FILTER_ALL;

/// One entry of a filter dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The "all" entry that disables the dimension
    pub fn all(label: impl Into<String>) -> Self {
        Self::new(FILTER_ALL, label)
    }
}

/// Options of a dropdown: the "all" entry first, then `items`
pub fn options_with_all<T, F>(all_label: &str, items: &[T], to_option: F) -> Vec<FilterOption>
where
    F: Fn(&T) -> FilterOption,
{
    std::iter::once(FilterOption::all(all_label))
        .chain(items.iter().map(to_option))
        .collect()
}

/// Dropdown bound to one filter dimension
#[component]
pub fn FilterSelect(
    /// Selected value, `"all"` when inactive
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    options: Signal<Vec<FilterOption>>,
    on_change: Callback<String>,
    #[prop(optional, into)]
    label: String,
) -> impl IntoView {
    view! {
        <label class="filter-select">
            {(!label.is_empty()).then(|| view! { <span class="filter-select__label">{label.clone()}</span> })}
            <select
                class=move || {
                    if value.get() == FILTER_ALL {
                        "filter-select__field"
                    } else {
                        "filter-select__field filter-select__field--active"
                    }
                }
                on:change=move |ev| on_change.run(event_target_value(&ev))
                prop:value=move || value.get()
            >
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|opt| {
                            let selected_value = opt.value.clone();
                            view! {
                                <option
                                    value=opt.value
                                    selected=move || value.get() == selected_value
                                >
                                    {opt.label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}
