/// UI helpers for list pages: search box, match highlighting, sort headers
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::shared::config::ClientConfig;
use crate::shared::list_query::SortDirection;

/// Byte ranges of case-insensitive matches of `filter` in `text`.
///
/// Ranges always cover whole characters of `text`, so they can be sliced
/// even when lower-casing changes a character's byte length.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = filter.to_lowercase().chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }

    // byte offset of every original char, plus the end of the text
    let mut offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    offsets.push(text.len());

    // lowered chars, each tagged with the original char it came from
    let mut lowered: Vec<char> = Vec::new();
    let mut origin: Vec<usize> = Vec::new();
    let mut first_of_char: Vec<bool> = Vec::new();
    for (idx, c) in text.chars().enumerate() {
        for (n, lc) in c.to_lowercase().enumerate() {
            lowered.push(lc);
            origin.push(idx);
            first_of_char.push(n == 0);
        }
    }

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= lowered.len() {
        let end = i + needle.len();
        let on_boundaries =
            first_of_char[i] && (end == lowered.len() || first_of_char[end]);
        if on_boundaries && lowered[i..end] == needle[..] {
            ranges.push((offsets[origin[i]], offsets[origin[end - 1] + 1]));
            i = end;
        } else {
            i += 1;
        }
    }
    ranges
}

/// Highlight search matches in a cell
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(
            view! { <mark class="search-match">{text[start..end].to_string()}</mark> }.into_any(),
        );
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    /// Callback with the debounced value
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };
    let debounce_ms = ClientConfig::load().search_debounce_ms as i32;

    // input text before debounce
    let (input_value, set_input_value) = signal(value.get_untracked());
    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };

        if let Some(timeout_id) = debounce_timeout.get_value() {
            window.clear_timeout_with_handle(timeout_id);
        }

        let closure = wasm_bindgen::closure::Closure::once_into_js(move || {
            on_change.run(new_value);
        });

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.unchecked_ref::<js_sys::Function>(),
            debounce_ms,
        ) {
            Ok(timeout_id) => debounce_timeout.set_value(Some(timeout_id)),
            Err(e) => log::warn!("setTimeout failed: {:?}", e),
        }
    };

    let clear_filter = move |_| {
        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(timeout_id);
            }
        }
        debounce_timeout.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                class=move || {
                    if value.get().is_empty() {
                        "search-input__field"
                    } else {
                        "search-input__field search-input__field--active"
                    }
                }
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Sort indicator of a column header
pub fn get_sort_indicator(current_field: &str, field: &str, direction: SortDirection) -> &'static str {
    if current_field == field {
        match direction {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        }
    } else {
        " ⇅"
    }
}

/// Click handler of a sortable header: same field flips, new field starts ascending
pub fn create_sort_toggle(
    field: &'static str,
    sort_field: Signal<String>,
    set_sort_field: WriteSignal<String>,
    set_sort_direction: WriteSignal<SortDirection>,
) -> impl Fn(MouseEvent) + 'static {
    move |_| {
        if sort_field.get() == field {
            set_sort_direction.update(|d| *d = d.toggle());
        } else {
            set_sort_field.set(field.to_string());
            set_sort_direction.set(SortDirection::Ascending);
        }
    }
}
