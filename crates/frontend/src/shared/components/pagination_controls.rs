use contracts::shared::pagination::PageDescriptor;
use leptos::prelude::*;

use crate::shared::config::ClientConfig;
use crate::shared::icons::icon;
use crate::shared::pagination_window::{window_for, PageNav};

/// PaginationControls component - "Showing X–Y of Z" text, prev/next
/// buttons and the numbered page window. Renders nothing for an empty list.
#[component]
pub fn PaginationControls(
    /// Pagination metadata of the current response
    #[prop(into)]
    descriptor: Signal<PageDescriptor>,

    /// Callback when page changes (1-indexed)
    on_page_change: Callback<u32>,

    /// Numbered buttons shown at once (optional, defaults to the client config)
    #[prop(optional)]
    max_visible: Option<u32>,
) -> impl IntoView {
    let max_visible = max_visible.unwrap_or_else(|| ClientConfig::load().max_visible_pages);
    let window = Memo::new(move |_| window_for(&descriptor.get().with_max_visible(max_visible)));
    let nav = Memo::new(move |_| PageNav::from(&descriptor.get()));

    let go = move |target: Option<u32>| {
        if let Some(page) = target {
            on_page_change.run(page);
        }
    };

    let page_button = move |page: u32| {
        let is_current = move || descriptor.get().current_page == page;
        view! {
            <button
                class=move || {
                    if is_current() {
                        "pagination-btn pagination-btn--current"
                    } else {
                        "pagination-btn"
                    }
                }
                on:click=move |_| on_page_change.run(page)
            >
                {page.to_string()}
            </button>
        }
    };

    view! {
        <Show when=move || !window.get().is_empty()>
            <div class="pagination-controls">
                <span class="pagination-info">
                    {move || descriptor.get().range_text()}
                </span>
                <div class="pagination-pages">
                    <button
                        class="pagination-btn"
                        on:click=move |_| go(nav.get().prev())
                        disabled=move || nav.get().prev().is_none()
                        title="Previous page"
                    >
                        {icon("chevron-left")}
                    </button>

                    {move || {
                        let w = window.get();
                        let last_page = descriptor.get().last_page;
                        view! {
                            {w.show_first.then(|| page_button(1))}
                            {w.show_leading_ellipsis
                                .then(|| view! { <span class="pagination-ellipsis">"..."</span> })}
                            {w.pages.iter().copied().map(page_button).collect_view()}
                            {w.show_trailing_ellipsis
                                .then(|| view! { <span class="pagination-ellipsis">"..."</span> })}
                            {w.show_last.then(|| page_button(last_page))}
                        }
                    }}

                    <button
                        class="pagination-btn"
                        on:click=move |_| go(nav.get().next())
                        disabled=move || nav.get().next().is_none()
                        title="Next page"
                    >
                        {icon("chevron-right")}
                    </button>
                </div>
            </div>
        </Show>
    }
}
