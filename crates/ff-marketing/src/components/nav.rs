//! Marketing navigation component

use crate::browser;
use crate::lead::use_lead_capture;
use ff_core::ActiveSectionTracker;
use leptos::*;

/// Home page sections, in document order
pub const HOME_SECTIONS: &[(&str, &str)] = &[
    ("products", "Products"),
    ("about", "About"),
    ("cases", "Case Studies"),
    ("contact", "Contact"),
];

/// Track which home section sits under the nav while scrolling.
///
/// Scroll events are coalesced to one measurement per animation frame.
pub fn use_active_section(offset: f64) -> ReadSignal<Option<String>> {
    let (active, set_active) = create_signal(None::<String>);
    let tracker = store_value(ActiveSectionTracker::new(offset));
    let ticking = store_value(false);

    let measure = move || {
        let ids: Vec<&str> = HOME_SECTIONS.iter().map(|(id, _)| *id).collect();
        let rects = browser::section_rects(&ids);
        let scroll_y = browser::scroll_y();
        let changed = tracker
            .try_update_value(|t| t.update(&rects, scroll_y))
            .unwrap_or(false);
        if changed {
            set_active.set(tracker.with_value(|t| t.active().map(str::to_string)));
        }
    };

    let handle = window_event_listener(ev::scroll, move |_| {
        if ticking.get_value() {
            return;
        }
        ticking.set_value(true);
        request_animation_frame(move || {
            ticking.set_value(false);
            measure();
        });
    });
    on_cleanup(move || handle.remove());

    active
}

#[component]
pub fn MarketingNav() -> impl IntoView {
    let (mobile_open, set_mobile_open) = create_signal(false);
    let lead = use_lead_capture();
    let active = use_active_section(lead.config().section_offset);

    let link_class = move |id: &'static str| {
        move || {
            if active.get().as_deref() == Some(id) {
                "text-orange-600 font-semibold transition"
            } else {
                "text-gray-600 hover:text-gray-900 transition"
            }
        }
    };

    view! {
        <nav class="bg-white shadow-sm sticky top-0 z-50">
            <div class="container mx-auto px-4">
                <div class="flex justify-between h-16">
                    // Logo
                    <div class="flex items-center">
                        <a href="/" class="flex items-center">
                            <span class="text-2xl mr-2">"📡"</span>
                            <span class="text-xl font-bold text-gray-900">"FastFun RC"</span>
                        </a>
                    </div>

                    // Desktop Nav
                    <div class="hidden md:flex items-center space-x-8">
                        {HOME_SECTIONS.iter().map(|(id, label)| view! {
                            <a href=format!("/#{}", id) class=link_class(id)>{*label}</a>
                        }).collect_view()}
                        <a href="/products" class="text-gray-600 hover:text-gray-900 transition">"Catalog"</a>
                        <button
                            class="ml-4 px-4 py-2 bg-orange-500 hover:bg-orange-600 text-white font-medium rounded-lg transition"
                            on:click=move |_| lead.open_modal("nav_quote")
                        >
                            "Get a Quote"
                        </button>
                    </div>

                    // Mobile menu button
                    <div class="md:hidden flex items-center">
                        <button
                            class="p-2 rounded-md text-gray-600 hover:text-gray-900 hover:bg-gray-100"
                            on:click=move |_| set_mobile_open.update(|v| *v = !*v)
                        >
                            <Show
                                when=move || mobile_open.get()
                                fallback=|| view! {
                                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                    </svg>
                                }
                            >
                                <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                                </svg>
                            </Show>
                        </button>
                    </div>
                </div>
            </div>

            // Mobile menu
            <Show when=move || mobile_open.get()>
                <div class="md:hidden border-t border-gray-200">
                    <div class="px-4 py-4 space-y-3">
                        {HOME_SECTIONS.iter().map(|(id, label)| view! {
                            <a
                                href=format!("/#{}", id)
                                class="block text-gray-600 hover:text-gray-900"
                                on:click=move |_| set_mobile_open.set(false)
                            >
                                {*label}
                            </a>
                        }).collect_view()}
                        <a href="/products" class="block text-gray-600 hover:text-gray-900">"Catalog"</a>
                        <div class="pt-4 border-t border-gray-200">
                            <button
                                class="block w-full text-center px-4 py-2 bg-orange-500 text-white font-medium rounded-lg"
                                on:click=move |_| {
                                    set_mobile_open.set(false);
                                    lead.open_modal("nav_mobile_quote");
                                }
                            >
                                "Get a Quote"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
