//! Product catalog with attribute filters

use crate::components::*;
use ff_core::{filter_options, filter_products, FilterKey, ProductFilter, DEMO_PRODUCTS};
use leptos::*;

#[component]
fn FilterSelect(filter_key: FilterKey, filter: RwSignal<ProductFilter>) -> impl IntoView {
    let options = filter_options(DEMO_PRODUCTS, filter_key);

    view! {
        <label class="block">
            <span class="block text-sm font-medium text-gray-700 mb-1">{filter_key.label()}</span>
            <select
                class="w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-orange-500"
                prop:value=move || filter.with(|f| f.selected(filter_key).to_string())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| f.select(filter_key, value));
                }
            >
                {options.into_iter().map(|option| view! {
                    <option value=option>{option}</option>
                }).collect_view()}
            </select>
        </label>
    }
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let filter = create_rw_signal(ProductFilter::new());
    let visible = move || filter.with(|f| filter_products(DEMO_PRODUCTS, f));

    view! {
        <div>
            // Header
            <section class="bg-gradient-to-br from-gray-900 to-orange-900 text-white py-16">
                <div class="container mx-auto px-4 text-center">
                    <h1 class="text-4xl md:text-5xl font-bold mb-4">"Product Catalog"</h1>
                    <p class="text-xl text-gray-300 max-w-2xl mx-auto">
                        "Stock models ready to customize. Filter by frequency, housing or application."
                    </p>
                </div>
            </section>

            <section class="py-12 bg-gray-50">
                <div class="container mx-auto px-4">
                    // Filters
                    <div class="bg-white rounded-xl shadow p-6 mb-8">
                        <input
                            type="search"
                            placeholder="Search by name, model or application"
                            class="w-full px-4 py-2 mb-6 border border-gray-300 rounded-lg focus:ring-2 focus:ring-orange-500"
                            prop:value=move || filter.with(|f| f.query().to_string())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                filter.update(|f| f.set_query(value));
                            }
                        />
                        <div class="grid sm:grid-cols-2 lg:grid-cols-6 gap-4">
                            {FilterKey::ALL.into_iter().map(|key| view! {
                                <FilterSelect filter_key=key filter=filter/>
                            }).collect_view()}
                        </div>
                        <Show when=move || filter.with(|f| !f.is_empty())>
                            <button
                                class="mt-4 text-sm text-orange-600 hover:text-orange-700"
                                on:click=move |_| filter.update(|f| f.clear())
                            >
                                "Clear filters"
                            </button>
                        </Show>
                    </div>

                    // Results
                    <p class="text-sm text-gray-500 mb-4">
                        {move || format!("{} of {} models", visible().len(), DEMO_PRODUCTS.len())}
                    </p>
                    <Show
                        when=move || !visible().is_empty()
                        fallback=|| view! {
                            <div class="text-center py-16 text-gray-500">
                                "No models match these filters. Ask us about a custom design."
                            </div>
                        }
                    >
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                            <For
                                each=visible
                                key=|product| product.id
                                children=|product| view! { <ProductCard product=product/> }
                            />
                        </div>
                    </Show>
                </div>
            </section>
        </div>
    }
}
