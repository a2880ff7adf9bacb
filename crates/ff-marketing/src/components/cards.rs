//! Card components for marketing pages

use crate::lead::use_lead_capture;
use ff_core::Product;
use leptos::*;

/// Catalog card; the quote button tags the lead with the product id
#[component]
pub fn ProductCard(product: &'static Product) -> impl IntoView {
    let lead = use_lead_capture();
    let source = format!("product_{}", product.id);

    view! {
        <div class="bg-white rounded-xl shadow-lg overflow-hidden flex flex-col">
            <img src=product.image alt=product.name class="h-48 w-full object-cover bg-gray-100"/>
            <div class="p-6 flex flex-col flex-1">
                <div class="flex items-center gap-2 mb-2 text-xs">
                    <span class="px-2 py-1 bg-orange-100 text-orange-700 rounded">{product.band}</span>
                    <span class="px-2 py-1 bg-gray-100 text-gray-700 rounded">{product.protocol}</span>
                    <span class="px-2 py-1 bg-gray-100 text-gray-700 rounded">{product.cert}</span>
                </div>
                <h3 class="text-xl font-semibold text-gray-900 mb-2">{product.name}</h3>
                <ul class="space-y-1 text-gray-600 text-sm mb-6 flex-1">
                    {product.bullets.iter().map(|bullet| view! {
                        <li class="flex items-center">
                            <span class="text-orange-500 mr-2">"•"</span>
                            {*bullet}
                        </li>
                    }).collect_view()}
                </ul>
                <div class="flex gap-3">
                    <button
                        class="flex-1 px-4 py-2 bg-orange-500 hover:bg-orange-600 text-white font-medium rounded-lg transition"
                        on:click=move |_| lead.open_modal(&source)
                    >
                        "Request Quote"
                    </button>
                    <a
                        href=product.datasheet_url
                        target="_blank"
                        class="px-4 py-2 border border-gray-300 text-gray-700 rounded-lg hover:bg-gray-50 transition"
                    >
                        "Datasheet"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn FeatureHighlight(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-start">
            <div class="flex-shrink-0 w-12 h-12 bg-orange-100 rounded-lg flex items-center justify-center">
                <span class="text-xl">{icon}</span>
            </div>
            <div class="ml-4">
                <h3 class="font-semibold text-gray-900">{title}</h3>
                <p class="text-gray-600 text-sm mt-1">{description}</p>
            </div>
        </div>
    }
}

#[component]
pub fn StatCard(
    value: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="text-4xl font-bold text-orange-500 mb-2">{value}</div>
            <div class="text-gray-600">{label}</div>
        </div>
    }
}

#[component]
pub fn CaseCard(
    customer: &'static str,
    industry: &'static str,
    summary: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-lg p-8 border-t-4 border-orange-500">
            <p class="text-xs uppercase tracking-wide text-gray-500 mb-2">{industry}</p>
            <h3 class="text-xl font-semibold text-gray-900 mb-3">{customer}</h3>
            <p class="text-gray-600">{summary}</p>
        </div>
    }
}
