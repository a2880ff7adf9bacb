//! Site footer

use crate::lead::use_lead_capture;
use ff_core::{whatsapp_url, FilterKey, DEMO_PRODUCTS};
use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_lead_capture().config();
    let bands = ff_core::filter_options(DEMO_PRODUCTS, FilterKey::Band)
        .into_iter()
        .skip(1)
        .map(str::to_string)
        .collect::<Vec<_>>();

    view! {
        <footer class="bg-gray-900 text-gray-400">
            <div class="container mx-auto px-4 py-12">
                <div class="grid md:grid-cols-3 gap-8">
                    <div>
                        <div class="flex items-center mb-4">
                            <span class="text-2xl mr-2">"📡"</span>
                            <span class="text-xl font-bold text-white">"FastFun RC"</span>
                        </div>
                        <p class="text-sm">
                            "OEM remote controls and RF modules, designed and built to order."
                        </p>
                    </div>

                    <div>
                        <h4 class="text-white font-semibold mb-4">"Products"</h4>
                        <ul class="space-y-2 text-sm">
                            {bands.into_iter().map(|band| view! {
                                <li><a href="/products" class="hover:text-white">{band}" remotes"</a></li>
                            }).collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="text-white font-semibold mb-4">"Contact"</h4>
                        <ul class="space-y-2 text-sm">
                            <li>
                                <a href=format!("mailto:{}", config.rfq_email) class="hover:text-white">
                                    {config.rfq_email.clone()}
                                </a>
                            </li>
                            <li>
                                <a href=whatsapp_url(&config.whatsapp_number, None) target="_blank" class="hover:text-white">
                                    "WhatsApp"
                                </a>
                            </li>
                        </ul>
                    </div>
                </div>
                <div class="border-t border-gray-800 mt-8 pt-8 text-sm text-center">
                    "© 2024 FastFun RC. All rights reserved."
                </div>
            </div>
        </footer>
    }
}
