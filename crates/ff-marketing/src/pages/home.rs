//! Home page

use crate::components::*;
use crate::lead::use_lead_capture;
use ff_core::DEMO_PRODUCTS;
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let lead = use_lead_capture();

    view! {
        <div>
            // Hero Section
            <section class="bg-gradient-to-br from-gray-900 via-gray-800 to-orange-900 text-white">
                <div class="container mx-auto px-4 py-24">
                    <div class="max-w-4xl mx-auto text-center">
                        <h1 class="text-5xl md:text-6xl font-bold mb-6">
                            "Remote Controls "
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-orange-400 to-yellow-300">
                                "Built for Your Product"
                            </span>
                        </h1>
                        <p class="text-xl md:text-2xl text-gray-300 mb-8">
                            "315, 433 and 868 MHz remotes, BLE key fobs and receivers. "
                            "Custom housings, rolling code and CE/FCC certification from one OEM partner."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center">
                            <button
                                class="px-8 py-4 bg-orange-500 hover:bg-orange-400 text-white font-semibold rounded-lg transition"
                                on:click=move |_| lead.open_modal("hero_quote")
                            >
                                "Get a Quote"
                            </button>
                            <a href="#products" class="px-8 py-4 bg-white/10 hover:bg-white/20 text-white font-semibold rounded-lg border border-white/30 transition">
                                "Browse Products"
                            </a>
                        </div>
                    </div>
                </div>
            </section>

            // Products
            <section id="products" class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">
                            "Popular Models"
                        </h2>
                        <p class="text-lg text-gray-600">
                            "Every model ships with custom logo, button layout and frequency options."
                        </p>
                    </div>
                    <div class="grid md:grid-cols-3 gap-8">
                        {DEMO_PRODUCTS.iter().take(3).map(|product| view! {
                            <ProductCard product=product/>
                        }).collect_view()}
                    </div>
                    <div class="text-center mt-12">
                        <a href="/products" class="text-orange-600 font-semibold hover:text-orange-700">
                            "See the full catalog →"
                        </a>
                    </div>
                </div>
            </section>

            // About
            <section id="about" class="py-20 bg-white">
                <div class="container mx-auto px-4">
                    <div class="grid md:grid-cols-2 gap-12 items-center">
                        <div>
                            <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-6">
                                "Your OEM Factory in Shenzhen"
                            </h2>
                            <div class="space-y-6">
                                <FeatureHighlight
                                    icon="🛠"
                                    title="In-house tooling"
                                    description="Housing molds, PCB layout and firmware are done under one roof."
                                />
                                <FeatureHighlight
                                    icon="📜"
                                    title="Certified designs"
                                    description="CE, FCC and RoHS test reports available for every stock model."
                                />
                                <FeatureHighlight
                                    icon="🚚"
                                    title="Low MOQ"
                                    description="Samples in 7 days, production runs from 500 pieces."
                                />
                            </div>
                        </div>
                        <div class="grid grid-cols-2 gap-8 bg-gray-50 rounded-xl p-8">
                            <StatCard value="15+" label="Years in RF"/>
                            <StatCard value="60+" label="Countries served"/>
                            <StatCard value="2M" label="Remotes per year"/>
                            <StatCard value="48h" label="Quote turnaround"/>
                        </div>
                    </div>
                </div>
            </section>

            // Case Studies
            <section id="cases" class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">
                            "Case Studies"
                        </h2>
                    </div>
                    <div class="grid md:grid-cols-3 gap-8">
                        <CaseCard
                            customer="European gate maker"
                            industry="Gate automation"
                            summary="Replaced a fixed-code remote with a zinc-alloy 433 MHz rolling code fob across 40k units."
                        />
                        <CaseCard
                            customer="US garage door brand"
                            industry="Garage doors"
                            summary="Dual-band 315/433 MHz remote with FCC certification delivered in ten weeks."
                        />
                        <CaseCard
                            customer="Smart lock startup"
                            industry="Access control"
                            summary="Silicone BLE key fob with a custom app pairing flow and private label packaging."
                        />
                    </div>
                </div>
            </section>

            // Contact
            <section id="contact" class="py-20 bg-orange-600">
                <div class="container mx-auto px-4 text-center">
                    <h2 class="text-3xl md:text-4xl font-bold text-white mb-4">
                        "Ready to Start Your Project?"
                    </h2>
                    <p class="text-xl text-orange-100 mb-8 max-w-2xl mx-auto">
                        "Send us your requirements and get a quote within 48 hours."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <button
                            class="px-8 py-4 bg-white text-orange-600 font-semibold rounded-lg hover:bg-gray-100 transition"
                            on:click=move |_| lead.open_modal("contact_section")
                        >
                            "Request a Quote"
                        </button>
                        <a href="/contact" class="px-8 py-4 bg-orange-700 text-white font-semibold rounded-lg hover:bg-orange-800 transition">
                            "Detailed RFQ Form"
                        </a>
                    </div>
                </div>
            </section>
        </div>
    }
}
