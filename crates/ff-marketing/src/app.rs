//! Main application component

use leptos::*;
use leptos_router::*;
use crate::components::*;
use crate::lead::provide_lead_capture;
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_lead_capture();

    view! {
        <Router>
            <div class="min-h-screen bg-white">
                <MarketingNav/>
                <main>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/products" view=ProductsPage/>
                        <Route path="/contact" view=ContactPage/>
                    </Routes>
                </main>
                <Footer/>
                <RfqModal/>
            </div>
        </Router>
    }
}
