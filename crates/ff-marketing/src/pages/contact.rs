//! Contact page with the multi-step RFQ form

use crate::components::FieldError;
use crate::lead::{use_lead_capture, SubmitStatus};
use ff_core::rfq::{WizardError, WizardStep};
use ff_core::{whatsapp_url, DeliveryMode, FieldErrors, RfqField, RfqWizard, DEMO_PRODUCTS};
use leptos::*;

const WIZARD_SOURCE: &str = "contact_wizard";
const CUSTOM_PRODUCT: &str = "Custom design";

const INPUT_CLASS: &str =
    "w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-orange-500 focus:border-orange-500";

#[component]
pub fn ContactPage() -> impl IntoView {
    let lead = use_lead_capture();
    let config = lead.config();
    let delivery = config.delivery;

    let wizard = create_rw_signal(RfqWizard::new());
    let step_error = create_rw_signal(None::<String>);
    let errors = create_rw_signal(FieldErrors::new());
    let status = create_rw_signal(SubmitStatus::Editing);

    // Browser-only prefill from the last accepted submission
    create_effect(move |_| {
        let Some(remembered) = lead.flow.try_with_value(|flow| flow.prefill()) else {
            return;
        };
        wizard.update(|w| {
            let contact = &mut w.data.contact;
            if contact.name.is_empty() {
                contact.name = remembered.name;
            }
            if contact.email.is_empty() {
                contact.email = remembered.email;
            }
        });
    });

    // Memoized so typing does not re-render the current step
    let step = create_memo(move |_| wizard.with(|w| w.step()));

    let next = move |_: ev::MouseEvent| {
        match wizard.try_update(|w| w.next()) {
            Some(Err(WizardError::Contact(found))) => errors.set(found),
            Some(Err(e)) => step_error.set(Some(e.to_string())),
            _ => {
                step_error.set(None);
                errors.set(FieldErrors::new());
            }
        }
    };

    let back = move |_: ev::MouseEvent| {
        step_error.set(None);
        status.set(SubmitStatus::Editing);
        wizard.update(|w| {
            w.back();
        });
    };

    let send = move |mode: DeliveryMode| {
        match wizard.with_untracked(|w| w.finish(WIZARD_SOURCE)) {
            Ok(submission) => {
                step_error.set(None);
                let planned = lead.flow.try_update_value(|flow| flow.begin_submit_with(submission, mode));
                lead.settle(planned, errors, status, false);
            }
            Err(e) => step_error.set(Some(e.to_string())),
        }
    };

    let contact_input = move |field: RfqField| {
        move |ev: ev::Event| {
            let value = event_target_value(&ev);
            wizard.update(|w| {
                let contact = &mut w.data.contact;
                match field {
                    RfqField::Name => contact.name = value,
                    RfqField::Email => contact.email = value,
                    RfqField::Country => contact.country = value,
                    RfqField::Message => contact.message = value,
                }
            });
            errors.update(|e| {
                e.remove(field);
            });
        }
    };

    view! {
        <div>
            // Hero
            <section class="bg-gradient-to-br from-gray-900 to-gray-800 text-white py-20">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center">
                        <h1 class="text-4xl md:text-5xl font-bold mb-6">"Request a Quote"</h1>
                        <p class="text-xl text-gray-300">
                            "Four quick steps and our sales engineers will come back with pricing and lead time."
                        </p>
                    </div>
                </div>
            </section>

            <section class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="grid md:grid-cols-3 gap-12 max-w-5xl mx-auto">
                        // Wizard
                        <div class="md:col-span-2 bg-white rounded-xl shadow-lg p-8">
                            // Step indicator
                            <ol class="flex justify-between mb-8 text-sm">
                                {WizardStep::ALL.into_iter().map(|s| view! {
                                    <li class={move || if step.get() == s {
                                        "font-semibold text-orange-600"
                                    } else if step.get().index() > s.index() {
                                        "text-gray-900"
                                    } else {
                                        "text-gray-400"
                                    }}>
                                        {format!("{}. {}", s.index() + 1, s.title())}
                                    </li>
                                }).collect_view()}
                            </ol>

                            {move || match step.get() {
                                WizardStep::Requirements => view! {
                                    <div>
                                        <label class="block text-sm font-medium text-gray-700 mb-2">"Product"</label>
                                        <select
                                            class=INPUT_CLASS
                                            prop:value=move || wizard.with(|w| w.data.product.clone())
                                            on:change=move |ev| {
                                                let value = event_target_value(&ev);
                                                wizard.update(|w| w.data.product = value);
                                            }
                                        >
                                            <option value="">"Choose a product"</option>
                                            {DEMO_PRODUCTS.iter().map(|p| view! {
                                                <option value=p.name>{p.name}</option>
                                            }).collect_view()}
                                            <option value=CUSTOM_PRODUCT>{CUSTOM_PRODUCT}</option>
                                        </select>
                                    </div>
                                }.into_view(),
                                WizardStep::Volume => view! {
                                    <div class="space-y-6">
                                        <div>
                                            <label class="block text-sm font-medium text-gray-700 mb-2">"Quantity (pcs)"</label>
                                            <input
                                                type="number"
                                                min="1"
                                                class=INPUT_CLASS
                                                prop:value=move || wizard.with(|w| w.data.quantity.clone())
                                                on:input=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    wizard.update(|w| w.data.quantity = value);
                                                }
                                            />
                                        </div>
                                        <div>
                                            <label class="block text-sm font-medium text-gray-700 mb-2">"Customization notes"</label>
                                            <textarea
                                                rows="4"
                                                class=INPUT_CLASS
                                                placeholder="Logo, button layout, frequency, packaging..."
                                                prop:value=move || wizard.with(|w| w.data.notes.clone())
                                                on:input=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    wizard.update(|w| w.data.notes = value);
                                                }
                                            ></textarea>
                                        </div>
                                    </div>
                                }.into_view(),
                                WizardStep::Contact => view! {
                                    <div class="space-y-6">
                                        <div>
                                            <label class="block text-sm font-medium text-gray-700 mb-2">"Name *"</label>
                                            <input
                                                type="text"
                                                class=INPUT_CLASS
                                                prop:value=move || wizard.with(|w| w.data.contact.name.clone())
                                                on:input=contact_input(RfqField::Name)
                                            />
                                            <FieldError errors=errors field=RfqField::Name/>
                                        </div>
                                        <div>
                                            <label class="block text-sm font-medium text-gray-700 mb-2">"Email *"</label>
                                            <input
                                                type="email"
                                                class=INPUT_CLASS
                                                prop:value=move || wizard.with(|w| w.data.contact.email.clone())
                                                on:input=contact_input(RfqField::Email)
                                            />
                                            <FieldError errors=errors field=RfqField::Email/>
                                        </div>
                                        <div>
                                            <label class="block text-sm font-medium text-gray-700 mb-2">"Country"</label>
                                            <input
                                                type="text"
                                                class=INPUT_CLASS
                                                prop:value=move || wizard.with(|w| w.data.contact.country.clone())
                                                on:input=contact_input(RfqField::Country)
                                            />
                                        </div>
                                    </div>
                                }.into_view(),
                                WizardStep::Review => view! {
                                    <dl class="grid grid-cols-3 gap-y-3 text-sm">
                                        <dt class="text-gray-500">"Product"</dt>
                                        <dd class="col-span-2 text-gray-900">{move || wizard.with(|w| w.data.product.clone())}</dd>
                                        <dt class="text-gray-500">"Quantity"</dt>
                                        <dd class="col-span-2 text-gray-900">{move || wizard.with(|w| w.data.quantity.clone())}</dd>
                                        <dt class="text-gray-500">"Notes"</dt>
                                        <dd class="col-span-2 text-gray-900 whitespace-pre-line">{move || wizard.with(|w| w.data.notes.clone())}</dd>
                                        <dt class="text-gray-500">"Contact"</dt>
                                        <dd class="col-span-2 text-gray-900">
                                            {move || wizard.with(|w| format!("{} <{}>", w.data.contact.name, w.data.contact.email))}
                                        </dd>
                                    </dl>
                                }.into_view(),
                            }}

                            {move || step_error.get().map(|message| view! {
                                <p class="mt-4 text-sm text-red-600">{message}</p>
                            })}
                            {move || status.get().message().map(|text| view! {
                                <p class="mt-4 text-sm text-gray-700 bg-gray-50 rounded-lg p-3">{text}</p>
                            })}

                            // Navigation
                            <div class="flex justify-between mt-8">
                                <Show when=move || step.get() != WizardStep::Requirements fallback=|| view! { <span></span> }>
                                    <button
                                        class="px-6 py-3 border border-gray-300 text-gray-700 rounded-lg hover:bg-gray-50"
                                        on:click=back
                                    >
                                        "Back"
                                    </button>
                                </Show>
                                <Show
                                    when=move || step.get() == WizardStep::Review
                                    fallback=move || view! {
                                        <button
                                            class="px-6 py-3 bg-orange-500 hover:bg-orange-600 text-white font-semibold rounded-lg"
                                            on:click=next
                                        >
                                            "Next"
                                        </button>
                                    }
                                >
                                    <div class="flex gap-3">
                                        <button
                                            class="px-6 py-3 bg-green-500 hover:bg-green-600 text-white font-semibold rounded-lg"
                                            on:click=move |_| send(DeliveryMode::WhatsApp)
                                        >
                                            "Chat on WhatsApp"
                                        </button>
                                        <button
                                            class="px-6 py-3 bg-orange-500 hover:bg-orange-600 disabled:opacity-50 text-white font-semibold rounded-lg"
                                            disabled=move || status.get().is_sending()
                                            on:click=move |_| send(delivery)
                                        >
                                            "Send Request"
                                        </button>
                                    </div>
                                </Show>
                            </div>
                        </div>

                        // Contact Info
                        <div class="space-y-8">
                            <div>
                                <h3 class="text-lg font-semibold text-gray-900 mb-2">"Email"</h3>
                                <a href=format!("mailto:{}", config.rfq_email) class="text-orange-600 hover:text-orange-700">
                                    {config.rfq_email.clone()}
                                </a>
                            </div>
                            <div>
                                <h3 class="text-lg font-semibold text-gray-900 mb-2">"WhatsApp"</h3>
                                <a
                                    href=whatsapp_url(&config.whatsapp_number, None)
                                    target="_blank"
                                    class="text-orange-600 hover:text-orange-700"
                                >
                                    {format!("+{}", config.whatsapp_number)}
                                </a>
                            </div>
                            <div>
                                <h3 class="text-lg font-semibold text-gray-900 mb-2">"Response Time"</h3>
                                <p class="text-gray-600">"Quotes within 48 hours, Monday to Saturday."</p>
                            </div>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}
