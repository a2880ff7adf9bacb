//! Quote request modal
//!
//! Rendered once at the app root. Every call to action on the site opens
//! it through [`crate::lead::LeadCapture`].

use crate::lead::{use_lead_capture, SubmitStatus};
use ff_core::{DeliveryMode, FieldErrors, FlowState, RfqField};
use leptos::*;

#[component]
pub fn FieldError(errors: RwSignal<FieldErrors>, field: RfqField) -> impl IntoView {
    move || {
        errors.with(|e| e.get(field).map(str::to_string)).map(|message| {
            view! { <p class="text-sm text-red-600 mt-1">{message}</p> }
        })
    }
}

#[component]
pub fn RfqModal() -> impl IntoView {
    let lead = use_lead_capture();
    let delivery = lead.config().delivery;

    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let country = create_rw_signal(String::new());
    let message = create_rw_signal(String::new());
    let errors = create_rw_signal(FieldErrors::new());
    let status = create_rw_signal(SubmitStatus::Editing);

    // Reset and prefill whenever the modal opens
    create_effect(move |_| {
        let Some(source) = lead.modal_source() else {
            return;
        };
        let Some((form, in_flight)) = lead.flow.try_update_value(|flow| {
            flow.open(&source);
            (flow.form().clone(), flow.state() == FlowState::Submitting)
        }) else {
            return;
        };
        name.set(form.name);
        email.set(form.email);
        country.set(form.country);
        message.set(form.message);
        errors.set(FieldErrors::new());
        // A reopened modal keeps showing the request still being sent
        status.set(if in_flight { SubmitStatus::Sending } else { SubmitStatus::Editing });
    });

    let edit = move |field: RfqField, signal: RwSignal<String>| {
        move |ev: ev::Event| {
            let value = event_target_value(&ev);
            lead.flow.update_value(|flow| flow.set_field(field, value.clone()));
            errors.update(|e| {
                e.remove(field);
            });
            signal.set(value);
        }
    };

    let submit = move |mode: DeliveryMode| {
        let planned = lead.flow.try_update_value(|flow| flow.begin_submit(mode));
        lead.settle(planned, errors, status, true);
    };

    let input_class = move |field: RfqField| {
        move || {
            if errors.with(|e| e.get(field).is_some()) {
                "w-full px-4 py-2 border border-red-500 rounded-lg focus:ring-2 focus:ring-red-500"
            } else {
                "w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-orange-500 focus:border-orange-500"
            }
        }
    };

    let close_on_escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && lead.is_modal_open() {
            lead.close_modal();
        }
    });
    on_cleanup(move || close_on_escape.remove());

    view! {
        <Show when=move || lead.modal_source().is_some()>
            <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 px-4">
                <div class="absolute inset-0" on:click=move |_| lead.close_modal()></div>
                <div class="relative bg-white rounded-xl shadow-2xl w-full max-w-lg p-8">
                    <button
                        class="absolute top-4 right-4 text-gray-400 hover:text-gray-600"
                        aria-label="Close"
                        on:click=move |_| lead.close_modal()
                    >
                        "✕"
                    </button>
                    <h2 class="text-2xl font-bold text-gray-900 mb-2">"Request a Quote"</h2>
                    <p class="text-gray-600 mb-6">"Tell us what you need. We reply within one business day."</p>

                    <form class="space-y-4" on:submit=move |ev| {
                        ev.prevent_default();
                        submit(delivery);
                    }>
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1">"Name *"</label>
                            <input
                                type="text"
                                class=input_class(RfqField::Name)
                                prop:value=move || name.get()
                                on:input=edit(RfqField::Name, name)
                            />
                            <FieldError errors=errors field=RfqField::Name/>
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1">"Email *"</label>
                            <input
                                type="email"
                                class=input_class(RfqField::Email)
                                prop:value=move || email.get()
                                on:input=edit(RfqField::Email, email)
                            />
                            <FieldError errors=errors field=RfqField::Email/>
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1">"Country"</label>
                            <input
                                type="text"
                                class=input_class(RfqField::Country)
                                prop:value=move || country.get()
                                on:input=edit(RfqField::Country, country)
                            />
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1">"Message"</label>
                            <textarea
                                rows="4"
                                class=input_class(RfqField::Message)
                                placeholder="Product, quantity, frequency, custom requirements..."
                                prop:value=move || message.get()
                                on:input=edit(RfqField::Message, message)
                            ></textarea>
                        </div>

                        {move || status.get().message().map(|text| {
                            let class = match status.get() {
                                SubmitStatus::Done(_) => "text-sm text-green-700 bg-green-50 rounded-lg p-3",
                                SubmitStatus::Failed(_) => "text-sm text-red-700 bg-red-50 rounded-lg p-3",
                                _ => "text-sm text-gray-700 bg-gray-50 rounded-lg p-3",
                            };
                            view! { <p class=class>{text}</p> }
                        })}

                        <div class="flex flex-col sm:flex-row gap-3 pt-2">
                            <button
                                type="submit"
                                class="flex-1 px-6 py-3 bg-orange-500 hover:bg-orange-600 disabled:opacity-50 text-white font-semibold rounded-lg transition"
                                disabled=move || status.get().is_sending()
                            >
                                {move || if status.get().is_sending() { "Sending..." } else { "Send Request" }}
                            </button>
                            <button
                                type="button"
                                class="flex-1 px-6 py-3 bg-green-500 hover:bg-green-600 text-white font-semibold rounded-lg transition"
                                on:click=move |_| submit(DeliveryMode::WhatsApp)
                            >
                                "Chat on WhatsApp"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
