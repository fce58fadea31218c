use std::collections::HashMap;

use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlInputElement};
use yew::prelude::*;

use crate::{
    api,
    components::{
        forms::{LabeledInput, LabeledTextarea, SubmitStatus},
        notification::{Notification, NotificationKind},
    },
    hooks::use_scroll_to_top,
};
use tk_expedited_shared::validate;

/// Everything the carrier setup form captures, minus the file list which
/// lives on the input element until submit.
#[derive(Clone, Default, PartialEq)]
struct CarrierForm {
    company_name: String,
    dba: String,
    address: String,
    city: String,
    zip_code: String,
    phone: String,
    email: String,
    mc: String,
    usdot: String,
    fein_ssn: String,
    number_of_trucks: String,
    number_of_drivers: String,
    factor_invoices: String,
    preferred_states: String,
}

fn validate_carrier(form: &CarrierForm) -> HashMap<&'static str, &'static str> {
    let mut errors = HashMap::new();
    let required: &[(&'static str, &str, &'static str)] = &[
        ("companyName", &form.company_name, "Company name is required"),
        ("address", &form.address, "Address is required"),
        ("city", &form.city, "City is required"),
        ("zipCode", &form.zip_code, "Zip code is required"),
        ("phone", &form.phone, "Phone is required"),
        ("email", &form.email, "Email is required"),
        ("mc", &form.mc, "MC# is required"),
        ("usdot", &form.usdot, "USDOT# is required"),
        ("feinSsn", &form.fein_ssn, "FEIN/SSN is required"),
    ];
    for (name, value, message) in required {
        if let Err(error) = validate::require(value, message) {
            errors.insert(*name, error);
        }
    }

    // Pattern checks only once the field is non-empty; the required message
    // wins otherwise.
    if !errors.contains_key("zipCode") {
        if let Err(message) = validate::validate_zip(&form.zip_code) {
            errors.insert("zipCode", message);
        }
    }
    if !errors.contains_key("phone") {
        if let Err(message) = validate::validate_phone(&form.phone) {
            errors.insert("phone", message);
        }
    }
    if !errors.contains_key("email") {
        if let Err(message) = validate::validate_email(&form.email) {
            errors.insert("email", message);
        }
    }
    errors
}

fn to_form_data(form: &CarrierForm, documents: Option<&HtmlInputElement>) -> Option<FormData> {
    let data = FormData::new().ok()?;
    let fields: &[(&str, &str)] = &[
        ("companyName", &form.company_name),
        ("dba", &form.dba),
        ("address", &form.address),
        ("city", &form.city),
        ("zipCode", &form.zip_code),
        ("phone", &form.phone),
        ("email", &form.email),
        ("mc", &form.mc),
        ("usdot", &form.usdot),
        ("feinSsn", &form.fein_ssn),
        ("numberOfTrucks", &form.number_of_trucks),
        ("numberOfDrivers", &form.number_of_drivers),
        ("factorInvoices", &form.factor_invoices),
        ("preferredStates", &form.preferred_states),
    ];
    for (name, value) in fields {
        data.append_with_str(name, value).ok()?;
    }

    if let Some(files) = documents.and_then(|input| input.files()) {
        for index in 0..files.length() {
            if let Some(file) = files.item(index) {
                data.append_with_blob("documents", &file).ok()?;
            }
        }
    }
    Some(data)
}

/// Carrier onboarding page: authority details, fleet size, and the document
/// upload (MC authority letter, COI, W9) sent as one multipart request.
#[function_component(CarrierSetupPage)]
pub fn carrier_setup_page() -> Html {
    use_scroll_to_top();

    let form = use_state(CarrierForm::default);
    let errors = use_state(HashMap::<&'static str, &'static str>::new);
    let status = use_state(|| SubmitStatus::Idle);
    let documents_ref = use_node_ref();

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let status = status.clone();
        let documents_ref = documents_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if status.is_submitting() {
                return;
            }

            let found = validate_carrier(&form);
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            errors.set(HashMap::new());

            let documents_input = documents_ref.cast::<HtmlInputElement>();
            let Some(data) = to_form_data(&form, documents_input.as_ref()) else {
                status.set(SubmitStatus::Failed(
                    "Could not read the attached documents. Please try again.".to_string(),
                ));
                return;
            };

            let form = form.clone();
            let status = status.clone();
            status.set(SubmitStatus::Submitting);
            spawn_local(async move {
                match api::submit_carrier_setup(data).await {
                    Ok(response) => {
                        status.set(SubmitStatus::Success(response.message));
                        form.set(CarrierForm::default());
                        if let Some(input) = documents_input {
                            input.set_value("");
                        }
                    },
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Carrier setup failed: {err}").into(),
                        );
                        status.set(SubmitStatus::Failed(
                            "Error submitting the form. Please try again.".to_string(),
                        ));
                    },
                }
            });
        })
    };

    let field = |label: &'static str,
                 name: &'static str,
                 input_type: &'static str,
                 value: String,
                 apply: fn(&mut CarrierForm, String)| {
        let form = form.clone();
        let on_change = Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        });
        let error = errors.get(name).map(|message| message.to_string());
        html! {
            <LabeledInput
                label={label.to_string()}
                name={name.to_string()}
                input_type={input_type.to_string()}
                {value}
                {on_change}
                {error}
            />
        }
    };

    let factor_radio = |value: &'static str| {
        let form = form.clone();
        let checked = form.factor_invoices == value;
        let onchange = Callback::from(move |_: Event| {
            let mut next = (*form).clone();
            next.factor_invoices = value.to_string();
            form.set(next);
        });
        html! {
            <label class={classes!("inline-flex", "items-center")}>
                <input
                    type="radio"
                    name="factorInvoices"
                    value={value}
                    {checked}
                    {onchange}
                    class={classes!("h-4", "w-4", "text-blue-600")}
                />
                <span class={classes!("ml-2", "text-gray-300")}>{ value }</span>
            </label>
        }
    };

    let clear_status = {
        let status = status.clone();
        Callback::from(move |_| status.set(SubmitStatus::Idle))
    };

    let toast = match &*status {
        SubmitStatus::Success(message) => html! {
            <Notification
                message={message.clone()}
                kind={NotificationKind::Success}
                on_close={Some(clear_status.clone())}
            />
        },
        SubmitStatus::Failed(message) => html! {
            <Notification
                message={message.clone()}
                kind={NotificationKind::Error}
                on_close={Some(clear_status.clone())}
            />
        },
        _ => Html::default(),
    };

    html! {
        <div class={classes!("bg-gray-900", "min-h-screen", "py-16")}>
            // Hero
            <div class={classes!("text-center", "mb-10", "px-4")}>
                <h1 class={classes!("text-3xl", "md:text-4xl", "font-bold", "text-white", "mb-4")}>
                    { "Carrier Setup" }
                </h1>
                <p class={classes!("text-gray-300", "max-w-2xl", "mx-auto")}>
                    { "Start your journey with TK Expedited LLC by providing your company and \
                       authority information below." }
                </p>
            </div>

            <section class={classes!(
                "bg-gray-800", "p-8", "rounded-lg", "shadow-lg", "max-w-4xl",
                "mx-auto", "mt-10"
            )}>
                <h2 class={classes!("text-3xl", "font-bold", "mb-6", "text-center", "text-white")}>
                    { "Carrier Setup Form" }
                </h2>
                <form onsubmit={on_submit} class={classes!("space-y-6")}>
                    <div class={classes!("grid", "grid-cols-1", "md:grid-cols-2", "gap-6")}>
                        { field("Company name", "companyName", "text",
                            form.company_name.clone(), |f, v| f.company_name = v) }
                        { field("DBA (if any)", "dba", "text",
                            form.dba.clone(), |f, v| f.dba = v) }
                    </div>

                    <div class={classes!("grid", "grid-cols-1", "md:grid-cols-3", "gap-6")}>
                        { field("Address", "address", "text",
                            form.address.clone(), |f, v| f.address = v) }
                        { field("City", "city", "text",
                            form.city.clone(), |f, v| f.city = v) }
                        { field("Zip code", "zipCode", "text",
                            form.zip_code.clone(), |f, v| f.zip_code = v) }
                    </div>

                    <div class={classes!("grid", "grid-cols-1", "md:grid-cols-2", "gap-6")}>
                        { field("Phone", "phone", "tel",
                            form.phone.clone(), |f, v| f.phone = v) }
                        { field("Email", "email", "email",
                            form.email.clone(), |f, v| f.email = v) }
                    </div>

                    <div class={classes!("grid", "grid-cols-1", "md:grid-cols-2", "gap-6")}>
                        { field("MC#", "mc", "text", form.mc.clone(), |f, v| f.mc = v) }
                        { field("USDOT#", "usdot", "text", form.usdot.clone(), |f, v| f.usdot = v) }
                    </div>

                    <div class={classes!("grid", "grid-cols-1", "md:grid-cols-3", "gap-6")}>
                        { field("FEIN/SSN", "feinSsn", "text",
                            form.fein_ssn.clone(), |f, v| f.fein_ssn = v) }
                        { field("Number Of Trucks", "numberOfTrucks", "number",
                            form.number_of_trucks.clone(), |f, v| f.number_of_trucks = v) }
                        { field("Number Of Drivers", "numberOfDrivers", "number",
                            form.number_of_drivers.clone(), |f, v| f.number_of_drivers = v) }
                    </div>

                    <div>
                        <label class={classes!("block", "text-base", "font-medium", "text-gray-300")}>
                            { "Do you factor your invoices?" }
                        </label>
                        <div class={classes!("mt-2", "space-x-6")}>
                            { factor_radio("Yes") }
                            { factor_radio("No") }
                        </div>
                    </div>

                    <LabeledTextarea
                        label="What States Do You Prefer To Drive?"
                        name="preferredStates"
                        value={form.preferred_states.clone()}
                        rows={2}
                        on_change={{
                            let form = form.clone();
                            Callback::from(move |value: String| {
                                let mut next = (*form).clone();
                                next.preferred_states = value;
                                form.set(next);
                            })
                        }}
                    />

                    <div>
                        <label
                            for="documents"
                            class={classes!("block", "text-base", "font-medium", "text-gray-300")}
                        >
                            { "Upload MC Authority Letter, Certificate Of Liability Insurance, W9" }
                        </label>
                        <input
                            ref={documents_ref.clone()}
                            type="file"
                            id="documents"
                            multiple={true}
                            accept=".pdf,image/*"
                            class={classes!("mt-1", "block", "w-full", "text-base", "text-gray-300")}
                        />
                        <p class={classes!("mt-1", "text-base", "text-gray-400")}>
                            { "You can select multiple files (PDFs and images)" }
                        </p>
                    </div>

                    <button
                        type="submit"
                        disabled={status.is_submitting()}
                        class={classes!(
                            "w-full", "flex", "justify-center", "py-2", "px-4", "border",
                            "border-transparent", "rounded-md", "shadow-sm", "text-base",
                            "font-medium", "text-white", "bg-blue-600", "hover:bg-blue-700",
                            "disabled:opacity-50"
                        )}
                    >
                        { if status.is_submitting() { "Submitting..." } else { "Send" } }
                    </button>
                </form>
            </section>

            { toast }
        </div>
    }
}
