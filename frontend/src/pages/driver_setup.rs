use std::collections::HashMap;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{
    api,
    components::{
        forms::{status_banner, LabeledInput, LabeledTextarea, SubmitStatus},
        icons::{Icon, IconName},
    },
    hooks::use_scroll_to_top,
};
use tk_expedited_shared::{validate, DriverApplication};

const REQUIREMENTS: &[(&str, &str, IconName)] = &[
    (
        "Valid CDL-A License",
        "Current Commercial Driver's License with clean record",
        IconName::IdCard,
    ),
    (
        "Experience",
        "Minimum 2 years of verifiable driving experience",
        IconName::ClipboardCheck,
    ),
    (
        "Documentation",
        "Clean MVR, valid medical card, and ability to pass drug test",
        IconName::FileText,
    ),
    (
        "Equipment Knowledge",
        "Familiarity with modern trucking equipment and safety protocols",
        IconName::Truck,
    ),
];

fn validate_application(form: &DriverApplication) -> HashMap<&'static str, &'static str> {
    let mut errors = HashMap::new();
    if let Err(message) = validate::validate_email(&form.email) {
        errors.insert("email", message);
    }
    if let Err(message) = validate::validate_phone(&form.phone) {
        errors.insert("phone", message);
    }
    if let Err(message) = validate::validate_zip(&form.zip_code) {
        errors.insert("zipCode", message);
    }
    errors
}

/// Driver application page: requirements up front, the full application
/// form beside them.
#[function_component(DriverSetupPage)]
pub fn driver_setup_page() -> Html {
    use_scroll_to_top();

    let form = use_state(DriverApplication::default);
    let errors = use_state(HashMap::<&'static str, &'static str>::new);
    let status = use_state(|| SubmitStatus::Idle);

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if status.is_submitting() {
                return;
            }

            // Field validation blocks submission; problems annotate the
            // offending inputs inline.
            let found = validate_application(&form);
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            errors.set(HashMap::new());

            let payload = (*form).clone();
            let form = form.clone();
            let status = status.clone();
            status.set(SubmitStatus::Submitting);
            spawn_local(async move {
                match api::submit_driver_application(&payload).await {
                    Ok(()) => {
                        status.set(SubmitStatus::Success(
                            "Application submitted successfully! We will contact you soon."
                                .to_string(),
                        ));
                        form.set(DriverApplication::default());
                    },
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Driver application failed: {err}").into(),
                        );
                        status.set(SubmitStatus::Failed(
                            "There was an error submitting your application. Please try again."
                                .to_string(),
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
                 apply: fn(&mut DriverApplication, String)| {
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
                required={true}
            />
        }
    };

    html! {
        <div class={classes!(
            "bg-gradient-to-b", "from-[#1B3160]", "to-[#0F1E3C]", "min-h-screen", "py-20"
        )}>
            <div class={classes!("container", "mx-auto", "px-4")}>
                <div class={classes!("text-center", "mb-16")}>
                    <h1 class={classes!("text-3xl", "md:text-4xl", "font-bold", "text-white", "mb-6")}>
                        { "Join Our Professional Driver Team" }
                    </h1>
                    <p class={classes!("text-gray-300", "max-w-2xl", "mx-auto")}>
                        { "TK Expedited LLC is looking for experienced drivers who share our \
                           commitment to safety, reliability, and professional service." }
                    </p>
                </div>

                <div class={classes!("grid", "grid-cols-1", "lg:grid-cols-3", "gap-12")}>
                    // Requirements
                    <div class={classes!("space-y-8")}>
                        <div class={classes!(
                            "bg-[#1B3160]", "p-8", "rounded-xl", "border", "border-white/10"
                        )}>
                            <h2 class={classes!("text-2xl", "font-semibold", "text-white", "mb-6")}>
                                { "Driver Requirements" }
                            </h2>
                            <div class={classes!("grid", "gap-6")}>
                                { for REQUIREMENTS.iter().map(|(title, description, icon)| html! {
                                    <div class={classes!("flex", "items-start", "space-x-4")}>
                                        <div class={classes!(
                                            "w-12", "h-12", "bg-white/10", "rounded-lg", "flex",
                                            "items-center", "justify-center", "flex-shrink-0",
                                            "text-gray-300"
                                        )}>
                                            <Icon name={*icon} size={24} />
                                        </div>
                                        <div>
                                            <h3 class={classes!("text-white", "font-semibold", "mb-1")}>
                                                { *title }
                                            </h3>
                                            <p class={classes!("text-gray-300")}>{ *description }</p>
                                        </div>
                                    </div>
                                }) }
                            </div>
                        </div>
                    </div>

                    // Application form
                    <div class={classes!("lg:col-span-2")}>
                        <div class={classes!(
                            "bg-[#1B3160]", "rounded-xl", "p-8", "border", "border-white/10"
                        )}>
                            <form onsubmit={on_submit} class={classes!("space-y-6")}>
                                // Personal information
                                <div class={classes!("grid", "grid-cols-1", "md:grid-cols-2", "gap-6")}>
                                    { field("First Name", "firstName", "text",
                                        form.first_name.clone(), |f, v| f.first_name = v) }
                                    { field("Last Name", "lastName", "text",
                                        form.last_name.clone(), |f, v| f.last_name = v) }
                                </div>

                                // Contact information
                                <div class={classes!("grid", "grid-cols-1", "md:grid-cols-2", "gap-6")}>
                                    { field("Email", "email", "email",
                                        form.email.clone(), |f, v| f.email = v) }
                                    { field("Phone Number", "phone", "tel",
                                        form.phone.clone(), |f, v| f.phone = v) }
                                </div>

                                // Address
                                <div class={classes!("grid", "grid-cols-1", "md:grid-cols-2", "gap-6")}>
                                    <div class={classes!("md:col-span-2")}>
                                        { field("Street Address", "address", "text",
                                            form.address.clone(), |f, v| f.address = v) }
                                    </div>
                                    { field("City", "city", "text",
                                        form.city.clone(), |f, v| f.city = v) }
                                    { field("State", "state", "text",
                                        form.state.clone(), |f, v| f.state = v) }
                                    { field("ZIP Code", "zipCode", "text",
                                        form.zip_code.clone(), |f, v| f.zip_code = v) }
                                </div>

                                // CDL information
                                <div class={classes!("grid", "grid-cols-1", "md:grid-cols-3", "gap-6")}>
                                    { field("CDL Number", "cdlNumber", "text",
                                        form.cdl_number.clone(), |f, v| f.cdl_number = v) }
                                    { field("CDL State", "cdlState", "text",
                                        form.cdl_state.clone(), |f, v| f.cdl_state = v) }
                                    { field("CDL Expiration Date", "cdlExpiration", "date",
                                        form.cdl_expiration.clone(), |f, v| f.cdl_expiration = v) }
                                </div>

                                // Experience and history
                                <div class={classes!("grid", "grid-cols-1", "md:grid-cols-2", "gap-6")}>
                                    { field("Years of Experience", "experience", "number",
                                        form.experience.clone(), |f, v| f.experience = v) }
                                    { field("Equipment Experience", "equipment", "text",
                                        form.equipment.clone(), |f, v| f.equipment = v) }
                                    { field("Moving Violations (last 3 years)", "violations", "text",
                                        form.violations.clone(), |f, v| f.violations = v) }
                                    { field("Accidents (last 3 years)", "accidents", "text",
                                        form.accidents.clone(), |f, v| f.accidents = v) }
                                </div>

                                { field("Availability", "availability", "text",
                                    form.availability.clone(), |f, v| f.availability = v) }

                                <LabeledTextarea
                                    label="Additional Information"
                                    name="message"
                                    value={form.message.clone()}
                                    on_change={{
                                        let form = form.clone();
                                        Callback::from(move |value: String| {
                                            let mut next = (*form).clone();
                                            next.message = value;
                                            form.set(next);
                                        })
                                    }}
                                    placeholder="Tell us about your experience and why you'd like to join our team"
                                />

                                <button
                                    type="submit"
                                    disabled={status.is_submitting()}
                                    class={classes!(
                                        "w-full", "bg-white", "text-[#1B3160]", "py-3", "px-6",
                                        "rounded-lg", "font-semibold", "hover:bg-gray-100",
                                        "transition-colors", "duration-200", "disabled:bg-gray-300"
                                    )}
                                >
                                    { if status.is_submitting() { "Submitting..." } else { "Submit Application" } }
                                </button>
                            </form>

                            { status_banner(&status) }
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
