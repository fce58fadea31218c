use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Where a form submission stands.
///
/// An explicit discriminant, deliberately: the result banner switches on the
/// variant, never on the wording of a message.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Success(String),
    Failed(String),
}

impl SubmitStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitStatus::Submitting)
    }
}

/// Success/error banner under a form, or nothing while idle/submitting.
pub fn status_banner(status: &SubmitStatus) -> Html {
    match status {
        SubmitStatus::Idle | SubmitStatus::Submitting => Html::default(),
        SubmitStatus::Success(message) => html! {
            <div class={classes!(
                "mt-6", "p-4", "rounded-lg", "bg-green-950/50",
                "text-green-200", "border", "border-green-500/20"
            )}>
                { message.clone() }
            </div>
        },
        SubmitStatus::Failed(message) => html! {
            <div class={classes!(
                "mt-6", "p-4", "rounded-lg", "bg-red-950/50",
                "text-red-200", "border", "border-red-500/20"
            )}>
                { message.clone() }
            </div>
        },
    }
}

const INPUT_CLASSES: &str = "w-full bg-white/10 border border-white/10 rounded-lg px-4 py-3 \
                             text-white placeholder-gray-400 focus:border-white/30 focus:ring-0";
const LABEL_CLASSES: &str = "block text-base font-medium text-gray-300 mb-2";

#[derive(Properties, PartialEq)]
pub struct LabeledInputProps {
    pub label: String,
    pub name: String,
    pub value: String,
    pub on_change: Callback<String>,
    #[prop_or_else(|| "text".to_string())]
    pub input_type: String,
    #[prop_or_default]
    pub placeholder: String,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or(false)]
    pub required: bool,
}

/// Labeled single-line input with an inline validation message slot.
#[function_component(LabeledInput)]
pub fn labeled_input(props: &LabeledInputProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div>
            <label for={props.name.clone()} class={LABEL_CLASSES}>{ props.label.clone() }</label>
            <input
                type={props.input_type.clone()}
                id={props.name.clone()}
                name={props.name.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                required={props.required}
                class={INPUT_CLASSES}
                {oninput}
            />
            if let Some(error) = &props.error {
                <p class={classes!("mt-1", "text-base", "text-red-500")}>{ error.clone() }</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LabeledTextareaProps {
    pub label: String,
    pub name: String,
    pub value: String,
    pub on_change: Callback<String>,
    #[prop_or(4)]
    pub rows: u32,
    #[prop_or_default]
    pub placeholder: String,
    #[prop_or_default]
    pub error: Option<String>,
}

/// Labeled multi-line input with an inline validation message slot.
#[function_component(LabeledTextarea)]
pub fn labeled_textarea(props: &LabeledTextareaProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div>
            <label for={props.name.clone()} class={LABEL_CLASSES}>{ props.label.clone() }</label>
            <textarea
                id={props.name.clone()}
                name={props.name.clone()}
                value={props.value.clone()}
                rows={props.rows.to_string()}
                placeholder={props.placeholder.clone()}
                class={INPUT_CLASSES}
                {oninput}
            />
            if let Some(error) = &props.error {
                <p class={classes!("mt-1", "text-base", "text-red-500")}>{ error.clone() }</p>
            }
        </div>
    }
}
