use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::window;
use yew::prelude::*;

/// Floating back-to-top button; appears after scrolling past 400px.
#[function_component(ScrollToTopButton)]
pub fn scroll_to_top_button() -> Html {
    let show = use_state(|| false);

    {
        let show = show.clone();
        use_effect_with((), move |_| {
            let window_opt = window();

            let closure = window_opt.as_ref().map(|window| {
                let show = show.clone();
                let window = window.clone();
                let closure = Closure::wrap(Box::new(move || {
                    let scroll_y = window.scroll_y().unwrap_or(0.0);
                    show.set(scroll_y > 400.0);
                }) as Box<dyn Fn()>);
                closure
            });

            if let (Some(window), Some(closure)) = (window_opt.as_ref(), closure.as_ref()) {
                let _ = window
                    .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
            }

            move || {
                if let (Some(window), Some(closure)) = (window_opt.as_ref(), closure.as_ref()) {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();

        if let Some(window) = window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_top(0.0);
            options.set_left(0.0);

            let _ = window.scroll_with_scroll_to_options(&options);
        }
    });

    if *show {
        html! {
            <button
                class="scroll-to-top"
                onclick={onclick}
                aria-label="Back to top"
                title="Back to top"
            >
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="24"
                    height="24"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    <polyline points="18 15 12 9 6 15"></polyline>
                </svg>
            </button>
        }
    } else {
        html! {}
    }
}
