use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::Event;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

fn reveal_if_on_screen(
    node_ref: &NodeRef,
    revealed: &Rc<RefCell<bool>>,
    visible: &UseStateHandle<bool>,
) {
    if *revealed.borrow() {
        return;
    }
    let (Some(window), Some(element)) = (web_sys::window(), node_ref.cast::<web_sys::Element>())
    else {
        return;
    };
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let rect = element.get_bounding_client_rect();
    // Reveal once roughly a tenth of the section has scrolled into view.
    if rect.top() < viewport * 0.9 && rect.bottom() > 0.0 {
        *revealed.borrow_mut() = true;
        visible.set(true);
    }
}

/// Fade-and-rise wrapper for home-page sections.
///
/// Content mounts transparent and shifted down, then transitions in the
/// first time it scrolls into view. The reveal is one-way; scrolling back
/// up never hides a section again.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node_ref = use_node_ref();
    let visible = use_state(|| false);
    let revealed = use_mut_ref(|| false);

    {
        let node_ref = node_ref.clone();
        let visible = visible.clone();
        let revealed = revealed.clone();
        use_effect_with((), move |_| {
            reveal_if_on_screen(&node_ref, &revealed, &visible);

            let scroll_closure: Option<Closure<dyn FnMut(Event)>> =
                web_sys::window().as_ref().map(|window| {
                    let node_ref = node_ref.clone();
                    let visible = visible.clone();
                    let revealed = revealed.clone();
                    let closure = Closure::wrap(Box::new(move |_: Event| {
                        reveal_if_on_screen(&node_ref, &revealed, &visible);
                    }) as Box<dyn FnMut(Event)>);

                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        closure.as_ref().unchecked_ref(),
                    );
                    closure
                });

            move || {
                if let (Some(window), Some(closure)) =
                    (web_sys::window(), scroll_closure.as_ref())
                {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let mut wrapper_classes = classes!("transition-all", "duration-1000", props.class.clone());
    if *visible {
        wrapper_classes.push("opacity-100");
        wrapper_classes.push("translate-y-0");
    } else {
        wrapper_classes.push("opacity-0");
        wrapper_classes.push("translate-y-10");
    }

    html! {
        <div ref={node_ref} class={wrapper_classes}>
            { props.children.clone() }
        </div>
    }
}
