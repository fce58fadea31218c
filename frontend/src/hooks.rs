use tk_expedited_shared::pager::PageState;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::use_location;

/// Paginate arbitrary vectors inside a component.
///
/// The arithmetic (clamping, page counts, slicing) lives in
/// `tk_expedited_shared::pager`; this hook only makes it reactive. Returns
/// the visible slice, the current page, the total page count, and a
/// `go_to_page` callback that clamps and ignores no-op navigation.
#[hook]
pub fn use_pagination<T>(
    items: Vec<T>,
    items_per_page: usize,
) -> (Vec<T>, usize, usize, Callback<usize>)
where
    T: Clone + PartialEq + 'static,
{
    let page_state = use_state(|| PageState::new(items_per_page));

    // Re-clamp whenever the collection changes size, e.g. a re-fetch shrank
    // it below the current page.
    {
        let page_state = page_state.clone();
        use_effect_with(items.len(), move |len| {
            let clamped = page_state.clamped(*len);
            if clamped != *page_state {
                page_state.set(clamped);
            }
            || ()
        });
    }

    let len = items.len();
    let total_pages = page_state.page_count(len);

    let memoized_slice = {
        let state_snapshot = *page_state;
        use_memo((items, state_snapshot), move |(items, state)| {
            state.clamped(items.len()).visible_slice(items).to_vec()
        })
    };

    let go_to_page = {
        let page_state = page_state.clone();
        Callback::from(move |page: usize| {
            let next = page_state.go_to(page, len);
            if next != *page_state {
                page_state.set(next);
            }
        })
    };

    (
        (*memoized_slice).clone(),
        page_state.clamped(len).current_page(),
        total_pages,
        go_to_page,
    )
}

/// Automatically scroll the viewport to the top whenever the current route
/// changes.
///
/// Call this inside top-level pages so navigating between e.g. the home page
/// and the carrier setup form never lands mid-viewport.
#[hook]
pub fn use_scroll_to_top() {
    let location = use_location();

    use_effect_with(location, move |location| {
        if location.is_some() {
            scroll_window_to_top();
        }

        || ()
    });
}

fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
