use std::{cell::RefCell, collections::HashMap, rc::Rc};

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::{
    api::{self, ApiError},
    auth::{self, use_auth},
    components::{
        loading_spinner::{LoadingSpinner, SpinnerSize},
        notification::{Notification, NotificationKind},
        pagination::Pagination,
        stats_card::StatsCard,
    },
    hooks::{use_pagination, use_scroll_to_top},
    utils,
};
use tk_expedited_shared::{
    edits::{EditKey, EditPhase, EditTracker, PersistOutcome},
    roles::Role,
    summary::RoleSummary,
    Carrier, User, UserPatch,
};

const PAGE_SIZE: usize = 10;
/// Quiescence window for keystroke-churn fields.
const DEBOUNCE_MS: u32 = 1000;

const DISPLAY_NAME_FIELD: &str = "displayName";
const ROLES_FIELD: &str = "roles";

#[derive(Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Users,
    Carriers,
}

/// Admin dashboard, gated on the `admin` role claim. The server enforces
/// the role again on every call; this gate only decides what to render.
#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    use_scroll_to_top();
    let session = use_auth();
    let active_tab = use_state(|| AdminTab::Users);

    if session.loading {
        return html! {
            <main class={classes!("min-h-[60vh]", "flex", "items-center", "justify-center")}>
                <LoadingSpinner size={SpinnerSize::Large} />
            </main>
        };
    }

    if !session.is_admin() {
        return html! {
            <main class={classes!("mx-auto", "px-4", "py-16", "text-center")}>
                <h1 class={classes!("text-3xl", "font-bold", "mb-4", "text-gray-800")}>
                    { "Admin Dashboard" }
                </h1>
                <p class={classes!("text-gray-600")}>
                    { "This area is restricted to administrators. Sign in with an admin \
                       account to continue." }
                </p>
            </main>
        };
    }

    let tab_button = |tab: AdminTab, label: &'static str| {
        let active_tab = active_tab.clone();
        let is_active = *active_tab == tab;
        let onclick = Callback::from(move |_| active_tab.set(tab));
        let classes = if is_active {
            classes!("mr-2", "px-4", "py-2", "rounded", "bg-blue-500", "text-white")
        } else {
            classes!("mr-2", "px-4", "py-2", "rounded", "bg-gray-200", "text-gray-700")
        };
        html! {
            <button type="button" {onclick} class={classes}>{ label }</button>
        }
    };

    html! {
        <main class={classes!("mx-auto", "px-4", "py-8", "max-w-7xl")}>
            <h1 class={classes!("text-3xl", "font-bold", "mb-6", "text-gray-800")}>
                { "Admin Dashboard" }
            </h1>
            <div class={classes!("mb-4")}>
                { tab_button(AdminTab::Users, "Users") }
                { tab_button(AdminTab::Carriers, "Carriers") }
            </div>
            {
                match *active_tab {
                    AdminTab::Users => html! { <UsersPanel /> },
                    AdminTab::Carriers => html! { <CarriersPanel /> },
                }
            }
        </main>
    }
}

/// Replace one row in the collection, leaving the rest untouched.
fn patch_user_row(users: &UseStateHandle<Vec<User>>, id: i64, apply: impl Fn(&mut User)) {
    let next: Vec<User> = users
        .iter()
        .map(|user| {
            if user.id == id {
                let mut patched = user.clone();
                apply(&mut patched);
                patched
            } else {
                user.clone()
            }
        })
        .collect();
    users.set(next);
}

/// Send one persistence call and settle it against the edit tracker.
///
/// A failed call leaves the optimistic row in place (no rollback); the cell
/// is flagged stale and the next full re-fetch reconciles it. A response
/// superseded by a newer dispatch is dropped on arrival.
fn spawn_persist(
    id: i64,
    field: &'static str,
    seq: u64,
    patch: UserPatch,
    tracker: Rc<RefCell<EditTracker>>,
    notice: UseStateHandle<Option<(String, NotificationKind)>>,
) {
    spawn_local(async move {
        let result = match auth::current_id_token().await {
            Ok(token) => api::update_user(&token, id, &patch).await,
            Err(err) => Err(err),
        };

        if let Err(err) = &result {
            web_sys::console::error_1(
                &format!("Failed to persist {field} for user {id}: {err}").into(),
            );
        }

        let outcome = tracker
            .borrow_mut()
            .complete_persist(id, field, seq, result.is_ok());
        if outcome == PersistOutcome::Failed {
            notice.set(Some((
                "A change could not be saved. It stays visible here and will be \
                 reconciled on the next refresh."
                    .to_string(),
                NotificationKind::Error,
            )));
        }
    });
}

#[function_component(UsersPanel)]
fn users_panel() -> Html {
    let users = use_state(Vec::<User>::new);
    let loading = use_state(|| true);
    let load_error = use_state(|| None::<String>);
    let notice = use_state(|| None::<(String, NotificationKind)>);
    // Guards against a slow response overwriting a newer fetch.
    let fetch_seq = use_mut_ref(|| 0_u64);
    let tracker = use_mut_ref(EditTracker::new);
    // One pending quiescence timer per editable cell; inserting over an
    // entry drops (and thereby cancels) the previous timer.
    let timers = use_mut_ref(HashMap::<EditKey, Timeout>::new);

    let (visible_users, current_page, total_pages, go_to_page) =
        use_pagination((*users).clone(), PAGE_SIZE);
    let summary = RoleSummary::aggregate(&users);

    let refresh = {
        let users = users.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        let fetch_seq = fetch_seq.clone();
        let tracker = tracker.clone();
        let timers = timers.clone();
        Callback::from(move |_| {
            let users = users.clone();
            let loading = loading.clone();
            let load_error = load_error.clone();
            let fetch_seq = fetch_seq.clone();
            let tracker = tracker.clone();
            let timers = timers.clone();
            let request_id = {
                let mut seq = fetch_seq.borrow_mut();
                *seq += 1;
                *seq
            };
            loading.set(true);
            spawn_local(async move {
                let result = match auth::current_id_token().await {
                    Ok(token) => api::fetch_admin_users(&token).await,
                    Err(err) => Err(err),
                };
                if *fetch_seq.borrow() != request_id {
                    return;
                }
                match result {
                    Ok(data) => {
                        users.set(data);
                        load_error.set(None);
                        // The fetched collection is the reconciliation
                        // point: pending edits and timers are obsolete.
                        tracker.borrow_mut().clear();
                        timers.borrow_mut().clear();
                    },
                    Err(err) => {
                        load_error.set(Some(format!("Failed to load users: {err}")));
                    },
                }
                loading.set(false);
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    // High-churn field: optimistic patch now, debounced persist later.
    // Every keystroke restarts the cell's quiescence timer, so only the
    // last value within the window is sent.
    let on_display_name_input = {
        let users = users.clone();
        let tracker = tracker.clone();
        let timers = timers.clone();
        let notice = notice.clone();
        Callback::from(move |(id, value): (i64, String)| {
            patch_user_row(&users, id, |user| user.display_name = value.clone());
            tracker.borrow_mut().note_edit(id, DISPLAY_NAME_FIELD, value.clone());

            let tracker = tracker.clone();
            let notice = notice.clone();
            let timeout = Timeout::new(DEBOUNCE_MS, move || {
                let dispatch = tracker.borrow_mut().begin_persist(id, DISPLAY_NAME_FIELD);
                if let Some((seq, latest)) = dispatch {
                    spawn_persist(
                        id,
                        DISPLAY_NAME_FIELD,
                        seq,
                        UserPatch {
                            display_name: Some(latest),
                            roles: None,
                        },
                        tracker.clone(),
                        notice.clone(),
                    );
                }
            });
            timers.borrow_mut().insert((id, DISPLAY_NAME_FIELD), timeout);
        })
    };

    // Low-churn field: optimistic patch and immediate, uncoalesced persist.
    let on_roles_change = {
        let users = users.clone();
        let tracker = tracker.clone();
        let notice = notice.clone();
        Callback::from(move |(id, roles): (i64, Vec<String>)| {
            patch_user_row(&users, id, |user| user.roles = roles.clone());
            let dispatch = {
                let mut tracker = tracker.borrow_mut();
                tracker.note_edit(id, ROLES_FIELD, roles.join(","));
                tracker.begin_persist(id, ROLES_FIELD)
            };
            if let Some((seq, _)) = dispatch {
                spawn_persist(
                    id,
                    ROLES_FIELD,
                    seq,
                    UserPatch {
                        display_name: None,
                        roles: Some(roles),
                    },
                    tracker.clone(),
                    notice.clone(),
                );
            }
        })
    };

    // Approval is server-authoritative: success reconciles through a full
    // re-fetch, a 403 surfaces as-is with local state untouched and no
    // re-fetch.
    let on_approve = {
        let notice = notice.clone();
        let refresh = refresh.clone();
        Callback::from(move |id: i64| {
            let notice = notice.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                let result = match auth::current_id_token().await {
                    Ok(token) => api::approve_user(&token, id).await,
                    Err(err) => Err(err),
                };
                match result {
                    Ok(()) => refresh.emit(()),
                    Err(ApiError::Authorization) => {
                        notice.set(Some((
                            "Your account does not have permission to approve users."
                                .to_string(),
                            NotificationKind::Error,
                        )));
                    },
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Failed to approve user {id}: {err}").into(),
                        );
                        notice.set(Some((
                            format!("Failed to approve user: {err}"),
                            NotificationKind::Error,
                        )));
                    },
                }
            });
        })
    };

    let clear_notice = {
        let notice = notice.clone();
        Callback::from(move |_| notice.set(None))
    };

    let summary_cards: Vec<(&'static str, usize)> = vec![
        ("Total Users", summary.total),
        ("Admins", summary.admin),
        ("Dispatchers", summary.dispatcher),
        ("Brokers", summary.broker),
        ("Owners", summary.owner),
        ("Drivers", summary.driver),
        ("Regular Users", summary.user),
    ];

    let toast = match &*notice {
        Some((message, kind)) => html! {
            <Notification
                message={message.clone()}
                kind={*kind}
                on_close={Some(clear_notice.clone())}
            />
        },
        None => Html::default(),
    };

    if *loading && users.is_empty() {
        return html! {
            <div class={classes!("flex", "items-center", "justify-center", "min-h-[300px]")}>
                <LoadingSpinner size={SpinnerSize::Large} />
            </div>
        };
    }

    if let Some(error) = &*load_error {
        let retry = {
            let refresh = refresh.clone();
            Callback::from(move |_| refresh.emit(()))
        };
        return html! {
            <div class={classes!("text-center", "py-8")}>
                <p class={classes!("text-red-500", "mb-4")}>{ error.clone() }</p>
                <button
                    type="button"
                    onclick={retry}
                    class={classes!(
                        "px-4", "py-2", "rounded", "bg-blue-500", "text-white",
                        "hover:bg-blue-600"
                    )}
                >
                    { "Retry" }
                </button>
            </div>
        };
    }

    html! {
        <div>
            <h2 class={classes!("text-3xl", "font-bold", "mb-6", "text-gray-800")}>
                { "Users List" }
            </h2>

            // Role summary
            <div class={classes!("mb-6", "bg-white", "shadow-md", "rounded-lg", "p-4")}>
                <h3 class={classes!("text-xl", "font-semibold", "mb-3", "text-gray-800")}>
                    { "User Summary" }
                </h3>
                <div class={classes!("grid", "grid-cols-2", "md:grid-cols-4", "gap-4")}>
                    { for summary_cards.iter().map(|(label, value)| html! {
                        <StatsCard label={label.to_string()} value={value.to_string()} />
                    }) }
                </div>
            </div>

            if tracker.borrow().any_stale() {
                <p class={classes!("mb-4", "text-base", "text-amber-600")}>
                    { "Some edits could not be saved; they will be reconciled on the next \
                       refresh." }
                </p>
            }

            <div class={classes!("overflow-x-auto", "bg-white", "shadow-md", "rounded-lg")}>
                <table class={classes!("min-w-full", "table-auto")}>
                    <thead class={classes!("bg-gray-200")}>
                        <tr>
                            { for ["Email", "Display Name", "Roles", "Approved", "Actions"]
                                .iter()
                                .map(|heading| html! {
                                    <th class={classes!(
                                        "px-4", "py-2", "text-left", "text-xs", "font-semibold",
                                        "text-gray-600", "uppercase", "tracking-wider"
                                    )}>
                                        { *heading }
                                    </th>
                                }) }
                        </tr>
                    </thead>
                    <tbody class={classes!("bg-white", "divide-y", "divide-gray-200")}>
                        { for visible_users.iter().map(|user| {
                            let id = user.id;
                            let name_stale = tracker.borrow().phase(id, DISPLAY_NAME_FIELD)
                                == EditPhase::Stale
                                || tracker.borrow().phase(id, ROLES_FIELD) == EditPhase::Stale;

                            let name_oninput = {
                                let on_display_name_input = on_display_name_input.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    on_display_name_input.emit((id, input.value()));
                                })
                            };
                            let roles_onchange = {
                                let on_roles_change = on_roles_change.clone();
                                Callback::from(move |e: Event| {
                                    let select: HtmlSelectElement = e.target_unchecked_into();
                                    on_roles_change.emit((id, utils::selected_values(&select)));
                                })
                            };
                            let approve_onclick = {
                                let on_approve = on_approve.clone();
                                Callback::from(move |_| on_approve.emit(id))
                            };

                            let approved_badge = if user.is_approved {
                                classes!(
                                    "px-2", "inline-flex", "text-xs", "leading-5",
                                    "font-semibold", "rounded-full", "bg-green-100",
                                    "text-green-800"
                                )
                            } else {
                                classes!(
                                    "px-2", "inline-flex", "text-xs", "leading-5",
                                    "font-semibold", "rounded-full", "bg-red-100",
                                    "text-red-800"
                                )
                            };

                            html! {
                                <tr key={id.to_string()}>
                                    <td class={classes!("px-4", "py-2", "whitespace-nowrap")}>
                                        { user.email.clone() }
                                    </td>
                                    <td class={classes!("px-4", "py-2", "whitespace-nowrap")}>
                                        <input
                                            class={classes!(
                                                "border", "rounded", "px-2", "py-1", "w-full"
                                            )}
                                            value={user.display_name.clone()}
                                            oninput={name_oninput}
                                        />
                                        if name_stale {
                                            <span class={classes!("text-xs", "text-amber-600")}>
                                                { "unsaved" }
                                            </span>
                                        }
                                    </td>
                                    <td class={classes!("px-4", "py-2", "whitespace-nowrap")}>
                                        <select
                                            multiple={true}
                                            size="5"
                                            class={classes!(
                                                "border", "rounded", "px-2", "py-1", "w-full"
                                            )}
                                            onchange={roles_onchange}
                                        >
                                            { for Role::ALL.iter().map(|role| html! {
                                                <option
                                                    value={role.as_tag()}
                                                    selected={user.roles.iter()
                                                        .any(|tag| tag == role.as_tag())}
                                                >
                                                    { role.label() }
                                                </option>
                                            }) }
                                        </select>
                                    </td>
                                    <td class={classes!("px-4", "py-2", "whitespace-nowrap")}>
                                        <span class={approved_badge}>
                                            { if user.is_approved { "Yes" } else { "No" } }
                                        </span>
                                    </td>
                                    <td class={classes!("px-4", "py-2", "whitespace-nowrap")}>
                                        if !user.is_approved {
                                            <button
                                                type="button"
                                                onclick={approve_onclick}
                                                class={classes!(
                                                    "bg-blue-500", "hover:bg-blue-700",
                                                    "text-white", "font-bold", "py-1", "px-2",
                                                    "rounded"
                                                )}
                                            >
                                                { "Approve" }
                                            </button>
                                        }
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>

            <div class={classes!("mt-4", "flex", "justify-center")}>
                <Pagination
                    current_page={current_page}
                    total_pages={total_pages}
                    on_page_change={go_to_page.clone()}
                />
            </div>

            { toast }
        </div>
    }
}

#[function_component(CarriersPanel)]
fn carriers_panel() -> Html {
    let carriers = use_state(Vec::<Carrier>::new);
    let loading = use_state(|| true);
    let load_error = use_state(|| None::<String>);
    let fetch_seq = use_mut_ref(|| 0_u64);

    let (visible_carriers, current_page, total_pages, go_to_page) =
        use_pagination((*carriers).clone(), PAGE_SIZE);

    let refresh = {
        let carriers = carriers.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        let fetch_seq = fetch_seq.clone();
        Callback::from(move |_| {
            let carriers = carriers.clone();
            let loading = loading.clone();
            let load_error = load_error.clone();
            let fetch_seq = fetch_seq.clone();
            let request_id = {
                let mut seq = fetch_seq.borrow_mut();
                *seq += 1;
                *seq
            };
            loading.set(true);
            spawn_local(async move {
                let result = match auth::current_id_token().await {
                    Ok(token) => api::fetch_admin_carriers(&token).await,
                    Err(err) => Err(err),
                };
                if *fetch_seq.borrow() != request_id {
                    return;
                }
                match result {
                    Ok(data) => {
                        carriers.set(data);
                        load_error.set(None);
                    },
                    Err(err) => {
                        load_error.set(Some(format!("Failed to load carriers: {err}")));
                    },
                }
                loading.set(false);
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    if *loading && carriers.is_empty() {
        return html! {
            <div class={classes!("text-center", "py-8", "text-gray-600")}>
                { "Loading carriers..." }
            </div>
        };
    }

    if let Some(error) = &*load_error {
        let retry = {
            let refresh = refresh.clone();
            Callback::from(move |_| refresh.emit(()))
        };
        return html! {
            <div class={classes!("text-center", "py-8")}>
                <p class={classes!("text-red-500", "mb-4")}>{ error.clone() }</p>
                <button
                    type="button"
                    onclick={retry}
                    class={classes!(
                        "px-4", "py-2", "rounded", "bg-blue-500", "text-white",
                        "hover:bg-blue-600"
                    )}
                >
                    { "Retry" }
                </button>
            </div>
        };
    }

    html! {
        <div class={classes!("w-full")}>
            <h2 class={classes!("text-3xl", "font-bold", "mb-6", "text-gray-800")}>
                { "Carriers List" }
            </h2>

            <div class={classes!("mb-6", "bg-white", "shadow-md", "rounded-lg", "p-4")}>
                <h3 class={classes!("text-xl", "font-semibold", "mb-3", "text-gray-800")}>
                    { "Carrier Summary" }
                </h3>
                <StatsCard label={"Total Carriers".to_string()} value={carriers.len().to_string()} />
            </div>

            <div class={classes!("overflow-x-auto")}>
                <table class={classes!(
                    "min-w-full", "bg-white", "shadow-md", "rounded-lg", "overflow-hidden"
                )}>
                    <thead class={classes!("bg-gray-200")}>
                        <tr>
                            { for ["Company Name", "DBA", "City", "Phone", "MC", "USDOT",
                                   "# of Trucks", "# of Drivers", "Documents"]
                                .iter()
                                .map(|heading| html! {
                                    <th class={classes!(
                                        "px-4", "py-3", "text-left", "text-base",
                                        "font-semibold", "text-gray-600", "uppercase",
                                        "tracking-wider"
                                    )}>
                                        { *heading }
                                    </th>
                                }) }
                        </tr>
                    </thead>
                    <tbody class={classes!("divide-y", "divide-gray-200")}>
                        { for visible_carriers.iter().map(|carrier| html! {
                            <tr key={carrier.id.to_string()} class={classes!("hover:bg-gray-50")}>
                                <td class={classes!("px-4", "py-4", "whitespace-nowrap")}>
                                    { carrier.company_name.clone() }
                                </td>
                                <td class={classes!("px-4", "py-4", "whitespace-nowrap")}>
                                    { carrier.dba.clone() }
                                </td>
                                <td class={classes!("px-4", "py-4", "whitespace-nowrap")}>
                                    { carrier.city.clone() }
                                </td>
                                <td class={classes!("px-4", "py-4", "whitespace-nowrap")}>
                                    { carrier.phone.clone() }
                                </td>
                                <td class={classes!("px-4", "py-4", "whitespace-nowrap")}>
                                    { carrier.mc.clone() }
                                </td>
                                <td class={classes!("px-4", "py-4", "whitespace-nowrap")}>
                                    { carrier.usdot.clone() }
                                </td>
                                <td class={classes!("px-4", "py-4", "whitespace-nowrap")}>
                                    { carrier.number_of_trucks.clone() }
                                </td>
                                <td class={classes!("px-4", "py-4", "whitespace-nowrap")}>
                                    { carrier.number_of_drivers.clone() }
                                </td>
                                <td class={classes!("px-4", "py-4", "whitespace-nowrap")}>
                                    {
                                        if carrier.documents.is_empty() {
                                            html! { <span>{ "No documents" }</span> }
                                        } else {
                                            html! {
                                                <>
                                                    { for carrier.documents.iter().enumerate().map(|(index, doc)| html! {
                                                        <a
                                                            key={doc.clone()}
                                                            href={api_file_url(doc)}
                                                            target="_blank"
                                                            rel="noopener noreferrer"
                                                            class={classes!(
                                                                "text-blue-600",
                                                                "hover:text-blue-800", "mr-2"
                                                            )}
                                                        >
                                                            { format!("Document {}", index + 1) }
                                                        </a>
                                                    }) }
                                                </>
                                            }
                                        }
                                    }
                                </td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>

            <div class={classes!("mt-4", "flex", "justify-center")}>
                <Pagination
                    current_page={current_page}
                    total_pages={total_pages}
                    on_page_change={go_to_page.clone()}
                />
            </div>
        </div>
    }
}

#[cfg(not(feature = "mock"))]
fn api_file_url(document: &str) -> String {
    format!("{}/files/{}", api::API_BASE, document)
}

#[cfg(feature = "mock")]
fn api_file_url(document: &str) -> String {
    format!("/files/{document}")
}
