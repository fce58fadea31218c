use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsCardProps {
    pub label: String,
    pub value: String,
}

/// One summary tile above a dashboard table (e.g. "Drivers" / "12").
#[function_component(StatsCard)]
pub fn stats_card(props: &StatsCardProps) -> Html {
    html! {
        <div class="stats-card" role="status">
            <p class={classes!("text-base", "font-medium", "text-gray-500")}>
                { props.label.clone() }
            </p>
            <p class={classes!("text-2xl", "font-semibold", "text-gray-900")}>
                { props.value.clone() }
            </p>
        </div>
    }
}
