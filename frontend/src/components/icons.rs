use yew::prelude::*;

/// Lucide icons - SVG path data from https://lucide.dev
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconName {
    // Contact
    Phone,
    Mail,
    MapPin,

    // Domain
    Truck,
    IdCard,
    ClipboardCheck,
    FileText,
    Shield,
    Users,

    // Actions / status
    Check,
    X,
    Menu,
    ChevronDown,
    Star,
}

impl IconName {
    /// SVG path data for the icon.
    pub fn path(&self) -> &'static str {
        match self {
            IconName::Phone => {
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 \
                 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 \
                 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 \
                 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"
            },
            IconName::Mail => {
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 \
                 2-2zM22 6l-10 7L2 6"
            },
            IconName::MapPin => {
                "M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0zM12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6z"
            },
            IconName::Truck => {
                "M5 18H3V6a1 1 0 0 1 1-1h10a1 1 0 0 1 1 1v12H9m6 0h2m4 0h2v-6l-3-5h-5v11M8 \
                 20a2 2 0 1 0 0-4 2 2 0 0 0 0 4zm10 0a2 2 0 1 0 0-4 2 2 0 0 0 0 4z"
            },
            IconName::IdCard => {
                "M2 7a2 2 0 0 1 2-2h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 \
                 1-2-2zM6 10h4M6 14h4M15 10h3M15 14h3"
            },
            IconName::ClipboardCheck => {
                "M9 5H7a2 2 0 0 0-2 2v12a2 2 0 0 0 2 2h10a2 2 0 0 0 2-2V7a2 2 0 0 \
                 0-2-2h-2M9 5a2 2 0 0 0 2 2h2a2 2 0 0 0 2-2M9 5a2 2 0 0 1 2-2h2a2 2 0 0 1 \
                 2 2m-6 9 2 2 4-4"
            },
            IconName::FileText => {
                "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8zM14 2v6h6M16 13H8M16 \
                 17H8M10 9H8"
            },
            IconName::Shield => "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z",
            IconName::Users => {
                "M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 \
                 8zM23 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75"
            },
            IconName::Check => "M5 13l4 4L19 7",
            IconName::X => "M18 6 6 18M6 6l12 12",
            IconName::Menu => "M4 12h16M4 6h16M4 18h16",
            IconName::ChevronDown => "m6 9 6 6 6-6",
            IconName::Star => {
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 \
                 14.14 2 9.27l6.91-1.01z"
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: IconName,

    #[prop_or(24)]
    pub size: u32,

    #[prop_or_else(|| "currentColor".to_string())]
    pub color: String,

    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let IconProps {
        name,
        size,
        color,
        class,
    } = props;

    let stroke_width = if *size <= 16 { 2.5 } else { 1.8 };
    let fill = if matches!(name, IconName::Star) { color.clone() } else { "none".to_string() };

    html! {
        <svg
            class={classes!("inline-flex", "items-center", "justify-center", "shrink-0", class.clone())}
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill={fill}
            stroke={color.clone()}
            stroke-width={stroke_width.to_string()}
            stroke-linecap="round"
            stroke-linejoin="round"
            xmlns="http://www.w3.org/2000/svg"
            aria-hidden="true"
        >
            <path d={name.path()} />
        </svg>
    }
}
