use yew::prelude::*;

use crate::hooks::use_scroll_to_top;

const SECTIONS: &[(&str, &str)] = &[
    (
        "Who are we?",
        "TK Expedited LLC is a freight transportation and dispatch company operating from \
         Liberty Township, Ohio. We operate this website and are the controller of the \
         information collected through it.",
    ),
    (
        "What is the Privacy Notice covered by?",
        "This notice covers information collected through the website, including the quote, \
         contact, newsletter, driver application, and carrier setup forms.",
    ),
    (
        "What information do we collect, how and why?",
        "The information we process is divided into two categories: technical information and \
         information that is provided to us by user and client. Technical information includes \
         IP address, UTM parameters, geolocation, device type, browser type, cookies, and \
         information about your interaction with the site. Personal information provided by the \
         user includes name, phone number, email, and company name.",
    ),
    (
        "How long do we keep your information?",
        "We store client information for the duration of the service and 36 months after \
         completion. We store users' personal information for 18 months.",
    ),
    (
        "Do we share information with third parties?",
        "We share information only with service providers that help us operate the site and \
         deliver our services, and never sell personal information.",
    ),
    (
        "Do we use cookies?",
        "We use cookies necessary for the functioning of the site. You can disable cookies in \
         your browser settings.",
    ),
    (
        "What rights do I have regarding my information?",
        "You have the right to access your information, correct it, and request its deletion.",
    ),
    (
        "How do we update Privacy Notice?",
        "We may update this notice from time to time; the latest revision is always published \
         on this page.",
    ),
];

#[function_component(PrivacyPage)]
pub fn privacy_page() -> Html {
    use_scroll_to_top();

    html! {
        <main class={classes!("bg-gray-50", "min-h-screen", "py-16")}>
            <div class={classes!("container", "mx-auto", "px-4", "max-w-3xl")}>
                <h1 class={classes!("text-4xl", "font-bold", "text-gray-900", "mb-2")}>
                    { "Privacy Notice" }
                </h1>
                <p class={classes!("text-gray-500", "mb-10")}>
                    { "TK Expedited LLC Privacy Notice" }
                </p>

                <div class={classes!("mb-10")}>
                    <p class={classes!("text-gray-700", "mb-3")}>
                        { "In this Privacy Notice we answer the following questions:" }
                    </p>
                    <ul class={classes!("list-disc", "pl-6", "space-y-1", "text-gray-600")}>
                        { for SECTIONS.iter().map(|(question, _)| html! {
                            <li>{ *question }</li>
                        }) }
                    </ul>
                </div>

                { for SECTIONS.iter().map(|(question, answer)| html! {
                    <section class={classes!("mb-8")}>
                        <h2 class={classes!("text-2xl", "font-semibold", "text-gray-900", "mb-3")}>
                            { *question }
                        </h2>
                        <p class={classes!("text-gray-700", "leading-relaxed")}>{ *answer }</p>
                    </section>
                }) }
            </div>
        </main>
    }
}
