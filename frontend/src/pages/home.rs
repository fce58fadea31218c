use yew::prelude::*;

use crate::{
    components::{
        about_section::AboutSection, become_carrier::BecomeCarrier,
        contact_section::ContactSection, coverage_section::CoverageSection,
        driver_careers::DriverCareers, faq::Faq, fleet_section::FleetSection, hero::Hero,
        quote_modal::QuoteModal, scroll_to_top_button::ScrollToTopButton,
        services_section::ServicesSection,
        solutions_section::SolutionsSection, testimonials::Testimonials,
    },
    hooks::use_scroll_to_top,
};

/// The single-scroll landing page. Sections carry ids so the header/footer
/// links and in-page CTAs can smooth-scroll to them.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    use_scroll_to_top();

    // The quote modal is shared by several CTAs; whichever opened it last
    // sets the dialog title.
    let quote_title = use_state(|| None::<String>);

    let open_quote = {
        let quote_title = quote_title.clone();
        Callback::from(move |title: String| quote_title.set(Some(title)))
    };
    let close_quote = {
        let quote_title = quote_title.clone();
        Callback::from(move |_| quote_title.set(None))
    };

    html! {
        <>
            <section id="home">
                <Hero on_quote={open_quote.clone()} />
            </section>
            <section id="about">
                <AboutSection />
            </section>
            <section id="services">
                <ServicesSection />
            </section>
            <SolutionsSection />
            <section id="fleet">
                <FleetSection on_quote={open_quote.clone()} />
            </section>
            <section id="coverage">
                <CoverageSection />
            </section>
            <section id="testimonials">
                <Testimonials />
            </section>
            <section id="careers">
                <DriverCareers />
            </section>
            <BecomeCarrier />
            <Faq />
            <section id="contact">
                <ContactSection />
            </section>

            <QuoteModal
                is_open={quote_title.is_some()}
                title={(*quote_title).clone().unwrap_or_default()}
                on_close={close_quote}
            />
            <ScrollToTopButton />
        </>
    }
}
