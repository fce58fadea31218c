use yew::prelude::*;

use crate::components::{
    animated_section::AnimatedSection,
    icons::{Icon, IconName},
};

struct Testimonial {
    name: &'static str,
    role: &'static str,
    comment: &'static str,
    rating: u32,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "George Turner",
        role: "Transport Supervisor",
        comment: "It has been our pleasure to work with TK Expedited for the last 6 years. They \
                  have repeatedly shown their commitment to our broker/carrier partnership with \
                  fair and competitive rates and a willingness to adapt to changes that normally \
                  take place in the trucking industry.",
        rating: 5,
    },
    Testimonial {
        name: "Daniel Palmer",
        role: "Businessman",
        comment: "TK Expedited has always been very fair and professional in working with \
                  customers and sales agents. The customer service personnel have been diligent \
                  in selection of carriers to provide savings and service to our clients.",
        rating: 5,
    },
    Testimonial {
        name: "Lily Milton",
        role: "Freight Manager",
        comment: "Over our longstanding relationship with TK Expedited, their commitment to \
                  excellence and outstanding customer service has helped our business run smooth. \
                  Their reliable service and extensive network help us maintain solid \
                  relationships with our own client-base.",
        rating: 5,
    },
    Testimonial {
        name: "Kathi C. Laughman",
        role: "Director - Business System & Solutions",
        comment: "We value the partnership we have developed over the past 6 years. We have given \
                  them many challenges to meet and without faltering they have risen to the \
                  occasion every time. Our customers rank our information delivery as one of our \
                  leading strengths.",
        rating: 5,
    },
    Testimonial {
        name: "Ujala Manandhar",
        role: "Regular Customer",
        comment: "I'm impressed with their efficiency. The package arrived on time, and their \
                  tracking system kept me well-informed throughout the process. The customer \
                  service was responsive and very helpful.",
        rating: 5,
    },
];

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <div class={classes!("bg-gray-100", "py-16")}>
            <div class={classes!("container", "mx-auto", "px-4", "max-w-6xl")}>
                <AnimatedSection>
                    <div class={classes!("text-center", "mb-12")}>
                        <p class={classes!(
                            "text-red-600", "font-semibold", "text-base",
                            "tracking-[0.2em]", "uppercase", "mb-2"
                        )}>
                            { "Testimonials" }
                        </p>
                        <h2 class={classes!("text-3xl", "md:text-4xl", "font-bold", "text-gray-900", "mb-4")}>
                            { "What Our Clients Say" }
                        </h2>
                        <p class={classes!("text-gray-600", "max-w-2xl", "mx-auto")}>
                            { "Don't just take our word for it - hear from some of our satisfied \
                               clients about their experiences with our transportation services." }
                        </p>
                    </div>
                </AnimatedSection>

                <div class={classes!("grid", "grid-cols-1", "md:grid-cols-2", "lg:grid-cols-3", "gap-8")}>
                    { for TESTIMONIALS.iter().map(|testimonial| html! {
                        <AnimatedSection>
                            <div class={classes!(
                                "bg-white", "p-6", "rounded-xl", "shadow-md", "h-full",
                                "flex", "flex-col"
                            )}>
                                <div class={classes!("flex", "gap-1", "mb-4", "text-amber-400")}>
                                    { for (0..testimonial.rating).map(|_| html! {
                                        <Icon name={IconName::Star} size={18} />
                                    }) }
                                </div>
                                <p class={classes!("text-gray-600", "flex-1", "mb-6")}>
                                    { testimonial.comment }
                                </p>
                                <div>
                                    <p class={classes!("font-semibold", "text-gray-900")}>
                                        { testimonial.name }
                                    </p>
                                    <p class={classes!("text-base", "text-gray-500")}>
                                        { testimonial.role }
                                    </p>
                                </div>
                            </div>
                        </AnimatedSection>
                    }) }
                </div>
            </div>
        </div>
    }
}
