use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::animation::web::WebAnimations;
use crate::animation::AnimationController;
use crate::components::chat_widget::ChatWidget;
use crate::components::contact_form::ContactForm;
use crate::components::loading_overlay::{LoadingOverlay, LoadingOverlayView, OverlayState};
use crate::config;
use crate::dom::Subscription;
use crate::timing::{Delay, TimerDelay};

struct Service {
    title: &'static str,
    text: &'static str,
    image: &'static str,
}

const SERVICES: [Service; 3] = [
    Service {
        title: "Sustainable Design",
        text: "Passive heating, daylight-first layouts and low-carbon materials from the first sketch.",
        image: "/assets/design.jpg",
    },
    Service {
        title: "Consultation",
        text: "Energy audits and retrofit plans that make existing buildings cheaper to run.",
        image: "/assets/consultation.jpg",
    },
    Service {
        title: "Project Management",
        text: "One team from permits to handover, keeping schedule, budget and footprint in check.",
        image: "/assets/management.jpg",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    let overlay_state = use_reducer(OverlayState::default);
    // None once the page is gone, so late animations drop their listeners right away
    let subscriptions = use_mut_ref(|| Some(Vec::<Subscription>::new()));

    {
        let overlay = {
            let overlay_state = overlay_state.clone();
            LoadingOverlay::new(Callback::from(move |action| overlay_state.dispatch(action)))
        };
        let subscriptions = subscriptions.clone();
        use_mount(move || {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }

            let controller = AnimationController::new(WebAnimations::default());
            controller.initialize();
            overlay.show();

            TimerDelay.after(
                config::OVERLAY_DELAY_MS,
                Box::new(move || {
                    overlay.hide(&TimerDelay);
                    let started = controller.run_page_animations();
                    if let Some(active) = subscriptions.borrow_mut().as_mut() {
                        active.extend(started);
                    }
                }),
            );
        });
    }

    {
        let subscriptions = subscriptions.clone();
        use_unmount(move || {
            subscriptions.borrow_mut().take();
        });
    }

    html! {
        <div class="home">
            <LoadingOverlayView state={*overlay_state} />

            <section class="hero text-white d-flex align-items-center">
                <div class="dynamic-bg"></div>
                <div class="container text-center">
                    <h1 class="display-3 fw-bold">{"Building Tomorrow, Sustainably"}</h1>
                    <p class="lead">
                        {"Empire Builders designs homes and workplaces that give back more than they take."}
                    </p>
                    <a href="#contact" class="btn btn-primary btn-lg me-2">{"Get a Quote"}</a>
                    <a href="#services" class="btn btn-outline-light btn-lg">{"Our Services"}</a>
                </div>
            </section>

            <section id="services" class="bg-light py-5">
                <div class="container">
                    <h2 class="text-center mb-5">{"Our Sustainable Approach"}</h2>
                    <div class="row g-4">
                        { for SERVICES.iter().map(|service| html! {
                            <div class="col-md-4">
                                <div class="card h-100">
                                    <img src={service.image} class="card-img-top" alt={service.title} />
                                    <div class="card-body">
                                        <h5 class="card-title">{ service.title }</h5>
                                        <p class="card-text">{ service.text }</p>
                                    </div>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="about" class="py-5">
                <div class="container">
                    <h2 class="text-center mb-4">{"Why Empire Builders"}</h2>
                    <p class="text-center mx-auto about-text">
                        {"Twenty years of green architecture, over 300 completed projects and a simple rule: \
                          every building should be cheaper to live in than the one it replaces."}
                    </p>
                </div>
            </section>

            <section id="contact" class="py-5 bg-light">
                <div class="container">
                    <h2 class="text-center mb-4">{"Contact Us"}</h2>
                    <div class="row justify-content-center">
                        <div class="col-lg-8">
                            <ContactForm />
                        </div>
                    </div>
                </div>
            </section>

            <footer class="py-4 text-center text-muted">
                {"© Empire Builders · 123 Eco Street, Green City"}
            </footer>

            <ChatWidget />

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    background: linear-gradient(rgba(0,0,0,0.7), rgba(0,0,0,0.7)),
                                url('/assets/hero.avif') center/cover;
                    overflow: hidden;
                }
                .dynamic-bg {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100%;
                    background: linear-gradient(45deg, rgba(0,123,255,0.2), rgba(0,123,255,0), rgba(0,123,255,0.2));
                    background-size: 200% 200%;
                    z-index: 0;
                    pointer-events: none;
                }
                .hero .container {
                    position: relative;
                    z-index: 1;
                }
                .card {
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                    overflow: hidden;
                }
                .card:hover {
                    transform: translateY(-5px);
                    box-shadow: 0 12px 24px rgba(0, 0, 0, 0.15);
                }
                .card-img-top {
                    transition: transform 0.3s ease;
                }
                .card:hover .card-img-top {
                    transform: scale(1.05);
                }
                .about-text {
                    max-width: 720px;
                }
                "#}
            </style>
        </div>
    }
}
