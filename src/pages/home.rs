use yew::prelude::*;
use yew::events::SubmitEvent;
use yew_router::prelude::*;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::components::navbar::Navbar;
use crate::components::reveal::Reveal;
use crate::content::{
    ANCHOR_COMMUNITY, ANCHOR_CONCEPT, ANCHOR_CONTACT, ANCHOR_HERO, ANCHOR_LEGAL,
    COMMUNITY_PILLARS, CONCEPT_POINTS, CONTACT_EMAIL, CORE_FEATURES, EXTRA_FEATURES, LEGAL_ITEMS,
    SECTION_ORDER,
};
use crate::Route;

/// Hero drift: 0..500px of scroll maps to 0..200px of downward shift.
fn parallax_shift(scroll_y: f64) -> f64 {
    (scroll_y * 0.4).clamp(0.0, 200.0)
}

/// Hero fade: fully opaque at the top, gone by 300px of scroll.
fn hero_opacity(scroll_y: f64) -> f64 {
    (1.0 - scroll_y / 300.0).max(0.0)
}

#[function_component(Hero)]
fn hero() -> Html {
    let scroll_y = use_state(|| 0.0f64);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let scroll_y = scroll_y.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(y) = win.scroll_y() {
                                    scroll_y.set(y);
                                }
                            }
                        }
                    });
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let drift_style = format!(
        "transform: translateY({}px); opacity: {};",
        parallax_shift(*scroll_y),
        hero_opacity(*scroll_y)
    );

    html! {
        <section id={ANCHOR_HERO} class="hero">
            <div class="hero-backdrop">
                <div class="blob blob-sage"></div>
                <div class="blob blob-blue"></div>
                <svg class="hero-waves" viewBox="0 0 100 100" preserveAspectRatio="none">
                    <path d="M0,50 Q25,30 50,50 T100,50" fill="none" stroke="currentColor" stroke-width="0.1" />
                    <path d="M0,60 Q25,40 50,60 T100,60" fill="none" stroke="currentColor" stroke-width="0.1" />
                    <path d="M0,40 Q25,20 50,40 T100,40" fill="none" stroke="currentColor" stroke-width="0.1" />
                </svg>
            </div>

            <div class="hero-content" style={drift_style}>
                <h1>{"Discover Peace."}<br />{"Anywhere."}</h1>
                <p class="hero-subtitle">
                    {"Sublime Mind helps you find, remember, and share the places in the world where you feel most at peace."}
                </p>
                <div class="hero-cta-group">
                    <button class="cta-primary">{"Explore Sublime Mind"}</button>
                    <button class="cta-secondary">{"Download Now"}</button>
                </div>
            </div>

            <div class="scroll-indicator">
                <i class="fa-solid fa-chevron-down"></i>
            </div>
        </section>
    }
}

#[function_component(Concept)]
fn concept() -> Html {
    html! {
        <section id={ANCHOR_CONCEPT} class="concept">
            <div class="section-inner">
                <div class="concept-grid">
                    <Reveal variant="reveal-left">
                        <div class="phone-frame">
                            <div class="phone-screen">
                                <img
                                    src="https://picsum.photos/seed/map/600/1200"
                                    alt="App Map"
                                    referrerpolicy="no-referrer"
                                />
                                <div class="phone-screen-fade"></div>
                                <div class="phone-topbar">
                                    <div class="phone-chip round"><i class="fa-solid fa-bars"></i></div>
                                    <div class="phone-chip pill">{"San Francisco, CA"}</div>
                                </div>
                                <div class="map-pin pin-sage pulse"><i class="fa-solid fa-location-dot"></i></div>
                                <div class="map-pin pin-blue"><i class="fa-solid fa-location-dot"></i></div>
                            </div>
                        </div>
                    </Reveal>

                    <Reveal variant="reveal-right">
                        <h2>{"A Mindfulness Map"}<br />{"of the World."}</h2>
                        <p class="concept-lead">
                            {"Sublime Mind transforms the world into a living map of calm. Mark the exact places where you feel grounded — a quiet forest trail, a hidden beach, a city rooftop at sunset. Keep them private or share them with the world."}
                        </p>
                        <div class="concept-points">
                            {
                                for CONCEPT_POINTS.iter().map(|(icon, text)| html! {
                                    <div class="concept-point">
                                        <div class="point-icon"><i class={*icon}></i></div>
                                        <span>{ *text }</span>
                                    </div>
                                })
                            }
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[function_component(Features)]
fn features() -> Html {
    html! {
        <section class="features">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"Core Features"}</h2>
                    <p>{"Designed to help you reconnect with the world and yourself."}</p>
                </div>
                <div class="feature-grid">
                    {
                        for CORE_FEATURES.iter().enumerate().map(|(i, f)| html! {
                            <Reveal delay_ms={(i as u32) * 100}>
                                <div class="feature-card">
                                    <div class={classes!("feature-icon", f.accent)}>
                                        <i class={f.icon}></i>
                                    </div>
                                    <h3>{ f.title }</h3>
                                    <p>{ f.blurb }</p>
                                </div>
                            </Reveal>
                        })
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(AdditionalFeatures)]
fn additional_features() -> Html {
    html! {
        <section class="extras">
            <div class="extras-glow"></div>
            <div class="section-inner">
                <div class="extras-header">
                    <h2>{"Forward Thinking"}</h2>
                    <p>{"Premium capabilities for the modern mindful explorer."}</p>
                </div>
                <div class="extras-grid">
                    {
                        for EXTRA_FEATURES.iter().map(|f| html! {
                            <Reveal>
                                <div class="extra-item">
                                    <div class="extra-icon"><i class={f.icon}></i></div>
                                    <h3>{ f.title }</h3>
                                    <p>{ f.blurb }</p>
                                </div>
                            </Reveal>
                        })
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(Philosophy)]
fn philosophy() -> Html {
    html! {
        <section class="philosophy">
            <div class="philosophy-inner">
                <Reveal variant="reveal-scale">
                    <h2>{"Technology That"}<br />{"Encourages Presence."}</h2>
                    <p class="philosophy-quote">
                        {"\"At Vinisbir Technologies, we believe technology should deepen human experience — not distract from it. Sublime Mind is designed to reconnect people with the physical world and the quiet spaces within it.\""}
                    </p>
                    <div class="philosophy-rule"></div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Community)]
fn community() -> Html {
    html! {
        <section id={ANCHOR_COMMUNITY} class="community">
            <div class="community-backdrop">
                <img
                    src="https://picsum.photos/seed/worldmap/1920/1080"
                    alt="World Map"
                    referrerpolicy="no-referrer"
                />
            </div>
            <div class="section-inner">
                <div class="community-card glass">
                    <h2>{"A Global Map of Shared Calm."}</h2>
                    <div class="pillar-grid">
                        {
                            for COMMUNITY_PILLARS.iter().map(|(accent, heading, blurb)| html! {
                                <div class="pillar">
                                    <h4 class={*accent}>{ *heading }</h4>
                                    <p>{ *blurb }</p>
                                </div>
                            })
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(LegalSection)]
fn legal_section() -> Html {
    html! {
        <section id={ANCHOR_LEGAL} class="legal">
            <div class="section-inner">
                <h2>{"Legal"}</h2>
                <div class="legal-grid">
                    {
                        for LEGAL_ITEMS.iter().map(|item| match *item {
                            "Privacy Policy" => html! {
                                <Link<Route> to={Route::Privacy} classes="legal-link">
                                    { *item }
                                </Link<Route>>
                            },
                            "Terms & Conditions" => html! {
                                <Link<Route> to={Route::Terms} classes="legal-link">
                                    { *item }
                                </Link<Route>>
                            },
                            _ => html! {
                                <a href="#" class="legal-link">{ *item }</a>
                            },
                        })
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    // The site has no backend; submitting only suppresses the page reload.
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        info!("Contact form submitted; no delivery backend is configured");
    });

    html! {
        <section id={ANCHOR_CONTACT} class="contact">
            <div class="section-inner">
                <div class="contact-grid">
                    <div class="contact-info">
                        <h2>{"Get in Touch."}</h2>
                        <p>{"For feedback, partnerships, or press enquiries."}</p>
                        <div class="contact-email">
                            <i class="fa-solid fa-envelope"></i>
                            <span>{ CONTACT_EMAIL }</span>
                        </div>
                        <div class="contact-socials">
                            <a href="#" aria-label="Twitter"><i class="fa-brands fa-twitter"></i></a>
                            <a href="#" aria-label="Instagram"><i class="fa-brands fa-instagram"></i></a>
                            <a href="#" aria-label="LinkedIn"><i class="fa-brands fa-linkedin"></i></a>
                        </div>
                    </div>

                    <form class="contact-form" {onsubmit}>
                        <div class="form-row">
                            <div class="form-field">
                                <label for="contact-name">{"Name"}</label>
                                <input id="contact-name" type="text" placeholder="Your name" />
                            </div>
                            <div class="form-field">
                                <label for="contact-email-input">{"Email"}</label>
                                <input id="contact-email-input" type="email" placeholder="Your email" />
                            </div>
                        </div>
                        <div class="form-field">
                            <label for="contact-message">{"Message"}</label>
                            <textarea id="contact-message" rows="4" placeholder="How can we help?"></textarea>
                        </div>
                        <button type="submit" class="cta-primary">{"Send Message"}</button>
                    </form>
                </div>
            </div>
        </section>
    }
}

#[function_component(SiteFooter)]
fn site_footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="section-inner footer-row">
                <div class="footer-copyright">{"Vinisbir Technologies © 2026"}</div>
                <div class="footer-links">
                    <Link<Route> to={Route::Privacy}>{"Privacy"}</Link<Route>>
                    <Link<Route> to={Route::Terms}>{"Terms"}</Link<Route>>
                    <a href="#">{"Cookies"}</a>
                </div>
            </div>
        </footer>
    }
}

/// Body for one entry of [`SECTION_ORDER`]. Navbar and footer return `None`
/// because they render in the fixed slots around `<main>`.
fn section_body(name: &str) -> Option<Html> {
    match name {
        "hero" => Some(html! { <Hero /> }),
        "concept" => Some(html! { <Concept /> }),
        "features" => Some(html! { <Features /> }),
        "additional-features" => Some(html! { <AdditionalFeatures /> }),
        "philosophy" => Some(html! { <Philosophy /> }),
        "community" => Some(html! { <Community /> }),
        "legal" => Some(html! { <LegalSection /> }),
        "contact" => Some(html! { <Contact /> }),
        _ => None,
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <Navbar />
            <main>
                { for SECTION_ORDER.iter().filter_map(|name| section_body(name)) }
            </main>
            <SiteFooter />
            <style>
                {r#"
                    :root {
                        --ink: #1a1a1a;
                        --sand: #f5f1ea;
                        --sage: #9caf88;
                        --muted-blue: #8fa8bf;
                        --earth: #b08968;
                        --font-display: 'Fraunces', Georgia, serif;
                        --font-body: 'Inter', -apple-system, sans-serif;
                    }

                    * {
                        box-sizing: border-box;
                    }

                    body {
                        margin: 0;
                        background: var(--sand);
                        color: var(--ink);
                        font-family: var(--font-body);
                        -webkit-font-smoothing: antialiased;
                    }

                    h1, h2, h3, h4 {
                        font-family: var(--font-display);
                        font-weight: 500;
                        margin: 0;
                    }

                    .section-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }

                    .accent-sage { color: var(--sage); }
                    .accent-blue { color: var(--muted-blue); }
                    .accent-earth { color: var(--earth); }
                    .accent-ink { color: var(--ink); }

                    .glass {
                        background: rgba(255, 255, 255, 0.55);
                        backdrop-filter: blur(16px);
                        -webkit-backdrop-filter: blur(16px);
                        border: 1px solid rgba(255, 255, 255, 0.3);
                    }

                    /* Entrance animations: hidden start states per variant,
                       .visible is latched once by the reveal observer. */
                    .reveal {
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 0.8s cubic-bezier(0.4, 0, 0.2, 1),
                                    transform 0.8s cubic-bezier(0.4, 0, 0.2, 1);
                        will-change: opacity, transform;
                    }

                    .reveal.reveal-left {
                        transform: translateX(-50px);
                    }

                    .reveal.reveal-right {
                        transform: translateX(50px);
                    }

                    .reveal.reveal-scale {
                        transform: scale(0.95);
                        transition-duration: 1s;
                    }

                    .reveal.visible {
                        opacity: 1;
                        transform: none;
                    }

                    .cta-primary {
                        background: var(--ink);
                        color: #fff;
                        border: none;
                        padding: 1rem 2.5rem;
                        border-radius: 9999px;
                        font-size: 1.125rem;
                        font-weight: 500;
                        cursor: pointer;
                        box-shadow: 0 10px 25px rgba(26, 26, 26, 0.1);
                        transition: transform 0.2s, background 0.2s;
                    }

                    .cta-primary:hover {
                        background: rgba(26, 26, 26, 0.9);
                        transform: scale(1.05);
                    }

                    .cta-primary:active {
                        transform: scale(0.95);
                    }

                    .cta-secondary {
                        background: rgba(255, 255, 255, 0.5);
                        backdrop-filter: blur(4px);
                        border: 1px solid rgba(26, 26, 26, 0.1);
                        color: var(--ink);
                        padding: 1rem 2.5rem;
                        border-radius: 9999px;
                        font-size: 1.125rem;
                        font-weight: 500;
                        cursor: pointer;
                        transition: transform 0.2s, background 0.2s;
                    }

                    .cta-secondary:hover {
                        background: #fff;
                        transform: scale(1.05);
                    }

                    /* ---------- Hero ---------- */

                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        padding-top: 5rem;
                    }

                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                    }

                    .blob {
                        position: absolute;
                        border-radius: 50%;
                    }

                    .blob-sage {
                        top: 25%;
                        left: 25%;
                        width: 24rem;
                        height: 24rem;
                        background: rgba(156, 175, 136, 0.2);
                        filter: blur(64px);
                    }

                    .blob-blue {
                        bottom: 25%;
                        right: 25%;
                        width: 30rem;
                        height: 30rem;
                        background: rgba(143, 168, 191, 0.1);
                        filter: blur(64px);
                    }

                    .hero-waves {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        opacity: 0.1;
                        color: var(--ink);
                        pointer-events: none;
                    }

                    .hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        text-align: center;
                        animation: hero-rise 0.8s ease-out;
                    }

                    @keyframes hero-rise {
                        from { opacity: 0; transform: translateY(30px); }
                        to { opacity: 1; transform: translateY(0); }
                    }

                    .hero-content h1 {
                        font-size: clamp(3rem, 8vw, 6rem);
                        line-height: 1.1;
                        letter-spacing: -0.02em;
                        margin-bottom: 2rem;
                    }

                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: rgba(26, 26, 26, 0.6);
                        line-height: 1.6;
                        max-width: 42rem;
                        margin: 0 auto 3rem;
                    }

                    .hero-cta-group {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                    }

                    @media (min-width: 640px) {
                        .hero-cta-group {
                            flex-direction: row;
                        }
                    }

                    .scroll-indicator {
                        position: absolute;
                        bottom: 2.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        color: rgba(26, 26, 26, 0.3);
                        font-size: 2rem;
                        animation: bob 2s ease-in-out infinite;
                    }

                    @keyframes bob {
                        0%, 100% { transform: translate(-50%, 0); }
                        50% { transform: translate(-50%, 10px); }
                    }

                    /* ---------- Concept ---------- */

                    .concept {
                        padding: 8rem 0;
                        background: rgba(255, 255, 255, 0.4);
                    }

                    .concept-grid {
                        display: grid;
                        gap: 4rem;
                        align-items: center;
                    }

                    @media (min-width: 768px) {
                        .concept-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }

                    .phone-frame {
                        background: var(--sand);
                        border-radius: 3rem;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        box-shadow: 0 25px 50px rgba(26, 26, 26, 0.25);
                        padding: 1rem;
                        max-width: 320px;
                        margin: 0 auto;
                        aspect-ratio: 9 / 19;
                    }

                    .phone-screen {
                        position: relative;
                        width: 100%;
                        height: 100%;
                        background: #e8e8ec;
                        border-radius: 2.5rem;
                        overflow: hidden;
                    }

                    .phone-screen > img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0.5;
                    }

                    .phone-screen-fade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom, transparent, rgba(255, 255, 255, 0.8));
                    }

                    .phone-topbar {
                        position: absolute;
                        top: 3rem;
                        left: 1.5rem;
                        right: 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .phone-chip {
                        background: rgba(255, 255, 255, 0.9);
                        box-shadow: 0 2px 8px rgba(26, 26, 26, 0.08);
                        font-size: 0.75rem;
                        font-weight: 500;
                    }

                    .phone-chip.round {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .phone-chip.pill {
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                    }

                    .map-pin {
                        position: absolute;
                        width: 2rem;
                        height: 2rem;
                        border-radius: 50%;
                        border: 4px solid #fff;
                        box-shadow: 0 4px 12px rgba(26, 26, 26, 0.2);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        font-size: 0.75rem;
                    }

                    .pin-sage {
                        top: 33%;
                        left: 25%;
                        background: var(--sage);
                    }

                    .pin-blue {
                        bottom: 25%;
                        right: 33%;
                        background: var(--muted-blue);
                    }

                    .pulse {
                        animation: pulse 2s ease-in-out infinite;
                    }

                    @keyframes pulse {
                        0%, 100% { transform: scale(1); }
                        50% { transform: scale(1.2); }
                    }

                    .concept h2 {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        line-height: 1.2;
                        margin-bottom: 2rem;
                    }

                    .concept-lead {
                        font-size: 1.125rem;
                        color: rgba(26, 26, 26, 0.6);
                        line-height: 1.7;
                        margin-bottom: 2rem;
                    }

                    .concept-points {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }

                    .concept-point {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        color: rgba(26, 26, 26, 0.8);
                        font-weight: 500;
                    }

                    .point-icon {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 0.75rem;
                        background: #fff;
                        box-shadow: 0 2px 8px rgba(26, 26, 26, 0.06);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: var(--sage);
                        flex-shrink: 0;
                    }

                    /* ---------- Features ---------- */

                    .features {
                        padding: 8rem 0;
                    }

                    .section-header {
                        text-align: center;
                        margin-bottom: 5rem;
                    }

                    .section-header h2 {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        margin-bottom: 1.5rem;
                    }

                    .section-header p {
                        font-size: 1.125rem;
                        color: rgba(26, 26, 26, 0.6);
                        max-width: 42rem;
                        margin: 0 auto;
                    }

                    .feature-grid {
                        display: grid;
                        gap: 2rem;
                    }

                    @media (min-width: 768px) {
                        .feature-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    @media (min-width: 1024px) {
                        .feature-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }

                    .feature-card {
                        background: rgba(255, 255, 255, 0.5);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 2rem;
                        padding: 2rem;
                        height: 100%;
                        transition: background 0.3s, box-shadow 0.3s;
                    }

                    .feature-card:hover {
                        background: #fff;
                        box-shadow: 0 20px 40px rgba(26, 26, 26, 0.05);
                    }

                    .feature-icon {
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 1rem;
                        background: var(--sand);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.25rem;
                        margin-bottom: 1.5rem;
                        transition: transform 0.3s;
                    }

                    .feature-card:hover .feature-icon {
                        transform: scale(1.1);
                    }

                    .feature-card h3 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }

                    .feature-card p {
                        color: rgba(26, 26, 26, 0.6);
                        line-height: 1.7;
                        margin: 0;
                    }

                    /* ---------- Additional features ---------- */

                    .extras {
                        position: relative;
                        padding: 8rem 0;
                        background: var(--ink);
                        color: #fff;
                        overflow: hidden;
                    }

                    .extras-glow {
                        position: absolute;
                        top: 25%;
                        left: 25%;
                        width: 40rem;
                        height: 40rem;
                        background: var(--sage);
                        border-radius: 50%;
                        filter: blur(120px);
                        opacity: 0.1;
                        pointer-events: none;
                    }

                    .extras-header {
                        margin-bottom: 4rem;
                    }

                    .extras-header h2 {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        margin-bottom: 1.5rem;
                    }

                    .extras-header p {
                        font-size: 1.125rem;
                        color: rgba(255, 255, 255, 0.6);
                        max-width: 42rem;
                    }

                    .extras-grid {
                        display: grid;
                        column-gap: 3rem;
                        row-gap: 4rem;
                    }

                    @media (min-width: 640px) {
                        .extras-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    @media (min-width: 1024px) {
                        .extras-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }

                    .extra-icon {
                        color: var(--sage);
                        font-size: 1.25rem;
                        margin-bottom: 1rem;
                    }

                    .extra-item h3 {
                        font-size: 1.125rem;
                        margin-bottom: 0.5rem;
                    }

                    .extra-item p {
                        color: rgba(255, 255, 255, 0.5);
                        font-size: 0.875rem;
                        line-height: 1.7;
                        margin: 0;
                    }

                    /* ---------- Philosophy ---------- */

                    .philosophy {
                        padding: 8rem 0;
                        background: var(--sand);
                    }

                    .philosophy-inner {
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        text-align: center;
                    }

                    .philosophy h2 {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        margin-bottom: 2.5rem;
                    }

                    .philosophy-quote {
                        font-size: 1.5rem;
                        font-weight: 300;
                        font-style: italic;
                        color: rgba(26, 26, 26, 0.7);
                        line-height: 1.7;
                    }

                    .philosophy-rule {
                        width: 5rem;
                        height: 0.25rem;
                        background: var(--sage);
                        border-radius: 9999px;
                        margin: 3rem auto 0;
                    }

                    /* ---------- Community ---------- */

                    .community {
                        position: relative;
                        padding: 8rem 0;
                        overflow: hidden;
                    }

                    .community-backdrop {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                        opacity: 0.2;
                    }

                    .community-backdrop img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        filter: grayscale(1);
                    }

                    .community-card {
                        position: relative;
                        z-index: 10;
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 3rem;
                        border-radius: 3rem;
                        text-align: center;
                    }

                    @media (min-width: 768px) {
                        .community-card {
                            padding: 5rem;
                        }
                    }

                    .community-card h2 {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        margin-bottom: 2rem;
                    }

                    .pillar-grid {
                        display: grid;
                        gap: 2rem;
                        margin-top: 3rem;
                        text-align: left;
                    }

                    @media (min-width: 768px) {
                        .pillar-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }

                    .pillar h4 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }

                    .pillar p {
                        color: rgba(26, 26, 26, 0.6);
                        font-size: 0.875rem;
                        margin: 0;
                    }

                    /* ---------- Legal ---------- */

                    .legal {
                        padding: 5rem 0;
                        border-top: 1px solid rgba(26, 26, 26, 0.05);
                    }

                    .legal h2 {
                        font-size: 1.5rem;
                        color: rgba(26, 26, 26, 0.4);
                        margin-bottom: 2rem;
                    }

                    .legal-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1.5rem;
                    }

                    @media (min-width: 768px) {
                        .legal-grid {
                            grid-template-columns: repeat(4, 1fr);
                        }
                    }

                    .legal-link {
                        font-size: 0.875rem;
                        color: rgba(26, 26, 26, 0.6);
                        text-decoration: underline;
                        text-underline-offset: 4px;
                        text-decoration-color: rgba(26, 26, 26, 0.1);
                        transition: color 0.2s;
                    }

                    .legal-link:hover {
                        color: var(--ink);
                        text-decoration-color: var(--ink);
                    }

                    /* ---------- Contact ---------- */

                    .contact {
                        padding: 8rem 0;
                        background: #fff;
                    }

                    .contact-grid {
                        display: grid;
                        gap: 4rem;
                    }

                    @media (min-width: 768px) {
                        .contact-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }

                    .contact-info h2 {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        margin-bottom: 1.5rem;
                    }

                    .contact-info > p {
                        font-size: 1.125rem;
                        color: rgba(26, 26, 26, 0.6);
                        margin-bottom: 2rem;
                    }

                    .contact-email {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        color: rgba(26, 26, 26, 0.8);
                    }

                    .contact-email i {
                        color: var(--sage);
                    }

                    .contact-socials {
                        display: flex;
                        gap: 1.5rem;
                        padding-top: 1.5rem;
                        font-size: 1.5rem;
                    }

                    .contact-socials a {
                        color: rgba(26, 26, 26, 0.4);
                        transition: color 0.2s;
                    }

                    .contact-socials a:hover {
                        color: var(--ink);
                    }

                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }

                    .form-row {
                        display: grid;
                        gap: 1.5rem;
                    }

                    @media (min-width: 640px) {
                        .form-row {
                            grid-template-columns: 1fr 1fr;
                        }
                    }

                    .form-field {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }

                    .form-field label {
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: rgba(26, 26, 26, 0.6);
                    }

                    .form-field input,
                    .form-field textarea {
                        background: var(--sand);
                        border: none;
                        border-radius: 1rem;
                        padding: 1rem 1.5rem;
                        font-family: var(--font-body);
                        font-size: 1rem;
                        outline: none;
                        resize: none;
                        transition: box-shadow 0.2s;
                    }

                    .form-field input:focus,
                    .form-field textarea:focus {
                        box-shadow: 0 0 0 2px var(--sage);
                    }

                    .contact-form .cta-primary {
                        align-self: flex-start;
                    }

                    /* ---------- Footer ---------- */

                    .site-footer {
                        padding: 3rem 0;
                        background: var(--sand);
                        border-top: 1px solid rgba(26, 26, 26, 0.05);
                    }

                    .footer-row {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: space-between;
                        gap: 2rem;
                    }

                    @media (min-width: 768px) {
                        .footer-row {
                            flex-direction: row;
                        }
                    }

                    .footer-copyright {
                        font-size: 0.875rem;
                        color: rgba(26, 26, 26, 0.4);
                    }

                    .footer-links {
                        display: flex;
                        gap: 2rem;
                    }

                    .footer-links a {
                        font-size: 0.875rem;
                        color: rgba(26, 26, 26, 0.4);
                        text-decoration: none;
                        transition: color 0.2s;
                    }

                    .footer-links a:hover {
                        color: var(--ink);
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parallax_shift_maps_scroll_range() {
        assert_eq!(parallax_shift(0.0), 0.0);
        assert_eq!(parallax_shift(250.0), 100.0);
        assert_eq!(parallax_shift(500.0), 200.0);
        // clamped past the end of the range
        assert_eq!(parallax_shift(1200.0), 200.0);
    }

    #[test]
    fn hero_fades_out_by_three_hundred() {
        assert_eq!(hero_opacity(0.0), 1.0);
        assert_eq!(hero_opacity(150.0), 0.5);
        assert_eq!(hero_opacity(300.0), 0.0);
        assert_eq!(hero_opacity(900.0), 0.0);
    }

    #[test]
    fn every_ordered_section_renders_exactly_one_body() {
        // Navbar and footer sit in fixed slots; every other entry of the
        // composition order must map to a section component.
        for name in SECTION_ORDER {
            let fixed_slot = matches!(*name, "navbar" | "footer");
            assert_eq!(
                section_body(name).is_some(),
                !fixed_slot,
                "section '{name}' is wired wrong"
            );
        }
    }

    #[test]
    fn unknown_section_names_render_nothing() {
        assert!(section_body("pricing").is_none());
    }
}
