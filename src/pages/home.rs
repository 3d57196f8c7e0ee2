use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::components::contact_form::{next_preset, ContactForm};
use crate::components::intro::IntroScramble;
use crate::components::nav::smooth_scroll_into_view;

#[function_component(Home)]
pub fn home() -> Html {
    let preset_plan = use_state(|| None::<(usize, String)>);

    // Load-in choreography: body gets its loaded class, tagged elements fade
    // in with a 200 ms stagger.
    use_effect_with_deps(
        move |_| {
            let document = web_sys::window().unwrap().document().unwrap();
            if let Some(body) = document.body() {
                let _ = body.class_list().add_1("loaded");
            }
            let mut timers = Vec::new();
            if let Ok(nodes) = document.query_selector_all(".animate-on-load") {
                for i in 0..nodes.length() {
                    if let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok())
                    {
                        timers.push(Timeout::new(i * 200, move || {
                            let _ = element.class_list().add_1("animate");
                        }));
                    }
                }
            }
            move || drop(timers)
        },
        (),
    );

    let select_plan = |plan: &'static str| {
        let preset_plan = preset_plan.clone();
        Callback::from(move |_: MouseEvent| {
            preset_plan.set(Some(next_preset((*preset_plan).as_ref(), plan)));
            if let Some(target) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id("contact"))
            {
                smooth_scroll_into_view(&target);
            }
        })
    };

    html! {
        <div class="page">
            <style>
                {r#"
                    body {
                        margin: 0;
                        background: #0a0a0f;
                        color: #e8e8f0;
                        font-family: 'Share Tech Mono', 'Courier New', monospace;
                        opacity: 0;
                        transition: opacity 0.6s ease;
                    }
                    body.loaded {
                        opacity: 1;
                    }
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 100;
                        background: rgba(10, 10, 15, 0.9);
                        backdrop-filter: blur(10px);
                        border-bottom: 1px solid rgba(0, 255, 200, 0.15);
                    }
                    .nav-content {
                        max-width: 1100px;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1rem 2rem;
                    }
                    .nav-logo {
                        color: #00ffc8;
                        text-decoration: none;
                        font-size: 1.3rem;
                        letter-spacing: 0.3em;
                    }
                    .nav-links {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: rgba(232, 232, 240, 0.7);
                        text-decoration: none;
                        letter-spacing: 0.15em;
                        font-size: 0.85rem;
                        border-bottom: 1px solid transparent;
                        transition: color 0.3s ease, border-color 0.3s ease;
                    }
                    .nav-link.active {
                        color: #00ffc8;
                        border-bottom-color: #00ffc8;
                    }
                    .mobile-menu-toggle {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 6px;
                    }
                    .mobile-menu-toggle span {
                        width: 24px;
                        height: 2px;
                        background: #00ffc8;
                        transition: transform 0.3s ease, opacity 0.3s ease;
                    }
                    .mobile-menu-toggle.active span:nth-child(1) {
                        transform: translateY(7px) rotate(45deg);
                    }
                    .mobile-menu-toggle.active span:nth-child(2) {
                        opacity: 0;
                    }
                    .mobile-menu-toggle.active span:nth-child(3) {
                        transform: translateY(-7px) rotate(-45deg);
                    }
                    @media (max-width: 768px) {
                        .mobile-menu-toggle {
                            display: flex;
                        }
                        .nav-links {
                            position: absolute;
                            top: 100%;
                            right: 0;
                            flex-direction: column;
                            gap: 0;
                            background: rgba(10, 10, 15, 0.98);
                            border: 1px solid rgba(0, 255, 200, 0.15);
                            transform: translateX(110%);
                            transition: transform 0.3s ease;
                        }
                        .nav-links.active {
                            transform: translateX(0);
                        }
                        .nav-links .nav-link {
                            padding: 1rem 2rem;
                        }
                    }
                    section {
                        min-height: 100vh;
                        padding: 6rem 2rem 4rem;
                        box-sizing: border-box;
                        position: relative;
                        overflow: hidden;
                    }
                    .section-inner {
                        max-width: 1100px;
                        margin: 0 auto;
                        position: relative;
                        z-index: 1;
                    }
                    .hero {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                    }
                    .intro-letters {
                        display: flex;
                        gap: 0.5rem;
                        justify-content: center;
                    }
                    .letter {
                        display: inline-block;
                        width: 1.4em;
                        font-size: clamp(2.5rem, 8vw, 5rem);
                        color: rgba(232, 232, 240, 0.85);
                        text-shadow: 0 0 12px rgba(0, 255, 200, 0.4);
                    }
                    .letter.final-letter {
                        color: #00ffc8;
                        text-shadow: 0 0 24px rgba(0, 255, 200, 0.8);
                    }
                    .hero-subtitle {
                        margin-top: 2rem;
                        letter-spacing: 0.2em;
                        color: rgba(232, 232, 240, 0.6);
                    }
                    .animate-on-load {
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .animate-on-load.animate {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .parallax {
                        position: absolute;
                        pointer-events: none;
                        will-change: transform;
                    }
                    .grid-decoration {
                        top: 10%;
                        right: -5%;
                        width: 40vw;
                        height: 40vw;
                        background:
                            linear-gradient(rgba(0, 255, 200, 0.08) 1px, transparent 1px),
                            linear-gradient(90deg, rgba(0, 255, 200, 0.08) 1px, transparent 1px);
                        background-size: 40px 40px;
                    }
                    .glow-decoration {
                        bottom: -10%;
                        left: -10%;
                        width: 50vw;
                        height: 50vw;
                        background: radial-gradient(circle, rgba(0, 255, 200, 0.12), transparent 60%);
                    }
                    h2 {
                        letter-spacing: 0.25em;
                        color: #00ffc8;
                    }
                    .plan-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 2rem;
                        margin-top: 3rem;
                    }
                    .plan-card {
                        border: 1px solid rgba(0, 255, 200, 0.2);
                        background: rgba(18, 18, 26, 0.8);
                        padding: 2rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .plan-card h3 {
                        letter-spacing: 0.2em;
                        margin: 0;
                    }
                    .plan-price {
                        font-size: 1.8rem;
                        color: #00ffc8;
                    }
                    .plan-card ul {
                        margin: 0;
                        padding-left: 1.2rem;
                        color: rgba(232, 232, 240, 0.7);
                        flex: 1;
                    }
                    .plan-button, .submit-button, .popup-button {
                        position: relative;
                        overflow: hidden;
                        background: transparent;
                        border: 1px solid #00ffc8;
                        color: #00ffc8;
                        padding: 0.8rem 1.6rem;
                        letter-spacing: 0.2em;
                        cursor: pointer;
                        transition: background 0.3s ease, color 0.3s ease;
                    }
                    .plan-button:hover, .submit-button:hover:enabled, .popup-button:hover {
                        background: rgba(0, 255, 200, 0.15);
                    }
                    .submit-button:disabled {
                        cursor: wait;
                    }
                    .button-glow {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(circle, rgba(0, 255, 200, 0.25), transparent 70%);
                        opacity: 0;
                        transition: opacity 0.3s ease;
                        pointer-events: none;
                    }
                    .plan-button:hover .button-glow, .popup-button:hover .button-glow {
                        opacity: 1;
                    }
                    .contact-form {
                        max-width: 560px;
                        display: flex;
                        flex-direction: column;
                        gap: 1.2rem;
                        margin-top: 2rem;
                    }
                    .form-group {
                        display: flex;
                        flex-direction: column;
                        gap: 0.4rem;
                    }
                    .form-group label {
                        font-size: 0.75rem;
                        letter-spacing: 0.2em;
                        color: rgba(232, 232, 240, 0.6);
                    }
                    .form-group input, .form-group select, .form-group textarea {
                        background: rgba(18, 18, 26, 0.9);
                        border: 1px solid rgba(0, 255, 200, 0.25);
                        color: #e8e8f0;
                        padding: 0.7rem;
                        font-family: inherit;
                    }
                    .form-group input:focus, .form-group select:focus, .form-group textarea:focus {
                        outline: none;
                        border-color: #00ffc8;
                    }
                    .popup-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 200;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(5, 5, 8, 0.8);
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .popup-overlay.active {
                        opacity: 1;
                    }
                    .popup-container {
                        background: #12121a;
                        border: 1px solid rgba(0, 255, 200, 0.3);
                        padding: 2.5rem;
                        max-width: 420px;
                        text-align: center;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .popup-icon {
                        font-size: 2.5rem;
                    }
                    .popup-icon.success {
                        color: #00ffc8;
                    }
                    .popup-icon.error {
                        color: #ff4d6d;
                    }
                    .popup-title {
                        margin: 0;
                        letter-spacing: 0.2em;
                    }
                    .popup-message {
                        margin: 0;
                        color: rgba(232, 232, 240, 0.75);
                        line-height: 1.5;
                    }
                "#}
            </style>

            <section id="home" class="hero">
                <div class="parallax grid-decoration" data-speed="0.3"></div>
                <div class="section-inner">
                    <IntroScramble />
                    <p class="hero-subtitle animate-on-load">
                        {"MENSCH UND MASCHINE. EIN KOLLEKTIV."}
                    </p>
                </div>
            </section>

            <section id="about">
                <div class="parallax glow-decoration" data-speed="0.5"></div>
                <div class="section-inner">
                    <h2 class="animate-on-load">{"ÜBER UNS"}</h2>
                    <p>
                        {"CYBORG verbindet Design und Technik zu digitalen Erlebnissen, \
                          die im Gedächtnis bleiben. Wir bauen Webauftritte, Interfaces \
                          und Identitäten für Marken, die nach vorne schauen."}
                    </p>
                    <p>
                        {"Klein, fokussiert, kompromisslos: jedes Projekt wird von uns \
                          selbst entworfen, gebaut und betreut."}
                    </p>
                </div>
            </section>

            <section id="projects">
                <div class="parallax grid-decoration" data-speed="0.2"></div>
                <div class="section-inner">
                    <h2 class="animate-on-load">{"PROJEKTE & PLÄNE"}</h2>
                    <div class="plan-grid">
                        <div class="plan-card">
                            <h3>{"LIGHT"}</h3>
                            <div class="plan-price">{"ab 900 €"}</div>
                            <ul>
                                <li>{"Onepager mit individuellem Design"}</li>
                                <li>{"Responsiv auf allen Geräten"}</li>
                                <li>{"Kontaktformular inklusive"}</li>
                            </ul>
                            <button class="plan-button" onclick={select_plan("light")}>
                                <span>{"PLAN WÄHLEN"}</span>
                                <div class="button-glow"></div>
                            </button>
                        </div>
                        <div class="plan-card">
                            <h3>{"BASIC"}</h3>
                            <div class="plan-price">{"ab 2.400 €"}</div>
                            <ul>
                                <li>{"Mehrseitiger Auftritt"}</li>
                                <li>{"Animationen und Interaktionen"}</li>
                                <li>{"Laufende Betreuung möglich"}</li>
                            </ul>
                            <button class="plan-button" onclick={select_plan("basic")}>
                                <span>{"PLAN WÄHLEN"}</span>
                                <div class="button-glow"></div>
                            </button>
                        </div>
                        <div class="plan-card">
                            <h3>{"PREMIUM"}</h3>
                            <div class="plan-price">{"auf Anfrage"}</div>
                            <ul>
                                <li>{"Komplette digitale Identität"}</li>
                                <li>{"Individuelle Entwicklung"}</li>
                                <li>{"Priorisierter Support"}</li>
                            </ul>
                            <button class="plan-button" onclick={select_plan("premium")}>
                                <span>{"PLAN WÄHLEN"}</span>
                                <div class="button-glow"></div>
                            </button>
                        </div>
                    </div>
                </div>
            </section>

            <section id="contact">
                <div class="parallax glow-decoration" data-speed="0.4"></div>
                <div class="section-inner">
                    <h2 class="animate-on-load">{"KONTAKT"}</h2>
                    <p>{"Erzähl uns von deinem Projekt. Wir melden uns innerhalb von 24 Stunden."}</p>
                    <ContactForm preset_plan={(*preset_plan).clone()} />
                </div>
            </section>
        </div>
    }
}
