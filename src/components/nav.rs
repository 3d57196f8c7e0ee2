//! Top navigation: section links with active highlighting, the mobile menu,
//! keyboard navigation, and the scroll listener that keeps the active
//! section and parallax elements in sync with the viewport.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{
    Document, Element, HtmlElement, KeyboardEvent, MouseEvent, Node, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};
use yew::prelude::*;

use crate::sections::{self, SectionBounds, SECTIONS};
use crate::throttle::{Throttle, SCROLL_WINDOW_MS};

pub fn smooth_scroll_into_view(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Smooth-scrolls to the section element with this id and marks it active.
/// Unknown names are a no-op: no scroll, no active-index change.
fn navigate_to_section(name: &str, active_section: &UseStateHandle<usize>) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };
    if let Some(target) = document.get_element_by_id(name) {
        smooth_scroll_into_view(&target);
        // An unregistered id still scrolls but must not corrupt the index.
        if let Some(index) = sections::section_index(name) {
            active_section.set(index);
        }
    }
}

fn collect_section_bounds(document: &Document) -> Vec<SectionBounds> {
    let mut bounds = Vec::new();
    if let Ok(nodes) = document.query_selector_all("section") {
        for i in 0..nodes.length() {
            if let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                bounds.push(SectionBounds {
                    top: element.offset_top() as f64,
                    height: element.offset_height() as f64,
                });
            }
        }
    }
    bounds
}

fn apply_parallax(document: &Document, page_y_offset: f64) {
    if let Ok(nodes) = document.query_selector_all(".parallax") {
        for i in 0..nodes.length() {
            if let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                let speed = element.dataset().get("speed");
                let offset = sections::parallax_offset(page_y_offset, speed.as_deref());
                let _ = element
                    .style()
                    .set_property("transform", &format!("translateY({}px)", offset));
            }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let active_section = use_state_eq(|| 0usize);
    let menu_open = use_state_eq(|| false);
    let panel_ref = use_node_ref();
    let trigger_ref = use_node_ref();

    // Scroll tracker: rate-limited to one run per frame period; excess scroll
    // events are dropped. Updates the active section and parallax offsets.
    {
        let active_section = active_section.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                let window_clone = window.clone();
                let throttle = Throttle::new(SCROLL_WINDOW_MS);

                let scroll_callback = Closure::wrap(Box::new(move || {
                    if !throttle.admit(js_sys::Date::now()) {
                        return;
                    }
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    let viewport = window_clone
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(0.0);
                    let probe = sections::probe_position(scroll_y, viewport);
                    let bounds = collect_section_bounds(&document);
                    if let Some(index) = sections::active_section(probe, &bounds) {
                        active_section.set(index);
                    }
                    apply_parallax(&document, window_clone.page_y_offset().unwrap_or(0.0));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    // Keyboard navigation. Reinstalled whenever the captured state changes so
    // the handler never works from a stale index.
    {
        let active_section = active_section.clone();
        let menu_open = menu_open.clone();
        let deps = (*active_section, *menu_open);
        use_effect_with_deps(
            move |&(current, open): &(usize, bool)| {
                let document = web_sys::window().unwrap().document().unwrap();

                let keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    match e.key().as_str() {
                        "ArrowUp" | "ArrowLeft" => {
                            e.prevent_default();
                            let index = sections::previous_index(current);
                            navigate_to_section(SECTIONS[index], &active_section);
                        }
                        "ArrowDown" | "ArrowRight" => {
                            e.prevent_default();
                            let index = sections::next_index(current);
                            navigate_to_section(SECTIONS[index], &active_section);
                        }
                        "Escape" => {
                            if open {
                                menu_open.set(false);
                            }
                        }
                        _ => {}
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);

                document
                    .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
                    .unwrap();

                move || {
                    let _ = document.remove_event_listener_with_callback(
                        "keydown",
                        keydown.as_ref().unchecked_ref(),
                    );
                }
            },
            deps,
        );
    }

    // Outside-click dismissal, active only while the menu is open.
    {
        let menu_open = menu_open.clone();
        let panel_ref = panel_ref.clone();
        let trigger_ref = trigger_ref.clone();
        let open_now = *menu_open;
        use_effect_with_deps(
            move |open: &bool| {
                let mut cleanup: Option<Box<dyn FnOnce()>> = None;
                if *open {
                    let document = web_sys::window().unwrap().document().unwrap();
                    let click = Closure::wrap(Box::new(move |e: MouseEvent| {
                        let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                        let inside_panel = panel_ref
                            .get()
                            .map_or(false, |panel| panel.contains(target.as_ref()));
                        let inside_trigger = trigger_ref
                            .get()
                            .map_or(false, |trigger| trigger.contains(target.as_ref()));
                        if !inside_panel && !inside_trigger {
                            menu_open.set(false);
                        }
                    }) as Box<dyn FnMut(MouseEvent)>);
                    document
                        .add_event_listener_with_callback("click", click.as_ref().unchecked_ref())
                        .unwrap();
                    cleanup = Some(Box::new(move || {
                        let _ = document.remove_event_listener_with_callback(
                            "click",
                            click.as_ref().unchecked_ref(),
                        );
                    }));
                }
                move || {
                    if let Some(cleanup) = cleanup {
                        cleanup();
                    }
                }
            },
            open_now,
        );
    }

    // Any in-page anchor smooth-scrolls to its target, registered section or
    // not.
    use_effect_with_deps(
        move |_| {
            let document = web_sys::window().unwrap().document().unwrap();
            let document_clone = document.clone();

            let anchor_click = Closure::wrap(Box::new(move |e: MouseEvent| {
                let anchor = e
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .and_then(|el| el.closest("a[href^=\"#\"]").ok().flatten());
                if let Some(anchor) = anchor {
                    if let Some(href) = anchor.get_attribute("href") {
                        e.prevent_default();
                        if let Some(target) = document_clone.get_element_by_id(&href[1..]) {
                            smooth_scroll_into_view(&target);
                        }
                    }
                }
            }) as Box<dyn FnMut(MouseEvent)>);

            document
                .add_event_listener_with_callback("click", anchor_click.as_ref().unchecked_ref())
                .unwrap();

            move || {
                let _ = document.remove_event_listener_with_callback(
                    "click",
                    anchor_click.as_ref().unchecked_ref(),
                );
            }
        },
        (),
    );

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let menu_active = (*menu_open).then_some("active");

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a href="#home" class="nav-logo">{"CYBORG"}</a>
                <button
                    ref={trigger_ref}
                    class={classes!("mobile-menu-toggle", menu_active)}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div ref={panel_ref} class={classes!("nav-links", menu_active)}>
                    {
                        for SECTIONS.iter().enumerate().map(|(index, name)| {
                            let onclick = {
                                let active_section = active_section.clone();
                                let menu_open = menu_open.clone();
                                let name = *name;
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    navigate_to_section(name, &active_section);
                                    menu_open.set(false);
                                })
                            };
                            html! {
                                <a
                                    href={format!("#{}", name)}
                                    class={classes!(
                                        "nav-link",
                                        (index == *active_section).then_some("active")
                                    )}
                                    {onclick}
                                >
                                    { name.to_uppercase() }
                                </a>
                            }
                        })
                    }
                </div>
            </div>
        </nav>
    }
}
