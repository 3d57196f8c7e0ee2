//! Drives the intro scramble machine against the hero letter slots.
//!
//! The component renders one `.letter` span per reveal-word character, ticks
//! the machine from an 80 ms interval, clears that interval at the 2.5 s
//! mark and schedules the staggered reveal. A configuration the machine
//! rejects disables the animation instead of writing undefined slot content.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_console::error;
use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};
use yew::prelude::*;

use crate::scramble::{Frame, ScrambleConfig, Scrambler, FLASH_MS, RUN_MS, TICK_MS};

pub const REVEAL_WORD: &str = "CYBORG";
pub const SECRET_WORDS: [&str; 2] = ["FUTURE", "SYSTEM"];

fn collect_slots(document: &Document) -> Vec<HtmlElement> {
    let mut slots = Vec::new();
    if let Ok(nodes) = document.query_selector_all(".letter") {
        for i in 0..nodes.length() {
            if let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                slots.push(element);
            }
        }
    }
    slots
}

fn set_all(slots: &[HtmlElement], character: char) {
    let text = character.to_string();
    for slot in slots {
        slot.set_text_content(Some(&text));
    }
}

#[function_component(IntroScramble)]
pub fn intro_scramble() -> Html {
    use_effect_with_deps(
        move |_| {
            let document = web_sys::window().unwrap().document().unwrap();
            let slots = collect_slots(&document);

            let config = ScrambleConfig {
                reveal_word: REVEAL_WORD,
                secret_words: SECRET_WORDS,
            };
            let machine = match Scrambler::new(config, slots.len()) {
                Ok(machine) => machine,
                Err(err) => {
                    error!(format!("Intro animation disabled: {}", err));
                    return Box::new(|| ()) as Box<dyn FnOnce()>;
                }
            };
            let machine = Rc::new(RefCell::new(machine));

            let interval = {
                let machine = machine.clone();
                let slots = slots.clone();
                Interval::new(TICK_MS, move || {
                    let frame = machine.borrow_mut().tick();
                    match frame {
                        Some(Frame::Cycle(character)) => set_all(&slots, character),
                        Some(Frame::Flash(word)) => {
                            for (slot, character) in slots.iter().zip(word.chars()) {
                                slot.set_text_content(Some(&character.to_string()));
                            }
                            // Cycling resumes with whatever the machine
                            // points at once the flash window closes.
                            let machine = machine.clone();
                            let slots = slots.clone();
                            Timeout::new(FLASH_MS, move || {
                                set_all(&slots, machine.borrow().current_char());
                            })
                            .forget();
                        }
                        None => {}
                    }
                })
            };
            let interval = Rc::new(RefCell::new(Some(interval)));

            let stop = {
                let interval = interval.clone();
                let machine = machine.clone();
                Timeout::new(RUN_MS, move || {
                    if let Some(interval) = interval.borrow_mut().take() {
                        drop(interval);
                    }
                    let mut machine = machine.borrow_mut();
                    machine.stop();
                    for (index, delay) in machine.reveal_schedule() {
                        if let (Some(slot), Some(character)) =
                            (slots.get(index), machine.reveal_char(index))
                        {
                            let slot = slot.clone();
                            Timeout::new(delay, move || {
                                slot.set_text_content(Some(&character.to_string()));
                                let _ = slot.class_list().add_1("final-letter");
                            })
                            .forget();
                        }
                    }
                })
            };

            Box::new(move || {
                drop(stop);
                if let Some(interval) = interval.borrow_mut().take() {
                    drop(interval);
                }
            }) as Box<dyn FnOnce()>
        },
        (),
    );

    html! {
        <div class="intro-letters animate-on-load">
            {
                for REVEAL_WORD.chars().map(|character| html! {
                    <span class="letter">{ character }</span>
                })
            }
        </div>
    }
}
