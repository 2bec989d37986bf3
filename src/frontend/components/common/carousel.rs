//! Slide carousel.

use dioxus::prelude::*;

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub title: &'static str,
    pub body: &'static str,
}

/// Index after `current`, wrapping to the first slide.
pub const fn next_index(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

/// Index before `current`, wrapping to the last slide.
pub const fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if current == 0 || current >= len {
        len - 1
    } else {
        current - 1
    }
}

#[component]
pub fn Carousel(slides: Vec<Slide>) -> Element {
    let mut current = use_signal(|| 0_usize);
    let len = slides.len();

    let Some(slide) = slides.get(current() % len.max(1)).cloned() else {
        return rsx! {};
    };

    rsx! {
        section { class: "carousel",
            div { class: "carousel-slide",
                h2 { "{slide.title}" }
                p { "{slide.body}" }
            }
            div { class: "carousel-controls",
                button {
                    class: "button button-secondary",
                    onclick: move |_| current.set(prev_index(current(), len)),
                    "Previous"
                }
                div { class: "carousel-dots",
                    for i in 0..len {
                        button {
                            key: "{i}",
                            class: if i == current() { "carousel-dot active" } else { "carousel-dot" },
                            onclick: move |_| current.set(i),
                        }
                    }
                }
                button {
                    class: "button button-secondary",
                    onclick: move |_| current.set(next_index(current(), len)),
                    "Next"
                }
            }
        }
    }
}
