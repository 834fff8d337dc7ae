//! Reading list section
//!
//! On narrow screens only the first five entries stay visible; the rest
//! reappear as the viewport grows.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::content;

const VISIBLE_ON_MOBILE: usize = 5;
const MOBILE_MAX_WIDTH: f64 = 767.0;

fn current_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1920.0)
}

#[component]
pub fn AboutBooks() -> impl IntoView {
    let viewport_width = RwSignal::new(current_width());

    Effect::new(move |_| {
        let handle_resize = Closure::wrap(Box::new(move || {
            viewport_width.set(current_width());
        }) as Box<dyn FnMut()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("resize", handle_resize.as_ref().unchecked_ref());
        }
        handle_resize.forget();
    });

    view! {
        <section class="about-books" id="about">
            <h2 class="about-books__title">"This season's reading list"</h2>
            <div class="about-books__list">
                <ol>
                    {content::reading_list()
                        .iter()
                        .enumerate()
                        .map(|(index, title)| {
                            let hidden = move || {
                                index >= VISIBLE_ON_MOBILE
                                    && viewport_width.get() <= MOBILE_MAX_WIDTH
                            };
                            view! { <li class:hidden=hidden>{*title}</li> }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}
