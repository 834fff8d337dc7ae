//! Carousel wrapper
//!
//! Mounts the page's slider capability on a container div and tears it down
//! with the component. Children supply the slides; each must carry the
//! `swiper-slide` class.

use leptos::html;
use leptos::prelude::*;

use crate::bindings::swiper::{Swiper, SwiperOptions};
use crate::bindings::to_js_object;

#[component]
pub fn Carousel(
    /// Slider configuration (breakpoints, grid, navigation).
    options: SwiperOptions,
    /// Extra classes on the container, e.g. `news__slider`.
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let instance: StoredValue<Option<Swiper>, LocalStorage> = StoredValue::new_local(None);

    Effect::new(move |_| {
        if instance.with_value(Option::is_some) {
            return;
        }
        if let Some(element) = container.get() {
            match to_js_object(&options) {
                Ok(options_js) => {
                    instance.set_value(Some(Swiper::new(&element, &options_js)));
                }
                Err(e) => log::warn!("slider options rejected: {:?}", e),
            }
        }
    });

    on_cleanup(move || {
        instance.update_value(|slot| {
            if let Some(slider) = slot.take() {
                slider.destroy(true, true);
            }
        });
    });

    view! {
        <div node_ref=container class=format!("swiper {class}")>
            <div class="swiper-wrapper">{children()}</div>
        </div>
    }
}
