//! FAQ accordion
//!
//! Exclusive accordion: opening an item closes every other; clicking the
//! open item closes it.

use leptos::prelude::*;

use crate::content;

#[component]
pub fn Faq() -> impl IntoView {
    let active = RwSignal::new(None::<usize>);

    view! {
        <section class="faq" id="faq">
            <h2 class="faq__title">"Frequently asked questions"</h2>
            <ul class="faq__list">
                {content::faq_entries()
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        let is_active = move || active.get() == Some(index);
                        let toggle = move |_| {
                            active.update(|current| {
                                *current = if *current == Some(index) { None } else { Some(index) };
                            });
                        };
                        view! {
                            <li class="faq__item" class:is-active=is_active>
                                <button type="button" class="faq__item--head" on:click=toggle>
                                    {entry.question}
                                </button>
                                <div class="faq__item--body">
                                    <p>{entry.answer}</p>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
