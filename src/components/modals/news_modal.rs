//! News dialog
//!
//! Hydrates from the posts API, then folds in the date and image the page
//! already holds for that card. The body arrives as newline-separated text
//! and renders as paragraph blocks.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::ModalShell;
use crate::api::{fetch_post, Post};
use crate::catalog::split_paragraphs;
use crate::config;
use crate::content::{self, NewsItem};
use crate::services::catalog::LoadState;
use crate::services::modal::{use_modal_state, ModalRequest, ModalSurface};
use crate::utils::format_news_date;

#[component]
pub fn NewsModal() -> impl IntoView {
    let modal = use_modal_state();
    let state: RwSignal<LoadState<(Post, Option<NewsItem>)>> = RwSignal::new(LoadState::Idle);

    let requested_id = Memo::new(move |_| {
        modal.active.with(|active| match active {
            Some(ModalRequest::News { id }) => Some(*id),
            _ => None,
        })
    });

    Effect::new(move |_| match requested_id.get() {
        Some(id) => {
            let epoch = modal.current_epoch();
            state.set(LoadState::Loading);
            spawn_local(async move {
                let result = fetch_post(id).await;
                if !modal.is_current(epoch) {
                    return;
                }
                match result {
                    Ok(post) => {
                        let meta = content::news_items().iter().find(|item| item.id == id).copied();
                        state.set(LoadState::Ready((post, meta)));
                    }
                    Err(e) => {
                        log::warn!("news fetch failed: {e}");
                        state.set(LoadState::Failed(e));
                    }
                }
            });
        }
        None => state.set(LoadState::Idle),
    });

    view! {
        <ModalShell surface=ModalSurface::News class="news-modal">
            {move || match state.get() {
                LoadState::Idle => view! {}.into_any(),
                LoadState::Loading => view! { <div class="preloader"></div> }.into_any(),
                LoadState::Failed(e) => {
                    view! { <div class="modal__error">{e.to_string()}</div> }.into_any()
                }
                LoadState::Ready((post, meta)) => {
                    view! {
                        <article class="news-article">
                            {meta
                                .map(|item| {
                                    view! {
                                        <div class="news-article__image">
                                            <img src=config::asset_url(item.image) alt="" />
                                        </div>
                                        <time class="news-article__date" datetime=item.date>
                                            {format_news_date(item.date)}
                                        </time>
                                    }
                                })}
                            <h3 class="news-article__title">{post.title.clone()}</h3>
                            <div class="news-article__body">
                                {split_paragraphs(&post.body)
                                    .into_iter()
                                    .map(|paragraph| view! { <p>{paragraph}</p> })
                                    .collect_view()}
                            </div>
                        </article>
                    }
                        .into_any()
                }
            }}
        </ModalShell>
    }
}
