//! Archive calendar
//!
//! Mounts the page's date-picker capability on the archive control in the
//! news section. Picking dates flips the section's preloader on for a
//! moment and then closes the picker popup.

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;

use crate::bindings::flatpickr::{self, Flatpickr, FlatpickrOptions};
use crate::content;

/// How long the preloader stays up after a date change.
const PRELOADER_MS: u32 = 2000;

#[component]
pub fn ArchiveCalendar(
    /// The news-section preloader flag this picker drives.
    loading: RwSignal<bool>,
) -> impl IntoView {
    let anchor = NodeRef::<html::Button>::new();
    let instance: StoredValue<Option<Flatpickr>, LocalStorage> = StoredValue::new_local(None);

    Effect::new(move |_| {
        if instance.with_value(Option::is_some) {
            return;
        }
        let Some(element) = anchor.get() else {
            return;
        };

        let options = FlatpickrOptions::archive(content::archive_dates());
        let mounted = flatpickr::mount(&element, &options, move |_selected| {
            loading.set(true);
            Timeout::new(PRELOADER_MS, move || {
                loading.set(false);
                instance.with_value(|slot| {
                    if let Some(picker) = slot {
                        picker.close();
                    }
                });
            })
            .forget();
        });

        match mounted {
            Ok(picker) => instance.set_value(Some(picker)),
            Err(e) => log::warn!("date picker failed to mount: {:?}", e),
        }
    });

    on_cleanup(move || {
        instance.update_value(|slot| {
            if let Some(picker) = slot.take() {
                picker.destroy();
            }
        });
    });

    view! {
        <button type="button" class="news__archive--link" node_ref=anchor>
            "Archive"
        </button>
    }
}
