//! Notice Bar Component

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{dismiss_notice, use_app_store, use_task_client, AppStateStoreFields, NoticeKind};

/// Shows the current success or error notice, if any, and dismisses it
/// after the configured delay
#[component]
pub fn NoticeBar() -> impl IntoView {
    let store = use_app_store();
    let notice_ms = use_task_client().notice_ms();

    Effect::new(move |_| {
        let Some(id) = store.notice().with(|n| n.as_ref().map(|n| n.id)) else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(notice_ms).await;
            dismiss_notice(&store, id);
        });
    });

    move || {
        store.notice().get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "notice success",
                NoticeKind::Error => "notice error",
            };
            view! { <div class=class role="status">{notice.text}</div> }
        })
    }
}
