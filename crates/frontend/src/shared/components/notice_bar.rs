use crate::shared::notices::Notice;
use leptos::prelude::*;

/// Список уведомлений с кнопкой закрытия
#[component]
pub fn NoticeBar(
    #[prop(into)] notices: Signal<Vec<Notice>>,
    on_dismiss: Callback<u64>,
) -> impl IntoView {
    view! {
        <div class="notice-bar">
            <For
                each=move || notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice.level.css_class() role="alert">
                            <span class="notice__text">{notice.text}</span>
                            <button
                                class="notice__close"
                                title="Dismiss"
                                on:click=move |_| on_dismiss.run(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
