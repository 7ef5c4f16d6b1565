//! Stack of transient notices in the corner of the screen.

use leptos::prelude::*;

use crate::util::notify::Notifier;

#[component]
pub fn NoticeTray() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let queue = notifier.queue();

    view! {
        <div class="notice-tray" role="status" aria-live="polite">
            <For
                each=move || queue.with(|q| q.items().to_vec())
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    let description = (!notice.description.is_empty())
                        .then(|| view! { <p class="notice__description">{notice.description}</p> });
                    view! {
                        <div class=notice.kind.css_class() on:click=move |_| notifier.dismiss(id)>
                            <p class="notice__title">{notice.title}</p>
                            {description}
                        </div>
                    }
                }
            />
        </div>
    }
}
