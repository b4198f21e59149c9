use dioxus::prelude::*;

use crate::activity::use_activity_feed;

#[component]
pub fn ActivityPanel() -> Element {
    let feed = use_activity_feed();
    let entries = feed().entries;

    rsx! {
        section {
            class: "card activity-panel",
            h3 { "Recent Activity" }
            ul {
                class: "activity-list",
                for (index, entry) in entries.iter().enumerate() {
                    li {
                        key: "{index}-{entry.title}-{entry.subject}",
                        class: "activity-entry",
                        span {
                            class: "avatar {entry.tone.class()}",
                            "{entry.initials()}"
                        }
                        div {
                            class: "activity-text",
                            p { class: "activity-title", "{entry.title}" }
                            p { class: "activity-detail", "{entry.detail}" }
                        }
                        span { class: "activity-when", "{entry.when}" }
                    }
                }
            }
        }
    }
}
