use dioxus::prelude::*;
use store::User;

use crate::auth::LogoutButton;
use crate::icons::FaHeartPulse;
use crate::Icon;

/// Top bar of the guarded pages. `children` are the navigation links, so the
/// caller can use its own route type.
#[component]
pub fn Navbar(
    user: Option<User>,
    on_logged_out: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        header {
            class: "navbar",
            div {
                class: "navbar-brand",
                Icon { icon: FaHeartPulse, width: 20, height: 20 }
                h1 { "Healthcare Dashboard" }
            }
            nav {
                class: "navbar-links",
                {children}
            }
            div {
                class: "navbar-user",
                if let Some(user) = user {
                    span {
                        class: "navbar-greeting",
                        title: "{user.display_name()} ({user.role.label()})",
                        "Welcome, {user.email}"
                    }
                }
                LogoutButton { on_logged_out: move |_| on_logged_out.call(()) }
            }
        }
    }
}
