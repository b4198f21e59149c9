use dioxus::prelude::*;
use ui::{use_auth, Navbar, RequireAuth};

use crate::Route;

/// Shell of every signed-in page: auth guard, header with navigation, then
/// the matched child route.
#[component]
pub fn Guarded() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    rsx! {
        RequireAuth {
            on_unauthenticated: move |_| {
                tracing::debug!("No session, redirecting to login");
                nav.replace(Route::Login {});
            },
            div {
                class: "app-shell",
                Navbar {
                    user: auth.user(),
                    on_logged_out: move |_| {
                        nav.replace(Route::Login {});
                    },
                    Link { to: Route::Dashboard {}, active_class: "active", "Dashboard" }
                    Link { to: Route::Patients {}, active_class: "active", "Patients" }
                    Link { to: Route::Appointment {}, active_class: "active", "Appointments" }
                }
                main {
                    class: "app-main",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
