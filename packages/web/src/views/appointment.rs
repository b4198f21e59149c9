use dioxus::prelude::*;
use ui::icons::FaCalendarDays;
use ui::Icon;

use crate::Route;

#[component]
pub fn Appointment() -> Element {
    rsx! {
        section {
            class: "card empty-state",
            Icon { icon: FaCalendarDays, width: 32, height: 32 }
            h2 { "Appointments" }
            p { "Appointment scheduling is not available yet." }
            Link { to: Route::Dashboard {}, class: "btn btn-outline", "Back to dashboard" }
        }
    }
}
