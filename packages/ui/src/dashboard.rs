//! Static dashboard widgets: welcome card, stat grid and quick actions.

use dioxus::prelude::*;

use crate::icons::{
    FaCalendarDays, FaChartColumn, FaFileMedical, FaListCheck, FaPlus, FaUserPlus, FaUsers,
};
use crate::Icon;

/// Accent colour of a card or activity entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Blue,
    Green,
    Purple,
    Orange,
}

impl Tone {
    pub fn class(&self) -> &'static str {
        match self {
            Tone::Blue => "tone-blue",
            Tone::Green => "tone-green",
            Tone::Purple => "tone-purple",
            Tone::Orange => "tone-orange",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatKind {
    Patients,
    Appointments,
    Tasks,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub kind: StatKind,
    pub title: &'static str,
    pub value: u32,
    pub detail: &'static str,
    pub tone: Tone,
}

pub const STATS: [StatCard; 3] = [
    StatCard {
        kind: StatKind::Patients,
        title: "Total Patients",
        value: 150,
        detail: "↑ 12% from last month",
        tone: Tone::Blue,
    },
    StatCard {
        kind: StatKind::Appointments,
        title: "Appointments Today",
        value: 12,
        detail: "4 pending, 8 completed",
        tone: Tone::Green,
    },
    StatCard {
        kind: StatKind::Tasks,
        title: "Pending Tasks",
        value: 8,
        detail: "3 urgent, 5 normal",
        tone: Tone::Purple,
    },
];

#[component]
pub fn WelcomeCard() -> Element {
    rsx! {
        section {
            class: "card welcome-card",
            h2 { "Welcome to your Dashboard" }
            p { "Manage patients, appointments, and healthcare records from one place." }
        }
    }
}

#[component]
pub fn StatGrid() -> Element {
    rsx! {
        div {
            class: "stat-grid",
            for stat in STATS {
                div {
                    key: "{stat.title}",
                    class: "card stat-card {stat.tone.class()}",
                    div {
                        class: "stat-body",
                        p { class: "stat-title", "{stat.title}" }
                        p { class: "stat-value", "{stat.value}" }
                        p { class: "stat-detail", "{stat.detail}" }
                    }
                    div {
                        class: "stat-icon",
                        match stat.kind {
                            StatKind::Patients => rsx! { Icon { icon: FaUsers, width: 24, height: 24 } },
                            StatKind::Appointments => rsx! { Icon { icon: FaCalendarDays, width: 24, height: 24 } },
                            StatKind::Tasks => rsx! { Icon { icon: FaListCheck, width: 24, height: 24 } },
                        }
                    }
                }
            }
        }
    }
}

/// Buttons in the dashboard's quick-action panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuickAction {
    AddPatient,
    NewAppointment,
    UploadRecords,
    ViewReports,
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        QuickAction::AddPatient,
        QuickAction::NewAppointment,
        QuickAction::UploadRecords,
        QuickAction::ViewReports,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::AddPatient => "Add Patient",
            QuickAction::NewAppointment => "New Appointment",
            QuickAction::UploadRecords => "Upload Records",
            QuickAction::ViewReports => "View Reports",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            QuickAction::AddPatient => Tone::Blue,
            QuickAction::NewAppointment => Tone::Green,
            QuickAction::UploadRecords => Tone::Purple,
            QuickAction::ViewReports => Tone::Orange,
        }
    }
}

#[component]
pub fn QuickActions(on_action: EventHandler<QuickAction>) -> Element {
    rsx! {
        section {
            class: "card quick-actions",
            h3 { "Quick Actions" }
            div {
                class: "quick-action-grid",
                for action in QuickAction::ALL {
                    button {
                        key: "{action.label()}",
                        class: "quick-action {action.tone().class()}",
                        r#type: "button",
                        onclick: move |_| on_action.call(action),
                        match action {
                            QuickAction::AddPatient => rsx! { Icon { icon: FaUserPlus, width: 20, height: 20 } },
                            QuickAction::NewAppointment => rsx! { Icon { icon: FaPlus, width: 20, height: 20 } },
                            QuickAction::UploadRecords => rsx! { Icon { icon: FaFileMedical, width: 20, height: 20 } },
                            QuickAction::ViewReports => rsx! { Icon { icon: FaChartColumn, width: 20, height: 20 } },
                        }
                        span { "{action.label()}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_values() {
        let values: Vec<_> = STATS.iter().map(|s| (s.title, s.value)).collect();
        assert_eq!(
            values,
            vec![
                ("Total Patients", 150),
                ("Appointments Today", 12),
                ("Pending Tasks", 8),
            ]
        );
    }

    #[test]
    fn test_quick_action_labels_in_order() {
        let labels: Vec<_> = QuickAction::ALL.iter().map(QuickAction::label).collect();
        assert_eq!(
            labels,
            vec!["Add Patient", "New Appointment", "Upload Records", "View Reports"]
        );
    }
}
