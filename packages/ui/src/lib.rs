//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod platform;
pub use platform::{make_auth_service, make_store, sleep, PlatformAuth, PlatformStore};

pub mod views;

pub const THEME_CSS: Asset = asset!("/assets/healthdash.css");

mod navbar;
pub use navbar::Navbar;

mod auth;
pub use auth::{use_auth, AuthContext, AuthProvider, AuthState, LogoutButton};

mod guard;
pub use guard::{GuardDecision, RequireAuth};

pub mod patient_form;
pub use patient_form::{FormPhase, PatientForm, SubmitBlocked, SubmitTicket};

mod patient_modal;
pub use patient_modal::PatientModal;

mod patient_list;
pub use patient_list::{use_patients, PatientList};

pub mod dashboard;
pub use dashboard::{QuickAction, QuickActions, StatGrid, WelcomeCard};

pub mod activity;
pub use activity::{use_activity_feed, ActivityFeed, ActivityItem};

mod activity_panel;
pub use activity_panel::ActivityPanel;
