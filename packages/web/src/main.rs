use dioxus::prelude::*;

use api::InMemoryPatients;
use store::{DashboardConfig, RouteFallback};
use ui::{ActivityFeed, AuthProvider, THEME_CSS};
use views::{Appointment, Dashboard, Guarded, Login, Patients};

mod views;

const DASHBOARD_TOML: &str = include_str!("../dashboard.toml");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[layout(Guarded)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/patients")]
        Patients {},
        #[route("/appointment")]
        Appointment {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Landing route for `/` and unmatched paths.
    fn fallback(target: RouteFallback) -> Self {
        match target {
            RouteFallback::Dashboard => Route::Dashboard {},
            RouteFallback::Login => Route::Login {},
        }
    }
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(|| DashboardConfig::from_toml_or_default(DASHBOARD_TOML));
    use_context_provider(|| Signal::new(ActivityFeed::default()));
    use_context_provider(InMemoryPatients::new);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }

        AuthProvider {
            session: config.session.clone(),
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to the configured landing page.
#[component]
fn Root() -> Element {
    rsx! { FallbackRedirect {} }
}

/// Unknown paths land where `/` does.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("No route for /{}", segments.join("/"));
    rsx! { FallbackRedirect {} }
}

#[component]
fn FallbackRedirect() -> Element {
    let config = use_context::<DashboardConfig>();
    let nav = use_navigator();
    let target = Route::fallback(config.routing.fallback);

    use_effect(move || {
        nav.replace(target.clone());
    });

    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_targets() {
        assert_eq!(Route::fallback(RouteFallback::Dashboard), Route::Dashboard {});
        assert_eq!(Route::fallback(RouteFallback::Login), Route::Login {});
    }

    #[test]
    fn test_route_table() {
        assert_eq!(Route::Login {}.to_string(), "/login");
        assert_eq!(Route::Dashboard {}.to_string(), "/dashboard");
        assert_eq!(Route::Patients {}.to_string(), "/patients");
        assert_eq!(Route::Appointment {}.to_string(), "/appointment");
    }

    #[test]
    fn test_unknown_paths_hit_catch_all() {
        let route: Route = "/nowhere/at/all".parse().unwrap();
        assert!(matches!(route, Route::NotFound { .. }));

        let route: Route = "/patients".parse().unwrap();
        assert_eq!(route, Route::Patients {});
    }

    #[test]
    fn test_embedded_config_parses() {
        let config = DashboardConfig::from_toml(DASHBOARD_TOML).unwrap();
        assert_eq!(config, DashboardConfig::default());
    }
}
