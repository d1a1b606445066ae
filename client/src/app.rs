//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{setup::SetupPage, simulation::SimulationPage};
use crate::state::{sim::SimState, toast::ToastState};

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Reactive state contexts shared by all child components.
    let sim = RwSignal::new(SimState::default());
    let toast = RwSignal::new(ToastState::default());

    provide_context(sim);
    provide_context(toast);

    view! {
        <Title text="Genome Stepper"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SetupPage/>
                <Route path=(StaticSegment("canvas"), ParamSegment("world")) view=SimulationPage/>
            </Routes>
        </Router>
    }
}
