//! Clinic Dashboard App
//!
//! Root component: session provider, dashboard store and routes.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes, A};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{AdminRoute, DoctorBadge, ProtectedRoute};
use crate::config::load_config;
use crate::context::provide_session;
use crate::pages::{AdminPage, LoginPage, PatientDashboard, PatientListPage};
use crate::resources::use_doctor_profile;
use crate::store::DashboardState;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    tracing::info!(api = %config.api_base_url, "starting clinic dashboard");
    provide_context(config.clone());

    // Provide session and store to all children
    let session = provide_session(config);
    provide_context(Store::new(DashboardState::default()));

    // Doctor profile follows whoever is signed in
    let doctor = use_doctor_profile(session);
    provide_context(doctor);

    view! {
        <Router>
            <main class="app-layout">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/") view=|| view! { <Redirect path="/dashboard" /> } />
                    <Route
                        path=path!("/dashboard")
                        view=|| view! { <ProtectedRoute><Shell><PatientListPage /></Shell></ProtectedRoute> }
                    />
                    <Route
                        path=path!("/patients/:id")
                        view=|| view! { <ProtectedRoute><Shell><PatientDashboard /></Shell></ProtectedRoute> }
                    />
                    <Route
                        path=path!("/admin")
                        view=|| view! { <AdminRoute><Shell><AdminPage /></Shell></AdminRoute> }
                    />
                </Routes>
            </main>
        </Router>
    }
}

/// Header and navigation around signed-in pages
#[component]
fn Shell(children: Children) -> impl IntoView {
    let doctor = expect_context::<crate::resources::DoctorResource>();
    let is_admin = move || doctor.doctor().is_some_and(|d| d.is_admin);

    view! {
        <header class="app-header">
            <nav>
                <A href="/dashboard">"Patients"</A>
                <Show when=is_admin>
                    <A href="/admin">"Admin"</A>
                </Show>
            </nav>
            <DoctorBadge doctor=doctor />
        </header>
        <div class="app-content">{children()}</div>
    }
}
