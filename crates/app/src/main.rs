use dioxus::prelude::*;

mod auth;
mod routes;

use auth::AuthState;
use routes::Route;

const APP_BASE_CSS: Asset = asset!("/assets/base.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::telemetry::init_telemetry();

        let context = server::context::AppContext::from_env()
            .expect("backend configuration must be present at startup");

        let supabase = context.supabase.clone();
        let watch_secs = context.config.profile_watch_secs;
        server::context::init(context).expect("application context installed once");

        // Observe profile changes for the lifetime of the process. Nothing
        // reacts to the feed yet beyond the audit log, but the subscription
        // handle keeps the capability explicit.
        let subscription = server::realtime::watch_profiles(supabase, watch_secs, |change| {
            tracing::info!(?change, "profiles table changed");
        });
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                subscription.unsubscribe();
            }
        });

        let router = dioxus::server::router(App)
            .layer(axum::middleware::from_fn(server::session::session_middleware));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AuthState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: APP_BASE_CSS }
        shared_ui::ToastProvider {
            SuspenseBoundary {
                fallback: |_| rsx! {
                    div { class: "auth-guard-loading",
                        p { "Loading..." }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
