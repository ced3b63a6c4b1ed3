pub mod dashboard;
pub mod login;
pub mod not_found;

use crate::auth::use_auth;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaRightFromBracket, FaVirus};
use dioxus_free_icons::Icon;

use dashboard::Dashboard;
use login::Login;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Auth guard layout — redirects to /login when no admin session exists.
///
/// Uses `use_server_future` with `?` to propagate suspension properly.
/// During SSR the component suspends until the session check completes;
/// during hydration the embedded data is available immediately. The
/// `SuspenseBoundary` in `App` catches the suspension.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();

    let resource = use_server_future(move || async move { server::api::get_current_user().await })?;

    let result = resource.read().as_ref().cloned();

    match result {
        Some(Ok(Some(user))) => {
            if !auth.is_authenticated() {
                auth.set_user(user);
            }
            rsx! { Outlet::<Route> {} }
        }
        Some(Ok(None)) | Some(Err(_)) => {
            auth.clear_auth();
            navigator().push(Route::Login {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        None => {
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Loading..." }
                }
            }
        }
    }
}

/// Main layout: product header with the signed-in email and a sign-out
/// button. Sign-out navigates to login unconditionally — the server call
/// is best effort.
#[component]
fn AppLayout() -> Element {
    let mut auth = use_auth();

    let email = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.email.clone())
        .unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        header { class: "app-header",
            div { class: "app-brand",
                Icon::<FaVirus> { icon: FaVirus, width: 20, height: 20 }
                span { class: "app-brand-name", "Bantay Outbreak" }
            }
            div { class: "app-header-right",
                span { class: "app-header-email", "{email}" }
                button {
                    class: "app-signout button",
                    onclick: move |_| {
                        spawn(async move {
                            let _ = server::api::logout().await;
                        });
                        auth.clear_auth();
                        navigator().push(Route::Login {});
                    },
                    Icon::<FaRightFromBracket> { icon: FaRightFromBracket, width: 14, height: 14 }
                    "Sign Out"
                }
            }
        }

        div { class: "page-content",
            Outlet::<Route> {}
        }
    }
}
