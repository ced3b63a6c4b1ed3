use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTrash;
use dioxus_free_icons::Icon;
use shared_types::{OutbreakCategory, OutbreakLocation};
use shared_ui::{
    AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Card, CardContent, CardHeader,
    CardTitle,
};

/// The two tracked-location lists, one scrollable card per category.
/// Each row's delete goes through one shared confirmation dialog; the
/// confirmed (category, id) pair is forwarded to the parent, which owns
/// the list patching.
#[component]
pub fn OutbreakLists(
    asf_rows: Signal<Vec<OutbreakLocation>>,
    red_tide_rows: Signal<Vec<OutbreakLocation>>,
    on_delete: EventHandler<(OutbreakCategory, i64)>,
) -> Element {
    let mut pending_delete = use_signal(|| Option::<(OutbreakCategory, i64)>::None);

    let confirm_delete = move |_| {
        if let Some(target) = pending_delete() {
            pending_delete.set(None);
            on_delete.call(target);
        }
    };

    rsx! {
        div { class: "outbreak-lists",
            OutbreakListCard {
                category: OutbreakCategory::Asf,
                rows: asf_rows(),
                on_request_delete: move |id| pending_delete.set(Some((OutbreakCategory::Asf, id))),
            }
            OutbreakListCard {
                category: OutbreakCategory::RedTide,
                rows: red_tide_rows(),
                on_request_delete: move |id| {
                    pending_delete.set(Some((OutbreakCategory::RedTide, id)))
                },
            }
        }

        AlertDialogRoot {
            open: pending_delete().is_some(),
            on_open_change: move |open: bool| {
                if !open {
                    pending_delete.set(None);
                }
            },
            AlertDialogContent {
                AlertDialogTitle { "Delete location" }
                AlertDialogDescription {
                    "Remove this outbreak location? This cannot be undone."
                }
                AlertDialogActions {
                    AlertDialogCancel { "Cancel" }
                    AlertDialogAction {
                        on_click: confirm_delete,
                        "Delete"
                    }
                }
            }
        }
    }
}

#[component]
fn OutbreakListCard(
    category: OutbreakCategory,
    rows: Vec<OutbreakLocation>,
    on_request_delete: EventHandler<i64>,
) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "{category.label()}" }
            }
            CardContent {
                if rows.is_empty() {
                    p { class: "outbreak-list-empty", "No locations recorded." }
                } else {
                    ul { class: "outbreak-list",
                        for row in rows {
                            li { key: "{row.id}", class: "outbreak-row",
                                div { class: "outbreak-row-text",
                                    span { class: "outbreak-row-location", "{row.location}" }
                                    if !row.coordinates.is_empty() {
                                        span { class: "outbreak-row-coords", "{row.coordinates}" }
                                    }
                                }
                                button {
                                    class: "outbreak-row-delete",
                                    aria_label: "Delete {row.location}",
                                    onclick: {
                                        let id = row.id;
                                        move |_| on_request_delete.call(id)
                                    },
                                    Icon::<FaTrash> { icon: FaTrash, width: 14, height: 14 }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
