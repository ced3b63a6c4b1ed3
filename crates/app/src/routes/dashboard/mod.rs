pub mod address_form;
pub mod map_picker;
pub mod outbreak_lists;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaUsers, FaVirus, FaWater};
use dioxus_free_icons::Icon;
use shared_types::{
    append_rows, compose_address_query, coordinate_pair, AddressTier, AddressUnit, AppError,
    GeoSelection, NewOutbreakLocation, OutbreakCategory, OutbreakLocation,
};
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Button, ButtonVariant, Card,
    CardContent, CardHeader, CardTitle, Separator, Skeleton, ToastOptions,
};

use address_form::AddressForm;
use map_picker::MapPicker;
use outbreak_lists::OutbreakLists;

/// Serialize a bounding box for the row column; empty boxes persist as NULL.
fn bounding_box_column(bounding_box: &[String]) -> Option<String> {
    if bounding_box.is_empty() {
        None
    } else {
        serde_json::to_string(bounding_box).ok()
    }
}

/// Admin dashboard. Owns every piece of page state — the map selection,
/// both outbreak lists, and the address cascade — and hands child
/// components signals plus callbacks.
#[component]
pub fn Dashboard() -> Element {
    let toast = use_toast();

    let mut user_count = use_signal(|| Option::<usize>::None);
    let mut asf_rows = use_signal(Vec::<OutbreakLocation>::new);
    let mut red_tide_rows = use_signal(Vec::<OutbreakLocation>::new);
    let mut selection = use_signal(|| Option::<GeoSelection>::None);

    // Address cascade: typed value and dataset per tier. Lower tiers stay
    // empty (and therefore disabled) until an ancestor is picked.
    let mut region_value = use_signal(String::new);
    let mut province_value = use_signal(String::new);
    let mut city_value = use_signal(String::new);
    let mut barangay_value = use_signal(String::new);
    let mut region_units = use_signal(Vec::<AddressUnit>::new);
    let mut province_units = use_signal(Vec::<AddressUnit>::new);
    let mut city_units = use_signal(Vec::<AddressUnit>::new);
    let mut barangay_units = use_signal(Vec::<AddressUnit>::new);

    // Category pending confirmation for a map-selection add.
    let mut pending_map_add = use_signal(|| Option::<OutbreakCategory>::None);

    // Initial data, loaded serially on mount.
    use_future(move || async move {
        let loaded = async {
            let profiles = server::api::list_profiles().await?;
            let asf = server::api::list_outbreaks(OutbreakCategory::Asf).await?;
            let red_tide = server::api::list_outbreaks(OutbreakCategory::RedTide).await?;
            let regions = server::api::list_address_units(AddressTier::Region, None).await?;
            Ok::<_, ServerFnError>((profiles, asf, red_tide, regions))
        }
        .await;

        match loaded {
            Ok((profiles, asf, red_tide, regions)) => {
                user_count.set(Some(profiles.len()));
                asf_rows.set(asf);
                red_tide_rows.set(red_tide);
                region_units.set(regions);
            }
            Err(_) => {
                toast.error("Failed to load data.".to_string(), ToastOptions::new());
            }
        }
    });

    // A pick at one tier commits its value, wipes every descendant field
    // and dataset, then fetches the child tier's dataset under the picked
    // code.
    let handle_pick = move |(tier, unit): (AddressTier, AddressUnit)| {
        match tier {
            AddressTier::Region => {
                region_value.set(unit.description.clone());
                province_value.set(String::new());
                city_value.set(String::new());
                barangay_value.set(String::new());
                province_units.set(Vec::new());
                city_units.set(Vec::new());
                barangay_units.set(Vec::new());
            }
            AddressTier::Province => {
                province_value.set(unit.description.clone());
                city_value.set(String::new());
                barangay_value.set(String::new());
                city_units.set(Vec::new());
                barangay_units.set(Vec::new());
            }
            AddressTier::City => {
                city_value.set(unit.description.clone());
                barangay_value.set(String::new());
                barangay_units.set(Vec::new());
            }
            AddressTier::Barangay => {
                barangay_value.set(unit.description.clone());
            }
        }

        if let Some(child) = tier.child() {
            let code = unit.code.clone();
            spawn(async move {
                match server::api::list_address_units(child, Some(code)).await {
                    Ok(units) => match child {
                        AddressTier::Province => province_units.set(units),
                        AddressTier::City => city_units.set(units),
                        AddressTier::Barangay => barangay_units.set(units),
                        AddressTier::Region => {}
                    },
                    Err(e) => {
                        toast.error(AppError::friendly_message(&e.to_string()), ToastOptions::new());
                    }
                }
            });
        }
    };

    // Add from the address cascade, invoked by AddressForm after its own
    // validation and confirmation. Geocoding is best effort — the insert
    // proceeds with empty coordinates when nothing resolves.
    let handle_cascade_add = move |category: OutbreakCategory| {
        let province = province_value();
        let city = city_value();
        let barangay = barangay_value();
        spawn(async move {
            let query = compose_address_query(&province, &city, &barangay);
            let place = server::api::geocode_search(query).await.ok().flatten();

            let (coordinates, bounding_box) = match place {
                Some(p) => {
                    let coords = p
                        .lat
                        .parse::<f64>()
                        .ok()
                        .zip(p.lon.parse::<f64>().ok())
                        .map(|(lat, lng)| coordinate_pair(lat, lng))
                        .unwrap_or_default();
                    (coords, bounding_box_column(&p.boundingbox))
                }
                None => (String::new(), None),
            };

            let row = NewOutbreakLocation {
                location: format!("{}, {}, {}", barangay, city, province),
                coordinates,
                bounding_box,
            };

            match server::api::add_outbreak(category, row).await {
                Ok(rows) => {
                    match category {
                        OutbreakCategory::Asf => append_rows(&mut asf_rows.write(), rows),
                        OutbreakCategory::RedTide => append_rows(&mut red_tide_rows.write(), rows),
                    }
                    toast.success(
                        format!("{} location added", category.short_label()),
                        ToastOptions::new(),
                    );
                    region_value.set(String::new());
                    province_value.set(String::new());
                    city_value.set(String::new());
                    barangay_value.set(String::new());
                    province_units.set(Vec::new());
                    city_units.set(Vec::new());
                    barangay_units.set(Vec::new());
                }
                Err(e) => {
                    toast.error(AppError::friendly_message(&e.to_string()), ToastOptions::new());
                }
            }
        });
    };

    // Request a map-selection add: needs an active selection first.
    let request_map_add = move |category: OutbreakCategory| {
        if selection.read().is_none() {
            toast.warning(
                "Pick a location on the map first.".to_string(),
                ToastOptions::new(),
            );
            return;
        }
        pending_map_add.set(Some(category));
    };

    let confirm_map_add = move |_| {
        let Some(category) = pending_map_add() else {
            return;
        };
        pending_map_add.set(None);
        let Some(sel) = selection() else {
            return;
        };
        spawn(async move {
            let row = NewOutbreakLocation {
                location: sel.location_name.clone(),
                coordinates: sel.coordinate_pair(),
                bounding_box: bounding_box_column(&sel.bounding_box),
            };
            match server::api::add_outbreak(category, row).await {
                Ok(rows) => {
                    match category {
                        OutbreakCategory::Asf => append_rows(&mut asf_rows.write(), rows),
                        OutbreakCategory::RedTide => append_rows(&mut red_tide_rows.write(), rows),
                    }
                    toast.success(
                        format!("{} location added", category.short_label()),
                        ToastOptions::new(),
                    );
                }
                Err(e) => {
                    toast.error(AppError::friendly_message(&e.to_string()), ToastOptions::new());
                }
            }
        });
    };

    let pending_label = pending_map_add()
        .map(|c| c.label())
        .unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard",
            // ── Stats row ──
            div { class: "stats-row",
                Card {
                    CardContent {
                        div { class: "stat",
                            Icon::<FaUsers> { icon: FaUsers, width: 22, height: 22 }
                            div {
                                div { class: "stat-value",
                                    match user_count() {
                                        Some(n) => rsx! { "{n}" },
                                        None => rsx! { Skeleton { style: "width: 2.5rem; height: 1.4rem;" } },
                                    }
                                }
                                div { class: "stat-label", "Total users" }
                            }
                        }
                    }
                }
                Card {
                    CardContent {
                        div { class: "stat",
                            Icon::<FaVirus> { icon: FaVirus, width: 22, height: 22 }
                            div {
                                div { class: "stat-value", "{asf_rows.read().len()}" }
                                div { class: "stat-label", "ASF locations" }
                            }
                        }
                    }
                }
                Card {
                    CardContent {
                        div { class: "stat",
                            Icon::<FaWater> { icon: FaWater, width: 22, height: 22 }
                            div {
                                div { class: "stat-value", "{red_tide_rows.read().len()}" }
                                div { class: "stat-label", "Red Tide locations" }
                            }
                        }
                    }
                }
            }

            // ── Map ──
            Card {
                CardHeader {
                    CardTitle { "Outbreak Map" }
                }
                CardContent {
                    MapPicker { selection }

                    if let Some(sel) = selection() {
                        div { class: "map-selection",
                            span { class: "map-selection-name", "{sel.location_name}" }
                            span { class: "map-selection-coords", "{sel.coordinate_pair()}" }
                        }
                    }

                    Separator {}

                    div { class: "map-add-buttons",
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| request_map_add(OutbreakCategory::Asf),
                            "Add to ASF"
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| request_map_add(OutbreakCategory::RedTide),
                            "Add to Red Tide"
                        }
                    }
                }
            }

            AlertDialogRoot {
                open: pending_map_add().is_some(),
                on_open_change: move |open: bool| {
                    if !open {
                        pending_map_add.set(None);
                    }
                },
                AlertDialogContent {
                    AlertDialogTitle { "Add outbreak location" }
                    AlertDialogDescription {
                        "Record the selected location as a {pending_label} outbreak?"
                    }
                    AlertDialogActions {
                        AlertDialogCancel { "Cancel" }
                        AlertDialogAction {
                            on_click: confirm_map_add,
                            "Add"
                        }
                    }
                }
            }

            // ── Address cascade ──
            AddressForm {
                region_value,
                province_value,
                city_value,
                barangay_value,
                region_units,
                province_units,
                city_units,
                barangay_units,
                on_pick: handle_pick,
                on_add: handle_cascade_add,
            }

            // ── Lists ──
            OutbreakLists {
                asf_rows,
                red_tide_rows,
                on_delete: move |(category, id): (OutbreakCategory, i64)| {
                    spawn(async move {
                        match server::api::delete_outbreak(category, id).await {
                            Ok(()) => {
                                match category {
                                    OutbreakCategory::Asf => {
                                        shared_types::remove_by_id(&mut asf_rows.write(), id);
                                    }
                                    OutbreakCategory::RedTide => {
                                        shared_types::remove_by_id(&mut red_tide_rows.write(), id);
                                    }
                                }
                                toast.success("Location removed".to_string(), ToastOptions::new());
                            }
                            Err(e) => {
                                toast.error(
                                    AppError::friendly_message(&e.to_string()),
                                    ToastOptions::new(),
                                );
                            }
                        }
                    });
                },
            }
        }
    }
}
