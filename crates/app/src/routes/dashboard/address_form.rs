use dioxus::prelude::*;
use shared_types::{cascade_complete, filter_suggestions, AddressTier, AddressUnit, OutbreakCategory};
use shared_ui::{
    AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Button, ButtonVariant, Card,
    CardContent, CardDescription, CardHeader, CardTitle,
};

/// One tier of the cascade as a controlled suggestion input.
///
/// Pure render of its props: the parent owns the typed value and the
/// dataset, and hears about picks through the callback. Disabled until
/// the dataset arrives, which keeps lower tiers locked until their
/// ancestor is chosen.
#[component]
pub fn AddressSuggestInput(
    tier: AddressTier,
    value: String,
    units: Vec<AddressUnit>,
    on_input: EventHandler<(AddressTier, String)>,
    on_pick: EventHandler<(AddressTier, AddressUnit)>,
) -> Element {
    let disabled = units.is_empty();
    let suggestions: Vec<AddressUnit> = filter_suggestions(&units, &value)
        .into_iter()
        .cloned()
        .collect();
    // Hide the list once the typed value is an exact pick
    let show_suggestions =
        !suggestions.is_empty() && suggestions.iter().all(|u| u.description != value);

    rsx! {
        div { class: "address-field",
            label { class: "input-label", "{tier.label()}" }
            input {
                class: "input",
                value: "{value}",
                disabled: disabled,
                placeholder: if disabled { "Select the level above first" } else { "Start typing..." },
                oninput: move |e| on_input.call((tier, e.value())),
            }
            if show_suggestions {
                ul { class: "address-suggestions",
                    for unit in suggestions {
                        li {
                            key: "{unit.code}",
                            onclick: {
                                let unit = unit.clone();
                                move |_| on_pick.call((tier, unit.clone()))
                            },
                            "{unit.description}"
                        }
                    }
                }
            }
        }
    }
}

/// The four-tier address cascade with per-category add buttons.
///
/// Validation is local and blocking: all four values must be non-empty
/// before any confirmation dialog or network call. The actual geocode +
/// insert happens in the parent via `on_add`.
#[component]
pub fn AddressForm(
    region_value: Signal<String>,
    province_value: Signal<String>,
    city_value: Signal<String>,
    barangay_value: Signal<String>,
    region_units: Signal<Vec<AddressUnit>>,
    province_units: Signal<Vec<AddressUnit>>,
    city_units: Signal<Vec<AddressUnit>>,
    barangay_units: Signal<Vec<AddressUnit>>,
    on_pick: EventHandler<(AddressTier, AddressUnit)>,
    on_add: EventHandler<OutbreakCategory>,
) -> Element {
    let mut validation_msg = use_signal(|| Option::<String>::None);
    let mut pending_add = use_signal(|| Option::<OutbreakCategory>::None);

    let handle_input = move |(tier, text): (AddressTier, String)| match tier {
        AddressTier::Region => region_value.set(text),
        AddressTier::Province => province_value.set(text),
        AddressTier::City => city_value.set(text),
        AddressTier::Barangay => barangay_value.set(text),
    };

    let mut request_add = move |category: OutbreakCategory| {
        let complete = cascade_complete(&[
            region_value.read().as_str(),
            province_value.read().as_str(),
            city_value.read().as_str(),
            barangay_value.read().as_str(),
        ]);
        if !complete {
            validation_msg.set(Some(
                "Please fill in all four address levels first.".to_string(),
            ));
            return;
        }
        validation_msg.set(None);
        pending_add.set(Some(category));
    };

    let confirm_add = move |_| {
        if let Some(category) = pending_add() {
            pending_add.set(None);
            on_add.call(category);
        }
    };

    let pending_label = pending_add().map(|c| c.label()).unwrap_or_default();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Add by Address" }
                CardDescription {
                    "Pick the region down to the barangay, then record the outbreak."
                }
            }
            CardContent {
                if let Some(msg) = validation_msg() {
                    div { class: "address-validation-error", "{msg}" }
                }

                div { class: "address-grid",
                    AddressSuggestInput {
                        tier: AddressTier::Region,
                        value: region_value(),
                        units: region_units(),
                        on_input: handle_input,
                        on_pick: move |picked| on_pick.call(picked),
                    }
                    AddressSuggestInput {
                        tier: AddressTier::Province,
                        value: province_value(),
                        units: province_units(),
                        on_input: handle_input,
                        on_pick: move |picked| on_pick.call(picked),
                    }
                    AddressSuggestInput {
                        tier: AddressTier::City,
                        value: city_value(),
                        units: city_units(),
                        on_input: handle_input,
                        on_pick: move |picked| on_pick.call(picked),
                    }
                    AddressSuggestInput {
                        tier: AddressTier::Barangay,
                        value: barangay_value(),
                        units: barangay_units(),
                        on_input: handle_input,
                        on_pick: move |picked| on_pick.call(picked),
                    }
                }

                div { class: "address-add-buttons",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| request_add(OutbreakCategory::Asf),
                        "Add ASF Location"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| request_add(OutbreakCategory::RedTide),
                        "Add Red Tide Location"
                    }
                }
            }
        }

        AlertDialogRoot {
            open: pending_add().is_some(),
            on_open_change: move |open: bool| {
                if !open {
                    pending_add.set(None);
                }
            },
            AlertDialogContent {
                AlertDialogTitle { "Add outbreak location" }
                AlertDialogDescription {
                    "Record this address as a {pending_label} outbreak?"
                }
                AlertDialogActions {
                    AlertDialogCancel { "Cancel" }
                    AlertDialogAction {
                        on_click: confirm_add,
                        "Add"
                    }
                }
            }
        }
    }
}
