use dioxus::prelude::*;
use shared_types::{
    AppError, GeoSelection, LatLng, PH_BOUNDS, PH_BOUNDS_VISCOSITY, PH_CENTER, PH_FOCUS_ZOOM,
    PH_INITIAL_ZOOM,
};
use shared_ui::{use_toast, ToastOptions};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

/// Leaflet map fixed on the Philippines, with a search box and a
/// draggable marker.
///
/// The map lives entirely on the JS side; Rust talks to it through two
/// channels: an init eval that streams marker drag positions back, and
/// one-shot evals that recenter the view after an accepted search.
#[component]
pub fn MapPicker(selection: Signal<Option<GeoSelection>>) -> Element {
    let toast = use_toast();
    let mut query = use_signal(String::new);
    let mut searching = use_signal(|| false);

    // Mount the map once and forward dragend positions. A dragged marker
    // always overwrites the selection with a dropped-pin label — the
    // previously resolved place name no longer applies.
    use_effect(move || {
        spawn(async move {
            let mut channel = document::eval(&map_init_js());
            loop {
                match channel.recv::<LatLng>().await {
                    Ok(pos) => {
                        selection.set(Some(GeoSelection::from_drag(pos.lat, pos.lng)));
                    }
                    Err(_) => break,
                }
            }
        });
    });

    let handle_search = move |evt: FormEvent| async move {
        evt.prevent_default();
        let q = query();
        if q.trim().is_empty() {
            return;
        }
        searching.set(true);

        match server::api::geocode_search(q).await {
            Ok(None) => {
                toast.info("No results found.".to_string(), ToastOptions::new());
            }
            Ok(Some(place)) => match GeoSelection::try_from_place(&place) {
                Ok(sel) => {
                    recenter(sel.coords.lat, sel.coords.lng, PH_FOCUS_ZOOM);
                    selection.set(Some(sel));
                }
                Err(rejection) => {
                    // Rejected results leave map and selection untouched
                    toast.error(rejection.message().to_string(), ToastOptions::new());
                }
            },
            Err(e) => {
                toast.error(AppError::friendly_message(&e.to_string()), ToastOptions::new());
            }
        }
        searching.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: LEAFLET_CSS }
        document::Script { src: LEAFLET_JS }

        form { class: "map-search", onsubmit: handle_search,
            input {
                class: "input map-search-input",
                placeholder: "Search for a place in the Philippines...",
                value: query(),
                oninput: move |e| query.set(e.value()),
            }
            button {
                r#type: "submit",
                class: "button map-search-button",
                disabled: searching(),
                if searching() { "Searching..." } else { "Search" }
            }
        }

        div { id: "outbreak-map", class: "outbreak-map" }
    }
}

/// Move the map and marker to an accepted result.
fn recenter(lat: f64, lng: f64, zoom: u8) {
    document::eval(&format!(
        r#"
        if (window.__outbreakMap) {{
            window.__outbreakMap.setView([{lat}, {lng}], {zoom});
            window.__outbreakMarker.setLatLng([{lat}, {lng}]);
        }}
        "#,
    ));
}

/// Build the map bootstrap script. Waits for the Leaflet script tag to
/// finish loading, then pins the viewport to the Philippines.
fn map_init_js() -> String {
    let (center_lat, center_lng) = PH_CENTER;
    let [(south, west), (north, east)] = PH_BOUNDS;
    format!(
        r#"
        while (typeof L === 'undefined') {{
            await new Promise((resolve) => setTimeout(resolve, 100));
        }}
        if (window.__outbreakMap) {{
            return;
        }}
        const map = L.map('outbreak-map', {{
            center: [{center_lat}, {center_lng}],
            zoom: {PH_INITIAL_ZOOM},
            maxBounds: [[{south}, {west}], [{north}, {east}]],
            maxBoundsViscosity: {PH_BOUNDS_VISCOSITY},
        }});
        L.tileLayer('https://tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
            attribution: '&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors',
        }}).addTo(map);
        const marker = L.marker([{center_lat}, {center_lng}], {{ draggable: true }}).addTo(map);
        marker.on('dragend', () => {{
            const pos = marker.getLatLng();
            dioxus.send({{ lat: pos.lat, lng: pos.lng }});
        }});
        window.__outbreakMap = map;
        window.__outbreakMarker = marker;
        "#,
    )
}
