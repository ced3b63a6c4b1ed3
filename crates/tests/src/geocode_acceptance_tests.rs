//! Scenarios around geocoder result acceptance: only results inside the
//! Philippines with a usable bounding box may become the map selection.

use pretty_assertions::assert_eq;
use shared_types::{
    compose_address_query, GeoSelection, GeocodeRejection, LatLng, NominatimPlace, PlaceAddress,
    PH_FOCUS_ZOOM,
};

fn place(lat: &str, lon: &str, name: &str, country: Option<&str>, bbox: &[&str]) -> NominatimPlace {
    NominatimPlace {
        lat: lat.to_string(),
        lon: lon.to_string(),
        display_name: name.to_string(),
        address: PlaceAddress {
            country_code: country.map(|c| c.to_string()),
        },
        boundingbox: bbox.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn manila_search_becomes_the_selection() {
    let manila = place(
        "14.5995",
        "120.9842",
        "Manila, Philippines",
        Some("ph"),
        &["14.3795", "14.8195", "120.7642", "121.2042"],
    );

    let selection = GeoSelection::try_from_place(&manila).unwrap();
    assert_eq!(
        selection.coords,
        LatLng {
            lat: 14.5995,
            lng: 120.9842
        }
    );
    assert_eq!(selection.location_name, "Manila, Philippines");
    assert_eq!(selection.coordinate_pair(), "14.59950, 120.98420");
    // accepted results recenter at the focus zoom
    assert_eq!(PH_FOCUS_ZOOM, 13);
}

#[test]
fn foreign_result_never_becomes_a_selection() {
    let tokyo = place(
        "35.6762",
        "139.6503",
        "Tokyo, Japan",
        Some("jp"),
        &["35.5", "35.9", "139.5", "139.9"],
    );
    assert_eq!(
        GeoSelection::try_from_place(&tokyo),
        Err(GeocodeRejection::OutsidePhilippines)
    );
}

#[test]
fn each_rejection_kind_carries_a_distinct_message() {
    let messages = [
        GeocodeRejection::OutsidePhilippines.message(),
        GeocodeRejection::NoBoundingBox.message(),
        GeocodeRejection::BadCoordinates.message(),
    ];
    for (i, a) in messages.iter().enumerate() {
        for b in &messages[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn boxless_result_asks_for_a_more_specific_place() {
    let vague = place("12.0", "122.0", "Visayas", Some("ph"), &[]);
    assert_eq!(
        GeoSelection::try_from_place(&vague),
        Err(GeocodeRejection::NoBoundingBox)
    );
}

#[test]
fn dragged_marker_overwrites_the_place_name() {
    let cebu = place(
        "10.3157",
        "123.8854",
        "Cebu City, Philippines",
        Some("ph"),
        &["10.2", "10.4", "123.7", "123.9"],
    );
    let searched = GeoSelection::try_from_place(&cebu).unwrap();
    assert_eq!(searched.location_name, "Cebu City, Philippines");

    // Dragging afterwards replaces the whole selection, stale name included
    let dragged = GeoSelection::from_drag(10.2000, 123.7500);
    assert_eq!(dragged.location_name, "Dropped pin (10.20000, 123.75000)");
    assert!(dragged.bounding_box.is_empty());
}

#[test]
fn address_query_collapses_multiword_names() {
    let query = compose_address_query("Negros Occidental", "San Carlos", "Rizal");
    assert_eq!(query, "Rizal SanCarlos NegrosOccidental Philippines");
}

#[test]
fn nominatim_wire_format_parses_with_and_without_details() {
    let full = r#"[{
        "lat": "14.5995",
        "lon": "120.9842",
        "display_name": "Manila, Philippines",
        "address": {"country_code": "ph", "city": "Manila"},
        "boundingbox": ["14.3795", "14.8195", "120.7642", "121.2042"]
    }]"#;
    let places: Vec<NominatimPlace> = serde_json::from_str(full).unwrap();
    assert_eq!(places[0].address.country_code.as_deref(), Some("ph"));

    let bare = r#"[{"lat": "14.5", "lon": "121.0", "display_name": "Somewhere"}]"#;
    let places: Vec<NominatimPlace> = serde_json::from_str(bare).unwrap();
    assert_eq!(places[0].address.country_code, None);
    assert!(places[0].boundingbox.is_empty());
}
