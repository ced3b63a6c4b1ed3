use serde::{Deserialize, Serialize};

/// Geographic center of the Philippines — the map's initial view.
pub const PH_CENTER: (f64, f64) = (12.8797, 121.774);
/// Initial zoom over the whole archipelago.
pub const PH_INITIAL_ZOOM: u8 = 5;
/// Zoom applied after a successful search.
pub const PH_FOCUS_ZOOM: u8 = 13;
/// Rough bounding rectangle of the Philippines, SW then NE corner.
/// Used as the map's fixed viewport (soft drag-resistance, not a hard clip).
pub const PH_BOUNDS: [(f64, f64); 2] = [(4.2158, 116.1473), (21.3218, 126.8073)];
/// Leaflet maxBoundsViscosity for the viewport constraint.
pub const PH_BOUNDS_VISCOSITY: f64 = 0.9;

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Wire format for a coordinate pair: `"lat, lng"` at 5 decimal places.
pub fn coordinate_pair(lat: f64, lng: f64) -> String {
    format!("{:.5}, {:.5}", lat, lng)
}

/// Label synthesized when the marker is dragged to an arbitrary point.
/// The previously resolved place name is deliberately not kept — a moved
/// marker no longer points at the place the geocoder named.
pub fn dropped_pin_label(lat: f64, lng: f64) -> String {
    format!("Dropped pin ({:.5}, {:.5})", lat, lng)
}

/// Build the geocoder query for a selected address. Spaces are stripped
/// from the city and province names — multi-word names confuse the
/// geocoder's tokenizer for Philippine addresses, and the concatenated
/// form matches reliably.
pub fn compose_address_query(province: &str, city: &str, barangay: &str) -> String {
    format!(
        "{} {} {} Philippines",
        barangay.trim(),
        city.replace(' ', ""),
        province.replace(' ', "")
    )
}

/// First-result projection of a Nominatim search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
    #[serde(default)]
    pub address: PlaceAddress,
    #[serde(default)]
    pub boundingbox: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceAddress {
    #[serde(default)]
    pub country_code: Option<String>,
}

/// The transient map-derived selection committed at "add" time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoSelection {
    pub coords: LatLng,
    pub location_name: String,
    pub bounding_box: Vec<String>,
}

/// Why a geocoder result was rejected without touching any map state.
#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeRejection {
    /// Resolved country code is absent or not "ph".
    OutsidePhilippines,
    /// The provider returned no bounding box for the result.
    NoBoundingBox,
    /// lat/lon strings failed to parse as numbers.
    BadCoordinates,
}

impl GeocodeRejection {
    /// User-facing message for each rejection, matching the toasts the
    /// dashboard shows.
    pub fn message(&self) -> &'static str {
        match self {
            GeocodeRejection::OutsidePhilippines => "Location is not in the Philippines.",
            GeocodeRejection::NoBoundingBox => "Please select a more specific location.",
            GeocodeRejection::BadCoordinates => "Search returned an unusable result.",
        }
    }
}

impl GeoSelection {
    /// Accept a geocoder result as the active selection, or reject it.
    ///
    /// Only accepted results may mutate map center, marker, or selection
    /// state; a rejection carries a distinct user-facing message and the
    /// caller must leave all state unchanged.
    pub fn try_from_place(place: &NominatimPlace) -> Result<GeoSelection, GeocodeRejection> {
        if place.address.country_code.as_deref() != Some("ph") {
            return Err(GeocodeRejection::OutsidePhilippines);
        }
        if place.boundingbox.is_empty() {
            return Err(GeocodeRejection::NoBoundingBox);
        }
        let lat: f64 = place
            .lat
            .parse()
            .map_err(|_| GeocodeRejection::BadCoordinates)?;
        let lng: f64 = place
            .lon
            .parse()
            .map_err(|_| GeocodeRejection::BadCoordinates)?;
        Ok(GeoSelection {
            coords: LatLng { lat, lng },
            location_name: place.display_name.clone(),
            bounding_box: place.boundingbox.clone(),
        })
    }

    /// Selection produced by dragging the marker to an arbitrary point.
    pub fn from_drag(lat: f64, lng: f64) -> GeoSelection {
        GeoSelection {
            coords: LatLng { lat, lng },
            location_name: dropped_pin_label(lat, lng),
            bounding_box: Vec::new(),
        }
    }

    /// The `"lat, lng"` string persisted on the outbreak row.
    pub fn coordinate_pair(&self) -> String {
        coordinate_pair(self.coords.lat, self.coords.lng)
    }
}
