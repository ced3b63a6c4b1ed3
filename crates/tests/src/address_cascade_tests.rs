//! Scenarios for the four-tier address cascade: dataset normalization,
//! suggestion filtering, and the tier walk itself.

use pretty_assertions::assert_eq;
use serde_json::json;
use server::supabase::normalize_address_rows;
use shared_types::{cascade_complete, filter_suggestions, AddressTier, AddressUnit};

fn unit(code: &str, desc: &str) -> AddressUnit {
    AddressUnit {
        code: code.to_string(),
        description: desc.to_string(),
        parent_code: None,
    }
}

#[test]
fn typing_filters_to_the_case_insensitive_substring_subset() {
    let provinces = vec![
        unit("0128", "ILOCOS NORTE"),
        unit("0129", "ILOCOS SUR"),
        unit("0133", "LA UNION"),
        unit("0155", "PANGASINAN"),
    ];

    let hits = filter_suggestions(&provinces, "ilocos");
    let descriptions: Vec<&str> = hits.iter().map(|u| u.description.as_str()).collect();
    assert_eq!(descriptions, vec!["ILOCOS NORTE", "ILOCOS SUR"]);

    // exactly the subset: "an" lives only in PANGASINAN
    let hits = filter_suggestions(&provinces, "an");
    let descriptions: Vec<&str> = hits.iter().map(|u| u.description.as_str()).collect();
    assert_eq!(descriptions, vec!["PANGASINAN"]);
}

#[test]
fn empty_input_offers_no_suggestions() {
    let provinces = vec![unit("0128", "ILOCOS NORTE")];
    assert!(filter_suggestions(&provinces, "").is_empty());
}

#[test]
fn raw_backend_rows_normalize_per_tier() {
    let region_rows = vec![json!({"id": 1, "regCode": "07", "regDesc": "CENTRAL VISAYAS"})];
    let city_rows = vec![json!({
        "citymunCode": "072217",
        "citymunDesc": "CEBU CITY",
        "provCode": "0722"
    })];

    let regions = normalize_address_rows(AddressTier::Region, &region_rows);
    assert_eq!(regions[0].code, "07");
    assert_eq!(regions[0].parent_code, None);

    let cities = normalize_address_rows(AddressTier::City, &city_rows);
    assert_eq!(cities[0].description, "CEBU CITY");
    assert_eq!(cities[0].parent_code.as_deref(), Some("0722"));
}

#[test]
fn normalized_rows_filter_like_any_dataset() {
    let rows = vec![
        json!({"brgyCode": "072217001", "brgyDesc": "Apas", "citymunCode": "072217"}),
        json!({"brgyCode": "072217002", "brgyDesc": "Lahug", "citymunCode": "072217"}),
        json!({"brgyCode": "072217003", "brgyDesc": "Mabolo", "citymunCode": "072217"}),
    ];
    let barangays = normalize_address_rows(AddressTier::Barangay, &rows);
    let hits = filter_suggestions(&barangays, "la");
    let descriptions: Vec<&str> = hits.iter().map(|u| u.description.as_str()).collect();
    assert_eq!(descriptions, vec!["Lahug"]);
}

#[test]
fn add_is_blocked_until_every_tier_is_filled() {
    // no tier may be empty when the add flow fires
    assert!(cascade_complete(&[
        "REGION I",
        "ILOCOS NORTE",
        "SAN NICOLAS",
        "Bingao"
    ]));
    assert!(!cascade_complete(&["REGION I", "ILOCOS NORTE", "", "Bingao"]));
    assert!(!cascade_complete(&["", "", "", ""]));
}

#[test]
fn whitespace_only_values_do_not_count_as_filled() {
    assert!(!cascade_complete(&[
        "REGION I",
        "ILOCOS NORTE",
        "   ",
        "Bingao"
    ]));
    assert!(!cascade_complete(&["\t", " ", "\n", " "]));
}

#[test]
fn the_cascade_descends_region_to_barangay() {
    assert_eq!(AddressTier::Region.child(), Some(AddressTier::Province));
    assert_eq!(AddressTier::Province.child(), Some(AddressTier::City));
    assert_eq!(AddressTier::City.child(), Some(AddressTier::Barangay));
    assert_eq!(AddressTier::Barangay.child(), None);

    // each lower tier is keyed by its parent's code column
    assert_eq!(AddressTier::Province.parent_column(), Some("regCode"));
    assert_eq!(AddressTier::City.parent_column(), Some("provCode"));
    assert_eq!(AddressTier::Barangay.parent_column(), Some("citymunCode"));
}
