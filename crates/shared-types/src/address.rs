use serde::{Deserialize, Serialize};

/// The four nested administrative levels of a Philippine address.
///
/// Each tier maps to its own reference table in the backend, with
/// tier-specific column names for the unit code and description. Every
/// tier except `Region` also carries a parent-code column referencing
/// the immediately enclosing tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressTier {
    Region,
    Province,
    City,
    Barangay,
}

impl AddressTier {
    pub const ALL: [AddressTier; 4] = [
        AddressTier::Region,
        AddressTier::Province,
        AddressTier::City,
        AddressTier::Barangay,
    ];

    /// Parse a tier name, tolerating case and surrounding whitespace.
    /// Unknown names (including the empty string, a dead configuration
    /// the original UI accepted) yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "region" => Some(AddressTier::Region),
            "province" => Some(AddressTier::Province),
            "city" => Some(AddressTier::City),
            "barangay" => Some(AddressTier::Barangay),
            _ => None,
        }
    }

    /// Backend reference table for this tier.
    pub fn table(&self) -> &'static str {
        match self {
            AddressTier::Region => "region",
            AddressTier::Province => "province",
            AddressTier::City => "city",
            AddressTier::Barangay => "barangay",
        }
    }

    /// Column holding this tier's own unit code.
    pub fn code_column(&self) -> &'static str {
        match self {
            AddressTier::Region => "regCode",
            AddressTier::Province => "provCode",
            AddressTier::City => "citymunCode",
            AddressTier::Barangay => "brgyCode",
        }
    }

    /// Column holding the human-readable unit description.
    pub fn description_column(&self) -> &'static str {
        match self {
            AddressTier::Region => "regDesc",
            AddressTier::Province => "provDesc",
            AddressTier::City => "citymunDesc",
            AddressTier::Barangay => "brgyDesc",
        }
    }

    /// Column referencing the enclosing tier's code. `None` for Region.
    pub fn parent_column(&self) -> Option<&'static str> {
        match self {
            AddressTier::Region => None,
            AddressTier::Province => Some("regCode"),
            AddressTier::City => Some("provCode"),
            AddressTier::Barangay => Some("citymunCode"),
        }
    }

    /// The next tier down in the cascade, if any.
    pub fn child(&self) -> Option<AddressTier> {
        match self {
            AddressTier::Region => Some(AddressTier::Province),
            AddressTier::Province => Some(AddressTier::City),
            AddressTier::City => Some(AddressTier::Barangay),
            AddressTier::Barangay => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AddressTier::Region => "Region",
            AddressTier::Province => "Province",
            AddressTier::City => "City / Municipality",
            AddressTier::Barangay => "Barangay",
        }
    }
}

impl std::fmt::Display for AddressTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table())
    }
}

/// One row of an address reference table, normalized across tiers.
/// Read-only to this system — sourced entirely from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressUnit {
    pub code: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_code: Option<String>,
}

/// Whether every tier of the cascade has been filled in. Gates the add
/// flow: no confirmation dialog and no network call until all values
/// carry something beyond whitespace.
pub fn cascade_complete(values: &[&str]) -> bool {
    values.iter().all(|v| !v.trim().is_empty())
}

/// Filter a tier dataset down to the suggestions for the typed input.
///
/// Returns exactly the subset whose description contains `input`
/// case-insensitively. Empty input yields no suggestions, as does an
/// empty dataset regardless of input.
pub fn filter_suggestions<'a>(units: &'a [AddressUnit], input: &str) -> Vec<&'a AddressUnit> {
    if input.is_empty() {
        return Vec::new();
    }
    let needle = input.to_lowercase();
    units
        .iter()
        .filter(|u| u.description.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn unit(code: &str, desc: &str) -> AddressUnit {
        AddressUnit {
            code: code.to_string(),
            description: desc.to_string(),
            parent_code: None,
        }
    }

    #[test]
    fn filters_case_insensitive_substring() {
        let units = vec![
            unit("01", "ILOCOS REGION"),
            unit("02", "Cagayan Valley"),
            unit("03", "Central Luzon"),
        ];
        let hits = filter_suggestions(&units, "lo");
        let descs: Vec<&str> = hits.iter().map(|u| u.description.as_str()).collect();
        assert_eq!(descs, vec!["ILOCOS REGION"]);

        let hits = filter_suggestions(&units, "on");
        let descs: Vec<&str> = hits.iter().map(|u| u.description.as_str()).collect();
        assert_eq!(descs, vec!["ILOCOS REGION", "Central Luzon"]);
    }

    #[test]
    fn empty_input_yields_no_suggestions() {
        let units = vec![unit("01", "ILOCOS REGION")];
        assert!(filter_suggestions(&units, "").is_empty());
    }

    #[test]
    fn empty_dataset_yields_no_suggestions() {
        assert!(filter_suggestions(&[], "manila").is_empty());
    }

    #[test]
    fn no_match_yields_empty_set() {
        let units = vec![unit("01", "ILOCOS REGION")];
        assert!(filter_suggestions(&units, "davao").is_empty());
    }

    #[test]
    fn parse_rejects_dead_configuration() {
        assert_eq!(AddressTier::parse(""), None);
        assert_eq!(AddressTier::parse("  Barangay "), Some(AddressTier::Barangay));
    }

    #[test]
    fn every_tier_below_region_has_a_parent_column() {
        for tier in AddressTier::ALL {
            match tier {
                AddressTier::Region => assert!(tier.parent_column().is_none()),
                _ => assert!(tier.parent_column().is_some()),
            }
        }
    }

    #[test]
    fn cascade_walks_region_to_barangay() {
        let mut tier = AddressTier::Region;
        let mut seen = vec![tier];
        while let Some(next) = tier.child() {
            seen.push(next);
            tier = next;
        }
        assert_eq!(seen, AddressTier::ALL.to_vec());
    }
}
