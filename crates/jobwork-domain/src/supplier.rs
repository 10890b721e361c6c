//! Supplier module - the ranked directory of previously used supplier names

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Maximum number of records kept in the directory
pub const MAX_SUPPLIERS: usize = 50;

/// Maximum number of names returned by a single suggestion query
pub const MAX_SUGGESTIONS: usize = 10;

/// Fixed storage key the directory document lives under
pub const SUPPLIERS_KEY: &str = "jobwork.suppliers";

/// A supplier name with its usage statistics
///
/// Serialized with the field names `name`, `count` and `lastUsed`, the last
/// one as an RFC 3339 UTC timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierRecord {
    /// Display name, with the casing it was first entered with
    pub name: String,

    /// Number of times this supplier has been recorded (always >= 1)
    pub count: u32,

    /// Most recent recording time
    pub last_used: DateTime<Utc>,
}

impl SupplierRecord {
    /// Create a record for a supplier seen for the first time
    pub fn new(name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            count: 1,
            last_used: now,
        }
    }

    /// Case-insensitive name comparison against an already lowercased name
    fn is_named(&self, lowered: &str) -> bool {
        self.name.to_lowercase() == lowered
    }

    /// Register another use of this supplier at `now`
    ///
    /// The stored spelling is kept. `last_used` never moves backwards, even
    /// if the clock does.
    fn touch(&mut self, now: DateTime<Utc>) {
        self.count = self.count.saturating_add(1);
        self.last_used = self.last_used.max(now);
    }

    /// Ranking order: higher count first, then most recently used first
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| other.last_used.cmp(&self.last_used))
    }
}

/// The supplier directory: ranked, deduplicated and capacity-bounded
///
/// Serializes as a plain JSON array of [`SupplierRecord`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierList {
    records: Vec<SupplierRecord>,
}

impl SupplierList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Records in rank order
    pub fn records(&self) -> &[SupplierRecord] {
        &self.records
    }

    /// Consume the list, yielding its records
    pub fn into_records(self) -> Vec<SupplierRecord> {
        self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the list holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by case-insensitive name
    pub fn find(&self, name: &str) -> Option<&SupplierRecord> {
        let lowered = name.trim().to_lowercase();
        self.records.iter().find(|r| r.is_named(&lowered))
    }

    /// Record one use of `name` at `now`
    ///
    /// Leading and trailing whitespace is ignored. Returns `false` without
    /// touching the list when the trimmed name is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use jobwork_domain::SupplierList;
    ///
    /// let mut list = SupplierList::new();
    /// list.record_at("  Acme ", Utc::now());
    /// list.record_at("acme", Utc::now());
    ///
    /// assert_eq!(list.len(), 1);
    /// assert_eq!(list.records()[0].name, "Acme");
    /// assert_eq!(list.records()[0].count, 2);
    /// ```
    pub fn record_at(&mut self, name: &str, now: DateTime<Utc>) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return false;
        }

        let lowered = trimmed.to_lowercase();
        match self.records.iter_mut().find(|r| r.is_named(&lowered)) {
            Some(existing) => existing.touch(now),
            None => self.records.push(SupplierRecord::new(trimmed, now)),
        }

        // Stable sort: records with identical rank keep their relative order
        self.records.sort_by(SupplierRecord::rank_cmp);
        self.records.truncate(MAX_SUPPLIERS);
        true
    }

    /// Names starting with `query` (case-insensitive), in rank order
    ///
    /// At most [`MAX_SUGGESTIONS`] names are returned. A blank query yields
    /// nothing. Otherwise the query is matched as typed, surrounding
    /// whitespace included.
    pub fn suggest(&self, query: &str) -> Vec<String> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let prefix = query.to_lowercase();

        self.records
            .iter()
            .filter(|r| r.name.to_lowercase().starts_with(&prefix))
            .take(MAX_SUGGESTIONS)
            .map(|r| r.name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap() + Duration::seconds(seconds)
    }

    #[test]
    fn test_record_new_supplier() {
        let mut list = SupplierList::new();
        assert!(list.record_at("Global Textiles", at(0)));

        assert_eq!(list.len(), 1);
        let record = &list.records()[0];
        assert_eq!(record.name, "Global Textiles");
        assert_eq!(record.count, 1);
        assert_eq!(record.last_used, at(0));
    }

    #[test]
    fn test_record_trims_whitespace() {
        let mut list = SupplierList::new();
        list.record_at("   Sharma Fabrics\t", at(0));
        assert_eq!(list.records()[0].name, "Sharma Fabrics");
    }

    #[test]
    fn test_blank_name_is_ignored() {
        let mut list = SupplierList::new();
        assert!(!list.record_at("", at(0)));
        assert!(!list.record_at("   ", at(1)));
        assert!(list.is_empty());
    }

    #[test]
    fn test_case_insensitive_merge_keeps_original_spelling() {
        let mut list = SupplierList::new();
        list.record_at("Acme", at(0));
        list.record_at("acme", at(1));

        assert_eq!(list.len(), 1);
        assert_eq!(list.records()[0].name, "Acme");
        assert_eq!(list.records()[0].count, 2);
        assert_eq!(list.records()[0].last_used, at(1));
    }

    #[test]
    fn test_ranking_by_count_then_recency() {
        let mut list = SupplierList::new();
        list.record_at("Alpha", at(0));
        list.record_at("Beta", at(1));
        list.record_at("Gamma", at(2));
        list.record_at("Alpha", at(3));

        let names: Vec<&str> = list.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Gamma", "Beta"]);
    }

    #[test]
    fn test_last_used_never_moves_backwards() {
        let mut list = SupplierList::new();
        list.record_at("Acme", at(10));
        list.record_at("ACME", at(5));

        assert_eq!(list.records()[0].count, 2);
        assert_eq!(list.records()[0].last_used, at(10));
    }

    #[test]
    fn test_capacity_drops_lowest_ranked() {
        let mut list = SupplierList::new();
        for i in 0..MAX_SUPPLIERS {
            list.record_at(&format!("Supplier {i:02}"), at(i as i64));
        }
        // Bump the oldest so the second oldest becomes the lowest ranked
        list.record_at("Supplier 00", at(100));
        assert_eq!(list.len(), MAX_SUPPLIERS);

        list.record_at("Newcomer", at(200));
        assert_eq!(list.len(), MAX_SUPPLIERS);
        assert!(list.find("Newcomer").is_some());
        assert!(list.find("Supplier 00").is_some());
        assert!(list.find("Supplier 01").is_none());
    }

    #[test]
    fn test_suggest_prefix_case_insensitive() {
        let mut list = SupplierList::new();
        list.record_at("Acme", at(0));
        list.record_at("Acer", at(1));
        list.record_at("Beta", at(2));

        assert_eq!(list.suggest("ac"), vec!["Acer", "Acme"]);
        assert_eq!(list.suggest("AC"), vec!["Acer", "Acme"]);
        assert!(list.suggest("z").is_empty());
        assert!(list.suggest("").is_empty());
        assert!(list.suggest("   ").is_empty());
    }

    #[test]
    fn test_suggest_is_prefix_not_substring() {
        let mut list = SupplierList::new();
        list.record_at("Shree Ganesh Silk", at(0));
        assert!(list.suggest("ganesh").is_empty());
        assert_eq!(list.suggest("shree g"), vec!["Shree Ganesh Silk"]);
    }

    #[test]
    fn test_suggest_matches_query_as_typed() {
        let mut list = SupplierList::new();
        list.record_at("Shreeji Silk", at(0));
        list.record_at("Shree Ganesh", at(1));

        assert_eq!(list.suggest("shree"), vec!["Shree Ganesh", "Shreeji Silk"]);
        assert_eq!(list.suggest("shree "), vec!["Shree Ganesh"]);
        assert!(list.suggest(" sh").is_empty());
    }

    #[test]
    fn test_suggest_caps_results() {
        let mut list = SupplierList::new();
        for i in 0..15 {
            list.record_at(&format!("Kanchi Weaver {i}"), at(i));
        }
        let suggestions = list.suggest("kanchi");
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        assert_eq!(suggestions[0], "Kanchi Weaver 14");
    }

    #[test]
    fn test_serialized_field_names() {
        let mut list = SupplierList::new();
        list.record_at("Acme", at(0));

        let json = serde_json::to_value(&list).unwrap();
        let first = &json.as_array().unwrap()[0];
        assert_eq!(first["name"], "Acme");
        assert_eq!(first["count"], 1);
        assert_eq!(first["lastUsed"], "2023-11-14T22:13:20Z");
    }

    #[test]
    fn test_deserialize_stored_document() {
        let json = r#"[{"name":"Acme","count":3,"lastUsed":"2024-01-05T10:00:00.000Z"}]"#;
        let list: SupplierList = serde_json::from_str(json).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.records()[0].count, 3);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn name_strategy() -> impl Strategy<Value = String> {
        // Small alphabet so case-insensitive collisions are frequent
        prop::string::string_regex("[ ]?[aAbBcC]{1,3}[ ]?").unwrap()
    }

    proptest! {
        /// Property: after every record the list is ranked and deduplicated
        #[test]
        fn test_invariants_hold_after_each_record(
            names in prop::collection::vec(name_strategy(), 0..80)
        ) {
            let base = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
            let mut list = SupplierList::new();

            for (i, name) in names.iter().enumerate() {
                list.record_at(name, base + Duration::seconds(i as i64));

                prop_assert!(list.len() <= MAX_SUPPLIERS);
                for pair in list.records().windows(2) {
                    prop_assert_ne!(pair[0].rank_cmp(&pair[1]), Ordering::Greater);
                }
                let mut lowered: Vec<String> =
                    list.records().iter().map(|r| r.name.to_lowercase()).collect();
                lowered.sort();
                lowered.dedup();
                prop_assert_eq!(lowered.len(), list.len());
            }
        }

        /// Property: a recorded name is present under its trimmed form
        #[test]
        fn test_recorded_name_is_listed(name in "[ ]{0,2}[A-Za-z][A-Za-z ]{0,10}") {
            let mut list = SupplierList::new();
            list.record_at(&name, Utc::now());
            prop_assert!(list.records().iter().any(|r| r.name == name.trim()));
        }

        /// Property: suggestions never exceed the cap
        #[test]
        fn test_suggestions_bounded(count in 0usize..40) {
            let base = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
            let mut list = SupplierList::new();
            for i in 0..count {
                list.record_at(&format!("Mill {i}"), base + Duration::seconds(i as i64));
            }
            prop_assert!(list.suggest("mill").len() <= MAX_SUGGESTIONS);
        }
    }
}
