//! Structuring raw seat data into ordered year slices.

use log::{debug, warn};

use riksplot_scb::SeatTable;

use crate::{
    parties,
    semantic::{PartyResult, YearSlice},
};

/// Turns the reshaped seat table into year slices ready for layout.
///
/// For each year, raw counts are parsed and filtered (see
/// [`PartyResult::from_raw`]) and the surviving results are sorted into the
/// canonical stacking order. Unknown party codes sort after all known ones,
/// ties broken by code comparison. A year whose filtered result list ends up
/// empty would make the layout's mandate total zero, so it is dropped here
/// with a warning instead of reaching the layout stage.
///
/// Slices come back in ascending year order; `SeatTable` keys are four-digit
/// year strings, so lexical order is chronological.
pub fn structure_years(table: &SeatTable) -> Vec<YearSlice> {
    let mut slices = Vec::with_capacity(table.len());

    for (year, entries) in table {
        let mut results: Vec<PartyResult> = entries
            .iter()
            .filter_map(|(code, raw)| PartyResult::from_raw(code.clone(), raw))
            .collect();

        results.sort_by(|a, b| {
            parties::rank(a.code())
                .cmp(&parties::rank(b.code()))
                .then_with(|| a.code().cmp(b.code()))
        });

        if results.is_empty() {
            warn!(year; "Dropping year with no counted mandates");
            continue;
        }

        debug!(year, parties = results.len(); "Structured year slice");
        slices.push(YearSlice::new(year.clone(), results));
    }

    slices
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn table_from(years: &[(&str, &[(&str, &str)])]) -> SeatTable {
        let mut table = SeatTable::new();
        for (year, entries) in years {
            let mut parties = BTreeMap::new();
            for (code, raw) in *entries {
                parties.insert(code.to_string(), raw.to_string());
            }
            table.insert(year.to_string(), parties);
        }
        table
    }

    fn codes(slice: &YearSlice) -> Vec<&str> {
        slice.results().iter().map(|r| r.code()).collect()
    }

    #[test]
    fn test_results_follow_canonical_order_not_magnitude() {
        // input arrives alphabetically from the BTreeMap; the slice must come
        // out in stacking order regardless of seat counts
        let table = table_from(&[("2018", &[("S", "100"), ("M", "50"), ("V", "10")])]);

        let slices = structure_years(&table);

        assert_eq!(slices.len(), 1);
        assert_eq!(codes(&slices[0]), ["V", "S", "M"]);
    }

    #[test]
    fn test_unparseable_and_zero_counts_are_filtered() {
        let table = table_from(&[(
            "1988",
            &[("S", "156"), ("SD", ".."), ("NYD", "0"), ("M", "66")],
        )]);

        let slices = structure_years(&table);

        assert_eq!(codes(&slices[0]), ["S", "M"]);
    }

    #[test]
    fn test_year_with_no_counted_mandates_is_dropped() {
        let table = table_from(&[
            ("1985", &[("S", ".."), ("M", "..")]),
            ("1988", &[("S", "156")]),
        ]);

        let slices = structure_years(&table);

        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].year(), "1988");
    }

    #[test]
    fn test_years_come_back_in_ascending_order() {
        let table = table_from(&[
            ("2022", &[("S", "107")]),
            ("1994", &[("S", "161")]),
            ("2018", &[("S", "100")]),
        ]);

        let slices = structure_years(&table);

        let years: Vec<&str> = slices.iter().map(|s| s.year()).collect();
        assert_eq!(years, ["1994", "2018", "2022"]);
    }

    #[test]
    fn test_unknown_codes_sort_last_deterministically() {
        let table = table_from(&[("2018", &[("ZZ", "5"), ("AA", "5"), ("S", "100")])]);

        let slices = structure_years(&table);

        // unknowns after known parties, tie-broken by code
        assert_eq!(codes(&slices[0]), ["S", "AA", "ZZ"]);
    }
}
