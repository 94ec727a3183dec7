//! Linear search over entries.
//!
//! A term matches an entry when it matches its name, surname or phone number. With
//! [`MatchMode::Exact`] that means case-sensitive equality of the whole field; with
//! [`MatchMode::Contains`] both sides are lowercased and the term may appear anywhere
//! in the field. The first matching entry in collection order is returned; there is
//! no ranking among several matches. An empty term matches nothing.

use crate::commands::CmdResult;
use crate::config::MatchMode;
use crate::error::{PhonebookError, Result};
use crate::model::Entry;

pub fn run(entries: &[Entry], term: &str, mode: MatchMode) -> Result<CmdResult> {
    let found = find(entries, term, mode)
        .ok_or_else(|| PhonebookError::EntryNotFound(format!("no entry matches \"{}\"", term)))?;

    Ok(CmdResult::default().with_listed_entries(vec![found.clone()]))
}

pub fn find<'a>(entries: &'a [Entry], term: &str, mode: MatchMode) -> Option<&'a Entry> {
    if term.is_empty() {
        return None;
    }

    let term_lower = term.to_lowercase();
    entries.iter().find(|entry| {
        [&entry.name, &entry.surname, &entry.phone_number]
            .into_iter()
            .any(|field| match mode {
                MatchMode::Exact => field == term,
                MatchMode::Contains => field.to_lowercase().contains(&term_lower),
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn entries() -> Vec<Entry> {
        StoreFixture::new()
            .with_entry("Alice", "Smith", "555-0100")
            .with_entry("Bob", "Alice", "555-0101")
            .with_entry("Carol", "Smithers", "555-0102")
            .store
            .collection()
            .entries()
            .to_vec()
    }

    #[test]
    fn matches_phone_number_exactly() {
        let result = run(&entries(), "555-0101", MatchMode::Exact).unwrap();
        assert_eq!(result.listed_entries.len(), 1);
        assert_eq!(result.listed_entries[0].name, "Bob");
    }

    #[test]
    fn matches_name_or_surname() {
        let entries = entries();
        let by_name = find(&entries, "Carol", MatchMode::Exact).unwrap();
        assert_eq!(by_name.id, 3);

        let by_surname = find(&entries, "Smithers", MatchMode::Exact).unwrap();
        assert_eq!(by_surname.id, 3);
    }

    #[test]
    fn first_match_in_collection_order_wins() {
        let entries = entries();
        // "Alice" is entry 1's name and entry 2's surname.
        let found = find(&entries, "Alice", MatchMode::Exact).unwrap();
        assert_eq!(found.id, 1);
    }

    #[test]
    fn exact_mode_is_case_sensitive_and_whole_field() {
        let entries = entries();
        assert!(find(&entries, "alice", MatchMode::Exact).is_none());
        assert!(find(&entries, "Smi", MatchMode::Exact).is_none());
        assert!(find(&entries, "555", MatchMode::Exact).is_none());
    }

    #[test]
    fn contains_mode_is_case_insensitive_substring() {
        let entries = entries();
        let found = find(&entries, "smithe", MatchMode::Contains).unwrap();
        assert_eq!(found.name, "Carol");

        let first = find(&entries, "SMITH", MatchMode::Contains).unwrap();
        assert_eq!(first.name, "Alice");
    }

    #[test]
    fn empty_term_never_matches() {
        let entries = entries();
        assert!(find(&entries, "", MatchMode::Exact).is_none());
        assert!(find(&entries, "", MatchMode::Contains).is_none());
    }

    #[test]
    fn no_match_is_not_found() {
        let err = run(&entries(), "Dave", MatchMode::Exact).unwrap_err();
        assert!(matches!(err, PhonebookError::EntryNotFound(_)));
        assert_eq!(err.to_string(), "Entry not found: no entry matches \"Dave\"");
    }

    #[test]
    fn searching_an_empty_collection_is_not_found() {
        assert!(matches!(
            run(&[], "555-0100", MatchMode::Exact),
            Err(PhonebookError::EntryNotFound(_))
        ));
    }
}
