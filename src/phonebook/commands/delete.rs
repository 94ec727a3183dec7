use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PhonebookError, Result};
use crate::model::EntryCollection;

/// Removes the entry whose phone number is `phone_number`, keeping the order of the rest.
pub fn run(collection: &mut EntryCollection, phone_number: &str) -> Result<CmdResult> {
    let index = collection.position_by_phone(phone_number).ok_or_else(|| {
        PhonebookError::EntryNotFound(format!("no entry with phone number {}", phone_number))
    })?;

    let removed = collection.remove(index);

    let mut result = CmdResult::default().with_affected_entries(vec![removed]);
    result.add_message(CmdMessage::success("successfully deleted"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn collection() -> EntryCollection {
        StoreFixture::new()
            .with_entry("Alice", "Smith", "555-0100")
            .with_entry("Bob", "Jones", "555-0101")
            .with_entry("Carol", "White", "555-0102")
            .store
            .collection()
            .clone()
    }

    #[test]
    fn removes_exactly_one_entry() {
        let mut collection = collection();
        let result = run(&mut collection, "555-0101").unwrap();

        assert_eq!(result.affected_entries[0].name, "Bob");
        assert_eq!(collection.len(), 2);
        let names: Vec<_> = collection.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Carol"]);
        assert_eq!(
            result.messages,
            vec![CmdMessage::success("successfully deleted")]
        );
    }

    #[test]
    fn other_entries_are_untouched() {
        let before = collection();
        let mut after = before.clone();
        run(&mut after, "555-0100").unwrap();

        assert_eq!(after.entries(), &before.entries()[1..]);
    }

    #[test]
    fn unknown_phone_is_not_found_and_changes_nothing() {
        let mut collection = collection();
        let before = collection.clone();

        let err = run(&mut collection, "555-9999").unwrap_err();
        assert!(matches!(err, PhonebookError::EntryNotFound(_)));
        assert_eq!(
            err.to_string(),
            "Entry not found: no entry with phone number 555-9999"
        );
        assert_eq!(collection, before);
    }

    #[test]
    fn matches_phone_only() {
        let mut collection = collection();
        assert!(run(&mut collection, "Alice").is_err());
        assert_eq!(collection.len(), 3);
    }
}
