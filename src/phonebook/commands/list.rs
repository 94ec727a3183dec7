use crate::commands::CmdResult;
use crate::model::EntryCollection;

pub fn run(collection: &EntryCollection) -> CmdResult {
    CmdResult::default().with_listed_entries(collection.entries().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_entries_in_stored_order() {
        let fixture = StoreFixture::new()
            .with_entry("Zed", "Last", "1")
            .with_entry("Amy", "First", "2");

        let result = run(fixture.store.collection());
        let names: Vec<_> = result.listed_entries.iter().map(|e| &e.name).collect();
        assert_eq!(names, vec!["Zed", "Amy"]);
    }

    #[test]
    fn empty_collection_lists_nothing() {
        let result = run(&EntryCollection::new());
        assert!(result.listed_entries.is_empty());
        assert!(result.messages.is_empty());
    }
}
