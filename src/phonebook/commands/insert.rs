use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PhonebookError, Result};
use crate::model::{EntryCollection, EntryDraft};

/// Assigns `draft` the next id and appends it to `collection`.
///
/// The collection is left untouched when the draft is rejected.
pub fn run(collection: &mut EntryCollection, draft: EntryDraft) -> Result<CmdResult> {
    validate(&draft)?;

    if collection.find_by_phone(&draft.phone_number).is_some() {
        return Err(PhonebookError::DuplicatePhone(draft.phone_number));
    }

    let id = collection.next_id()?;
    let entry = draft.into_entry(id);
    collection.push(entry.clone());

    let mut result = CmdResult::default().with_affected_entries(vec![entry]);
    result.add_message(CmdMessage::success(format!(
        "successfully inserted with id = {}",
        id
    )));
    Ok(result)
}

fn validate(draft: &EntryDraft) -> Result<()> {
    let fields = [
        ("name", &draft.name),
        ("surname", &draft.surname),
        ("phone number", &draft.phone_number),
    ];
    for (label, value) in fields {
        if value.is_empty() {
            return Err(PhonebookError::InvalidEntry(format!(
                "{} must not be empty",
                label
            )));
        }
    }
    Ok(())
}
