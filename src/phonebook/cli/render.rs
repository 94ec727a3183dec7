use phonebook::model::Entry;
use unicode_width::UnicodeWidthStr;

const NO_ENTRIES: &str = "No entries found.";

fn full_name(entry: &Entry) -> String {
    format!("{} {}", entry.name, entry.surname)
}

/// One entry on one line: `<id>. <name> <surname>  <phone>`.
pub(super) fn render_entry(entry: &Entry) -> String {
    format!("{}. {}  {}", entry.id, full_name(entry), entry.phone_number)
}

/// Entries as an aligned table, one per line. Columns are padded by display width
/// so names with wide characters still line up.
pub(super) fn render_entry_list(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return NO_ENTRIES.to_string();
    }

    let ids: Vec<String> = entries.iter().map(|e| format!("{}.", e.id)).collect();
    let names: Vec<String> = entries.iter().map(full_name).collect();
    let id_width = ids.iter().map(|s| s.width()).max().unwrap_or(0);
    let name_width = names.iter().map(|s| s.width()).max().unwrap_or(0);

    entries
        .iter()
        .zip(ids.iter().zip(names.iter()))
        .map(|(entry, (id, name))| {
            format!(
                "{}{} {}{}  {}",
                " ".repeat(id_width - id.width()),
                id,
                name,
                " ".repeat(name_width - name.width()),
                entry.phone_number
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
