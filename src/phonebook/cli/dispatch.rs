//! # Dispatcher
//!
//! Routes the raw argument vector to one record store operation. Element 0 is the
//! program name and element 1 the subcommand; the shape of everything after that is
//! checked here, before the store is touched.
//!
//! The dispatcher never fails: every outcome, including store errors, becomes a list
//! of messages for the caller to print.

use super::render::{render_entry, render_entry_list};
use phonebook::api::PhonebookApi;
use phonebook::commands::CmdMessage;
use phonebook::error::PhonebookError;
use phonebook::model::EntryDraft;
use phonebook::store::DataStore;
use thiserror::Error;

/// Argument-shape problems, detected before any store call.
#[derive(Debug, Error, PartialEq, Eq)]
enum UsageError {
    #[error("Please enter required arguments!!")]
    MissingArguments,

    #[error("Please provide a search term")]
    MissingSearchTerm,

    #[error("list takes no arguments")]
    UnexpectedListArguments,

    #[error("insert requires exactly 3 arguments: <name> <surname> <phone>")]
    InsertArguments,

    #[error("delete requires exactly 1 argument: <phone>")]
    DeleteArguments,

    #[error("not valid option")]
    UnknownOption,
}

#[derive(Debug, Error)]
enum DispatchError {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error(transparent)]
    Store(#[from] PhonebookError),
}

pub(super) fn dispatch<S: DataStore>(
    api: &mut PhonebookApi<S>,
    args: &[String],
) -> Vec<CmdMessage> {
    match route(api, args) {
        Ok(messages) => messages,
        Err(DispatchError::Usage(err)) => {
            log::debug!("rejected arguments {:?}: {}", args, err);
            vec![CmdMessage::error(err.to_string())]
        }
        Err(DispatchError::Store(err)) => vec![CmdMessage::error(err.to_string())],
    }
}

fn route<S: DataStore>(
    api: &mut PhonebookApi<S>,
    args: &[String],
) -> Result<Vec<CmdMessage>, DispatchError> {
    let command = args.get(1).ok_or(UsageError::MissingArguments)?;

    match command.as_str() {
        "search" => handle_search(api, args),
        "list" => handle_list(api, args),
        "insert" => handle_insert(api, args),
        "delete" => handle_delete(api, args),
        _ => Err(UsageError::UnknownOption.into()),
    }
}

fn handle_search<S: DataStore>(
    api: &mut PhonebookApi<S>,
    args: &[String],
) -> Result<Vec<CmdMessage>, DispatchError> {
    let [_, _, term] = args else {
        return Err(UsageError::MissingSearchTerm.into());
    };

    let entries = api.get_list()?.listed_entries;
    let result = api.search(&entries, term)?;

    let mut messages: Vec<CmdMessage> = result
        .listed_entries
        .iter()
        .map(|entry| CmdMessage::info(render_entry(entry)))
        .collect();
    messages.extend(result.messages);
    Ok(messages)
}

fn handle_list<S: DataStore>(
    api: &mut PhonebookApi<S>,
    args: &[String],
) -> Result<Vec<CmdMessage>, DispatchError> {
    if args.len() != 2 {
        return Err(UsageError::UnexpectedListArguments.into());
    }

    let result = api.get_list()?;
    let mut messages = vec![CmdMessage::info(render_entry_list(&result.listed_entries))];
    messages.extend(result.messages);
    Ok(messages)
}

fn handle_insert<S: DataStore>(
    api: &mut PhonebookApi<S>,
    args: &[String],
) -> Result<Vec<CmdMessage>, DispatchError> {
    let [_, _, name, surname, phone] = args else {
        return Err(UsageError::InsertArguments.into());
    };

    let draft = EntryDraft::new(name.as_str(), surname.as_str(), phone.as_str());
    let result = api.insert(draft)?;
    Ok(result.messages)
}

fn handle_delete<S: DataStore>(
    api: &mut PhonebookApi<S>,
    args: &[String],
) -> Result<Vec<CmdMessage>, DispatchError> {
    let [_, _, phone] = args else {
        return Err(UsageError::DeleteArguments.into());
    };

    let result = api.delete(phone)?;
    Ok(result.messages)
}
