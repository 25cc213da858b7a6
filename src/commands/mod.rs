// Command implementations behind the CLI
// The clap front end in cli.rs only parses arguments; the logic here is fully tested.

pub mod dictionary;
pub mod translate;

pub use dictionary::{
    add_dictionary_entry, list_dictionary_entries, open_dictionary_store,
    remove_dictionary_entry, DictionaryEntryInfo,
};
pub use translate::translate_input;
