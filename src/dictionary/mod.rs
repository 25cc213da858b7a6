// Dictionary module - the term mapping, its persisted sources, the memoized loader
// and the offline store used to edit the dictionary file

mod loader;
mod source;
mod store;
mod types;

pub use loader::DictionaryLoader;
pub use source::{DictionarySource, FileSource, StaticSource};
pub use store::DictionaryStore;
pub use types::{DictionaryError, TranslationDictionary};
