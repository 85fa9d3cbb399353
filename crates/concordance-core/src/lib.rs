//! Word concordance over a fixed set of sentences, with multi-term lookup

mod config;
mod corpus;
mod error;
mod index;
mod query;
mod term_list;
pub mod tokenizer;

pub use config::Config;
pub use corpus::Corpus;
pub use error::{ConcordanceError, ConfigError, CorpusError, TermListError};
pub use index::Concordance;
pub use query::search;
pub use term_list::{Iter, TermList};
