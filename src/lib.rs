// tfidf-humor: TF-IDF document relevance with keyword mnemonics
//
// This is the library root. Modules follow the data flow:
// text -> scoring -> mnemonic -> pipeline -> output/web.

pub mod config;
pub mod error;
pub mod mnemonic;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod text;

#[cfg(feature = "web")]
pub mod web;
