pub mod catalog;
pub mod config;
pub mod db;
pub mod errors;
pub mod position;
pub mod preview;
pub mod resolution;
pub mod tokenizer;
pub mod types;
