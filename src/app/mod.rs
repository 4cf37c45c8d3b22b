//! Application use cases.

mod joke;
mod seed;

pub use joke::{joke_count, joke_list, joke_texts, Joke};
pub use seed::{seed_if_empty, seed_with, DEFAULT_JOKES};
