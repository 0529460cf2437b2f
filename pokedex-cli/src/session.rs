//! Per-run REPL session state.

use std::collections::HashMap;

use pokedex_core::types::{LocationAreaPage, Pokemon};

/// Mutable state carried across REPL commands.
///
/// Holds the pagination cursors for `map`/`mapb` and the collection of
/// caught Pokemon. Passed explicitly to each command handler; nothing in
/// the REPL is ambient or global. Lost when the process exits.
#[derive(Debug, Default)]
pub struct Session {
    next: Option<String>,
    previous: Option<String>,
    caught: HashMap<String, Pokemon>,
}

impl Session {
    /// Creates an empty session: no pages seen, nothing caught.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor for the next `map` page. `None` until a page has been seen,
    /// which makes `map` start from the first page.
    pub fn next_cursor(&self) -> Option<&str> {
        self.next.as_deref()
    }

    /// Cursor for the previous page. `None` on the first page.
    pub fn previous_cursor(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Records the cursors of a freshly fetched page.
    pub fn turn_page(&mut self, page: &LocationAreaPage) {
        self.next = page.next.clone();
        self.previous = page.previous.clone();
    }

    /// Stores a caught Pokemon, keyed by name. Catching the same Pokemon
    /// again replaces the earlier record.
    pub fn record_catch(&mut self, pokemon: Pokemon) {
        self.caught.insert(pokemon.name.clone(), pokemon);
    }

    /// Looks up a caught Pokemon by name.
    pub fn caught(&self, name: &str) -> Option<&Pokemon> {
        self.caught.get(name)
    }

    /// Names of all caught Pokemon, sorted for stable output.
    pub fn caught_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.caught.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
