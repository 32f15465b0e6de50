//! Board State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity.

use reactive_stores::Store;

use crate::present::TaskRow;

/// What the board currently shows
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Rows of the last fetch that was allowed to render
    pub rows: Vec<TaskRow>,
    /// Bumped on every applied fetch so the list is rebuilt, not diffed
    pub generation: u64,
    /// Message for the status banner
    pub status: Option<String>,
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;
