//! Members table, split into focused parts:
//! - `columns`: the column records (header, cell renderer, placeholder)
//! - `header`: header row
//! - `row`: row view data and row rendering
//! - `cells`: one renderer per column

pub mod cells;
pub mod columns;
pub mod header;
pub mod row;
