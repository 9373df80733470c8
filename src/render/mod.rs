//! Server-rendered HTML pages.
//!
//! Pure functions from (title, state, filters) to HTML strings. No I/O,
//! no access to shared state; handlers take a snapshot and pass it in.

pub mod detail;
pub mod escape;
pub mod layout;
pub mod list;

pub use detail::{detail_page, not_found_page};
pub use escape::escape;
pub use list::list_page;
