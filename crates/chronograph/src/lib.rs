#![doc(html_no_source)]

mod chronograph;
pub use chronograph::Chronograph;

// Reexport all crates
pub use chronograph_time;
