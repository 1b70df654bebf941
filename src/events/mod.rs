pub mod pointer;
pub mod scroll;

pub use pointer::wire_orbit_drag;
pub use scroll::{wire_page_events, PageWiring};
