//! Pure state machines behind each page feature.
//!
//! DESIGN
//! ======
//! Nothing in here touches the DOM. Controllers feed these types with the
//! values they read from events and apply the returned state to elements, so
//! every rule can be exercised by plain unit tests.

pub mod carousel;
pub mod hero;
pub mod lightbox;
pub mod nav;
pub mod registration;
pub mod saved;
pub mod scroll;
pub mod theme;
