//! Browser helpers shared across controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate web-sys glue (storage, element lookup, listeners,
//! timers, the optional icon library) from controller logic.

pub mod dom;
pub mod icons;
pub mod storage;
pub mod timing;
