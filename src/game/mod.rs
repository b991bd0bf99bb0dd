//! Round engines and the building blocks they share

pub mod chameleon;
pub mod countdown;
pub mod cycle;
pub mod rotation;
pub mod slideshow;

pub use chameleon::ChameleonEngine;
pub use countdown::{Countdown, CountdownEvent};
pub use cycle::ShuffledCycle;
pub use rotation::{compute_eligible, Rotation};
pub use slideshow::{SlideshowEngine, SlideshowOptions};
