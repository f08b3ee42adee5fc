//! Animation module - time keeping for the epicycle animation

mod clock;

pub use clock::AnimationClock;
