pub mod decode;
pub mod error;
#[cfg(test)]
pub mod fakes;
pub mod playback;
pub mod player;
pub mod traits;
