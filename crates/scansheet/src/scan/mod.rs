//! Decode-stream collaborator for code capture devices.

mod stream;

pub use stream::{DecodeSource, LineSource, Scanner};
