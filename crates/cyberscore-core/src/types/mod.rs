//! Types shared by the scorer and its collaborators.

mod device;
mod score;
mod signal;
mod website;

pub use device::*;
pub use score::*;
pub use signal::*;
pub use website::*;
