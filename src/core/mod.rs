pub mod animator;
pub mod fog;
pub mod glow;
pub mod noise;
pub mod particles;
pub mod surface;

pub use animator::*;
pub use fog::*;
pub use glow::*;
pub use noise::*;
pub use particles::*;
pub use surface::*;
