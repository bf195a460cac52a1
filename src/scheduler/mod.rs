pub mod frame;
pub mod interval;
pub mod listener;
pub mod registry;

pub use frame::{Animate, FrameLoop};
pub use interval::IntervalTask;
pub use listener::{Listener, ObserverGuard};
pub use registry::{EffectRegistry, Handle};
