#![no_std]

pub mod color;
pub mod command;
pub mod effect;
pub mod filter;
pub mod frame_scheduler;
pub mod graph;
pub mod math8;
pub mod noise;
pub mod random;
pub mod renderer;
pub mod startup;
pub mod topology;
pub mod transition;

pub use command::{Command, CommandQueue, QueueFull, Status};
pub use effect::{ChaserConfig, LightMode};
pub use filter::FilterProcessorConfig;
pub use frame_scheduler::{FrameResult, FrameScheduler, Service};
pub use graph::{Direction, Junction};
pub use noise::{NoiseSource, ValueNoise};
pub use random::{RandomSource, XorShift};
pub use renderer::{Renderer, RendererConfig, UpdateState};
pub use startup::{ConnectivityWait, StartupPolicy, StartupStep};
pub use topology::LED_COUNT;

pub use color::{ColourMode, Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// One color per LED in wiring order
pub type FrameBuffer = [Rgb; LED_COUNT];

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip, blocking until they are transmitted
    fn flush(&mut self, colors: &[Rgb]);
}
