//! Control loop pacing
//!
//! One iteration polls the service layer to completion, renders exactly one
//! tick and flushes the frame once. The caller sleeps between iterations.

use embassy_time::{Duration, Instant};

use crate::command::CommandQueue;
use crate::noise::NoiseSource;
use crate::random::RandomSource;
use crate::{OutputDriver, Renderer};

/// Default target frame rate
pub const DEFAULT_FPS: u32 = 60;

/// Default frame duration based on target FPS
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Work run to completion before each tick, typically the network stack
pub trait Service {
    fn poll<R: RandomSource, N: NoiseSource>(&mut self, renderer: &mut Renderer<R, N>);
}

impl Service for () {
    fn poll<R: RandomSource, N: NoiseSource>(&mut self, _renderer: &mut Renderer<R, N>) {}
}

impl<const SIZE: usize> Service for &CommandQueue<SIZE> {
    fn poll<R: RandomSource, N: NoiseSource>(&mut self, renderer: &mut Renderer<R, N>) {
        renderer.drain(*self);
    }
}

/// Result of a frame tick
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame
    pub next_deadline: Instant,
    /// How long to wait until the next frame (zero if behind schedule)
    pub sleep_duration: Duration,
}

/// Frame scheduler driving the renderer and the output driver
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(renderer, driver);
///
/// loop {
///     let result = scheduler.tick_with(Instant::now(), &mut network);
///     sleep(result.sleep_duration);
/// }
/// ```
pub struct FrameScheduler<O: OutputDriver, R: RandomSource, N: NoiseSource> {
    output: O,
    renderer: Renderer<R, N>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<O: OutputDriver, R: RandomSource, N: NoiseSource> FrameScheduler<O, R, N> {
    pub fn new(renderer: Renderer<R, N>, driver: O) -> Self {
        Self::with_frame_duration(renderer, driver, DEFAULT_FRAME_DURATION)
    }

    pub fn with_frame_duration(
        renderer: Renderer<R, N>,
        driver: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            renderer,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Render and flush one frame without a service layer
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        self.tick_with(now, &mut ())
    }

    /// Poll `service`, render one frame and flush it
    pub fn tick_with<S: Service>(&mut self, now: Instant, service: &mut S) -> FrameResult {
        // More than two frames behind: drop the backlog instead of bursting
        let max_drift = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift {
            self.next_frame = now;
        }

        service.poll(&mut self.renderer);

        let frame = self.renderer.render(now);
        self.output.flush(frame);

        self.next_frame += self.frame_duration;
        let sleep_duration = Duration::from_millis(
            self.next_frame.as_millis().saturating_sub(now.as_millis()),
        );

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    pub fn renderer(&self) -> &Renderer<R, N> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut Renderer<R, N> {
        &mut self.renderer
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}
