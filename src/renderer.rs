use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::FrameBuffer;
use crate::color::{BLACK, ColourMode, ColourSource, Rgb};
use crate::command::{Command, CommandQueue, Status};
use crate::effect::{ChaserConfig, Effects, LightMode, Tick};
use crate::filter::{FilterProcessor, FilterProcessorConfig};
use crate::noise::NoiseSource;
use crate::random::RandomSource;
use crate::topology::LED_COUNT;

/// Color of the update progress bar
const UPDATE_INDICATOR: Rgb = Rgb { r: 0, g: 0, b: 64 };

/// Default global brightness of the rig
pub const DEFAULT_BRIGHTNESS: u8 = 15;

/// Configuration for the renderer
#[derive(Debug, Clone)]
pub struct RendererConfig {
    pub mode: LightMode,
    pub colour_mode: ColourMode,
    pub static_colour: Rgb,
    pub power: bool,
    pub filters: FilterProcessorConfig,
    pub chaser: ChaserConfig,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            mode: LightMode::default(),
            colour_mode: ColourMode::default(),
            static_colour: Rgb { r: 63, g: 0, b: 0 },
            power: true,
            filters: FilterProcessorConfig {
                brightness: DEFAULT_BRIGHTNESS,
                color_correction: Rgb {
                    r: 255,
                    g: 255,
                    b: 255,
                },
                fade: Duration::from_millis(300),
            },
            chaser: ChaserConfig::default(),
        }
    }
}

/// Firmware or content update state, polled every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateState {
    #[default]
    Idle,
    /// Update running, progress 0-255
    Active { progress: u8 },
}

/// Render context - owns the frame buffer and all animation state
///
/// Only the control loop mutates it: commands are applied between ticks and
/// take effect on the next [`Renderer::render`].
pub struct Renderer<R: RandomSource, N: NoiseSource> {
    // External dependencies
    random: R,
    noise: N,

    // Light state
    mode: LightMode,
    colour: ColourSource,
    update: UpdateState,
    last_tick: Instant,

    // Animation state
    effects: Effects,
    frame_buffer: FrameBuffer,
    output: FrameBuffer,

    filters: FilterProcessor,
}

impl<R: RandomSource, N: NoiseSource> Renderer<R, N> {
    pub fn new(config: &RendererConfig, random: R, noise: N) -> Self {
        Self {
            random,
            noise,
            mode: config.mode,
            colour: ColourSource::new(config.colour_mode, config.static_colour),
            update: UpdateState::Idle,
            last_tick: Instant::from_millis(0),
            effects: Effects::new(&config.chaser),
            frame_buffer: [BLACK; LED_COUNT],
            output: [BLACK; LED_COUNT],
            filters: FilterProcessor::new(&config.filters, config.power),
        }
    }

    /// Compute one tick and return the filtered frame ready to flush
    ///
    /// While an update is active no effect runs; the output shows a progress
    /// bar and the frame buffer is left untouched.
    pub fn render(&mut self, now: Instant) -> &FrameBuffer {
        self.last_tick = now;
        self.filters.tick(now);

        if let UpdateState::Active { progress } = self.update {
            Self::draw_progress(&mut self.output, progress);
            return &self.output;
        }

        let mut tick = Tick {
            now,
            colour: self.colour.current(now, &self.noise),
            random: &mut self.random,
            noise: &self.noise,
        };
        self.effects.render(self.mode, &mut tick, &mut self.frame_buffer);

        self.output = self.frame_buffer;
        self.filters.apply(&mut self.output);
        &self.output
    }

    /// Apply a command right away
    pub fn apply(&mut self, command: Command) {
        let now = self.last_tick;
        match command {
            Command::SetMode(mode) => {
                #[cfg(feature = "esp32-log")]
                println!("renderer: mode {}", mode.as_str());
                self.mode = mode;
            }
            Command::SetColourMode(mode) => {
                #[cfg(feature = "esp32-log")]
                println!("renderer: colour mode {}", mode.as_str());
                self.colour.mode = mode;
            }
            Command::SetStaticColour(colour) => {
                self.colour.static_colour = colour;
            }
            Command::SetPower(power) => {
                if power != self.filters.brightness.power() {
                    self.filters.brightness.set_power(power, now);
                }
            }
            Command::SetBrightness(level) => {
                self.filters.brightness.set_level(level, now);
            }
            Command::BeginUpdate => {
                #[cfg(feature = "esp32-log")]
                println!("update: started");
                self.update = UpdateState::Active { progress: 0 };
            }
            Command::UpdateProgress { done, total } => {
                // Progress without a begin still suspends effects
                let progress = progress_of(done, total);
                #[cfg(feature = "esp32-log")]
                println!("update: progress {}/{}", done, total);
                self.update = UpdateState::Active { progress };
            }
            Command::EndUpdate => {
                #[cfg(feature = "esp32-log")]
                println!("update: finished");
                self.update = UpdateState::Idle;
            }
        }
    }

    /// Apply every command waiting in the queue
    pub fn drain<const SIZE: usize>(&mut self, queue: &CommandQueue<SIZE>) {
        while let Some(command) = queue.try_receive() {
            self.apply(command);
        }
    }

    /// Current light state
    pub fn status(&self) -> Status {
        Status {
            power: self.filters.brightness.power(),
            mode: self.mode,
            colour_mode: self.colour.mode,
            brightness: self.filters.brightness.level(),
            static_colour: self.colour.static_colour,
            updating: self.update != UpdateState::Idle,
        }
    }

    pub const fn update_state(&self) -> UpdateState {
        self.update
    }

    /// Effect state before output filters
    pub const fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame_buffer
    }

    pub const fn effects(&self) -> &Effects {
        &self.effects
    }

    fn draw_progress(output: &mut FrameBuffer, progress: u8) {
        let lit = usize::from(progress) * LED_COUNT / 255;
        for (i, led) in output.iter_mut().enumerate() {
            *led = if i < lit { UPDATE_INDICATOR } else { BLACK };
        }
    }
}

/// Scale `done` of `total` onto 0-255
#[allow(clippy::cast_possible_truncation)]
fn progress_of(done: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    (u64::from(done.min(total)) * 255 / u64::from(total)) as u8
}
