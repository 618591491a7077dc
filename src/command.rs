//! Command surface of the light
//!
//! Commands are produced by the network layer, either applied directly with
//! [`crate::Renderer::apply`] between ticks or queued through a
//! [`CommandQueue`] and drained at the start of the next tick.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::{
    color::{ColourMode, Rgb, rgb_from_u32},
    effect::LightMode,
};

const ROUTE_SET_MODE: &str = "set-mode";
const ROUTE_SET_COLOUR_MODE: &str = "set-colour-mode";
const ROUTE_SET_STATIC_COLOUR: &str = "set-static-colour";
const ROUTE_SET_BRIGHTNESS: &str = "set-brightness";
const ROUTE_ON: &str = "on";
const ROUTE_OFF: &str = "off";

/// Requests that change the light state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Select the active effect
    SetMode(LightMode),
    /// Select the color generator
    SetColourMode(ColourMode),
    /// Set the color used by the static color mode
    SetStaticColour(Rgb),
    /// Fade the output in or out, effect state is kept
    SetPower(bool),
    /// Set the global brightness
    SetBrightness(u8),
    /// A firmware or content update started, effects are suspended
    BeginUpdate,
    /// Update progress in bytes
    UpdateProgress { done: u32, total: u32 },
    /// The update finished or was aborted, effects resume
    EndUpdate,
}

impl Command {
    /// Mode change by name, unknown names select [`LightMode::default`]
    pub fn set_mode(name: &str) -> Self {
        Self::SetMode(LightMode::parse_lenient(name))
    }

    /// Color mode change by name, unknown names select [`ColourMode::default`]
    pub fn set_colour_mode(name: &str) -> Self {
        Self::SetColourMode(ColourMode::parse_lenient(name))
    }

    /// Parse a packed `0xRRGGBB` color sent as decimal text
    pub fn parse_colour(text: &str) -> Option<Rgb> {
        let packed: u32 = text.trim().parse().ok()?;
        if packed > 0x00FF_FFFF {
            return None;
        }
        Some(rgb_from_u32(packed))
    }

    /// Map an API route and its form value onto a command
    ///
    /// Returns `None` for unknown routes and unparsable colors or
    /// brightness values.
    pub fn from_route(route: &str, value: Option<&str>) -> Option<Self> {
        let value = value.unwrap_or_default();
        match route {
            ROUTE_SET_MODE => Some(Self::set_mode(value)),
            ROUTE_SET_COLOUR_MODE => Some(Self::set_colour_mode(value)),
            ROUTE_SET_STATIC_COLOUR => Self::parse_colour(value).map(Self::SetStaticColour),
            ROUTE_SET_BRIGHTNESS => value.trim().parse().ok().map(Self::SetBrightness),
            ROUTE_ON => Some(Self::SetPower(true)),
            ROUTE_OFF => Some(Self::SetPower(false)),
            _ => None,
        }
    }
}

/// Snapshot of the light state reported to the network layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub power: bool,
    pub mode: LightMode,
    pub colour_mode: ColourMode,
    pub brightness: u8,
    pub static_colour: Rgb,
    pub updating: bool,
}

/// Error returned when the queue has no free slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull(pub Command);

/// Bounded command queue shared between contexts
///
/// Guarded by a critical section, so it can be filled from an interrupt or
/// another executor while the control loop drains it.
pub struct CommandQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<Command, SIZE>>>,
}

impl<const SIZE: usize> CommandQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Enqueue a command
    pub fn try_send(&self, command: Command) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            self.inner
                .borrow(cs)
                .borrow_mut()
                .push_back(command)
                .map_err(QueueFull)
        })
    }

    /// Dequeue the oldest command
    pub fn try_receive(&self) -> Option<Command> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    pub fn is_empty(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().is_empty())
    }
}

impl<const SIZE: usize> Default for CommandQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}
