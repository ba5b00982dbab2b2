/// Operating state of the plant's control box.
///
/// A left click steps through the running states, a right click switches
/// the box off:
///
/// ```text
/// Off -> HalfHalf -> AllGreen -> AllRed -> HalfHalf -> ...
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ControlBox {
    /// Everything idle, all lamps dark.
    #[default]
    Off,
    /// Mixed operation: one lamp red, one green.
    HalfHalf,
    /// Every unit running normally.
    AllGreen,
    /// Every unit faulted.
    AllRed,
}

/// Colour shown by a single indicator lamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lamp {
    /// Unlit.
    Dark,
    /// Running.
    Green,
    /// Fault.
    Red,
}

/// What the control box front panel shows for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicators {
    /// Whether the panel backlight is on.
    pub panel_lit: bool,
    /// Upper lamp.
    pub upper: Lamp,
    /// Lower lamp.
    pub lower: Lamp,
}

impl ControlBox {
    /// Next state for a left click.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Off | Self::AllRed => Self::HalfHalf,
            Self::HalfHalf => Self::AllGreen,
            Self::AllGreen => Self::AllRed,
        }
    }

    /// Advance to the next state and return it.
    pub fn cycle(&mut self) -> Self {
        *self = self.next();
        log::info!("control box: {}", self.label());
        *self
    }

    /// Switch the box off. Returns `false` if it already was.
    pub fn switch_off(&mut self) -> bool {
        if *self == Self::Off {
            return false;
        }
        *self = Self::Off;
        log::info!("control box: {}", self.label());
        true
    }

    /// Whether the plant is running at all.
    #[must_use]
    pub fn is_on(self) -> bool {
        self != Self::Off
    }

    /// Human-readable state name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::HalfHalf => "half/half",
            Self::AllGreen => "all green",
            Self::AllRed => "all red",
        }
    }

    /// Lamp colours for this state.
    #[must_use]
    pub fn indicators(self) -> Indicators {
        let (upper, lower) = match self {
            Self::Off => (Lamp::Dark, Lamp::Dark),
            Self::HalfHalf => (Lamp::Red, Lamp::Green),
            Self::AllGreen => (Lamp::Green, Lamp::Green),
            Self::AllRed => (Lamp::Red, Lamp::Red),
        };
        Indicators {
            panel_lit: self.is_on(),
            upper,
            lower,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_order() {
        let mut state = ControlBox::default();
        assert_eq!(state.cycle(), ControlBox::HalfHalf);
        assert_eq!(state.cycle(), ControlBox::AllGreen);
        assert_eq!(state.cycle(), ControlBox::AllRed);
        assert_eq!(state.cycle(), ControlBox::HalfHalf);
    }

    #[test]
    fn switch_off_only_when_running() {
        let mut state = ControlBox::Off;
        assert!(!state.switch_off());
        let _ = state.cycle();
        assert!(state.switch_off());
        assert_eq!(state, ControlBox::Off);
        assert_eq!(state.cycle(), ControlBox::HalfHalf);
    }

    #[test]
    fn lamps_follow_state() {
        let off = ControlBox::Off.indicators();
        assert!(!off.panel_lit);
        assert_eq!((off.upper, off.lower), (Lamp::Dark, Lamp::Dark));

        let half = ControlBox::HalfHalf.indicators();
        assert!(half.panel_lit);
        assert_eq!((half.upper, half.lower), (Lamp::Red, Lamp::Green));

        let red = ControlBox::AllRed.indicators();
        assert_eq!((red.upper, red.lower), (Lamp::Red, Lamp::Red));
    }
}
