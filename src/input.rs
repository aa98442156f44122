/// The ways a simulated keyboard can register keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Click,
    Touch,
    Silent,
}

/// Strategy for producing a keystroke, swappable at runtime without the
/// keyboard knowing which concrete behavior it holds.
pub trait InputStrategy {
    fn input(&self) -> &'static str;
}

pub struct ClickInput;

impl InputStrategy for ClickInput {
    fn input(&self) -> &'static str {
        "Clicking keys..."
    }
}

pub struct TouchInput;

impl InputStrategy for TouchInput {
    fn input(&self) -> &'static str {
        "Touching keys..."
    }
}

pub struct SilentInput;

impl InputStrategy for SilentInput {
    fn input(&self) -> &'static str {
        "Typing silently..."
    }
}

impl InputMode {
    /// Factory for the concrete strategy behind each mode.
    pub fn strategy(self) -> Box<dyn InputStrategy> {
        match self {
            InputMode::Click => Box::new(ClickInput),
            InputMode::Touch => Box::new(TouchInput),
            InputMode::Silent => Box::new(SilentInput),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_strategy_phrase() {
        assert_eq!(ClickInput.input(), "Clicking keys...");
        assert_eq!(TouchInput.input(), "Touching keys...");
        assert_eq!(SilentInput.input(), "Typing silently...");
    }

    #[test]
    fn test_factory_wires_mode_to_phrase() {
        assert_eq!(InputMode::Click.strategy().input(), "Clicking keys...");
        assert_eq!(InputMode::Touch.strategy().input(), "Touching keys...");
        assert_eq!(InputMode::Silent.strategy().input(), "Typing silently...");
    }
}
