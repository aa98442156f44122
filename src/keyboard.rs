use rand::Rng;

use crate::cursor::Cursor;
use crate::error::ContainerError;
use crate::input::{InputMode, InputStrategy};

/// State shared by every keyboard: the current input strategy (if any)
/// and whether the unit works at all.
pub struct KeyboardCore {
    strategy: Option<Box<dyn InputStrategy>>,
    functional: bool,
}

impl KeyboardCore {
    pub fn new(functional: bool) -> Self {
        KeyboardCore {
            strategy: None,
            functional,
        }
    }

    pub fn is_functional(&self) -> bool {
        self.functional
    }

    pub fn strategy(&self) -> Option<&dyn InputStrategy> {
        self.strategy.as_deref()
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn InputStrategy>) {
        self.strategy = Some(strategy);
    }

    pub fn clear_strategy(&mut self) {
        self.strategy = None;
    }
}

/// A simulated keyboard.
///
/// `use_keyboard` is the template: it fixes the order of the steps
/// (type, diagnosis, preparation, input) while each concrete keyboard
/// supplies its own type name, preparation routine, and smell.
pub trait Keyboard {
    fn kind_name(&self) -> &'static str;
    fn prepare(&self) -> &'static str;
    fn smell(&self) -> &'static str;
    fn core(&self) -> &KeyboardCore;
    fn core_mut(&mut self) -> &mut KeyboardCore;

    fn diagnose(&self) -> &'static str {
        if self.core().is_functional() {
            "Working"
        } else {
            "Broken"
        }
    }

    fn use_keyboard(&self) -> String {
        let input = match self.core().strategy() {
            Some(strategy) => strategy.input(),
            None => "No input method defined!",
        };
        format!(
            "{} : {} : {} : {}",
            self.kind_name(),
            self.diagnose(),
            self.prepare(),
            input
        )
    }
}

pub struct MechanicalKeyboard {
    core: KeyboardCore,
}

impl MechanicalKeyboard {
    pub fn new(functional: bool) -> Self {
        let mut core = KeyboardCore::new(functional);
        core.set_strategy(InputMode::Click.strategy());
        MechanicalKeyboard { core }
    }
}

impl Keyboard for MechanicalKeyboard {
    fn kind_name(&self) -> &'static str {
        "Mechanical Keyboard"
    }

    fn prepare(&self) -> &'static str {
        "Lubricate switches"
    }

    fn smell(&self) -> &'static str {
        "Smells like metal and plastic."
    }

    fn core(&self) -> &KeyboardCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut KeyboardCore {
        &mut self.core
    }
}

pub struct MembraneKeyboard {
    core: KeyboardCore,
}

impl MembraneKeyboard {
    pub fn new(functional: bool) -> Self {
        let mut core = KeyboardCore::new(functional);
        core.set_strategy(InputMode::Silent.strategy());
        MembraneKeyboard { core }
    }
}

impl Keyboard for MembraneKeyboard {
    fn kind_name(&self) -> &'static str {
        "Membrane Keyboard"
    }

    fn prepare(&self) -> &'static str {
        "Check rubber domes"
    }

    fn smell(&self) -> &'static str {
        "Smells like rubber."
    }

    fn core(&self) -> &KeyboardCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut KeyboardCore {
        &mut self.core
    }
}

pub struct OpticalKeyboard {
    core: KeyboardCore,
}

impl OpticalKeyboard {
    pub fn new(functional: bool) -> Self {
        let mut core = KeyboardCore::new(functional);
        core.set_strategy(InputMode::Touch.strategy());
        OpticalKeyboard { core }
    }
}

impl Keyboard for OpticalKeyboard {
    fn kind_name(&self) -> &'static str {
        "Optical Keyboard"
    }

    fn prepare(&self) -> &'static str {
        "Test infrared sensors"
    }

    fn smell(&self) -> &'static str {
        "Smells like innovation."
    }

    fn core(&self) -> &KeyboardCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut KeyboardCore {
        &mut self.core
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardKind {
    Mechanical,
    Membrane,
    Optical,
}

impl KeyboardKind {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        match rng.gen_range(0..3) {
            0 => KeyboardKind::Mechanical,
            1 => KeyboardKind::Membrane,
            _ => KeyboardKind::Optical,
        }
    }

    /// Factory: builds a keyboard of this kind with a coin-flipped
    /// functional state.
    pub fn build<R: Rng>(self, rng: &mut R) -> Box<dyn Keyboard> {
        let functional = rng.gen_bool(0.5);
        match self {
            KeyboardKind::Mechanical => Box::new(MechanicalKeyboard::new(functional)),
            KeyboardKind::Membrane => Box::new(MembraneKeyboard::new(functional)),
            KeyboardKind::Optical => Box::new(OpticalKeyboard::new(functional)),
        }
    }
}

/// Composes the use line of every keyboard the cursor yields, in
/// traversal order. Drives the traversal through the [`Cursor`]
/// contract alone.
pub fn use_lines(
    cursor: &mut dyn Cursor<Item = Box<dyn Keyboard>>,
) -> Result<Vec<String>, ContainerError> {
    let mut lines = Vec::new();
    cursor.first();
    while !cursor.is_done() {
        lines.push(cursor.current()?.use_keyboard());
        cursor.next();
    }
    Ok(lines)
}

/// Prints the use line of every keyboard the cursor yields.
pub fn use_all(cursor: &mut dyn Cursor<Item = Box<dyn Keyboard>>) -> Result<(), ContainerError> {
    for line in use_lines(cursor)? {
        println!("{}", line);
    }
    Ok(())
}
