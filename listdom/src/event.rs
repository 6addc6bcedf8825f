/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Button pressed
    Press,
    /// Pointer moved, with or without a button held
    Move,
    /// Button released
    Release,
}

/// Pointer event in cell coordinates, optionally targeted at an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub target: Option<String>,
    pub x: u16,
    pub y: u16,
    pub button: Option<MouseButton>,
    pub modifiers: Modifiers,
    default_prevented: bool,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, x: u16, y: u16) -> Self {
        let button = match kind {
            PointerKind::Move => None,
            PointerKind::Press | PointerKind::Release => Some(MouseButton::Left),
        };
        Self {
            kind,
            target: None,
            x,
            y,
            button,
            modifiers: Modifiers::default(),
            default_prevented: false,
        }
    }

    pub fn press(x: u16, y: u16) -> Self {
        Self::new(PointerKind::Press, x, y)
    }

    pub fn moved(x: u16, y: u16) -> Self {
        Self::new(PointerKind::Move, x, y)
    }

    pub fn release(x: u16, y: u16) -> Self {
        Self::new(PointerKind::Release, x, y)
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn button(mut self, button: MouseButton) -> Self {
        self.button = Some(button);
        self
    }

    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Ask the host to skip its own handling (text selection, native drag).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Convert a raw crossterm mouse event. Scroll events have no pointer
    /// phase and yield `None`.
    pub fn from_crossterm(event: crossterm::event::MouseEvent) -> Option<Self> {
        use crossterm::event::MouseEventKind;

        let (kind, button) = match event.kind {
            MouseEventKind::Down(b) => (PointerKind::Press, Some(b.into())),
            MouseEventKind::Drag(b) => (PointerKind::Move, Some(b.into())),
            MouseEventKind::Moved => (PointerKind::Move, None),
            MouseEventKind::Up(b) => (PointerKind::Release, Some(b.into())),
            _ => return None,
        };

        Some(Self {
            kind,
            target: None,
            x: event.column,
            y: event.row,
            button,
            modifiers: event.modifiers.into(),
            default_prevented: false,
        })
    }
}

/// Key modifiers held during a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn meta() -> Self {
        Self {
            meta: true,
            ..Default::default()
        }
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    /// Ctrl on most platforms, Cmd/Super on macOS.
    pub fn secondary_select(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
            meta: mods.intersects(KeyModifiers::SUPER | KeyModifiers::META),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
