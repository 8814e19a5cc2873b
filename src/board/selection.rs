//! The three cascading selectors: group, screen and size.

/// Which selector a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum SelectorKind {
    Group,
    Screen,
    Size,
}

impl SelectorKind {
    /// Text of the "nothing selected" option.
    pub fn placeholder(&self) -> &'static str {
        match self {
            SelectorKind::Group => "Select Group",
            SelectorKind::Screen => "Select Screen",
            SelectorKind::Size => "Select Size",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            SelectorKind::Group => SelectorKind::Screen,
            SelectorKind::Screen => SelectorKind::Size,
            SelectorKind::Size => SelectorKind::Group,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            SelectorKind::Group => SelectorKind::Size,
            SelectorKind::Screen => SelectorKind::Group,
            SelectorKind::Size => SelectorKind::Screen,
        }
    }
}

/// A dropdown-like choice between a placeholder and a list of numeric options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    kind: SelectorKind,
    options: Vec<usize>,
    selected: Option<usize>,
}

impl Selector {
    pub fn new(kind: SelectorKind) -> Self {
        Self {
            kind,
            options: Vec::new(),
            selected: None,
        }
    }

    pub fn options(&self) -> &[usize] {
        &self.options
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Replaces the options and falls back to the placeholder.
    pub fn replace_options(&mut self, options: Vec<usize>) {
        self.options = options;
        self.selected = None;
    }

    pub fn clear(&mut self) {
        self.replace_options(Vec::new());
    }

    /// Selects `value` if it is one of the options. Unknown values leave the
    /// selection untouched.
    pub fn select(&mut self, value: usize) -> bool {
        if self.options.contains(&value) {
            self.selected = Some(value);
            true
        } else {
            false
        }
    }

    /// Moves `delta` positions through placeholder + options, wrapping around.
    /// Returns whether the selection changed.
    pub fn step(&mut self, delta: isize) -> bool {
        let slots = self.options.len() as isize + 1;
        let current = self
            .selected
            .and_then(|value| self.options.iter().position(|o| *o == value))
            .map_or(0, |index| index as isize + 1);
        let target = (current + delta).rem_euclid(slots);
        let next = if target == 0 {
            None
        } else {
            self.options.get(target as usize - 1).copied()
        };
        let changed = next != self.selected;
        self.selected = next;
        changed
    }

    /// Display text for an option value.
    pub fn option_label(&self, value: usize) -> String {
        match self.kind {
            SelectorKind::Size => format!("1 - {}", value),
            _ => value.to_string(),
        }
    }

    /// Display text for the current selection, or the placeholder.
    pub fn current_label(&self) -> String {
        match self.selected {
            Some(value) => self.option_label(value),
            None => self.kind.placeholder().to_string(),
        }
    }
}
