/// Toolkit-independent input event, as delivered to the controller.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown,
    PointerUp,
    /// Pointer motion in pixels since the previous event.
    PointerDrag { dx: f64, dy: f64 },
    ScrollUp,
    ScrollDown,
    Char(char),
    Backspace,
    Confirm,
    Quit,
}

/// Named commands, available while navigating.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    EnterCoordinate,
    Save,
    CommitRoute,
    MarkTree,
    MarkGrass,
    MarkBuilding,
}

/// Character bindings for [`Command`]s. Matching ignores ASCII case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub enter_coordinate: char,
    pub save: char,
    pub commit_route: char,
    pub mark_tree: char,
    pub mark_grass: char,
    pub mark_building: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            enter_coordinate: 'f',
            save: 's',
            commit_route: 'r',
            mark_tree: 't',
            mark_grass: 'g',
            mark_building: 'b',
        }
    }
}

impl KeyBindings {
    pub fn command_for(&self, key: char) -> Option<Command> {
        let bindings = [
            (self.enter_coordinate, Command::EnterCoordinate),
            (self.save, Command::Save),
            (self.commit_route, Command::CommitRoute),
            (self.mark_tree, Command::MarkTree),
            (self.mark_grass, Command::MarkGrass),
            (self.mark_building, Command::MarkBuilding),
        ];
        bindings
            .into_iter()
            .find(|(bound, _)| bound.eq_ignore_ascii_case(&key))
            .map(|(_, command)| command)
    }
}
