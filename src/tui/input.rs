use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Pan the canvas, or scroll the active section.
    Move(Direction),
    NextSection,
    PrevSection,
    JumpSection(usize),
    ZoomIn,
    ZoomOut,
    Fit,
    Refresh,
    ToggleStrategyView,
    ToggleHelp,
    Quit,
    Cancel,
    Noop,
}

pub fn action_for_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Up => Action::Move(Direction::Up),
        KeyCode::Down => Action::Move(Direction::Down),
        KeyCode::Left => Action::Move(Direction::Left),
        KeyCode::Right => Action::Move(Direction::Right),
        KeyCode::Tab => Action::NextSection,
        KeyCode::BackTab => Action::PrevSection,
        KeyCode::Esc => Action::Cancel,
        KeyCode::Char(c @ '1'..='7') => Action::JumpSection(c as usize - '1' as usize),
        KeyCode::Char('+') => Action::ZoomIn,
        KeyCode::Char('=') if key.modifiers.contains(KeyModifiers::SHIFT) => Action::ZoomIn,
        KeyCode::Char('-') => Action::ZoomOut,
        KeyCode::Char('f') => Action::Fit,
        KeyCode::Char('r') => Action::Refresh,
        KeyCode::Char('v') => Action::ToggleStrategyView,
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('h') => Action::Move(Direction::Left),
        KeyCode::Char('j') => Action::Move(Direction::Down),
        KeyCode::Char('k') => Action::Move(Direction::Up),
        KeyCode::Char('l') => Action::Move(Direction::Right),
        _ => Action::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn arrows_and_hjkl_agree() {
        assert_eq!(
            action_for_key(key(KeyCode::Up)),
            action_for_key(key(KeyCode::Char('k')))
        );
        assert_eq!(
            action_for_key(key(KeyCode::Left)),
            action_for_key(key(KeyCode::Char('h')))
        );
    }

    #[test]
    fn digits_jump_to_sections() {
        assert_eq!(action_for_key(key(KeyCode::Char('1'))), Action::JumpSection(0));
        assert_eq!(action_for_key(key(KeyCode::Char('7'))), Action::JumpSection(6));
        assert_eq!(action_for_key(key(KeyCode::Char('8'))), Action::Noop);
    }

    #[test]
    fn canvas_commands_map() {
        assert_eq!(action_for_key(key(KeyCode::Char('+'))), Action::ZoomIn);
        assert_eq!(action_for_key(key(KeyCode::Char('-'))), Action::ZoomOut);
        assert_eq!(action_for_key(key(KeyCode::Char('f'))), Action::Fit);
        assert_eq!(action_for_key(key(KeyCode::Char('v'))), Action::ToggleStrategyView);
    }

    #[test]
    fn quit_and_help() {
        assert_eq!(action_for_key(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(action_for_key(key(KeyCode::Char('?'))), Action::ToggleHelp);
        assert_eq!(action_for_key(key(KeyCode::Tab)), Action::NextSection);
        assert_eq!(action_for_key(key(KeyCode::BackTab)), Action::PrevSection);
    }
}
