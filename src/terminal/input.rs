//! Translation of crossterm events into application events.

use crate::app::{Event, KeyCode, KeyPress, MouseInput, Wheel};
use crossterm::event::{
    Event as TermEvent, KeyCode as TermKey, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
    MouseEventKind,
};

/// Maps a terminal event to an application event.
///
/// Key releases, unmapped keys and mouse activity other than the wheel are
/// dropped.
#[must_use]
pub fn translate(event: &TermEvent) -> Option<Event> {
    match event {
        TermEvent::Key(key) => translate_key(key).map(Event::Key),
        TermEvent::Mouse(mouse) => translate_mouse(mouse).map(Event::Mouse),
        TermEvent::Resize(width, height) => Some(Event::Resize {
            width: usize::from(*width),
            height: usize::from(*height),
        }),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<KeyPress> {
    if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return None;
    }

    let code = match key.code {
        TermKey::Char(c) => KeyCode::Char(c),
        TermKey::Enter => KeyCode::Enter,
        TermKey::Esc => KeyCode::Esc,
        TermKey::Tab => KeyCode::Tab,
        TermKey::BackTab => KeyCode::BackTab,
        TermKey::Backspace => KeyCode::Backspace,
        TermKey::Delete => KeyCode::Delete,
        TermKey::Left => KeyCode::Left,
        TermKey::Right => KeyCode::Right,
        TermKey::Up => KeyCode::Up,
        TermKey::Down => KeyCode::Down,
        TermKey::Home => KeyCode::Home,
        TermKey::End => KeyCode::End,
        TermKey::PageUp => KeyCode::PageUp,
        TermKey::PageDown => KeyCode::PageDown,
        _ => return None,
    };

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    Some(KeyPress {
        code: match code {
            KeyCode::Char(c) if ctrl => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        },
        ctrl,
    })
}

fn translate_mouse(mouse: &MouseEvent) -> Option<MouseInput> {
    let wheel = match mouse.kind {
        MouseEventKind::ScrollUp => Wheel::Up,
        MouseEventKind::ScrollDown => Wheel::Down,
        _ => return None,
    };

    Some(MouseInput {
        wheel,
        column: usize::from(mouse.column),
        row: usize::from(mouse.row),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: TermKey, modifiers: KeyModifiers, kind: KeyEventKind) -> TermEvent {
        TermEvent::Key(KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn control_chords_are_normalized() {
        let event = key(TermKey::Char('N'), KeyModifiers::CONTROL | KeyModifiers::SHIFT, KeyEventKind::Press);
        assert_eq!(translate(&event), Some(Event::Key(KeyPress::ctrl('n'))));
    }

    #[test]
    fn shifted_letters_stay_typed() {
        let event = key(TermKey::Char('G'), KeyModifiers::SHIFT, KeyEventKind::Press);
        assert_eq!(translate(&event), Some(Event::Key(KeyPress::char('G'))));
    }

    #[test]
    fn releases_are_ignored() {
        let event = key(TermKey::Enter, KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(translate(&event), None);
    }

    #[test]
    fn repeats_count_as_presses() {
        let event = key(TermKey::Down, KeyModifiers::NONE, KeyEventKind::Repeat);
        assert_eq!(translate(&event), Some(Event::Key(KeyPress::plain(KeyCode::Down))));
    }

    #[test]
    fn wheel_becomes_mouse_input() {
        let event = TermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 40,
            row: 7,
            modifiers: KeyModifiers::NONE,
        });

        assert_eq!(
            translate(&event),
            Some(Event::Mouse(MouseInput {
                wheel: Wheel::Down,
                column: 40,
                row: 7,
            }))
        );
    }

    #[test]
    fn clicks_are_dropped() {
        let event = TermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(&event), None);
    }

    #[test]
    fn resize_carries_dimensions() {
        assert_eq!(
            translate(&TermEvent::Resize(120, 40)),
            Some(Event::Resize {
                width: 120,
                height: 40
            })
        );
    }
}
