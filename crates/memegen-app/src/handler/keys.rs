//! Key event handlers for the focused region

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;
use memegen_core::{FormFocus, MAX_MEMES, MIN_MEMES};

/// Convert key events to messages based on the focused region
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Bindings that work everywhere
    match key {
        InputKey::CharCtrl('c') | InputKey::Esc => return Some(Message::Quit),
        InputKey::CharCtrl('t') | InputKey::F(2) => return Some(Message::ToggleDarkMode),
        InputKey::Tab => return Some(Message::FocusNext),
        InputKey::BackTab => return Some(Message::FocusPrev),
        _ => {}
    }

    // Outside the URL field plain letters are free for shortcuts
    if !state.focus.is_text_input() {
        match key {
            InputKey::Char('q') => return Some(Message::Quit),
            InputKey::Char('t') => return Some(Message::ToggleDarkMode),
            _ => {}
        }
    }

    match state.focus {
        FormFocus::Url => handle_key_url(state, key),
        FormFocus::Count => handle_key_count(state, key),
        FormFocus::Submit => handle_key_submit(state, key),
        FormFocus::Results => handle_key_results(state, key),
    }
}

/// `Submit` is never emitted while a request is outstanding
fn submit_unless_loading(state: &AppState) -> Option<Message> {
    if state.loading {
        None
    } else {
        Some(Message::Submit)
    }
}

fn handle_key_url(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => {
            let mut url = state.url.clone();
            url.push(c);
            Some(Message::UrlChanged(url))
        }
        InputKey::Backspace => {
            if state.url.is_empty() {
                return None;
            }
            let mut url = state.url.clone();
            url.pop();
            Some(Message::UrlChanged(url))
        }
        InputKey::CharCtrl('u') => Some(Message::UrlChanged(String::new())),
        InputKey::Enter => submit_unless_loading(state),
        InputKey::Down => Some(Message::FocusNext),
        _ => None,
    }
}

fn handle_key_count(state: &AppState, key: InputKey) -> Option<Message> {
    let step = |delta: i64| {
        let next = i64::from(state.count) + delta;
        Some(Message::CountChanged(next.to_string()))
    };

    match key {
        InputKey::Up | InputKey::Right | InputKey::Char('+') => step(1),
        InputKey::Down | InputKey::Left | InputKey::Char('-') => step(-1),
        InputKey::Char(c) if c.is_ascii_digit() => Some(Message::CountChanged(c.to_string())),
        InputKey::Home => Some(Message::CountChanged(MIN_MEMES.to_string())),
        InputKey::End => Some(Message::CountChanged(MAX_MEMES.to_string())),
        InputKey::Enter => submit_unless_loading(state),
        _ => None,
    }
}

fn handle_key_submit(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char(' ') => submit_unless_loading(state),
        InputKey::Up => Some(Message::FocusPrev),
        InputKey::Down => Some(Message::FocusNext),
        _ => None,
    }
}

fn handle_key_results(state: &AppState, key: InputKey) -> Option<Message> {
    if state.memes.is_empty() {
        return None;
    }

    match key {
        InputKey::Left | InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevMeme),
        InputKey::Right | InputKey::Down | InputKey::Char('j') => Some(Message::SelectNextMeme),
        InputKey::Enter | InputKey::Char('d') => Some(Message::DownloadMeme {
            index: state.selected_meme,
        }),
        _ => None,
    }
}
