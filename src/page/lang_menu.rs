// SPDX-License-Identifier: MPL-2.0
//! Language-selection dropdown state machine.
//!
//! The globe icon toggles the menu; clicks outside both the icon and the
//! menu close it. Selecting an option emits the chosen code to the parent,
//! which switches the language and closes the menu once the switch is
//! accepted.

#[derive(Debug, Default)]
pub struct State {
    open: bool,
}

impl State {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Toggle,
    DocumentClicked {
        inside_menu: bool,
        inside_globe: bool,
    },
    /// An option was clicked; carries its language code.
    Select(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Selected(String),
}

pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::Toggle => {
            state.open = !state.open;
            Event::None
        }
        Message::DocumentClicked {
            inside_menu,
            inside_globe,
        } => {
            if !inside_menu && !inside_globe {
                state.open = false;
            }
            Event::None
        }
        Message::Select(code) => Event::Selected(code),
    }
}
