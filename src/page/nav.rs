// SPDX-License-Identifier: MPL-2.0
//! Mobile navigation state machine.
//!
//! Models the hamburger menu: toggling, closing on outside clicks, and
//! closing when the viewport is resized past the desktop breakpoint. The
//! update function is pure; the caller applies the DOM side effects
//! (scroll lock, ARIA attributes) in response to the returned event.

/// Viewport width above which the mobile menu is never shown.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

#[derive(Debug, Default)]
pub struct State {
    menu_open: bool,
}

impl State {
    pub fn is_open(&self) -> bool {
        self.menu_open
    }
}

/// Messages delivered by the host's event listeners.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    /// A click anywhere in the document; the flags say whether the target
    /// was inside the navigation wrapper or the hamburger toggle.
    DocumentClicked {
        inside_nav: bool,
        inside_toggle: bool,
    },
    Resized {
        width: u32,
    },
}

/// State transitions the parent must mirror into the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    MenuOpened,
    MenuClosed,
}

pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::ToggleMenu => {
            state.menu_open = !state.menu_open;
            if state.menu_open {
                Event::MenuOpened
            } else {
                Event::MenuClosed
            }
        }
        Message::CloseMenu => close(state),
        Message::DocumentClicked {
            inside_nav,
            inside_toggle,
        } => {
            if state.menu_open && !inside_nav && !inside_toggle {
                close(state)
            } else {
                Event::None
            }
        }
        Message::Resized { width } => {
            if width > MOBILE_BREAKPOINT_PX {
                close(state)
            } else {
                Event::None
            }
        }
    }
}

fn close(state: &mut State) -> Event {
    if state.menu_open {
        state.menu_open = false;
        Event::MenuClosed
    } else {
        Event::None
    }
}
