// SPDX-License-Identifier: MPL-2.0
//! The page model and the menu state machines driven by DOM events.

pub mod document;
pub mod lang_menu;
pub mod nav;
