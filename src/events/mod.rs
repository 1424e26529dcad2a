pub mod keyboard;
pub mod listeners;
pub mod pointer;

use crate::core::View;
use std::cell::RefCell;
use std::rc::Rc;

pub use keyboard::{wire_carousel_keys, wire_escape_home};
pub use listeners::ListenerSet;
pub use pointer::{wire_input_handlers, wire_project_items, InputWiring};

/// Navigation requested by an input handler, picked up by the next frame.
pub type QueuedView = Rc<RefCell<Option<View>>>;
