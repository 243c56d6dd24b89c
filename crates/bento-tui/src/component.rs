//! Component capability traits.
//!
//! Every node in a bento tree is a [`Component`]. Managers ask for more
//! specific capabilities through the trait they store:
//! - [`Sizeable`] - can report the size it was last told
//! - [`Focusable`] - participates in a focus ring
//! - [`Page`] - a routable, titled, sizeable component
//! - [`Bindable`] - exposes key bindings for help text

use ratatui::{buffer::Buffer, layout::Rect};
use std::cell::RefCell;
use std::rc::Rc;

use crate::event::{Command, Msg};
use crate::keys::KeyBinding;

/// Minimum contract for bento components.
pub trait Component {
    /// Called once before the first update.
    fn init(&mut self) -> Option<Command> {
        None
    }

    /// Process one message, optionally producing follow-up work.
    fn update(&mut self, msg: &Msg) -> Option<Command>;

    /// Draw current state into `area`.
    fn render(&self, area: Rect, buf: &mut Buffer);

    /// Size hook. Components without a size capability ignore it.
    fn set_size(&mut self, _width: u16, _height: u16) {}
}

/// Components that track the size they were given.
pub trait Sizeable: Component {
    fn size(&self) -> (u16, u16);
}

/// Components that take part in focus management.
pub trait Focusable: Component {
    fn focus(&mut self);
    fn blur(&mut self);
    fn is_focused(&self) -> bool;
}

/// A routable component.
pub trait Page: Sizeable {
    /// Display title for chrome and breadcrumbs.
    fn title(&self) -> &str;

    /// Bindings the shell shows in the footer while this page is current.
    fn help(&self) -> Vec<KeyBinding> {
        Vec::new()
    }
}

/// Components that expose key bindings for help rendering.
pub trait Bindable {
    fn bindings(&self) -> Vec<KeyBinding>;
}

/// Shared handle to a component.
///
/// Lets the same panel sit in a layout split and a focus ring at once.
pub type Shared<T> = Rc<RefCell<T>>;

/// Wrap a component in a [`Shared`] handle.
pub fn shared<T>(component: T) -> Shared<T> {
    Rc::new(RefCell::new(component))
}

impl<T: Component + ?Sized> Component for Rc<RefCell<T>> {
    fn init(&mut self) -> Option<Command> {
        self.borrow_mut().init()
    }

    fn update(&mut self, msg: &Msg) -> Option<Command> {
        self.borrow_mut().update(msg)
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        self.borrow().render(area, buf);
    }

    fn set_size(&mut self, width: u16, height: u16) {
        self.borrow_mut().set_size(width, height);
    }
}

impl<T: Sizeable + ?Sized> Sizeable for Rc<RefCell<T>> {
    fn size(&self) -> (u16, u16) {
        self.borrow().size()
    }
}

impl<T: Focusable + ?Sized> Focusable for Rc<RefCell<T>> {
    fn focus(&mut self) {
        self.borrow_mut().focus();
    }

    fn blur(&mut self) {
        self.borrow_mut().blur();
    }

    fn is_focused(&self) -> bool {
        self.borrow().is_focused()
    }
}
