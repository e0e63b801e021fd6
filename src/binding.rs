//! Caller-owned values and callbacks that menu items read, write and invoke.

use std::{cell::Cell, rc::Rc};

/// Storage owned by the host that a toggle or number item edits in place.
pub trait Binding<T> {
    fn get(&self) -> T;
    fn set(&self, value: T);
}

impl<T: Copy> Binding<T> for Rc<Cell<T>> {
    fn get(&self) -> T {
        (**self).get()
    }

    fn set(&self, value: T) {
        (**self).set(value);
    }
}

/// A binding made of a getter and a setter, e.g. closures over a settings struct
/// held in an `Rc<RefCell<_>>`.
pub struct FnBinding<G, S> {
    getter: G,
    setter: S,
}

impl<G, S> FnBinding<G, S> {
    pub fn new(getter: G, setter: S) -> Self {
        Self { getter, setter }
    }
}

impl<T, G, S> Binding<T> for FnBinding<G, S>
where
    G: Fn() -> T,
    S: Fn(T),
{
    fn get(&self) -> T {
        (self.getter)()
    }

    fn set(&self, value: T) {
        (self.setter)(value)
    }
}

/// The callback behind an action item.
pub trait Action {
    fn invoke(&mut self);
}

impl<F: FnMut()> Action for F {
    fn invoke(&mut self) {
        self()
    }
}
