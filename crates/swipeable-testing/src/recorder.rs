use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

/// Collects labelled callback invocations in call order.
#[derive(Clone, Debug, Default)]
pub struct ActionRecorder {
    events: Rc<RefCell<Vec<String>>>,
}

impl ActionRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step action that records `label` when invoked.
    pub fn action(&self, label: &str) -> impl Fn(Option<&dyn Any>) + 'static {
        let events = Rc::clone(&self.events);
        let label = label.to_string();
        move |_params: Option<&dyn Any>| events.borrow_mut().push(label.clone())
    }

    /// Callback that records `label` with no arguments.
    pub fn callback(&self, label: &str) -> impl Fn() + 'static {
        let events = Rc::clone(&self.events);
        let label = label.to_string();
        move || events.borrow_mut().push(label.clone())
    }

    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    pub fn count(&self, label: &str) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| event.as_str() == label)
            .count()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}
