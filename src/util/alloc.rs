use std::cell::RefCell;
use std::rc::Rc;

/// A value that increments a shared counter each time one of its clones is dropped, used to check
/// that map entries are dropped exactly once.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    /// Creates a new counter starting at `value`.
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }

    /// Returns the number of drops counted so far.
    pub fn drops(&self) -> usize {
        *self.0.borrow()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}
