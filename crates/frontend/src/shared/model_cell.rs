use leptos::prelude::*;
use std::cell::RefCell;

/// Ячейка с моделью страницы
///
/// Async flows are written against this trait so they mutate a reactive
/// signal in the app and a plain `RefCell` in tests. Borrows never span
/// an `.await`.
pub trait ModelCell<T> {
    /// `None` when the underlying cell is gone (disposed signal).
    fn update_model<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;

    fn read_model<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;
}

impl<T> ModelCell<T> for RwSignal<T>
where
    T: Send + Sync + 'static,
{
    fn update_model<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn read_model<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

impl<T> ModelCell<T> for RefCell<T> {
    fn update_model<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn read_model<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}
