//! Optional rendering strategies for items and the indicator.
//!
//! The engine does not draw anything. Hosts that do can let callers swap in
//! their own item or indicator renderer; when a slot is empty the host's
//! default is used. `Out` is whatever the host draws with (a string for a
//! terminal, a view node for a UI toolkit).

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::item::Label;

type ItemFn<T, Out> = Box<dyn Fn(&T) -> Out>;
type IndicatorFn<Out> = Box<dyn Fn() -> Out>;

/// Caller-supplied render strategies.
pub struct Renderers<T, Out> {
    item: Option<ItemFn<T, Out>>,
    indicator: Option<IndicatorFn<Out>>,
}

impl<T, Out> Default for Renderers<T, Out> {
    fn default() -> Self {
        Self { item: None, indicator: None }
    }
}

impl<T, Out> Renderers<T, Out> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_item(mut self, render: impl Fn(&T) -> Out + 'static) -> Self {
        self.item = Some(Box::new(render));
        self
    }

    #[must_use]
    pub fn with_indicator(mut self, render: impl Fn() -> Out + 'static) -> Self {
        self.indicator = Some(Box::new(render));
        self
    }

    #[must_use]
    pub fn has_custom_item(&self) -> bool {
        self.item.is_some()
    }

    #[must_use]
    pub fn has_custom_indicator(&self) -> bool {
        self.indicator.is_some()
    }

    /// Render `item` with the caller's strategy, or `default` when none is set.
    pub fn render_item(&self, item: &T, default: impl FnOnce(&T) -> Out) -> Out {
        match &self.item {
            Some(render) => render(item),
            None => default(item),
        }
    }

    /// Render the indicator with the caller's strategy, or `default` when none is set.
    pub fn render_indicator(&self, default: impl FnOnce() -> Out) -> Out {
        match &self.indicator {
            Some(render) => render(),
            None => default(),
        }
    }
}

/// Default item rendering: the item's label.
#[must_use]
pub fn default_label<T: Label>(item: &T) -> String {
    item.label().to_owned()
}
