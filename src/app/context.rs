//! View context: how a view finds its store.
//!
//! Contexts form a parent chain mirroring the view tree. A provider is
//! installed at a composition root with [`ViewContext::with_provider`] and
//! resolved by descendants through [`ViewContext::use_store`]. There is no
//! global fallback store.

use std::rc::Rc;

use super::provider::{StoreProvider, StoreValue};

#[derive(Default)]
struct ContextNode {
    parent: Option<ViewContext>,
    provider: Option<StoreProvider>,
}

#[derive(Clone, Default)]
pub struct ViewContext {
    node: Rc<ContextNode>,
}

impl ViewContext {
    pub fn root() -> Self {
        Self::default()
    }

    /// Child scope in which `provider` shadows any outer one.
    pub fn with_provider(&self, provider: StoreProvider) -> Self {
        Self {
            node: Rc::new(ContextNode {
                parent: Some(self.clone()),
                provider: Some(provider),
            }),
        }
    }

    pub fn child(&self) -> Self {
        Self {
            node: Rc::new(ContextNode {
                parent: Some(self.clone()),
                provider: None,
            }),
        }
    }

    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut cursor = self.node.parent.as_ref();
        while let Some(ctx) = cursor {
            depth += 1;
            cursor = ctx.node.parent.as_ref();
        }
        depth
    }

    /// Nearest enclosing provider.
    pub fn provider(&self) -> Option<StoreProvider> {
        let mut cursor = Some(self);
        while let Some(ctx) = cursor {
            if let Some(provider) = &ctx.node.provider {
                return Some(provider.clone());
            }
            cursor = ctx.node.parent.as_ref();
        }
        None
    }

    pub fn use_store(&self) -> Rc<StoreValue> {
        match self.provider() {
            Some(provider) => provider.value(),
            None => {
                tracing::debug!(depth = self.depth(), "no StoreProvider in scope");
                StoreValue::detached()
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/context.rs"]
mod tests;
