//! Page router with lazy construction.
//!
//! Routes are registered once as name + factory pairs. A page is built the
//! first time its route becomes current, sized to the router's last known
//! viewport, and cached for the life of the router. Navigating away and
//! back reuses the cached instance, so page-local state survives.
//!
//! Only the current page receives messages and sizes. Cached pages that
//! are not current pick up the latest size when they are next visited.

use ratatui::{buffer::Buffer, layout::Rect};
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::component::{Component, Page, Sizeable};
use crate::event::{Command, Msg};

/// Builds a page on first visit.
pub type Factory = Box<dyn FnMut() -> Box<dyn Page>>;

/// A named, lazily constructed page.
pub struct Route {
    name: String,
    factory: Factory,
}

impl Route {
    pub fn new(name: impl Into<String>, factory: impl FnMut() -> Box<dyn Page> + 'static) -> Self {
        Self {
            name: name.into(),
            factory: Box::new(factory),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Shorthand for [`Route::new`].
pub fn page(name: impl Into<String>, factory: impl FnMut() -> Box<dyn Page> + 'static) -> Route {
    Route::new(name, factory)
}

/// Errors raised while resolving the current page.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouterError {
    /// `current` names a route that was never registered.
    #[error("route {0:?} not registered")]
    UnknownRoute(String),
}

/// Page router.
pub struct Router {
    routes: HashMap<String, Factory>,
    order: Vec<String>,
    cache: HashMap<String, Box<dyn Page>>,
    current: String,
    width: u16,
    height: u16,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Router {
    /// Register routes and build the first one.
    pub fn new(routes: impl IntoIterator<Item = Route>) -> Self {
        let mut router = Self {
            routes: HashMap::new(),
            order: Vec::new(),
            cache: HashMap::new(),
            current: String::new(),
            width: 0,
            height: 0,
        };
        for route in routes {
            if router.current.is_empty() {
                router.current.clone_from(&route.name);
            }
            if !router.routes.contains_key(&route.name) {
                router.order.push(route.name.clone());
            }
            router.routes.insert(route.name, route.factory);
        }
        router.ensure_current_logged();
        router
    }

    /// Switch to `name` if it is registered; unknown names are ignored.
    pub fn navigate(&mut self, name: &str) {
        if !self.routes.contains_key(name) {
            debug!(route = name, "Ignoring navigation to unknown route");
            return;
        }
        if self.current != name {
            debug!(from = %self.current, to = name, "Navigating");
            self.current = name.to_string();
        }
        self.ensure_current_logged();
        let (width, height) = (self.width, self.height);
        if let Some(page) = self.cache.get_mut(&self.current) {
            let (pw, ph) = page.size();
            if (pw, ph) != (width, height) {
                page.set_size(width, height);
            }
        }
    }

    /// The current page, built on first access.
    pub fn current(&mut self) -> Option<&mut (dyn Page + 'static)> {
        self.ensure_current_logged();
        self.cache.get_mut(&self.current).map(|page| page.as_mut())
    }

    /// Name of the current route (empty when no routes are registered).
    pub fn current_name(&self) -> &str {
        &self.current
    }

    /// Registered route names in registration order.
    pub fn route_names(&self) -> &[String] {
        &self.order
    }

    /// Whether `name` has been built and cached.
    pub fn is_cached(&self, name: &str) -> bool {
        self.cache.contains_key(name)
    }

    /// Build the current page if it has not been built yet.
    pub fn ensure_current(&mut self) -> Result<(), RouterError> {
        if self.current.is_empty() || self.cache.contains_key(&self.current) {
            return Ok(());
        }
        let factory = self
            .routes
            .get_mut(&self.current)
            .ok_or_else(|| RouterError::UnknownRoute(self.current.clone()))?;
        let mut page = factory();
        page.set_size(self.width, self.height);
        debug!(route = %self.current, "Built page");
        self.cache.insert(self.current.clone(), page);
        Ok(())
    }

    fn ensure_current_logged(&mut self) {
        if let Err(e) = self.ensure_current() {
            warn!(error = %e, "Could not resolve current page");
        }
    }

    #[cfg(test)]
    fn force_current(&mut self, name: &str) {
        self.current = name.to_string();
    }
}

impl Component for Router {
    fn init(&mut self) -> Option<Command> {
        self.current().and_then(|page| page.init())
    }

    fn update(&mut self, msg: &Msg) -> Option<Command> {
        match msg {
            Msg::Navigate(name) => {
                self.navigate(name);
                return None;
            }
            Msg::Resize { width, height } => {
                self.set_size(*width, *height);
                return None;
            }
            _ => {}
        }
        self.current()?.update(msg)
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        if let Some(page) = self.cache.get(&self.current) {
            page.render(area, buf);
        }
    }

    fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        if let Some(page) = self.current() {
            page.set_size(width, height);
        }
    }
}

impl Sizeable for Router {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}
