//! Route table: per-method static map, dynamic template list and not-found slot.

use std::collections::HashMap;
use std::sync::Arc;

use crate::method::{Method, METHOD_COUNT};
use crate::path::is_wildcard_segment;

/// One `/`-delimited piece of a dynamic template
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    /// Must equal the request segment byte for byte
    Literal(Box<str>),
    /// Matches any request segment and captures it
    Wildcard,
}

/// Registered dynamic template, pre-split at registration time
#[derive(Debug, Clone)]
pub(crate) struct DynamicRoute<H> {
    pub(crate) template: Arc<str>,
    pub(crate) segments: Vec<Segment>,
    pub(crate) handler: H,
}

impl<H> DynamicRoute<H> {
    fn new(template: &str, handler: H) -> Self {
        let segments = template
            .split('/')
            .map(|s| {
                if is_wildcard_segment(s) {
                    Segment::Wildcard
                } else {
                    Segment::Literal(s.into())
                }
            })
            .collect();
        Self {
            template: Arc::from(template),
            segments,
            handler,
        }
    }
}

/// Routes of a single method
#[derive(Debug, Clone)]
pub(crate) struct MethodRoutes<H> {
    pub(crate) statics: HashMap<Arc<str>, H>,
    /// Insertion order is the matcher's iteration order
    pub(crate) dynamics: Vec<DynamicRoute<H>>,
    pub(crate) not_found: Option<H>,
}

impl<H> Default for MethodRoutes<H> {
    fn default() -> Self {
        Self {
            statics: HashMap::new(),
            dynamics: Vec::new(),
            not_found: None,
        }
    }
}

/// Three registries keyed by method, one slot per member of the closed set
#[derive(Debug, Clone)]
pub(crate) struct RouteTable<H> {
    methods: [MethodRoutes<H>; METHOD_COUNT],
}

impl<H> Default for RouteTable<H> {
    fn default() -> Self {
        Self {
            methods: std::array::from_fn(|_| MethodRoutes::default()),
        }
    }
}

impl<H> RouteTable<H> {
    #[inline]
    pub(crate) fn get(&self, method: Method) -> &MethodRoutes<H> {
        &self.methods[method.index()]
    }

    #[inline]
    fn get_mut(&mut self, method: Method) -> &mut MethodRoutes<H> {
        &mut self.methods[method.index()]
    }

    pub(crate) fn insert_static(&mut self, method: Method, path: &str, handler: H) {
        self.get_mut(method).statics.insert(Arc::from(path), handler);
    }

    /// Overwriting an existing template keeps its original position
    pub(crate) fn insert_dynamic(&mut self, method: Method, template: &str, handler: H) {
        let routes = &mut self.get_mut(method).dynamics;
        match routes.iter_mut().find(|r| &*r.template == template) {
            Some(existing) => existing.handler = handler,
            None => routes.push(DynamicRoute::new(template, handler)),
        }
    }

    pub(crate) fn set_not_found(&mut self, method: Method, handler: H) {
        self.get_mut(method).not_found = Some(handler);
    }

    /// Remove an exact key from both registries; returns whether anything was removed
    pub(crate) fn remove(&mut self, method: Method, key: &str) -> bool {
        let routes = self.get_mut(method);
        let removed_static = routes.statics.remove(key).is_some();
        let before = routes.dynamics.len();
        routes.dynamics.retain(|r| &*r.template != key);
        removed_static || routes.dynamics.len() != before
    }

    pub(crate) fn clear_not_found(&mut self, method: Method) -> bool {
        self.get_mut(method).not_found.take().is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.methods
            .iter()
            .map(|m| m.statics.len() + m.dynamics.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_is_pre_split() {
        let route = DynamicRoute::new("/user/{id}/profile", ());
        assert_eq!(
            route.segments,
            vec![
                Segment::Literal("".into()),
                Segment::Literal("user".into()),
                Segment::Wildcard,
                Segment::Literal("profile".into()),
            ]
        );
    }

    #[test]
    fn test_dynamic_overwrite_keeps_position() {
        let mut table = RouteTable::default();
        table.insert_dynamic(Method::Get, "/a/{x}", 1);
        table.insert_dynamic(Method::Get, "/a/{y}", 2);
        table.insert_dynamic(Method::Get, "/a/{x}", 3);

        let dynamics = &table.get(Method::Get).dynamics;
        assert_eq!(dynamics.len(), 2);
        assert_eq!(&*dynamics[0].template, "/a/{x}");
        assert_eq!(dynamics[0].handler, 3);
        assert_eq!(&*dynamics[1].template, "/a/{y}");
    }

    #[test]
    fn test_remove_is_exact_and_idempotent() {
        let mut table = RouteTable::default();
        table.insert_static(Method::Post, "/a", ());
        assert!(!table.remove(Method::Post, "/a/"));
        assert!(table.remove(Method::Post, "/a"));
        assert!(!table.remove(Method::Post, "/a"));
        assert_eq!(table.len(), 0);
    }
}
