use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::{Route, RouteKind};

/// Sub-store for posted routes, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteRegistry {
    routes: Vec<Route>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route. Its id is the number of routes before it plus one;
    /// routes are never removed, so ids stay unique. No duplicate check is
    /// made on (owner, start, end).
    pub fn create(&mut self, owner: &str, start: &str, end: &str, kind: RouteKind) -> &Route {
        let id = self.routes.len() as u64 + 1;
        self.routes.push(Route {
            id,
            start: start.to_string(),
            end: end.to_string(),
            owner: owner.to_string(),
            kind,
        });
        &self.routes[self.routes.len() - 1]
    }

    pub fn find(&self, id: u64) -> Result<&Route, CoreError> {
        self.routes
            .iter()
            .find(|r| r.id == id)
            .ok_or(CoreError::RouteNotFound(id))
    }

    pub fn list(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_creation_order() {
        let mut registry = RouteRegistry::new();
        for i in 0..5 {
            let kind = if i % 2 == 0 { RouteKind::Offer } else { RouteKind::Request };
            registry.create("ana", &format!("start {i}"), "end", kind);
        }
        let ids: Vec<u64> = registry.list().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_identical_routes_get_distinct_ids() {
        let mut registry = RouteRegistry::new();
        let first = registry.create("ana", "A", "B", RouteKind::Offer).id;
        let second = registry.create("ana", "A", "B", RouteKind::Offer).id;
        assert_eq!((first, second), (1, 2));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_find() {
        let mut registry = RouteRegistry::new();
        registry.create("ana", "A", "B", RouteKind::Offer);
        registry.create("bia", "C", "D", RouteKind::Request);

        let route = registry.find(2).unwrap();
        assert_eq!(route.owner, "bia");
        assert_eq!(route.start, "C");

        assert_eq!(registry.find(0), Err(CoreError::RouteNotFound(0)));
        assert_eq!(registry.find(3), Err(CoreError::RouteNotFound(3)));
    }
}
