//! Canonical routes and the observable route resolver.

use std::fmt;

use serde::Serialize;
use tokio::sync::watch;

pub const ROOT: &str = "/";

// =============================================================================
// ROUTE
// =============================================================================

/// Canonical, comparison-ready form of a URL fragment.
///
/// Always starts with exactly one `/` and never ends with `/` unless it is the
/// root itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Route(String);

impl Route {
    #[must_use]
    pub fn root() -> Self {
        Self(ROOT.to_owned())
    }

    /// Normalize a raw fragment. Never fails; malformed input degrades to root.
    #[must_use]
    pub fn from_fragment(raw: &str) -> Self {
        let after_hash = raw.split_once('#').map_or(raw, |(_, rest)| rest);
        let trimmed = after_hash.trim();
        let inner = trimmed.trim_start_matches('/').trim_end_matches('/');
        if inner.is_empty() {
            return Self::root();
        }
        Self(format!("/{inner}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0 == ROOT
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Route {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// RESOLVER
// =============================================================================

/// Owns the current route and republishes it on every navigation.
///
/// Subscribers get a `watch::Receiver`; the value present at construction
/// counts as the initial-load publication.
pub struct RouteResolver {
    tx: watch::Sender<Route>,
}

impl RouteResolver {
    #[must_use]
    pub fn new(initial_fragment: &str) -> Self {
        let (tx, _rx) = watch::channel(Route::from_fragment(initial_fragment));
        Self { tx }
    }

    /// Current canonical route.
    #[must_use]
    pub fn current(&self) -> Route {
        self.tx.borrow().clone()
    }

    /// Handle a fragment-change event. Subscribers are only woken when the
    /// canonical route actually differs from the current one.
    pub fn navigate(&self, fragment: &str) -> Route {
        let next = Route::from_fragment(fragment);
        let changed = self.tx.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next.clone();
            true
        });
        if changed {
            tracing::debug!(route = %next, "route changed");
        }
        next
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Route> {
        self.tx.subscribe()
    }
}

impl Default for RouteResolver {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
#[path = "route_test.rs"]
mod tests;
