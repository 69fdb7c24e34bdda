//! Page dispatch.
//!
//! Exact match against a fixed route table. Anything unrecognized lands on
//! [`Page::NotFound`]; it never falls back to the home page.

use serde::Serialize;
use tokio::sync::watch;

use super::route::Route;
use crate::site::ServiceKind;

/// Home-page section the view should scroll to once mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Estimate,
}

/// Page variant selected for a canonical route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Page {
    Home {
        #[serde(skip_serializing_if = "Option::is_none")]
        focus: Option<Section>,
    },
    Work {
        service: ServiceKind,
    },
    Community,
    NotFound,
}

const ROUTE_TABLE: &[(&str, Page)] = &[
    ("/", Page::Home { focus: None }),
    ("/estimate", Page::Home { focus: Some(Section::Estimate) }),
    ("/work/windows", Page::Work { service: ServiceKind::Windows }),
    ("/work/storefront", Page::Work { service: ServiceKind::Storefront }),
    ("/work/solar", Page::Work { service: ServiceKind::Solar }),
    ("/work/tint", Page::Work { service: ServiceKind::Tint }),
    ("/community", Page::Community),
];

/// Select the page variant for a canonical route.
#[must_use]
pub fn dispatch(route: &Route) -> Page {
    ROUTE_TABLE
        .iter()
        .find(|(path, _)| *path == route.as_str())
        .map_or(Page::NotFound, |(_, page)| *page)
}

/// Routes the dispatcher recognizes, in table order.
pub fn known_routes() -> impl Iterator<Item = &'static str> {
    ROUTE_TABLE.iter().map(|(path, _)| *path)
}

// =============================================================================
// FOLLOWING A RESOLVER
// =============================================================================

/// Re-selects the page every time the followed resolver publishes a route.
///
/// The first call to [`PageStream::next`] yields the page for the route that
/// was current when the stream was created.
pub struct PageStream {
    rx: watch::Receiver<Route>,
    primed: bool,
}

impl PageStream {
    #[must_use]
    pub fn new(rx: watch::Receiver<Route>) -> Self {
        Self { rx, primed: false }
    }

    /// Wait for the next published route and return its page. `None` once the
    /// resolver has been dropped.
    pub async fn next(&mut self) -> Option<(Route, Page)> {
        if self.primed {
            self.rx.changed().await.ok()?;
        }
        self.primed = true;
        let route = self.rx.borrow_and_update().clone();
        let page = dispatch(&route);
        Some((route, page))
    }
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
