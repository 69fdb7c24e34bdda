//! Client navigation — hash fragment resolution and page selection.
//!
//! DESIGN
//! ======
//! The browser only ever hands us a raw fragment (`#/work/solar`, `work/solar/`,
//! an empty string). `route` turns that into a canonical [`Route`] and owns the
//! single observable value subscribers watch. `page` maps a canonical route to
//! the page variant the view layer renders.

pub mod page;
pub mod route;

pub use page::{Page, PageStream, Section, dispatch};
pub use route::{Route, RouteResolver};
