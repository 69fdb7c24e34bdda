//! glovesite — back end for the Magic Glove window-cleaning site.
//!
//! `nav` is usable on its own by any front end that needs the same hash
//! routing rules; the rest wires the HTTP API and the estimate relay.

pub mod config;
pub mod nav;
pub mod routes;
pub mod services;
pub mod site;
pub mod state;
