//! Terminal viewer for alpha-beta search trees
//!
//! The library exposes the tree model, view state, renderers and the
//! `Viewer` event handler so they can be driven headlessly in tests.

pub mod app;
pub mod config;
pub mod model;
pub mod services;
pub mod view;
