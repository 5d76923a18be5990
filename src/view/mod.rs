//! View and UI layer
//!
//! This module contains all presentation and rendering components.

pub mod layout;
pub mod style;
pub mod theme;
pub mod tree;
pub mod ui;
