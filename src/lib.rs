//! doing - a terminal activity picker
//!
//! One screen: type to filter a grid of activity tiles, Enter to mark what
//! you are doing now, Ctrl+N to add whatever you typed as a new activity.
//! The selection tints a gradient band and every tile carries a stable hue
//! derived from its code.
//!
//! The state machine (catalog, debounced filter, selection, add affordance)
//! lives in [`board`] and friends and is fully independent of the terminal
//! rendering in [`interactive`].

pub mod board;
pub mod catalog;
pub mod color;
pub mod config;
pub mod error;
pub mod filter;
pub mod interactive;
pub mod logging;
pub mod selection;
