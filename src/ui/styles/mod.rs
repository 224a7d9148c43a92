// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the grid, the slideshow modal and toasts.

pub mod button;
pub mod container;
pub mod overlay;
