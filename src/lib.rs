// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a full-screen image slideshow built with the Iced GUI framework.
//!
//! Photos open in a modal that advances on a timer, shows a countdown to the
//! next change, and mirrors the current photo in a shareable address such as
//! `/p/3?photoId=3`.

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod location;
pub mod ui;
