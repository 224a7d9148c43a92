// SPDX-License-Identifier: MPL-2.0
//! Localized UI strings.
//!
//! Fluent files for en-US and fr are embedded from `assets/i18n/`. The
//! locale comes from `--lang`, then `[general] language`, then the OS, and
//! falls back to en-US; a key missing in the chosen locale is looked up in
//! en-US before being reported as `MISSING: <key>`.

pub mod fluent;
