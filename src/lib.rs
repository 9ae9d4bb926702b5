// SPDX-License-Identifier: PMPL-1.0-or-later

//! i18n-sync: translation key consistency checking for JSON locale catalogs.
//!
//! A catalog is a nested JSON object whose leaves are translated strings.
//! The checker compares a base locale against one or more targets:
//!
//! 1. **Keys**: every leaf is flattened into a dotted path
//!    (`Domains.services.title`) and the two key sets are diffed.
//! 2. **Values**: keys present on both sides are flagged when the values are
//!    identical, empty, `null`, or unresolvable.
//!
//! Every violation is reported in a single run; the exit code tells CI
//! whether any were found. The generator fills keys missing from a target
//! with empty placeholders.

pub mod check;
pub mod compare;
pub mod config;
pub mod keys;
pub mod loader;
pub mod logging;
pub mod report;
pub mod types;
