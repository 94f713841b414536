//! Workspace root package.
//!
//! Carries the rusty-hook pre-commit configuration in its manifest; the
//! route finder itself lives in `crates/skyroute-lib` and `crates/skyroute-cli`.
