//! Configuration resolver for the MCP Hub documentation site.
//!
//! Turns a build environment (production or development) plus read-only
//! access to git tag metadata into the configuration record the site
//! renderer consumes: head injections, top navigation, the sidebar tree,
//! and site-wide settings.
//!
//! | Module     | Role                                                |
//! |------------|-----------------------------------------------------|
//! | [`config`] | Typed configuration model, validation, resolution   |
//! | [`site`]   | The authored site definition (literal data)         |
//! | [`version`]| Version label derivation from VCS tags              |
//! | [`env`]    | Build environment detection                         |
//! | [`cli`]    | Command-line surface for emitting the record        |

pub mod cli;
pub mod config;
pub mod env;
pub mod logger;
pub mod site;
pub mod utils;
pub mod version;
