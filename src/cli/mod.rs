//! Command-line interface.
//!
//! | Command  | Purpose                                         |
//! |----------|-------------------------------------------------|
//! | `head`   | Render a page's `<head>` entries                |
//! | `jsonld` | Print a page's JSON-LD record                   |
//! | `check`  | Validate `docseo.toml`                          |

pub mod args;
pub mod check;
pub mod head;
mod input;

pub use args::{Cli, Commands, OutputFormat, PageArgs};
