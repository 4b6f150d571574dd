//! Page-level inputs: the current route and the page's frontmatter.
//!
//! | Module        | Purpose                                            |
//! |---------------|----------------------------------------------------|
//! | `route`       | `RoutePath`, the current navigation path           |
//! | `data`        | `PageData`, title/description/keywords of a page   |
//! | `frontmatter` | YAML-like (`---`) and TOML (`+++`) frontmatter     |

mod data;
mod frontmatter;
mod route;

pub use data::PageData;
pub use frontmatter::extract_frontmatter;
pub use route::RoutePath;
