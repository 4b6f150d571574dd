//! Configuration section definitions.
//!
//! | Section  | Purpose                                              |
//! |----------|------------------------------------------------------|
//! | `[site]` | Site identity (name, description, keywords, url, og) |
//! | `[seo]`  | Deployment constants (publisher, fallbacks, limits)  |

mod seo;
mod site;

pub use seo::{PublisherConfig, SeoConfig};
pub use site::SiteInfoConfig;
