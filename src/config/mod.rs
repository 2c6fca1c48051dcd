//! Configuration module

mod site;

pub use site::ErrorPolicy;
pub use site::SiteConfig;
