//! Content engine of the studio site: page defaults and the override merge,
//! the admin save path, authentication and the image bucket.

pub mod auth;
pub mod content;
pub mod dashboard;
pub mod editor;
pub mod media;
pub mod store;
