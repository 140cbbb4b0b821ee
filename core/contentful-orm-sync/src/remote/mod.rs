//! Remote content platform boundary.
//!
//! [`ContentTypeApi`] is the seam the synchronizer drives; [`ContentfulClient`]
//! implements it over the Content Management API.

pub mod api;
pub mod contentful;

pub use api::ContentTypeApi;
pub use contentful::ContentfulClient;
