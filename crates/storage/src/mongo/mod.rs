//! MongoDB index catalog backend

mod classify;
mod client;

pub(crate) use client::MongoIndexCatalog;
