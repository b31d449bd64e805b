//! Interface adapters exposing the catalog to the outside world

pub mod http;
