pub mod connection;
pub mod dao;
pub mod dependency;
pub mod entities;
pub mod entity_catalog;
