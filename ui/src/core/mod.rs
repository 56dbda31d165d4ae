//! Platform glue shared by the i18n layer and the components.

pub mod config;
pub mod platform;
pub mod storage;
