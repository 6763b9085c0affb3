//! IPL match winner prediction.
//!
//! Categorical match attributes are encoded through fixed category tables and
//! fed to a pre-trained tree-ensemble classifier behind an HTTP form.

pub mod config;
pub mod encoding;
pub mod gateway;
pub mod model;
pub mod web;
