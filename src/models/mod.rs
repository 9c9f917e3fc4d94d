// src/models/mod.rs

pub mod aspiration;
pub mod gallery;
pub mod input;
pub mod post;
pub mod sanitize;
