// src/core/mod.rs

pub mod classifier;
pub mod contraction;
pub mod dictionary;
pub mod engine;
pub mod locale;
pub mod paradigm;
pub mod persons;
pub mod tables;
pub mod types;
