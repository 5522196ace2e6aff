pub mod badge;

pub use badge::{badge_variant, Badge};
