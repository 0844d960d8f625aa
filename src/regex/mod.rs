//! Compiled-pattern cache shared by the rendering passes

mod cache;

pub(crate) use ::regex::{escape, Captures, Regex};
