pub mod notice;

pub use notice::{present, present_if_any};
