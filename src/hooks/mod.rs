pub mod use_map;

pub use use_map::{use_map_lifecycle, use_map_lifecycle_with};
