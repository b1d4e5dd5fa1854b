pub mod compose;
pub mod detect;
pub mod params;
