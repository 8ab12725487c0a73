pub mod controller;
pub mod markup;
pub mod surface;
pub mod templates;
pub mod trigger;
