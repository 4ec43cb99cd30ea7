mod campaign;

pub use campaign::*;
