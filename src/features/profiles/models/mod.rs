mod brand;
mod creator;
mod profile;

pub use brand::*;
pub use creator::*;
pub use profile::*;
