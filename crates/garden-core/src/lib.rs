pub mod bloom;
pub mod color;
pub mod constants;
pub mod driver;
pub mod error;
pub mod garden;
pub mod motion;
pub mod shapes;
pub mod surface;

pub use bloom::*;
pub use color::*;
pub use constants::*;
pub use driver::*;
pub use error::*;
pub use garden::*;
pub use motion::*;
pub use surface::*;
