pub mod cylinder;
pub mod pline;

pub use cylinder::{circular_pattern, Cylinder};
pub use pline::{Pline, PlineVertex};
