//! Kernel functions over the 2D feature plane

pub mod linear;
pub mod polynomial;
pub mod rbf;
pub mod select;
pub mod sigmoid;
pub mod traits;

pub use self::linear::*;
pub use self::polynomial::*;
pub use self::rbf::*;
pub use self::select::*;
pub use self::sigmoid::*;
pub use self::traits::*;
