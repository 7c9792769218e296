//! Optimization solver for SVM training

pub mod smo;

pub use self::smo::SmoSolver;
