pub mod diamond;

pub use diamond::DiamondAligner;
