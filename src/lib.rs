pub mod config;
pub mod layers;
pub mod math;
pub mod positional;
pub mod rng;
pub mod tensor;
pub mod weights;
