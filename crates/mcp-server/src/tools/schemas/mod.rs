pub mod capabilities;
pub mod lookup;
pub mod route;
pub mod sequence;
