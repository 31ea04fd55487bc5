pub mod scorad;
pub mod uas7;
