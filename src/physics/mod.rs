pub mod density;
pub mod thrust;
