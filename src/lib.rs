mod ot;
pub use ot::*;
pub mod settings;
mod slices;
pub use slices::*;
pub mod structs;
pub use structs::OtRecord;

#[cfg(test)]
mod test_fixture;
