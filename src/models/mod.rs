pub mod class;
pub mod mo;
pub mod references;

pub use class::MoClass;
pub use mo::ManagedObject;
pub use references::check_references;
