pub mod client;
pub mod session;
pub mod types;

pub use client::ApicClient;
pub use session::FabricSession;
