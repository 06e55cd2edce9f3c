pub mod message;
pub mod payment;

pub use message::*;
pub use payment::*;
