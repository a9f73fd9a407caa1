//! Alert delivery. `Publisher` is the seam the handler depends on;
//! `SnsPublisher` is the production implementation.

pub mod error;
pub mod publisher;
pub mod sns;

pub use error::{NotifyError, NotifyResult};
pub use publisher::{PublishReceipt, Publisher};
pub use sns::SnsPublisher;
