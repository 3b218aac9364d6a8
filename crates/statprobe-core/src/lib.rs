pub mod config;
pub mod logging;

pub mod credential;
pub mod error;
pub mod probe;
pub mod report;
pub mod stats;
pub mod target;

pub use credential::Credential;
pub use error::ProbeError;
pub use probe::{probe_and_report, CurlTransport, ProbeConfig, ProbeStatus, Transport};
pub use target::Target;
