pub mod config;
pub mod session;
pub mod transport;

pub use session::{FormPhase, SignupSession, SubmitOutcome};
pub use transport::{classify_response, deliver, interpret, Delivery, HttpTransport, LeadTransport};
