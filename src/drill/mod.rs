//! The drill core: question generation, timing and answer evaluation.
//!
//! Everything here is independent of any terminal. The host feeds user
//! actions into [`SessionController`] and implements [`Surface`] to receive
//! render updates; time and randomness come in through [`Clock`] and
//! [`NumberSource`] so tests can pin both.

pub mod clock;
pub mod error;
pub mod operation;
pub mod question;
pub mod session;
pub mod source;
pub mod stats;
pub mod surface;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{AnswerError, ConfigError};
pub use operation::Operation;
pub use question::{Answer, Question};
pub use session::{DrillConfig, SessionController, SessionPhase, SubmitOutcome};
pub use source::{NumberSource, RandSource};
pub use surface::{FeedbackStyle, Surface};
