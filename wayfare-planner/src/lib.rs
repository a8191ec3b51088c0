pub mod controller;
pub mod session;
pub mod steps;
pub mod view;

pub use controller::{
    StepOutcome, StepSubmission, ValidationError, WizardController, WizardError,
};
pub use session::{StepPhase, WizardSession};
pub use steps::{next_after, ordinal_of, visible_steps, StepId};
pub use view::{StepView, WizardView};
