pub mod calculations;
pub mod collaborators;
pub mod models;
pub mod wizard;

pub use collaborators::{CheckoutGateway, JobQueue};
pub use models::*;
pub use wizard::{FormWizard, NavigationGate, WizardConfig, WizardError, WizardSnapshot};
