mod command_jobs;
mod http_checkout;

pub use command_jobs::CommandJobQueue;
pub use http_checkout::HttpCheckoutGateway;
