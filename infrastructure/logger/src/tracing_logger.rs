use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "Halaq -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "Halaq -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "Halaq -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "Halaq -- ", "{}", message);
    }
}
