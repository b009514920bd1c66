use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "ReceiptOcr -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "ReceiptOcr -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "ReceiptOcr -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "ReceiptOcr -- ", "{}", message);
    }
}
