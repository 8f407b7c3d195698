//! Errors raised by a pull cursor's producer context.

use std::any::Any;

/// Failures of the machinery behind a [`Pull`](crate::Pull) cursor.
///
/// Running out of values is not an error; a cursor reports exhaustion with `None`.
#[derive(Debug, thiserror::Error)]
pub enum PullError {
    /// The producer context could not be started.
    #[error("failed to spawn producer: {0}")]
    Spawn(#[from] std::io::Error),
    /// The producer panicked while producing or while unwinding after a stop.
    #[error("producer panicked: {message}")]
    ProducerPanicked { message: String },
}

impl PullError {
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        PullError::ProducerPanicked {
            message: panic_message(payload.as_ref()),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_payload_is_rendered() {
        let err = PullError::from_panic(Box::new("boom"));
        assert_eq!(err.to_string(), "producer panicked: boom");

        let err = PullError::from_panic(Box::new(format!("at {}", 3)));
        assert_eq!(err.to_string(), "producer panicked: at 3");

        let err = PullError::from_panic(Box::new(17_u8));
        assert_eq!(err.to_string(), "producer panicked: non-string panic payload");
    }

    #[test]
    fn test_spawn_error_converts_from_io() {
        let err: PullError = std::io::Error::new(std::io::ErrorKind::Other, "no threads").into();
        assert!(matches!(err, PullError::Spawn(_)));
        assert_eq!(err.to_string(), "failed to spawn producer: no threads");
    }
}
