// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::callable::CallableDescriptor;
use crate::decorators::logging::WRAPPER_HELPER_NAME;
use crate::decorators::wrapper::{Decorate, Decoration, Notifying, Wrapper};
use crate::observability::messages::{call::CallTimed, StructuredLog};
use crate::observability::sink::{default_sink, Notification, NotificationSink};
use crate::traits::CallResult;

/// Most recent duration measured by one wrapper. Clones share it.
#[derive(Debug, Clone, Default)]
pub struct Timing(Arc<Mutex<Option<Duration>>>);

impl Timing {
    pub fn last(&self) -> Option<Duration> {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, elapsed: Duration) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = Some(elapsed);
    }
}

/// Measures how long each call takes. Failed calls are not timed.
pub struct Timed {
    timing: Timing,
    sink: Arc<dyn NotificationSink>,
}

impl Default for Timed {
    fn default() -> Self {
        Self {
            timing: Timing::default(),
            sink: default_sink(),
        }
    }
}

impl Timed {
    pub fn timing(&self) -> Timing {
        self.timing.clone()
    }
}

impl Notifying for Timed {
    fn set_sink(&mut self, sink: Arc<dyn NotificationSink>) {
        self.sink = sink;
    }
}

impl<O> Decoration<O> for Timed {
    type Output = O;

    fn around<F>(&self, target: &CallableDescriptor, invoke: F) -> CallResult<O>
    where
        F: FnOnce() -> CallResult<O>,
    {
        let start_time = Instant::now();
        let result = invoke()?;
        let elapsed = start_time.elapsed();

        self.timing.record(elapsed);
        CallTimed {
            callable: target.name(),
            elapsed,
        }
        .log();
        self.sink.notify(&Notification::Timed {
            callable: target.name().to_string(),
            elapsed,
        });

        Ok(result)
    }
}

impl Decorate<Timed> {
    pub fn timing(&self) -> Timing {
        self.decoration().timing()
    }
}

impl<C> Wrapper<C, Timed> {
    pub fn last_elapsed(&self) -> Option<Duration> {
        self.decoration().timing.last()
    }
}

pub fn timed() -> Decorate<Timed> {
    Decorate::new(Timed::default(), WRAPPER_HELPER_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callable::{infallible_target, FnTarget};
    use crate::observability::sink::RecordingSink;
    use crate::traits::{Callable, Decorator};

    #[test]
    fn test_records_duration_of_successful_call() {
        let sink = RecordingSink::new();
        let decorator = timed().with_sink(Arc::new(sink.clone()));
        let timing = decorator.timing();
        let sleepy = decorator.decorate(infallible_target("sleepy", |_: ()| {
            std::thread::sleep(Duration::from_millis(5));
            "done"
        }));

        assert_eq!(timing.last(), None);
        assert_eq!(sleepy.call(()).unwrap(), "done");

        let elapsed = sleepy.last_elapsed().unwrap();
        assert!(elapsed >= Duration::from_millis(5));
        assert_eq!(timing.last(), Some(elapsed));
        assert_eq!(
            sink.notifications(),
            vec![Notification::Timed {
                callable: "sleepy".to_string(),
                elapsed,
            }]
        );
    }

    #[test]
    fn test_failure_is_not_timed() {
        let sink = RecordingSink::new();
        let failing = FnTarget::new("failing", |_: ()| -> CallResult<()> { anyhow::bail!("no") });
        let timed_failing = timed().with_sink(Arc::new(sink.clone())).decorate(failing);

        assert!(timed_failing.call(()).is_err());
        assert_eq!(timed_failing.last_elapsed(), None);
        assert!(sink.is_empty());
    }
}
