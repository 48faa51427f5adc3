use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::LoadError;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (the file failed to load).
    Error,
    /// Critical error (typically I/O or other infrastructure failures).
    Critical,
}

/// Context about one input file's load attempt.
#[derive(Debug, Clone)]
pub struct LoadContext {
    /// The input path being loaded.
    pub path: PathBuf,
}

/// Minimal stats reported when a file loads successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Number of rows parsed from the file.
    pub rows: usize,
}

/// Observer interface for per-file load outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait LoadObserver: Send + Sync {
    /// Called when a file loads successfully.
    fn on_success(&self, _ctx: &LoadContext, _stats: LoadStats) {}

    /// Called when a file fails to load.
    fn on_failure(&self, _ctx: &LoadContext, _severity: LoadSeverity, _error: &LoadError) {}

    /// Called when a load failure meets an alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn LoadObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn LoadObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl LoadObserver for CompositeObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Reports load events through `tracing`.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl LoadObserver for TracingObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        tracing::info!(path = %ctx.path.display(), rows = stats.rows, "loaded input file");
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        tracing::error!(
            path = %ctx.path.display(),
            severity = ?severity,
            error = %error,
            "failed to load input file"
        );
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        tracing::error!(
            path = %ctx.path.display(),
            severity = ?severity,
            error = %error,
            "ALERT: failed to load input file"
        );
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    use super::{CompositeObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats};
    use crate::error::LoadError;

    #[derive(Default)]
    struct CountingObserver {
        successes: Mutex<usize>,
        failures: Mutex<usize>,
    }

    impl LoadObserver for CountingObserver {
        fn on_success(&self, _ctx: &LoadContext, _stats: LoadStats) {
            *self.successes.lock().unwrap() += 1;
        }

        fn on_failure(&self, _ctx: &LoadContext, _severity: LoadSeverity, _error: &LoadError) {
            *self.failures.lock().unwrap() += 1;
        }
    }

    #[test]
    fn composite_fans_out_to_all_observers() {
        let a = Arc::new(CountingObserver::default());
        let b = Arc::new(CountingObserver::default());
        let composite = CompositeObserver::new(vec![a.clone(), b.clone()]);

        let ctx = LoadContext {
            path: PathBuf::from("x.csv"),
        };
        composite.on_success(&ctx, LoadStats { rows: 3 });
        composite.on_failure(
            &ctx,
            LoadSeverity::Error,
            &LoadError::SchemaMismatch {
                message: "missing required column 'Tid'".to_string(),
            },
        );

        assert_eq!(*a.successes.lock().unwrap(), 1);
        assert_eq!(*b.successes.lock().unwrap(), 1);
        assert_eq!(*a.failures.lock().unwrap(), 1);
        assert_eq!(*b.failures.lock().unwrap(), 1);
    }

    #[test]
    fn severity_is_ordered() {
        assert!(LoadSeverity::Critical > LoadSeverity::Error);
        assert!(LoadSeverity::Error > LoadSeverity::Warning);
        assert!(LoadSeverity::Warning > LoadSeverity::Info);
    }
}
