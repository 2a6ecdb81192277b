use crate::quantity::time::Minutes;

/// Turns the reported cutting time and operation count into the three time
/// components of a job.
///
/// The data source only reports time spent actually removing material, so the
/// other two components are modelled: rapid moves as a fixed fraction of the
/// cutting time, idle time as a fixed setup block plus a per-operation
/// tool-change and dwell overhead.
#[derive(Clone, Copy, Debug)]
pub struct TimeEstimator {
    pub rapid_time_factor: f64,
    pub idle_time_per_op: Minutes,
    pub setup_time: Minutes,
}

impl Default for TimeEstimator {
    fn default() -> Self {
        Self {
            rapid_time_factor: 0.3,
            idle_time_per_op: Minutes(2.0),
            setup_time: Minutes(10.0),
        }
    }
}

impl TimeEstimator {
    #[must_use]
    pub fn rapid_time(&self, cutting_time: Minutes) -> Minutes {
        cutting_time * self.rapid_time_factor
    }

    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn idle_time(&self, n_operations: usize) -> Minutes {
        self.setup_time + self.idle_time_per_op * n_operations as f64
    }

    #[must_use]
    pub fn breakdown(&self, cutting_time: Minutes, n_operations: usize) -> TimeBreakdown {
        TimeBreakdown {
            cutting: cutting_time,
            rapid: self.rapid_time(cutting_time),
            idle: self.idle_time(n_operations),
        }
    }
}

/// Per-component machining time. Inputs are passed through unvalidated, so a
/// negative component stays negative in the total.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeBreakdown {
    pub cutting: Minutes,
    pub rapid: Minutes,
    pub idle: Minutes,
}

impl TimeBreakdown {
    #[must_use]
    pub fn total(&self) -> Minutes {
        self.cutting + self.rapid + self.idle
    }
}
