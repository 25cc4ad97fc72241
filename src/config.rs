use crate::enumerate::Strategy;
use crate::error::{Error, Result};
use crate::solver::Metrics;

/// A run over the square boards `from..=to` with one strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub strategy: Strategy,
    pub from: usize,
    pub to: usize,
    pub metrics: Metrics,
}

impl RunConfig {
    /// Sizes `1..=strategy.default_max_size()` with the strategy's default metrics.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            from: 1,
            to: strategy.default_max_size(),
            metrics: Metrics::for_strategy(strategy),
        }
    }

    /// Rejects ranges that are empty, start below 1, or exceed the strategy's
    /// size limit.
    pub fn validate(&self) -> Result<()> {
        if self.from > self.to {
            return Err(Error::EmptyRange {
                from: self.from,
                to: self.to,
            });
        }

        let max = self.strategy.size_limit();
        for size in [self.from, self.to] {
            if size == 0 || size > max {
                return Err(Error::SizeOutOfRange {
                    size,
                    max,
                    strategy: self.strategy,
                });
            }
        }
        Ok(())
    }
}
