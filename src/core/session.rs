use crate::catalog::MenuDocument;
use crate::config::RouletteConfig;
use crate::core::aggregator::{
    CategoryFilter, FilterOption, FlattenedDrink, filter_by_category, filter_options, flatten_all,
};
use crate::core::presenter::{DrinkSummary, present};
use crate::core::spin::{
    EngineState, SpinAnimation, SpinEngine, SpinHandle, SpinOutcome, SpinRandom, SpinTrigger,
};
use crate::core::wheel::WedgeSet;
use crate::error::{MenuError, Result};
use std::sync::Arc;

/// A finished spin and the drink it landed on
#[derive(Clone, Debug, PartialEq)]
pub struct RouletteResult {
    pub outcome: SpinOutcome,
    pub drink: FlattenedDrink,
    pub summary: DrinkSummary,
}

/// A spin the session has not collected yet, with the wheel it was spun on
#[derive(Debug)]
struct PendingSpin {
    handle: SpinHandle,
    wheel: WedgeSet,
}

/// State of one open roulette: filter, wheel, engine and last result.
///
/// Created when the roulette opens and dropped when it closes; dropping
/// cancels any spin still in flight.
#[derive(Debug)]
pub struct RouletteSession {
    document: Arc<MenuDocument>,
    config: RouletteConfig,
    options: Vec<FilterOption>,
    filter: CategoryFilter,
    wheel: Option<WedgeSet>,
    engine: SpinEngine,
    pending: Option<PendingSpin>,
    result: Option<RouletteResult>,
}

impl RouletteSession {
    /// Open a roulette over every drink in `document`
    pub fn open(document: Arc<MenuDocument>, config: RouletteConfig) -> Self {
        let engine = SpinEngine::new(&config);
        Self::with_engine(document, config, engine)
    }

    /// Open a roulette whose draws come from `rng`
    pub fn open_with_random(
        document: Arc<MenuDocument>,
        config: RouletteConfig,
        rng: Box<dyn SpinRandom>,
    ) -> Self {
        let engine = SpinEngine::with_random(&config, rng);
        Self::with_engine(document, config, engine)
    }

    fn with_engine(document: Arc<MenuDocument>, config: RouletteConfig, engine: SpinEngine) -> Self {
        let mut session = Self {
            options: filter_options(&document),
            document,
            config,
            filter: CategoryFilter::All,
            wheel: None,
            engine,
            pending: None,
            result: None,
        };
        session.rebuild_wheel();
        session
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Entries for the filter selector, "All drinks" first
    pub fn filter_options(&self) -> &[FilterOption] {
        &self.options
    }

    /// Current wheel; `None` when the filter matches no drinks
    pub fn wheel(&self) -> Option<&WedgeSet> {
        self.wheel.as_ref()
    }

    /// Whether the current filter left nothing to spin
    pub fn has_no_matches(&self) -> bool {
        self.wheel.is_none()
    }

    pub fn state(&self) -> EngineState {
        self.engine.state()
    }

    pub fn trigger(&self) -> SpinTrigger {
        self.engine.trigger()
    }

    /// Angle the wheel rests at or is heading to
    pub fn angle(&self) -> f64 {
        self.engine.angle()
    }

    /// Sweep of the spin in flight
    pub fn animation(&self) -> Option<&SpinAnimation> {
        self.pending.as_ref().map(|pending| pending.handle.animation())
    }

    /// Result of the last completed spin
    pub fn result(&self) -> Option<&RouletteResult> {
        self.result.as_ref()
    }

    /// Whether a spin is running or its outcome has not been collected
    pub fn is_spinning(&self) -> bool {
        self.engine.is_spinning() || self.pending.is_some()
    }

    /// Switch the filter and rebuild the wheel.
    ///
    /// A finished spin is collected first. Refused while a spin is still
    /// outstanding.
    pub fn set_filter(&mut self, filter: CategoryFilter) -> Result<()> {
        self.poll_outcome();
        if self.is_spinning() {
            tracing::debug!("Ignoring filter change to '{}' during spin", filter);
            return Err(MenuError::SpinInProgress);
        }
        if filter == self.filter {
            return Ok(());
        }

        self.filter = filter;
        self.engine.reset();
        self.rebuild_wheel();
        Ok(())
    }

    /// Cycle to the next filter option, wrapping around
    pub fn next_filter(&mut self) -> Result<()> {
        let position = self
            .options
            .iter()
            .position(|option| option.filter == self.filter)
            .unwrap_or(0);
        let next = self.options[(position + 1) % self.options.len()].filter.clone();
        self.set_filter(next)
    }

    fn rebuild_wheel(&mut self) {
        let drinks = filter_by_category(&flatten_all(&self.document), &self.filter);
        self.wheel = match WedgeSet::build_with_limit(&drinks, self.config.max_wedges, &self.filter) {
            Ok(wheel) => {
                tracing::debug!(
                    "Built wheel for '{}': {} of {} drinks",
                    self.filter,
                    wheel.len(),
                    drinks.len()
                );
                Some(wheel)
            }
            Err(e) => {
                tracing::debug!("No wheel for '{}': {}", self.filter, e);
                None
            }
        };
    }

    /// Start a spin.
    ///
    /// Returns the sweep to animate, or `None` when a spin is already
    /// running and the request was dropped.
    pub fn spin(&mut self) -> Result<Option<SpinAnimation>> {
        // An emitted outcome stays queued until it is collected
        if self.pending.is_some() {
            tracing::debug!("Spin request dropped, previous outcome not collected");
            return Ok(None);
        }

        match self.engine.spin(self.wheel.as_ref()) {
            Ok(handle) => {
                let animation = *handle.animation();
                let wheel = self.wheel.clone().ok_or(MenuError::NoWheel)?;
                self.result = None;
                self.pending = Some(PendingSpin { handle, wheel });
                Ok(Some(animation))
            }
            Err(MenuError::SpinInProgress) => {
                tracing::debug!("Spin request dropped, one is already running");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Collect the outcome if the running spin has finished
    pub fn poll_outcome(&mut self) -> Option<&RouletteResult> {
        let outcome = self.pending.as_mut()?.handle.try_outcome()?;
        let pending = self.pending.take()?;
        self.settle(outcome, &pending.wheel)
    }

    /// Wait for the running spin; `None` if nothing is running or it was
    /// cancelled
    pub async fn wait_outcome(&mut self) -> Option<&RouletteResult> {
        let PendingSpin { handle, wheel } = self.pending.take()?;
        let outcome = handle.outcome().await?;
        self.settle(outcome, &wheel)
    }

    /// Resolve `outcome` against the wheel it was spun on
    fn settle(&mut self, outcome: SpinOutcome, wheel: &WedgeSet) -> Option<&RouletteResult> {
        let drink = wheel.get(outcome.chosen_index)?.clone();
        tracing::debug!("Spin {} landed on {}", outcome.spin_id, drink.name());

        let summary = present(&drink);
        self.result = Some(RouletteResult {
            outcome,
            drink,
            summary,
        });
        self.result.as_ref()
    }

    /// Stop any running spin; its outcome is discarded
    pub fn close(&mut self) {
        self.engine.cancel();
        self.pending = None;
    }
}

impl Drop for RouletteSession {
    fn drop(&mut self) {
        self.close();
    }
}
