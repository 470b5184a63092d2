// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Local rate governance: a session call budget and minimum call spacing.

/// Live calls allowed per session before degrading permanently.
pub const DEFAULT_CALL_BUDGET: u32 = 10;
/// Minimum gap between two live calls, in milliseconds.
pub const DEFAULT_MIN_SPACING_MS: u64 = 100;

/// Why a request was routed to the degraded path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DegradeReason {
    /// The session budget is spent; every later request degrades too.
    BudgetExhausted,
    /// The request arrived inside the spacing window; only this call degrades.
    Cooldown,
}

/// Routing decision for one expand request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// Send to the live service; one unit of budget was consumed.
    Live,
    /// Serve from the offline provider. Not an error: the user still gets a
    /// reply, just not a generated one.
    Degraded(DegradeReason),
}

/// Routes expand requests between the live service and the offline provider.
///
/// The budget is consumed only by live calls; degraded calls are free and do
/// not reset the spacing window.
#[derive(Clone, Copy, Debug)]
pub struct RateGovernor {
    budget: u32,
    used: u32,
    min_spacing_ms: u64,
    last_live_ms: Option<u64>,
}

impl Default for RateGovernor {
    fn default() -> Self {
        Self::new(DEFAULT_CALL_BUDGET, DEFAULT_MIN_SPACING_MS)
    }
}

impl RateGovernor {
    /// Creates a governor with an explicit budget and spacing.
    #[must_use]
    pub const fn new(budget: u32, min_spacing_ms: u64) -> Self {
        Self {
            budget,
            used: 0,
            min_spacing_ms,
            last_live_ms: None,
        }
    }

    /// Decides where the next request goes, consuming budget when live.
    pub fn route(&mut self, now_ms: u64) -> Route {
        if self.used >= self.budget {
            return Route::Degraded(DegradeReason::BudgetExhausted);
        }
        if let Some(last) = self.last_live_ms
            && now_ms.saturating_sub(last) < self.min_spacing_ms
        {
            return Route::Degraded(DegradeReason::Cooldown);
        }
        self.used += 1;
        self.last_live_ms = Some(now_ms);
        Route::Live
    }

    /// Live calls still available in this session.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.budget - self.used
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_calls_stay_live_until_budget_runs_out() {
        let mut governor = RateGovernor::new(3, 100);

        assert_eq!(governor.route(0), Route::Live);
        assert_eq!(governor.route(200), Route::Live);
        assert_eq!(governor.route(400), Route::Live);
        assert_eq!(governor.remaining(), 0);
    }

    #[test]
    fn exhausted_budget_degrades_permanently() {
        let mut governor = RateGovernor::new(1, 0);
        assert_eq!(governor.route(0), Route::Live);

        for t in [1_000, 100_000, 10_000_000] {
            assert_eq!(
                governor.route(t),
                Route::Degraded(DegradeReason::BudgetExhausted)
            );
        }
    }

    #[test]
    fn cooldown_degrades_only_the_rushed_call() {
        let mut governor = RateGovernor::new(10, 100);

        assert_eq!(governor.route(1_000), Route::Live);
        assert_eq!(
            governor.route(1_050),
            Route::Degraded(DegradeReason::Cooldown)
        );
        // The degraded call neither consumed budget nor reset the window.
        assert_eq!(governor.route(1_100), Route::Live);
        assert_eq!(governor.remaining(), 8);
    }

    #[test]
    fn exact_spacing_boundary_is_live() {
        let mut governor = RateGovernor::new(10, 100);
        assert_eq!(governor.route(500), Route::Live);
        assert_eq!(governor.route(600), Route::Live);
    }

    #[test]
    fn cooldown_never_consumes_budget() {
        let mut governor = RateGovernor::new(2, 1_000);
        assert_eq!(governor.route(0), Route::Live);
        for t in 1..50 {
            assert_eq!(governor.route(t), Route::Degraded(DegradeReason::Cooldown));
        }
        assert_eq!(governor.remaining(), 1);
        assert_eq!(governor.route(1_000), Route::Live);
    }
}
