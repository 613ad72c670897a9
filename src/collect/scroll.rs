// src/collect/scroll.rs
//
// Scroll-until-stable as an explicit state machine. A page is "converged"
// once the card count stops growing for `stable_rounds` consecutive cycles;
// that is a heuristic, not a completion signal, so the loop is also capped.

use tokio::time::sleep;

use super::browser::Browser;
use crate::config::options::ScrollOptions;
use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollState {
    Scrolling { prev: usize, stable: u32, remaining: u32 },
    Converged { count: usize },
    BudgetExhausted { count: usize },
}

impl ScrollState {
    /// Before the first cycle the previous count is 0.
    pub fn start(opts: &ScrollOptions) -> Self {
        if opts.max_loops == 0 {
            ScrollState::BudgetExhausted { count: 0 }
        } else {
            ScrollState::Scrolling { prev: 0, stable: 0, remaining: opts.max_loops }
        }
    }

    /// Feed the count observed after one scroll/wait cycle.
    /// Terminal states absorb further observations.
    pub fn observe(self, curr: usize, stable_rounds: u32) -> Self {
        match self {
            ScrollState::Scrolling { prev, stable, remaining } => {
                transition(prev, curr, stable, remaining, stable_rounds)
            }
            done => done,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, ScrollState::Scrolling { .. })
    }

    pub fn count(&self) -> usize {
        match *self {
            ScrollState::Scrolling { prev, .. } => prev,
            ScrollState::Converged { count } | ScrollState::BudgetExhausted { count } => count,
        }
    }
}

/// Pure transition for one finished cycle. Convergence wins over an
/// exhausted budget when both happen on the same cycle.
pub fn transition(
    prev: usize,
    curr: usize,
    stable: u32,
    remaining: u32,
    stable_rounds: u32,
) -> ScrollState {
    let need = stable_rounds.max(1);
    let stable = if curr == prev { stable + 1 } else { 0 };
    if stable >= need {
        return ScrollState::Converged { count: curr };
    }
    let remaining = remaining.saturating_sub(1);
    if remaining == 0 {
        return ScrollState::BudgetExhausted { count: curr };
    }
    ScrollState::Scrolling { prev: curr, stable, remaining }
}

/// Run scroll/wait cycles on the current page until a terminal state.
pub async fn scroll_until_stable<B: Browser>(
    browser: &B,
    card_css: &str,
    opts: &ScrollOptions,
) -> Result<ScrollState> {
    let mut state = ScrollState::start(opts);
    while !state.is_terminal() {
        browser.scroll_to_bottom().await?;
        sleep(opts.wait).await;
        let curr = browser.count(card_css).await?;
        state = state.observe(curr, opts.stable_rounds);
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn opts(max_loops: u32, stable_rounds: u32) -> ScrollOptions {
        ScrollOptions { max_loops, stable_rounds, wait: Duration::ZERO }
    }

    fn run(counts: &[usize], o: &ScrollOptions) -> (ScrollState, usize) {
        let mut state = ScrollState::start(o);
        let mut cycles = 0;
        for &c in counts {
            if state.is_terminal() { break; }
            state = state.observe(c, o.stable_rounds);
            cycles += 1;
        }
        (state, cycles)
    }

    #[test]
    fn converges_on_first_repeat() {
        let (state, cycles) = run(&[10, 25, 25, 40], &opts(15, 1));
        assert_eq!(state, ScrollState::Converged { count: 25 });
        assert_eq!(cycles, 3);
    }

    #[test]
    fn empty_page_converges_after_one_cycle() {
        let (state, cycles) = run(&[0, 0], &opts(15, 1));
        assert_eq!(state, ScrollState::Converged { count: 0 });
        assert_eq!(cycles, 1);
    }

    #[test]
    fn budget_caps_a_page_that_keeps_growing() {
        let (state, cycles) = run(&[1, 2, 3, 4, 5, 6], &opts(3, 1));
        assert_eq!(state, ScrollState::BudgetExhausted { count: 3 });
        assert_eq!(cycles, 3);
    }

    #[test]
    fn stable_rounds_requires_consecutive_repeats() {
        let o = opts(15, 2);
        let (state, cycles) = run(&[10, 10, 20, 20, 20], &o);
        assert_eq!(state, ScrollState::Converged { count: 20 });
        assert_eq!(cycles, 5);
    }

    #[test]
    fn convergence_beats_budget_on_last_cycle() {
        assert_eq!(transition(7, 7, 0, 1, 1), ScrollState::Converged { count: 7 });
        assert_eq!(transition(7, 8, 0, 1, 1), ScrollState::BudgetExhausted { count: 8 });
    }

    #[test]
    fn zero_budget_never_scrolls() {
        assert_eq!(ScrollState::start(&opts(0, 1)), ScrollState::BudgetExhausted { count: 0 });
    }
}
