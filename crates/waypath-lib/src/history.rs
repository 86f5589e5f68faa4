//! Bounded log of recent searches, most recent first.

use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;

use crate::graph::Location;
use crate::output::{format_amount, format_hours};
use crate::routing::RoutePlan;

/// Number of searches kept by [`RecentSearches::new`].
pub const RECENT_SEARCH_CAPACITY: usize = 3;

/// One completed search: endpoints plus the best route's time and cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentSearch {
    pub start: Location,
    pub goal: Location,
    pub travel_time_hours: f64,
    pub travel_cost: f64,
}

impl RecentSearch {
    pub fn from_plan(plan: &RoutePlan) -> Self {
        let best = plan.best();
        Self {
            start: plan.start.clone(),
            goal: plan.goal.clone(),
            travel_time_hours: best.travel_time_hours,
            travel_cost: best.travel_cost,
        }
    }
}

impl fmt::Display for RecentSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} → {} | {} hours | ₹{}",
            self.start,
            self.goal,
            format_hours(self.travel_time_hours),
            format_amount(self.travel_cost)
        )
    }
}

#[derive(Debug, Clone)]
pub struct RecentSearches {
    entries: VecDeque<RecentSearch>,
    capacity: usize,
}

impl Default for RecentSearches {
    fn default() -> Self {
        Self::new()
    }
}

impl RecentSearches {
    pub fn new() -> Self {
        Self::with_capacity(RECENT_SEARCH_CAPACITY)
    }

    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Insert at the front, evicting the oldest entry when full.
    pub fn record(&mut self, entry: RecentSearch) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    pub fn record_plan(&mut self, plan: &RoutePlan) {
        self.record(RecentSearch::from_plan(plan));
    }

    /// Entries, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &RecentSearch> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&RecentSearch> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
