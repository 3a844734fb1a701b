//! Polling reconciliation between a dial and the shared store.
//!
//! Each tick the store wins whenever it holds a valid value that differs from
//! the dial. If it holds nothing usable, the dial's value is written back so
//! the store reseeds itself. Contexts cannot message each other, so all
//! agreement comes from re-polling every period.

use crate::constants::SYNC_PERIOD_MS;
use crate::dial::{Dial, Surface};
use crate::store::{format_value, parse_value, SharedStore};
use crate::volume::VolumeSink;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SyncAction {
    /// Store was absent or corrupt; the local value is written to it.
    Seed(f64),
    /// Store holds a different value; the dial adopts it.
    Adopt(f64),
    Idle,
}

/// Decide what one tick should do. Inequality is exact, with no epsilon.
pub fn reconcile(local: f64, stored: Option<&str>) -> SyncAction {
    match stored.and_then(parse_value) {
        None => SyncAction::Seed(local),
        Some(v) if v != local => SyncAction::Adopt(v),
        Some(_) => SyncAction::Idle,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncStats {
    pub ticks: u64,
    pub seeds: u64,
    pub adoptions: u64,
}

#[derive(Clone, Debug)]
pub struct SyncLoop {
    period: Duration,
    stats: SyncStats,
}

impl Default for SyncLoop {
    fn default() -> Self {
        Self::new(Duration::from_millis(SYNC_PERIOD_MS as u64))
    }
}

impl SyncLoop {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            stats: SyncStats::default(),
        }
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    #[inline]
    pub fn stats(&self) -> SyncStats {
        self.stats
    }

    /// Run one reconciliation. Adopting goes through `Dial::update`, which
    /// does not fire change listeners, so an adopted value is never written
    /// back to the store in the same tick.
    pub fn tick<S, St, V>(&mut self, dial: &mut Dial<S>, store: &St, sink: &V) -> SyncAction
    where
        S: Surface,
        St: SharedStore + ?Sized,
        V: VolumeSink + ?Sized,
    {
        self.stats.ticks += 1;
        let stored = store.get();
        let action = reconcile(dial.value(), stored.as_deref());
        match action {
            SyncAction::Seed(local) => {
                log::debug!("[sync] store unusable ({:?}), seeding {}", stored, local);
                store.set(&format_value(local));
                self.stats.seeds += 1;
            }
            SyncAction::Adopt(v) => {
                log::info!("[sync] adopting {} (was {})", v, dial.value());
                dial.update(v);
                sink.set_volume(v);
                self.stats.adoptions += 1;
            }
            SyncAction::Idle => {}
        }
        action
    }
}
