// Host-side tests for cross-context reconciliation.
// Each "context" is an AppContext; contexts share one MemoryStore through Rc,
// standing in for a cookie visible to several tabs.

mod common;

use common::{RecordingSink, RecordingSurface};
use dial_core::{
    reconcile, AppContext, Dial, DialConfig, MemoryStore, SharedStore, SyncAction, SyncLoop,
};
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Store that counts writes so tests can assert on them.
#[derive(Default)]
struct CountingStore {
    inner: MemoryStore,
    writes: RefCell<Vec<String>>,
}

impl CountingStore {
    fn with_value(value: &str) -> Self {
        Self {
            inner: MemoryStore::with_value(value),
            writes: RefCell::new(Vec::new()),
        }
    }
}

impl SharedStore for CountingStore {
    fn get(&self) -> Option<String> {
        self.inner.get()
    }

    fn set(&self, value: &str) {
        self.writes.borrow_mut().push(value.to_string());
        self.inner.set(value);
    }
}

type TestApp<St> = AppContext<RecordingSurface, St, RecordingSink>;

fn context<St: SharedStore + 'static>(value: f64, store: Rc<St>) -> TestApp<St> {
    let dial = Dial::new(
        DialConfig {
            value,
            ..DialConfig::default()
        },
        RecordingSurface::default(),
    )
    .unwrap();
    AppContext::new(
        dial,
        store,
        Rc::new(RecordingSink::default()),
        SyncLoop::default(),
    )
}

#[test]
fn reconcile_decisions() {
    assert_eq!(reconcile(0.7, None), SyncAction::Seed(0.7));
    assert_eq!(reconcile(0.7, Some("")), SyncAction::Seed(0.7));
    assert_eq!(reconcile(0.7, Some("loud")), SyncAction::Seed(0.7));
    assert_eq!(reconcile(0.7, Some("NaN")), SyncAction::Seed(0.7));
    assert_eq!(reconcile(0.7, Some("2.5")), SyncAction::Seed(0.7));
    assert_eq!(reconcile(0.7, Some("0.42")), SyncAction::Adopt(0.42));
    assert_eq!(reconcile(0.7, Some("0.7")), SyncAction::Idle);
}

#[test]
fn reconcile_has_no_epsilon() {
    let local = 0.1 + 0.2;
    assert_eq!(reconcile(local, Some("0.3")), SyncAction::Adopt(0.3));
}

#[test]
fn default_period_is_100ms() {
    assert_eq!(SyncLoop::default().period(), Duration::from_millis(100));
}

#[test]
fn absent_store_is_seeded_once_without_update() {
    let store = Rc::new(CountingStore::default());
    let mut app = context(0.7, store.clone());
    let ops_before = app.dial().surface().ops.len();

    assert_eq!(app.sync_tick(), SyncAction::Seed(0.7));
    assert_eq!(*store.writes.borrow(), vec!["0.7".to_string()]);
    assert_eq!(app.dial().surface().ops.len(), ops_before);
    assert!(app.sink().volumes.borrow().is_empty());
}

#[test]
fn out_of_range_start_value_is_refused() {
    let cfg = DialConfig {
        value: 1.5,
        ..DialConfig::default()
    };
    assert!(Dial::new(cfg, RecordingSurface::default()).is_err());
}

#[test]
fn seeding_settles_after_one_write() {
    let store = Rc::new(CountingStore::default());
    let mut app = context(1.0, store.clone());
    let actions: Vec<_> = (0..5).map(|_| app.sync_tick()).collect();
    assert_eq!(actions[0], SyncAction::Seed(1.0));
    assert!(actions[1..].iter().all(|a| *a == SyncAction::Idle));
    assert_eq!(store.writes.borrow().len(), 1);
}

#[test]
fn corrupt_store_is_reseeded_with_local_value() {
    let store = Rc::new(CountingStore::with_value("garbage"));
    let mut app = context(0.25, store.clone());
    app.sync_tick();
    assert_eq!(store.get().as_deref(), Some("0.25"));
}

#[test]
fn differing_store_value_is_adopted_without_write_back() {
    let store = Rc::new(CountingStore::with_value("0.42"));
    let mut app = context(0.7, store.clone());

    assert_eq!(app.sync_tick(), SyncAction::Adopt(0.42));
    assert_eq!(app.value(), 0.42);
    assert_eq!(*app.sink().volumes.borrow(), vec![0.42]);
    assert!(store.writes.borrow().is_empty());
}

#[test]
fn adoption_redraws_the_dial() {
    let store = Rc::new(MemoryStore::with_value("0.5"));
    let mut app = context(0.0, store);
    app.sync_tick();
    let has_label = app.dial().surface().frame().iter().any(|op| {
        matches!(op, common::DrawOp::Text { text, .. } if text == "50")
    });
    assert!(has_label);
}

#[test]
fn matching_store_is_a_fixed_point() {
    let store = Rc::new(CountingStore::with_value("0.7"));
    let mut app = context(0.7, store.clone());
    let ops_before = app.dial().surface().ops.len();

    for _ in 0..3 {
        assert_eq!(app.sync_tick(), SyncAction::Idle);
    }
    assert!(store.writes.borrow().is_empty());
    assert!(app.sink().volumes.borrow().is_empty());
    assert_eq!(app.dial().surface().ops.len(), ops_before);
}

#[test]
fn stats_count_ticks_and_actions() {
    let store = Rc::new(MemoryStore::new());
    let mut app = context(0.7, store.clone());
    app.sync_tick(); // seed
    app.sync_tick(); // idle
    store.set("0.1");
    app.sync_tick(); // adopt

    let stats = app.sync().stats();
    assert_eq!(stats.ticks, 3);
    assert_eq!(stats.seeds, 1);
    assert_eq!(stats.adoptions, 1);
}

#[test]
fn local_drag_writes_store_and_sink() {
    let store = Rc::new(CountingStore::default());
    let mut app = context(0.7, store.clone());

    let v = app.press(DVec2::new(50.0, 10.0)).unwrap();
    app.release();

    assert_eq!(*store.writes.borrow(), vec!["0.5".to_string()]);
    assert_eq!(*app.sink().volumes.borrow(), vec![v]);
    // The next tick sees its own write and does nothing.
    assert_eq!(app.sync_tick(), SyncAction::Idle);
}

#[test]
fn two_contexts_converge_on_the_last_write() {
    let store = Rc::new(MemoryStore::new());
    let mut tab_a = context(0.7, store.clone());
    let mut tab_b = context(0.7, store.clone());

    // A seeds the empty store, B already agrees.
    assert_eq!(tab_a.sync_tick(), SyncAction::Seed(0.7));
    assert_eq!(tab_b.sync_tick(), SyncAction::Idle);

    // User drags in B; A picks it up on its next poll.
    tab_b.press(DVec2::new(50.0, 10.0));
    tab_b.release();
    assert_eq!(tab_a.sync_tick(), SyncAction::Adopt(0.5));
    assert_eq!(tab_a.value(), tab_b.value());
    assert_eq!(*tab_a.sink().volumes.borrow(), vec![0.5]);

    // Both now sit at a fixed point.
    assert_eq!(tab_a.sync_tick(), SyncAction::Idle);
    assert_eq!(tab_b.sync_tick(), SyncAction::Idle);
}

#[test]
fn reload_starts_from_default_then_adopts_stored_value() {
    let store = Rc::new(MemoryStore::with_value("0.33"));
    // A freshly loaded context starts at its own default.
    let mut reloaded = context(0.7, store);
    assert_eq!(reloaded.value(), 0.7);
    reloaded.sync_tick();
    assert_eq!(reloaded.value(), 0.33);
}
