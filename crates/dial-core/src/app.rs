//! Application context tying one dial to its store, its volume sink and its
//! sync loop. Build it once and hand it to whatever needs it.

use crate::dial::{Dial, Surface};
use crate::store::{format_value, SharedStore};
use crate::sync::{SyncAction, SyncLoop};
use crate::volume::VolumeSink;
use glam::DVec2;
use std::rc::Rc;

pub struct AppContext<S: Surface, St: SharedStore, V: VolumeSink> {
    dial: Dial<S>,
    store: Rc<St>,
    sink: Rc<V>,
    sync: SyncLoop,
}

impl<S, St, V> AppContext<S, St, V>
where
    S: Surface,
    St: SharedStore + 'static,
    V: VolumeSink + 'static,
{
    /// Wire the dial so that every pointer-driven change reaches the sink and
    /// the store, then render the starting value.
    pub fn new(mut dial: Dial<S>, store: Rc<St>, sink: Rc<V>, sync: SyncLoop) -> Self {
        let store_cb = store.clone();
        let sink_cb = sink.clone();
        dial.on_change(move |value| {
            sink_cb.set_volume(value);
            store_cb.set(&format_value(value));
        });
        let initial = dial.value();
        dial.update(initial);
        Self {
            dial,
            store,
            sink,
            sync,
        }
    }

    #[inline]
    pub fn dial(&self) -> &Dial<S> {
        &self.dial
    }

    #[inline]
    pub fn dial_mut(&mut self) -> &mut Dial<S> {
        &mut self.dial
    }

    #[inline]
    pub fn store(&self) -> &Rc<St> {
        &self.store
    }

    #[inline]
    pub fn sink(&self) -> &Rc<V> {
        &self.sink
    }

    #[inline]
    pub fn sync(&self) -> &SyncLoop {
        &self.sync
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.dial.value()
    }

    pub fn press(&mut self, px: DVec2) -> Option<f64> {
        self.dial.press(px)
    }

    pub fn drag_to(&mut self, px: DVec2) -> Option<f64> {
        self.dial.drag_to(px)
    }

    pub fn release(&mut self) {
        self.dial.release();
    }

    pub fn sync_tick(&mut self) -> SyncAction {
        self.sync.tick(&mut self.dial, &*self.store, &*self.sink)
    }
}
