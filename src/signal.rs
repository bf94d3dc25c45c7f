//! Widget signals.
//!
//! Every widget owns a [`SignalTable`] with a fixed, case-insensitive set of
//! signal names declared at construction. Hosts connect boxed handlers and
//! get back a [`SlotId`] for later disconnection; emission calls the live
//! handlers in registration order.

use indexmap::IndexMap;

use crate::geometry::Point;

/// The argument passed to signal handlers.
///
/// Which variant a signal carries is part of the widget's contract, e.g. a
/// button's `Clicked` carries the click position and a slider's
/// `ValueChanged` carries the new value.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Payload {
    #[default]
    None,
    Point(Point),
    Text(String),
    Number(f32),
    Flag(bool),
}

/// Identifies one connected handler within a table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SlotId(u64);

/// Errors from connecting to a signal.
#[derive(Debug, thiserror::Error)]
pub enum SignalError {
    #[error("widget has no signal named '{0}'")]
    UnknownSignal(String),
}

type Handler = Box<dyn FnMut(&Payload)>;

struct Slot {
    id: SlotId,
    handler: Handler,
}

/// A per-widget table of named signals and their connected handlers.
pub struct SignalTable {
    // Keyed by lowercase signal name; slots stay in registration order.
    signals: IndexMap<String, Vec<Slot>>,
    next_id: u64,
}

impl SignalTable {
    /// Create a table with the given signal names. Names are matched
    /// case-insensitively from then on.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let signals = names
            .into_iter()
            .map(|name| (name.as_ref().to_ascii_lowercase(), Vec::new()))
            .collect();
        Self { signals, next_id: 0 }
    }

    /// The declared signal names, in declaration order (lowercased).
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.signals.keys().map(String::as_str)
    }

    /// Whether a signal with this name exists.
    pub fn has(&self, name: &str) -> bool {
        self.signals.contains_key(&name.to_ascii_lowercase())
    }

    /// Connect a handler, returning its slot id.
    pub fn connect<F>(&mut self, name: &str, handler: F) -> Result<SlotId, SignalError>
    where
        F: FnMut(&Payload) + 'static,
    {
        let slots = self
            .signals
            .get_mut(&name.to_ascii_lowercase())
            .ok_or_else(|| SignalError::UnknownSignal(name.to_string()))?;
        let id = SlotId(self.next_id);
        self.next_id += 1;
        slots.push(Slot { id, handler: Box::new(handler) });
        Ok(id)
    }

    /// Disconnect a previously connected handler. Returns whether it was
    /// still connected.
    pub fn disconnect(&mut self, id: SlotId) -> bool {
        for slots in self.signals.values_mut() {
            if let Some(index) = slots.iter().position(|slot| slot.id == id) {
                slots.remove(index);
                return true;
            }
        }
        false
    }

    /// Emit a signal, invoking its handlers in registration order. Returns
    /// the number of handlers called; an unknown name calls none.
    pub fn emit(&mut self, name: &str, payload: &Payload) -> usize {
        match self.signals.get_mut(&name.to_ascii_lowercase()) {
            Some(slots) => {
                for slot in slots.iter_mut() {
                    (slot.handler)(payload);
                }
                slots.len()
            }
            None => 0,
        }
    }
}

impl std::fmt::Debug for SignalTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (name, slots) in &self.signals {
            map.entry(name, &slots.len());
        }
        map.finish()
    }
}
