//! Core board data structures.
//!
//! Defines the placement board: gates (fixed-size rectangles with named pins
//! and an optional position), wires (pin-to-pin connections), and the
//! [`Board`] that owns both and flows through the whole placement pipeline.

use crate::error::{PlaceError, PlaceResult};
use gplace_common::{GateId, Point, Rect, WireId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named attachment point at a fixed offset from its gate's origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pin {
    /// Pin name, unique within the gate.
    pub name: String,
    /// Offset from the gate's lower-left corner.
    pub offset: Point,
}

/// A fixed-size rectangular component.
///
/// Size and pins are fixed at construction. The position is `None` until the
/// greedy pass places the gate, so an unplaced gate is never mistaken for one
/// sitting at the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// Board-assigned ID.
    pub id: GateId,
    /// Unique gate name.
    pub name: String,
    /// Extent along x.
    pub width: i64,
    /// Extent along y.
    pub height: i64,
    /// Lower-left corner, once placed.
    pub position: Option<Point>,
    pins: Vec<Pin>,
    neighbors: Vec<GateId>,
}

impl Gate {
    /// Creates an unplaced gate without pins.
    ///
    /// Returns [`PlaceError::InvalidDimensions`] unless both sides are positive.
    pub fn new(name: impl Into<String>, width: i64, height: i64) -> PlaceResult<Self> {
        let name = name.into();
        if width <= 0 || height <= 0 {
            return Err(PlaceError::InvalidDimensions {
                gate: name,
                width,
                height,
            });
        }
        Ok(Self {
            id: GateId::from_raw(0),
            name,
            width,
            height,
            position: None,
            pins: Vec::new(),
            neighbors: Vec::new(),
        })
    }

    /// Declares a pin at `offset` from the gate origin.
    pub fn add_pin(&mut self, name: impl Into<String>, offset: Point) -> PlaceResult<()> {
        let name = name.into();
        if self.pin(&name).is_some() {
            return Err(PlaceError::DuplicatePin {
                gate: self.name.clone(),
                pin: name,
            });
        }
        self.pins.push(Pin { name, offset });
        Ok(())
    }

    /// Builder form of [`add_pin`](Self::add_pin).
    pub fn with_pin(mut self, name: impl Into<String>, offset: Point) -> PlaceResult<Self> {
        self.add_pin(name, offset)?;
        Ok(self)
    }

    /// Looks up a pin by name.
    pub fn pin(&self, name: &str) -> Option<&Pin> {
        self.pins.iter().find(|p| p.name == name)
    }

    /// All pins in declaration order.
    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    /// One entry per wire endpoint on the other side of a wire touching this
    /// gate, in wire order. Duplicates are kept.
    pub fn neighbors(&self) -> &[GateId] {
        &self.neighbors
    }

    /// Returns `true` once the gate has a position.
    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    /// The rectangle this gate would cover with its origin at `origin`.
    pub fn rect_at(&self, origin: Point) -> Rect {
        Rect::new(origin, self.width, self.height)
    }

    /// The rectangle the gate currently covers, if placed.
    pub fn rect(&self) -> Option<Rect> {
        self.position.map(|p| self.rect_at(p))
    }
}

/// One end of a wire: a gate and one of its pins.
///
/// The pin offset is resolved when the wire is added so cost evaluation never
/// has to look pins up by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// The gate this end attaches to.
    pub gate: GateId,
    /// The pin name on that gate.
    pub pin: String,
    /// The pin offset from the gate origin.
    pub offset: Point,
}

/// An undirected pin-to-pin connection.
///
/// Stored as start/end but every algorithm treats the two ends symmetrically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wire {
    /// Board-assigned ID.
    pub id: WireId,
    /// First endpoint.
    pub start: Endpoint,
    /// Second endpoint.
    pub end: Endpoint,
}

impl Wire {
    /// Returns `(own, other)` as seen from `gate`, or `None` if the wire does
    /// not touch it.
    pub fn ends_from(&self, gate: GateId) -> Option<(&Endpoint, &Endpoint)> {
        if self.start.gate == gate {
            Some((&self.start, &self.end))
        } else if self.end.gate == gate {
            Some((&self.end, &self.start))
        } else {
            None
        }
    }
}

/// The placement board.
///
/// Owns all gates (in insertion order) and wires, plus the derived bounding
/// box. Name and incidence indices are rebuilt after deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    /// All gates, indexed by [`GateId`].
    pub gates: Vec<Gate>,
    /// All wires, indexed by [`WireId`].
    pub wires: Vec<Wire>,
    /// Bounding-box width, as of the last bookkeeping pass.
    pub width: i64,
    /// Bounding-box height, as of the last bookkeeping pass.
    pub height: i64,
    /// Auxiliary index: gate name to ID.
    #[serde(skip)]
    gate_by_name: HashMap<String, GateId>,
    /// Auxiliary index: wires touching each gate, each listed once.
    #[serde(skip)]
    incident: Vec<Vec<WireId>>,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a gate and returns its ID.
    pub fn add_gate(&mut self, mut gate: Gate) -> PlaceResult<GateId> {
        if self.gate_by_name.contains_key(&gate.name) {
            return Err(PlaceError::DuplicateGate(gate.name));
        }
        let id = GateId::from_index(self.gates.len());
        gate.id = id;
        gate.neighbors.clear();
        self.gate_by_name.insert(gate.name.clone(), id);
        self.gates.push(gate);
        self.incident.push(Vec::new());
        Ok(id)
    }

    /// Connects `start_gate.start_pin` to `end_gate.end_pin` and returns the wire ID.
    ///
    /// Fails with [`PlaceError::UnknownGate`] or [`PlaceError::UnknownPin`]
    /// if either end does not resolve.
    pub fn add_wire(
        &mut self,
        start_gate: &str,
        start_pin: &str,
        end_gate: &str,
        end_pin: &str,
    ) -> PlaceResult<WireId> {
        let start = self.resolve_endpoint(start_gate, start_pin)?;
        let end = self.resolve_endpoint(end_gate, end_pin)?;
        let id = WireId::from_index(self.wires.len());

        self.gates[start.gate.index()].neighbors.push(end.gate);
        self.gates[end.gate.index()].neighbors.push(start.gate);
        self.incident[start.gate.index()].push(id);
        if end.gate != start.gate {
            self.incident[end.gate.index()].push(id);
        }

        self.wires.push(Wire { id, start, end });
        Ok(id)
    }

    fn resolve_endpoint(&self, gate_name: &str, pin_name: &str) -> PlaceResult<Endpoint> {
        let gate_id = self
            .gate_id(gate_name)
            .ok_or_else(|| PlaceError::UnknownGate(gate_name.to_string()))?;
        let pin = self
            .gate(gate_id)
            .pin(pin_name)
            .ok_or_else(|| PlaceError::UnknownPin {
                gate: gate_name.to_string(),
                pin: pin_name.to_string(),
            })?;
        Ok(Endpoint {
            gate: gate_id,
            pin: pin.name.clone(),
            offset: pin.offset,
        })
    }

    /// Returns the gate with the given ID.
    pub fn gate(&self, id: GateId) -> &Gate {
        &self.gates[id.index()]
    }

    /// Returns a mutable reference to the gate with the given ID.
    pub fn gate_mut(&mut self, id: GateId) -> &mut Gate {
        &mut self.gates[id.index()]
    }

    /// Looks up a gate ID by name.
    pub fn gate_id(&self, name: &str) -> Option<GateId> {
        self.gate_by_name.get(name).copied()
    }

    /// Looks up a gate by name.
    pub fn gate_by_name(&self, name: &str) -> Option<&Gate> {
        self.gate_id(name).map(|id| self.gate(id))
    }

    /// Returns the wire with the given ID.
    pub fn wire(&self, id: WireId) -> &Wire {
        &self.wires[id.index()]
    }

    /// Wires touching `gate`, each listed once.
    pub fn incident_wires(&self, gate: GateId) -> &[WireId] {
        &self.incident[gate.index()]
    }

    /// Returns the number of gates.
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    /// Returns the number of wires.
    pub fn wire_count(&self) -> usize {
        self.wires.len()
    }

    /// Returns the absolute position of an endpoint, if its gate is placed.
    pub fn endpoint_position(&self, end: &Endpoint) -> Option<Point> {
        self.gate(end.gate).position.map(|p| p + end.offset)
    }

    /// Returns whether all gates have been placed.
    pub fn is_fully_placed(&self) -> bool {
        self.gates.iter().all(Gate::is_placed)
    }

    /// Returns the number of placed gates.
    pub fn placed_count(&self) -> usize {
        self.gates.iter().filter(|g| g.is_placed()).count()
    }

    /// Marks every gate as unplaced.
    pub fn clear_positions(&mut self) {
        for gate in &mut self.gates {
            gate.position = None;
        }
    }

    /// Copies every gate position into `out`, reusing its allocation.
    pub fn snapshot_positions(&self, out: &mut Vec<Option<Point>>) {
        out.clear();
        out.extend(self.gates.iter().map(|g| g.position));
    }

    /// Returns a copy of every gate position, indexed by gate ID.
    pub fn positions(&self) -> Vec<Option<Point>> {
        let mut out = Vec::with_capacity(self.gates.len());
        self.snapshot_positions(&mut out);
        out
    }

    /// Restores positions taken by [`positions`](Self::positions).
    pub fn restore_positions(&mut self, positions: &[Option<Point>]) {
        for (gate, &pos) in self.gates.iter_mut().zip(positions) {
            gate.position = pos;
        }
    }

    /// Rebuilds auxiliary indices after deserialization.
    pub fn rebuild_indices(&mut self) {
        self.gate_by_name.clear();
        for (i, gate) in self.gates.iter().enumerate() {
            self.gate_by_name
                .insert(gate.name.clone(), GateId::from_index(i));
        }
        self.incident = vec![Vec::new(); self.gates.len()];
        for wire in &self.wires {
            self.incident[wire.start.gate.index()].push(wire.id);
            if wire.end.gate != wire.start.gate {
                self.incident[wire.end.gate.index()].push(wire.id);
            }
        }
    }
}
