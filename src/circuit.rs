//! Combinational circuits of inputs, AND/OR/NOT gates and outputs.
//!
//! Elements live in an arena and are referred to by [`NodeId`] handles.
//! Handles are never reused: removing an element leaves a tombstone and
//! [`Circuit::clear`] moves the handle range past every handle issued so far,
//! so a stale handle always fails with [`Error::UnknownNode`].
//!
//! Wires may form cycles; evaluation detects them and fails with
//! [`Error::CycleDetected`] instead of diverging.
//!
//! ```
//! use logic_rs::circuit::{Circuit, CircuitGate};
//!
//! let mut circuit = Circuit::new();
//! let a = circuit.add_input(true);
//! let b = circuit.add_input(false);
//! let or = circuit.add_gate(CircuitGate::Or);
//! let out = circuit.add_output();
//! circuit.connect(a, or).unwrap();
//! circuit.connect(b, or).unwrap();
//! circuit.connect(or, out).unwrap();
//! assert_eq!(circuit.evaluate_node(out), Ok(true));
//! ```

use std::fmt;

use log::{debug, trace};

use crate::enumerate::bit;
use crate::error::{Error, Result, WireError};
use crate::gate::GateKind;
use crate::table::MAX_VARIABLES_LIMIT;

/// Stable handle of a circuit element.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub fn id(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Gates available as circuit elements.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CircuitGate {
    And,
    Or,
    Not,
}

impl CircuitGate {
    pub fn kind(self) -> GateKind {
        match self {
            CircuitGate::And => GateKind::And,
            CircuitGate::Or => GateKind::Or,
            CircuitGate::Not => GateKind::Not,
        }
    }

    /// Output for the given fan-in values.
    ///
    /// AND and OR fold over all inputs; NOT reads only the first one. With no
    /// inputs every gate is false, including AND.
    pub fn eval(self, inputs: &[bool]) -> bool {
        let kind = self.kind();
        match self {
            CircuitGate::And | CircuitGate::Or => {
                inputs.iter().copied().reduce(|a, b| kind.apply(a, b)).unwrap_or(false)
            }
            CircuitGate::Not => inputs.first().map_or(false, |&a| kind.apply(a, false)),
        }
    }
}

impl fmt::Display for CircuitGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Element {
    /// User-toggleable source.
    Input { value: bool },
    Gate(CircuitGate),
    /// Display-only sink, showing the value of its first incoming wire.
    Output,
}

impl Element {
    pub fn is_input(&self) -> bool {
        matches!(self, Element::Input { .. })
    }

    pub fn is_output(&self) -> bool {
        matches!(self, Element::Output)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Input { value } => write!(f, "input({})", *value as u8),
            Element::Gate(gate) => write!(f, "{}", gate),
            Element::Output => write!(f, "output"),
        }
    }
}

/// Directed edge from one element's output to another element's input.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Wire {
    pub from: NodeId,
    pub to: NodeId,
}

#[derive(Debug, Clone, Default)]
pub struct Circuit {
    /// Handle of `elements[0]`. Everything below was issued before the last `clear`.
    base: u32,
    /// `None` marks a removed element.
    elements: Vec<Option<Element>>,
    wires: Vec<Wire>,
}

impl Circuit {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, id: NodeId) -> Option<usize> {
        let slot = id.0.checked_sub(self.base)? as usize;
        match self.elements.get(slot) {
            Some(Some(_)) => Some(slot),
            _ => None,
        }
    }

    fn id_at(&self, slot: usize) -> NodeId {
        NodeId(self.base + slot as u32)
    }
}

// Queries
impl Circuit {
    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.elements.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.slot(id).is_some()
    }

    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.slot(id).and_then(|slot| self.elements[slot].as_ref())
    }

    pub fn element(&self, id: NodeId) -> Result<&Element> {
        self.get(id).ok_or(Error::UnknownNode(id))
    }

    /// Live elements in creation order.
    pub fn elements(&self) -> impl Iterator<Item = (NodeId, &Element)> + '_ {
        self.elements
            .iter()
            .enumerate()
            .filter_map(|(slot, e)| e.as_ref().map(|e| (self.id_at(slot), e)))
    }

    pub fn wires(&self) -> &[Wire] {
        &self.wires
    }

    /// Input handles in creation order.
    pub fn inputs(&self) -> Vec<NodeId> {
        self.elements().filter(|(_, e)| e.is_input()).map(|(id, _)| id).collect()
    }

    /// Output handles in creation order.
    pub fn outputs(&self) -> Vec<NodeId> {
        self.elements().filter(|(_, e)| e.is_output()).map(|(id, _)| id).collect()
    }

    /// Sources of the wires ending at `id`, in the order the wires were added.
    pub fn fan_in(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.wires.iter().filter(move |w| w.to == id).map(|w| w.from)
    }
}

// Mutators
impl Circuit {
    pub fn add_element(&mut self, element: Element) -> NodeId {
        let id = self.id_at(self.elements.len());
        debug!("add_element({}) -> {}", element, id);
        self.elements.push(Some(element));
        id
    }

    pub fn add_input(&mut self, value: bool) -> NodeId {
        self.add_element(Element::Input { value })
    }

    pub fn add_gate(&mut self, gate: CircuitGate) -> NodeId {
        self.add_element(Element::Gate(gate))
    }

    pub fn add_output(&mut self) -> NodeId {
        self.add_element(Element::Output)
    }

    /// Adds a wire from `from` to `to`.
    ///
    /// Inputs cannot be driven and outputs cannot drive. Duplicate wires and
    /// cycles are accepted; cycles are reported when evaluated.
    pub fn connect(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        debug!("connect({}, {})", from, to);
        if self.element(from)?.is_output() {
            return Err(Error::InvalidWire {
                from,
                to,
                reason: WireError::FromOutput,
            });
        }
        if self.element(to)?.is_input() {
            return Err(Error::InvalidWire {
                from,
                to,
                reason: WireError::IntoInput,
            });
        }
        self.wires.push(Wire { from, to });
        Ok(())
    }

    /// Sets the value of input `id`.
    pub fn set_input(&mut self, id: NodeId, value: bool) -> Result<()> {
        debug!("set_input({}, {})", id, value);
        let slot = self.slot(id).ok_or(Error::UnknownNode(id))?;
        match &mut self.elements[slot] {
            Some(Element::Input { value: old }) => {
                *old = value;
                Ok(())
            }
            _ => Err(Error::NotAnInput(id)),
        }
    }

    /// Flips input `id` and returns its new value.
    pub fn toggle_input(&mut self, id: NodeId) -> Result<bool> {
        let value = match self.element(id)? {
            Element::Input { value } => !*value,
            _ => return Err(Error::NotAnInput(id)),
        };
        self.set_input(id, value)?;
        Ok(value)
    }

    /// Removes element `id` together with every wire touching it.
    pub fn remove_element(&mut self, id: NodeId) -> Result<Element> {
        debug!("remove_element({})", id);
        let slot = self.slot(id).ok_or(Error::UnknownNode(id))?;
        self.wires.retain(|w| w.from != id && w.to != id);
        self.elements[slot].take().ok_or(Error::UnknownNode(id))
    }

    /// Removes all elements and wires. Previously issued handles stay invalid.
    pub fn clear(&mut self) {
        debug!("clear()");
        self.base += self.elements.len() as u32;
        self.elements.clear();
        self.wires.clear();
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Mark {
    Unvisited,
    InProgress,
    Done(bool),
}

/// Element waiting for the values of its sources.
struct Frame {
    id: NodeId,
    slot: usize,
    element: Element,
    /// Sources the element reads: every wire for AND/OR, the first one for NOT and outputs.
    sources: Vec<NodeId>,
    /// Values of `sources[..inputs.len()]`.
    inputs: Vec<bool>,
}

/// One evaluation pass. Each element is evaluated at most once.
///
/// Sources are visited depth-first on an explicit stack, so arbitrarily long
/// chains of elements do not grow the native stack.
struct Evaluator<'a> {
    circuit: &'a Circuit,
    marks: Vec<Mark>,
}

impl<'a> Evaluator<'a> {
    fn new(circuit: &'a Circuit) -> Self {
        Self {
            circuit,
            marks: vec![Mark::Unvisited; circuit.elements.len()],
        }
    }

    fn eval(&mut self, root: NodeId) -> Result<bool> {
        let mut stack = Vec::new();
        let mut ready = self.visit(root, &mut stack)?;
        loop {
            let frame = match (ready.take(), stack.last_mut()) {
                (Some(value), None) => return Ok(value),
                (Some(value), Some(frame)) => {
                    frame.inputs.push(value);
                    frame
                }
                (None, Some(frame)) => frame,
                (None, None) => unreachable!(),
            };
            if let Some(&src) = frame.sources.get(frame.inputs.len()) {
                ready = self.visit(src, &mut stack)?;
                continue;
            }
            let Some(frame) = stack.pop() else {
                unreachable!()
            };
            let value = match frame.element {
                Element::Input { value } => value,
                Element::Gate(gate) => gate.eval(&frame.inputs),
                Element::Output => frame.inputs.first().copied().unwrap_or(false),
            };
            trace!("eval({}) = {}", frame.id, value);
            self.marks[frame.slot] = Mark::Done(value);
            ready = Some(value);
        }
    }

    /// Returns the value of `id` if it is already known, otherwise pushes it onto `stack`.
    fn visit(&mut self, id: NodeId, stack: &mut Vec<Frame>) -> Result<Option<bool>> {
        let slot = self.circuit.slot(id).ok_or(Error::UnknownNode(id))?;
        match self.marks[slot] {
            Mark::Done(value) => return Ok(Some(value)),
            Mark::InProgress => return Err(Error::CycleDetected(id)),
            Mark::Unvisited => {}
        }
        self.marks[slot] = Mark::InProgress;

        let element = *self.circuit.element(id)?;
        let sources = match element {
            Element::Input { .. } => Vec::new(),
            Element::Gate(CircuitGate::And | CircuitGate::Or) => self.circuit.fan_in(id).collect(),
            Element::Gate(CircuitGate::Not) | Element::Output => self.circuit.fan_in(id).take(1).collect(),
        };
        stack.push(Frame {
            id,
            slot,
            element,
            inputs: Vec::with_capacity(sources.len()),
            sources,
        });
        Ok(None)
    }
}

/// Values of every element after one evaluation pass.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CircuitValues {
    values: Vec<(NodeId, bool)>,
}

impl CircuitValues {
    pub fn get(&self, id: NodeId) -> Option<bool> {
        self.values.iter().find(|(i, _)| *i == id).map(|&(_, v)| v)
    }

    /// Value carried by `wire`, i.e. the value of its source.
    pub fn wire(&self, wire: &Wire) -> Option<bool> {
        self.get(wire.from)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, bool)> + '_ {
        self.values.iter().copied()
    }
}

// Evaluation
impl Circuit {
    /// Evaluates a single element.
    pub fn evaluate_node(&self, id: NodeId) -> Result<bool> {
        Evaluator::new(self).eval(id)
    }

    /// Evaluates every element in one pass, sharing results between them.
    pub fn evaluate(&self) -> Result<CircuitValues> {
        debug!("evaluate() over {} elements, {} wires", self.len(), self.wires.len());
        let mut evaluator = Evaluator::new(self);
        let values = self
            .elements()
            .map(|(id, _)| Ok((id, evaluator.eval(id)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(CircuitValues { values })
    }

    /// Output values for every combination of input values.
    ///
    /// Inputs are ordered by creation, the first being the most significant bit.
    /// The circuit itself is left unchanged.
    pub fn truth_table(&self) -> Result<CircuitTable> {
        let inputs = self.inputs();
        let outputs = self.outputs();
        if inputs.len() > MAX_VARIABLES_LIMIT {
            return Err(Error::TooManyVariables {
                count: inputs.len(),
                limit: MAX_VARIABLES_LIMIT,
            });
        }
        debug!("truth_table() over {} inputs, {} outputs", inputs.len(), outputs.len());

        let n = inputs.len();
        let mut scratch = self.clone();
        let mut rows = Vec::with_capacity(1 << n);
        for index in 0..1usize << n {
            let values: Vec<bool> = (0..n).map(|k| bit(index, n, k)).collect();
            for (&id, &value) in inputs.iter().zip(&values) {
                scratch.set_input(id, value)?;
            }
            let mut evaluator = Evaluator::new(&scratch);
            let results = outputs.iter().map(|&id| evaluator.eval(id)).collect::<Result<Vec<bool>>>()?;
            rows.push(CircuitRow {
                inputs: values,
                outputs: results,
            });
        }

        Ok(CircuitTable { inputs, outputs, rows })
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CircuitRow {
    pub inputs: Vec<bool>,
    pub outputs: Vec<bool>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CircuitTable {
    pub inputs: Vec<NodeId>,
    pub outputs: Vec<NodeId>,
    pub rows: Vec<CircuitRow>,
}

impl CircuitTable {
    /// Column of output `k` as a string of `0`s and `1`s, or `None` if there is no such output.
    pub fn output_bits(&self, k: usize) -> Option<String> {
        if k >= self.outputs.len() {
            return None;
        }
        Some(self.rows.iter().map(|row| if row.outputs[k] { '1' } else { '0' }).collect())
    }
}

impl fmt::Display for CircuitTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = |ids: &[NodeId]| ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(" ");
        writeln!(f, "{} | {}", names(&self.inputs[..]), names(&self.outputs[..]))?;
        for row in &self.rows {
            let cells = |values: &[bool]| values.iter().map(|&v| (v as u8).to_string()).collect::<Vec<_>>().join(" ");
            writeln!(f, "{} | {}", cells(&row.inputs[..]), cells(&row.outputs[..]))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_input_to_output() {
        let mut circuit = Circuit::new();
        let input = circuit.add_input(true);
        let output = circuit.add_output();
        circuit.connect(input, output).unwrap();
        assert_eq!(circuit.evaluate_node(output), Ok(true));

        assert_eq!(circuit.toggle_input(input), Ok(false));
        assert_eq!(circuit.evaluate_node(output), Ok(false));
    }

    #[test]
    fn test_and_or_gates() {
        let mut circuit = Circuit::new();
        let t = circuit.add_input(true);
        let f = circuit.add_input(false);
        let and = circuit.add_gate(CircuitGate::And);
        let or = circuit.add_gate(CircuitGate::Or);
        for gate in [and, or] {
            circuit.connect(t, gate).unwrap();
            circuit.connect(f, gate).unwrap();
        }
        assert_eq!(circuit.evaluate_node(and), Ok(false));
        assert_eq!(circuit.evaluate_node(or), Ok(true));
    }

    #[test]
    fn test_empty_fan_in_is_false() {
        let mut circuit = Circuit::new();
        let and = circuit.add_gate(CircuitGate::And);
        let or = circuit.add_gate(CircuitGate::Or);
        let not = circuit.add_gate(CircuitGate::Not);
        let out = circuit.add_output();
        assert_eq!(circuit.evaluate_node(and), Ok(false));
        assert_eq!(circuit.evaluate_node(or), Ok(false));
        assert_eq!(circuit.evaluate_node(not), Ok(false));
        assert_eq!(circuit.evaluate_node(out), Ok(false));
    }

    #[test]
    fn test_gate_eval_direct() {
        assert!(!CircuitGate::And.eval(&[]));
        assert!(CircuitGate::And.eval(&[true, true, true]));
        assert!(!CircuitGate::And.eval(&[true, false, true]));
        assert!(!CircuitGate::Or.eval(&[false, false]));
        assert!(CircuitGate::Or.eval(&[false, true, false]));
        assert!(CircuitGate::Not.eval(&[false, true]));
        assert!(!CircuitGate::Not.eval(&[]));
    }

    #[test]
    fn test_not_reads_first_wire() {
        let mut circuit = Circuit::new();
        let t = circuit.add_input(true);
        let f = circuit.add_input(false);
        let not = circuit.add_gate(CircuitGate::Not);
        circuit.connect(f, not).unwrap();
        circuit.connect(t, not).unwrap();
        assert_eq!(circuit.evaluate_node(not), Ok(true));
    }

    #[test]
    fn test_nested() {
        // out = not (a and b) or c
        let mut circuit = Circuit::new();
        let a = circuit.add_input(true);
        let b = circuit.add_input(true);
        let c = circuit.add_input(false);
        let and = circuit.add_gate(CircuitGate::And);
        let not = circuit.add_gate(CircuitGate::Not);
        let or = circuit.add_gate(CircuitGate::Or);
        let out = circuit.add_output();
        circuit.connect(a, and).unwrap();
        circuit.connect(b, and).unwrap();
        circuit.connect(and, not).unwrap();
        circuit.connect(not, or).unwrap();
        circuit.connect(c, or).unwrap();
        circuit.connect(or, out).unwrap();
        assert_eq!(circuit.evaluate_node(out), Ok(false));
        circuit.set_input(c, true).unwrap();
        assert_eq!(circuit.evaluate_node(out), Ok(true));
    }

    #[test]
    fn test_cycle_detected() {
        let mut circuit = Circuit::new();
        let x = circuit.add_input(true);
        let g1 = circuit.add_gate(CircuitGate::Or);
        let g2 = circuit.add_gate(CircuitGate::Not);
        let out = circuit.add_output();
        circuit.connect(x, g1).unwrap();
        circuit.connect(g2, g1).unwrap();
        circuit.connect(g1, g2).unwrap();
        circuit.connect(g2, out).unwrap();
        assert_eq!(circuit.evaluate_node(out), Err(Error::CycleDetected(g2)));
        assert!(matches!(circuit.evaluate(), Err(Error::CycleDetected(_))));
    }

    #[test]
    fn test_self_loop_detected() {
        let mut circuit = Circuit::new();
        let g = circuit.add_gate(CircuitGate::And);
        circuit.connect(g, g).unwrap();
        assert_eq!(circuit.evaluate_node(g), Err(Error::CycleDetected(g)));
    }

    #[test]
    fn test_shared_fan_in_is_not_a_cycle() {
        // Diamond: a feeds two gates that both feed the output gate.
        let mut circuit = Circuit::new();
        let a = circuit.add_input(true);
        let g1 = circuit.add_gate(CircuitGate::Or);
        let g2 = circuit.add_gate(CircuitGate::And);
        let g3 = circuit.add_gate(CircuitGate::And);
        circuit.connect(a, g1).unwrap();
        circuit.connect(a, g2).unwrap();
        circuit.connect(g1, g3).unwrap();
        circuit.connect(g2, g3).unwrap();
        assert_eq!(circuit.evaluate_node(g3), Ok(true));
    }

    #[test]
    fn test_deep_chain() {
        let mut circuit = Circuit::new();
        let mut prev = circuit.add_input(true);
        for _ in 0..1000 {
            let not = circuit.add_gate(CircuitGate::Not);
            circuit.connect(prev, not).unwrap();
            prev = not;
        }
        assert_eq!(circuit.evaluate_node(prev), Ok(true));
    }

    #[test]
    fn test_long_chain_and_loop() {
        let mut circuit = Circuit::new();
        let input = circuit.add_input(false);
        let head = circuit.add_gate(CircuitGate::Or);
        circuit.connect(input, head).unwrap();
        let mut prev = head;
        for i in 0..10_000 {
            let gate = circuit.add_gate(if i % 2 == 0 { CircuitGate::And } else { CircuitGate::Or });
            circuit.connect(prev, gate).unwrap();
            prev = gate;
        }
        let out = circuit.add_output();
        circuit.connect(prev, out).unwrap();
        assert_eq!(circuit.evaluate_node(out), Ok(false));
        circuit.toggle_input(input).unwrap();
        assert_eq!(circuit.evaluate_node(out), Ok(true));

        // Closing the chain into a loop: `head` reaches `prev` again while it is still pending.
        circuit.connect(prev, head).unwrap();
        assert_eq!(circuit.evaluate_node(out), Err(Error::CycleDetected(prev)));
    }

    #[test]
    fn test_invalid_wires() {
        let mut circuit = Circuit::new();
        let a = circuit.add_input(false);
        let b = circuit.add_input(false);
        let out = circuit.add_output();
        let g = circuit.add_gate(CircuitGate::Or);
        assert_eq!(
            circuit.connect(a, b),
            Err(Error::InvalidWire {
                from: a,
                to: b,
                reason: WireError::IntoInput
            })
        );
        assert_eq!(
            circuit.connect(out, g),
            Err(Error::InvalidWire {
                from: out,
                to: g,
                reason: WireError::FromOutput
            })
        );
        assert!(circuit.wires().is_empty());
    }

    #[test]
    fn test_toggle_non_input() {
        let mut circuit = Circuit::new();
        let g = circuit.add_gate(CircuitGate::And);
        assert_eq!(circuit.toggle_input(g), Err(Error::NotAnInput(g)));
        assert_eq!(circuit.set_input(g, true), Err(Error::NotAnInput(g)));
    }

    #[test]
    fn test_remove_element() {
        let mut circuit = Circuit::new();
        let a = circuit.add_input(true);
        let g = circuit.add_gate(CircuitGate::Or);
        let out = circuit.add_output();
        circuit.connect(a, g).unwrap();
        circuit.connect(g, out).unwrap();

        assert_eq!(circuit.remove_element(a), Ok(Element::Input { value: true }));
        assert_eq!(circuit.wires(), &[Wire { from: g, to: out }]);
        assert_eq!(circuit.evaluate_node(out), Ok(false));
        assert_eq!(circuit.evaluate_node(a), Err(Error::UnknownNode(a)));
        assert_eq!(circuit.remove_element(a), Err(Error::UnknownNode(a)));

        // Handles are not reused.
        let b = circuit.add_input(true);
        assert_ne!(a, b);
        assert_eq!(circuit.len(), 3);
    }

    #[test]
    fn test_clear() {
        let mut circuit = Circuit::new();
        let a = circuit.add_input(true);
        let out = circuit.add_output();
        circuit.connect(a, out).unwrap();
        circuit.clear();
        assert!(circuit.is_empty());
        assert!(circuit.wires().is_empty());
        assert_eq!(circuit.toggle_input(a), Err(Error::UnknownNode(a)));

        let b = circuit.add_input(false);
        assert!(b > out);
        assert!(!circuit.contains(a));
        assert!(circuit.contains(b));
    }

    #[test]
    fn test_evaluate_all() {
        let mut circuit = Circuit::new();
        let a = circuit.add_input(true);
        let not = circuit.add_gate(CircuitGate::Not);
        let out = circuit.add_output();
        circuit.connect(a, not).unwrap();
        circuit.connect(not, out).unwrap();

        let values = circuit.evaluate().unwrap();
        assert_eq!(values.iter().collect::<Vec<_>>(), vec![(a, true), (not, false), (out, false)]);
        let wires: Vec<Option<bool>> = circuit.wires().iter().map(|w| values.wire(w)).collect();
        assert_eq!(wires, vec![Some(true), Some(false)]);
    }

    #[test]
    fn test_truth_table() {
        // Half adder without XOR: sum = (a or b) and not (a and b), carry = a and b
        let mut circuit = Circuit::new();
        let a = circuit.add_input(false);
        let b = circuit.add_input(true);
        let or = circuit.add_gate(CircuitGate::Or);
        let and = circuit.add_gate(CircuitGate::And);
        let nand = circuit.add_gate(CircuitGate::Not);
        let sum_gate = circuit.add_gate(CircuitGate::And);
        let sum = circuit.add_output();
        let carry = circuit.add_output();
        circuit.connect(a, or).unwrap();
        circuit.connect(b, or).unwrap();
        circuit.connect(a, and).unwrap();
        circuit.connect(b, and).unwrap();
        circuit.connect(and, nand).unwrap();
        circuit.connect(or, sum_gate).unwrap();
        circuit.connect(nand, sum_gate).unwrap();
        circuit.connect(sum_gate, sum).unwrap();
        circuit.connect(and, carry).unwrap();

        let table = circuit.truth_table().unwrap();
        assert_eq!(table.inputs, vec![a, b]);
        assert_eq!(table.outputs, vec![sum, carry]);
        assert_eq!(table.output_bits(0).as_deref(), Some("0110"));
        assert_eq!(table.output_bits(1).as_deref(), Some("0001"));
        assert_eq!(table.output_bits(2), None);

        // Input values are untouched.
        assert_eq!(circuit.element(a), Ok(&Element::Input { value: false }));
        assert_eq!(circuit.element(b), Ok(&Element::Input { value: true }));
    }
}
