// Step history for algorithm playback

pub mod value;

use std::ops::Index;

use value::{AuxState, Outcome, Scalar};

/// Logical point of the algorithm a step was captured at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Working state initialised, nothing examined yet
    Init,
    /// An input element is being examined
    Scan,
    /// Working state is being updated after an examination
    Update,
    /// Early exit: the loop found its answer
    Found,
    /// The loop ran to completion
    Done,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::Init,
        Phase::Scan,
        Phase::Update,
        Phase::Found,
        Phase::Done,
    ];

    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Found | Phase::Done)
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Init => "init",
            Phase::Scan => "scan",
            Phase::Update => "update",
            Phase::Found => "found",
            Phase::Done => "done",
        }
    }
}

/// One immutable snapshot of algorithm state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub phase: Phase,
    /// Input position being examined (None before scanning starts)
    pub cursor: Option<usize>,
    /// Variable name -> value, in display order
    pub variables: Vec<(String, Scalar)>,
    pub aux: AuxState,
    pub description: String,
    /// Present only on the terminal step
    pub result: Option<Outcome>,
}

impl Step {
    pub fn new(phase: Phase, description: impl Into<String>) -> Self {
        Step {
            phase,
            cursor: None,
            variables: Vec::new(),
            aux: AuxState::Empty,
            description: description.into(),
            result: None,
        }
    }

    pub fn at(mut self, cursor: usize) -> Self {
        self.cursor = Some(cursor);
        self
    }

    /// Append a variable; later entries display after earlier ones
    pub fn var(mut self, name: &str, value: impl Into<Scalar>) -> Self {
        self.variables.push((name.to_string(), value.into()));
        self
    }

    pub fn with_aux(mut self, aux: AuxState) -> Self {
        self.aux = aux;
        self
    }

    pub fn with_result(mut self, result: Outcome) -> Self {
        self.result = Some(result);
        self
    }

    pub fn is_terminal(&self) -> bool {
        self.result.is_some()
    }

    /// Look up a variable by name
    pub fn variable(&self, name: &str) -> Option<&Scalar> {
        self.variables
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }
}

/// Complete ordered step sequence for one input
///
/// A trace is never empty and its last step is its only terminal step. The
/// only way to obtain one is [`TraceBuilder::finish`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    /// Get a step by index
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Get the number of steps (always at least 1)
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Never true for a finished trace
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The terminal step
    pub fn terminal(&self) -> &Step {
        &self.steps[self.last_index()]
    }

    pub fn result(&self) -> Option<&Outcome> {
        self.terminal().result.as_ref()
    }

    /// Steps before the terminal one
    pub fn non_terminal_count(&self) -> usize {
        self.steps.len() - 1
    }
}

impl Index<usize> for Trace {
    type Output = Step;

    fn index(&self, index: usize) -> &Step {
        &self.steps[index]
    }
}

/// Append-only collector used by the generators
#[derive(Debug, Default)]
pub struct TraceBuilder {
    steps: Vec<Step>,
}

impl TraceBuilder {
    pub fn new() -> Self {
        TraceBuilder { steps: Vec::new() }
    }

    /// Add a non-terminal step to history
    pub fn push(&mut self, mut step: Step) {
        debug_assert!(
            step.result.is_none() && !step.phase.is_terminal(),
            "terminal step pushed before finish: {:?}",
            step.phase
        );
        step.result = None;
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Seal the trace with its terminal step
    pub fn finish(mut self, terminal: Step) -> Trace {
        debug_assert!(terminal.phase.is_terminal() && terminal.result.is_some());
        self.steps.push(terminal);
        Trace { steps: self.steps }
    }
}
