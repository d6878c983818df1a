//! Diagnostic codes with category prefixes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a diagnostic code, determining its prefix letter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    /// Problems with the input netlist or layout, prefixed with `E`.
    Input,
    /// Placement warnings (bounded search, isolated gates), prefixed with `W`.
    Placement,
    /// Informational run summaries, prefixed with `N`.
    Run,
}

impl Category {
    /// Returns the single-character prefix for this category.
    pub fn prefix(self) -> char {
        match self {
            Category::Input => 'E',
            Category::Placement => 'W',
            Category::Run => 'N',
        }
    }
}

/// A structured diagnostic code combining a category prefix and a number.
///
/// Displayed as the prefix followed by a zero-padded 3-digit number, e.g.
/// `E101`, `W201`, `N301`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticCode {
    /// The category of this diagnostic.
    pub category: Category,
    /// The numeric identifier within the category.
    pub number: u16,
}

impl DiagnosticCode {
    /// A layout failed verification (overlap, negative coordinate, mismatch).
    pub const LAYOUT_VIOLATION: DiagnosticCode = DiagnosticCode::new(Category::Input, 101);
    /// A layout file does not mention every gate of the netlist.
    pub const LAYOUT_INCOMPLETE: DiagnosticCode = DiagnosticCode::new(Category::Input, 102);
    /// Annealing stopped on the iteration cap before the temperature floor.
    pub const ITERATION_CAP: DiagnosticCode = DiagnosticCode::new(Category::Placement, 201);
    /// Annealing stopped on the wall-clock deadline.
    pub const DEADLINE: DiagnosticCode = DiagnosticCode::new(Category::Placement, 202);
    /// A gate has no wires, so wire length does not guide its position.
    pub const ISOLATED_GATE: DiagnosticCode = DiagnosticCode::new(Category::Placement, 203);
    /// Summary of one placement attempt.
    pub const ATTEMPT_SUMMARY: DiagnosticCode = DiagnosticCode::new(Category::Run, 301);

    /// Creates a new diagnostic code.
    pub const fn new(category: Category, number: u16) -> Self {
        Self { category, number }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.category.prefix(), self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_prefixes() {
        assert_eq!(Category::Input.prefix(), 'E');
        assert_eq!(Category::Placement.prefix(), 'W');
        assert_eq!(Category::Run.prefix(), 'N');
    }

    #[test]
    fn display_format() {
        assert_eq!(format!("{}", DiagnosticCode::ITERATION_CAP), "W201");
        assert_eq!(format!("{}", DiagnosticCode::new(Category::Input, 7)), "E007");
        assert_eq!(format!("{}", DiagnosticCode::ATTEMPT_SUMMARY), "N301");
    }

    #[test]
    fn serde_roundtrip() {
        let code = DiagnosticCode::ISOLATED_GATE;
        let json = serde_json::to_string(&code).unwrap();
        let back: DiagnosticCode = serde_json::from_str(&json).unwrap();
        assert_eq!(code, back);
    }
}
