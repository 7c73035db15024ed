//! The l_system module provides a simple Lindenmayer string rewriter for use with
//! plotted line-art, plus the built-in space-filling curve grammars. Take a look at
//! the [`crate::l_system::LSystem`] struct for more details.

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::errors::GenError;

/// Default ceiling on the length of an expanded string.
pub const DEFAULT_MAX_SYMBOLS: usize = 4_000_000;

/// Default ceiling on the number of rewrite passes.
pub const DEFAULT_MAX_PASSES: u32 = 64;

/// # LSystem
///
/// An axiom plus an ordered list of `(symbol, replacement)` rules. When two
/// rules share a symbol the first one wins; symbols without a rule are copied
/// through unchanged.
///
/// # Example
///
/// ```rust
/// use plotty_curves::l_system::LSystem;
///
/// let arrowhead = LSystem::new("AF", &[('A', "BF+AF+B"), ('B', "AF-BF-A")]);
/// assert_eq!(arrowhead.expand(1).unwrap(), "BF+AF+BF");
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LSystem {
    pub axiom: String,
    pub rules: Vec<(char, String)>,
}

impl LSystem {
    pub fn new(axiom: &str, rules: &[(char, &str)]) -> LSystem {
        LSystem {
            axiom: axiom.to_string(),
            rules: rules
                .iter()
                .map(|(symbol, replacement)| (*symbol, replacement.to_string()))
                .collect(),
        }
    }

    fn replacement(&self, symbol: char) -> Option<&str> {
        self.rules
            .iter()
            .find(|(lhs, _)| *lhs == symbol)
            .map(|(_, rhs)| rhs.as_str())
    }

    /// One full left-to-right substitution pass. Fails as soon as the output
    /// grows past `max_symbols`.
    pub fn rewrite(&self, state: &str, max_symbols: usize) -> Result<String, GenError> {
        let mut out = String::with_capacity(state.len().min(max_symbols));
        let mut symbols = 0usize;
        for c in state.chars() {
            match self.replacement(c) {
                Some(rhs) => {
                    out.push_str(rhs);
                    symbols += rhs.chars().count();
                }
                None => {
                    out.push(c);
                    symbols += 1;
                }
            }
            if symbols > max_symbols {
                warn!(max_symbols, "l-system expansion exceeded symbol cap");
                return Err(GenError::NonTerminating(format!(
                    "expanded string exceeds {} symbols",
                    max_symbols
                )));
            }
        }
        Ok(out)
    }

    /// #expand
    ///
    /// Expands the L-system by the requested "order" of iterations, with the
    /// default symbol and pass caps. Useful with
    /// [`crate::turtle::TurtleTrait::walk_lpath`]
    pub fn expand(&self, order: u32) -> Result<String, GenError> {
        self.expand_bounded(order, DEFAULT_MAX_SYMBOLS, DEFAULT_MAX_PASSES)
    }

    /// Like [`LSystem::expand`] with explicit caps on the string length and
    /// on `order` itself.
    pub fn expand_bounded(
        &self,
        order: u32,
        max_symbols: usize,
        max_passes: u32,
    ) -> Result<String, GenError> {
        if order > max_passes {
            warn!(order, max_passes, "l-system pass cap");
            return Err(GenError::NonTerminating(format!(
                "{} rewrite passes requested, cap is {}",
                order, max_passes
            )));
        }
        let mut state = self.axiom.clone();
        for pass in 0..order {
            let next = self.rewrite(&state, max_symbols)?;
            trace!(pass, bytes = next.len(), "l-system pass");
            // A pass that changes nothing is a fixed point.
            if next == state {
                break;
            }
            state = next;
        }
        Ok(state)
    }
}

/// How to walk an expanded string: segment length and turn angle in degrees.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct DrawSpec {
    pub length: f64,
    pub angle: f64,
}

/// The built-in space-filling curves.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CurvePreset {
    Hilbert,
    Gosper,
    #[default]
    SierpinskiArrowhead,
}

impl CurvePreset {
    pub fn all() -> &'static [CurvePreset] {
        &[
            CurvePreset::Hilbert,
            CurvePreset::Gosper,
            CurvePreset::SierpinskiArrowhead,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            CurvePreset::Hilbert => "hilbert_curve",
            CurvePreset::Gosper => "gosper_curve",
            CurvePreset::SierpinskiArrowhead => "sierpinski_arrowhead",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CurvePreset::Hilbert => "Hilbert Curve",
            CurvePreset::Gosper => "Gosper Curve",
            CurvePreset::SierpinskiArrowhead => "Sierpinski Arrowhead",
        }
    }

    pub fn from_key(key: &str) -> Option<CurvePreset> {
        Self::all().iter().copied().find(|preset| preset.key() == key)
    }

    pub fn system(&self) -> LSystem {
        match self {
            CurvePreset::Hilbert => {
                LSystem::new("A", &[('A', "-BF+AFA+FB-"), ('B', "+AF-BFB-FA+")])
            }
            // F-based variant of the flowsnake so only F draws.
            CurvePreset::Gosper => LSystem::new(
                "A",
                &[
                    ('A', "A+BF++BF-FA--FAFA-BF+"),
                    ('B', "-FA+BFBF++BF+FA--FA-B"),
                ],
            ),
            CurvePreset::SierpinskiArrowhead => {
                LSystem::new("AF", &[('A', "BF+AF+B"), ('B', "AF-BF-A")])
            }
        }
    }

    /// Turn angle in degrees.
    pub fn angle(&self) -> f64 {
        match self {
            CurvePreset::Hilbert => 90.0,
            CurvePreset::Gosper | CurvePreset::SierpinskiArrowhead => 60.0,
        }
    }

    pub fn draw(&self, length: f64) -> DrawSpec {
        DrawSpec {
            length,
            angle: self.angle(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_expand_simple() {
        let system = LSystem::new("A", &[('A', "AB"), ('B', "A")]);
        assert_eq!(system.expand(2).unwrap(), "ABA");
        assert_eq!(system.expand(5).unwrap(), "ABAABABAABAAB");
    }

    #[test]
    fn test_zero_order_is_axiom() {
        let system = CurvePreset::Gosper.system();
        assert_eq!(system.expand(0).unwrap(), "A");
    }

    #[test]
    fn test_sierpinski_one_pass() {
        let system = CurvePreset::SierpinskiArrowhead.system();
        assert_eq!(system.expand(1).unwrap(), "BF+AF+BF");
        assert_eq!(system.expand(2).unwrap(), "AF-BF-AF+BF+AF+BF+AF-BF-AF");
    }

    #[test]
    fn test_first_rule_wins() {
        let system = LSystem::new("AX", &[('A', "first"), ('A', "second")]);
        assert_eq!(system.expand(1).unwrap(), "firstX");
    }

    #[test]
    fn test_symbol_cap() {
        let system = CurvePreset::Hilbert.system();
        assert!(system.expand_bounded(3, 1_000_000, 64).is_ok());
        let err = system.expand_bounded(12, 10_000, 64).unwrap_err();
        assert!(matches!(err, GenError::NonTerminating(_)));
    }

    #[test]
    fn test_symbol_cap_counts_chars() {
        // Each replacement is 3 symbols but 6 bytes.
        let system = LSystem::new("A", &[('A', "αβγ")]);
        assert_eq!(system.expand_bounded(1, 3, 64).unwrap(), "αβγ");
        assert!(system.expand_bounded(1, 2, 64).is_err());
    }

    #[test]
    fn test_pass_cap_on_static_grammar() {
        // Nothing here ever matches a rule, so the string never grows.
        let system = LSystem::new("FF+F", &[('A', "B")]);
        let err = system
            .expand_bounded(u32::MAX, DEFAULT_MAX_SYMBOLS, DEFAULT_MAX_PASSES)
            .unwrap_err();
        assert!(matches!(err, GenError::NonTerminating(_)));
        assert!(matches!(system.expand(u32::MAX), Err(GenError::NonTerminating(_))));
    }

    #[test]
    fn test_cycling_grammar_hits_pass_cap() {
        let system = LSystem::new("A", &[('A', "B"), ('B', "A")]);
        assert_eq!(system.expand_bounded(64, 10, 64).unwrap(), "A");
        assert!(system.expand_bounded(65, 10, 64).is_err());
    }

    #[test]
    fn test_fixed_point_stops_early() {
        let system = LSystem::new("AF", &[('A', "B")]);
        assert_eq!(system.expand_bounded(40, 10, 64).unwrap(), "BF");
    }

    #[test]
    fn test_preset_keys() {
        for preset in CurvePreset::all() {
            assert_eq!(CurvePreset::from_key(preset.key()), Some(*preset));
        }
        assert_eq!(CurvePreset::from_key("dragon"), None);
        assert_eq!(CurvePreset::default(), CurvePreset::SierpinskiArrowhead);
    }

    #[test]
    fn test_presets_grow() {
        for preset in CurvePreset::all() {
            let system = preset.system();
            let one = system.expand(1).unwrap().len();
            let two = system.expand(2).unwrap().len();
            assert!(two > 2 * one, "{} did not grow", preset.key());
        }
    }
}
