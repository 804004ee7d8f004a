//! Calculator session that applies keypad tokens.

use crate::builder::{CalculatorBuilder, CalculatorConfig};
use crate::core::{compute, number, Operator, Phase, State, Token};
use crate::enforcement::{InvalidNumberStrategy, OperandRules};
use crate::error::CalcError;
use crate::machine::snapshot::Snapshot;
use crate::notify::Notification;
use stillwater::validation::Validation;
use tracing::{debug, warn};
use uuid::Uuid;

/// Result of applying a single token
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult {
    /// The token was applied; the session is now in this phase
    Transitioned(Phase),

    /// The token was refused by an entry rule and nothing changed
    Ignored,

    /// An error was recovered by clearing the session; the notification
    /// must be shown to the user
    Cleared(Notification),
}

/// A calculator session.
///
/// # Example
///
/// ```rust
/// use reckon::core::Token;
/// use reckon::machine::Calculator;
///
/// let mut calc = Calculator::new();
/// for label in ["5", "+", "3", "=", "*", "2", "="] {
///     calc.press(Token::from_label(label).unwrap()).unwrap();
/// }
/// assert_eq!(calc.display(), "16.0");
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    id: Uuid,
    display: String,
    operand_a: f64,
    operand_b: f64,
    result: f64,
    pending: Option<Operator>,
    rules: OperandRules,
    max_entry_len: Option<usize>,
}

impl Calculator {
    /// Create a session with the default, permissive configuration.
    pub fn new() -> Self {
        Self::with_config(&CalculatorConfig::default())
    }

    pub fn builder() -> CalculatorBuilder {
        CalculatorBuilder::new()
    }

    pub(crate) fn with_config(config: &CalculatorConfig) -> Self {
        let id = Uuid::new_v4();
        debug!(session = %id, ?config, "calculator session created");
        Self {
            id,
            display: String::new(),
            operand_a: 0.0,
            operand_b: 0.0,
            result: 0.0,
            pending: None,
            rules: OperandRules::new(config.number_policy, config.on_invalid_number),
            max_entry_len: config.max_entry_len,
        }
    }

    /// Identifier used to correlate log events of this session.
    pub fn session_id(&self) -> Uuid {
        self.id
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn pending(&self) -> Option<Operator> {
        self.pending
    }

    pub fn operand_a(&self) -> f64 {
        self.operand_a
    }

    pub fn operand_b(&self) -> f64 {
        self.operand_b
    }

    pub fn result(&self) -> f64 {
        self.result
    }

    pub fn rules(&self) -> &OperandRules {
        &self.rules
    }

    pub fn phase(&self) -> Phase {
        match self.pending {
            None => Phase::Idle,
            Some(_) => Phase::OperatorPending,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display.clone(),
            operand_a: self.operand_a,
            operand_b: self.operand_b,
            result: self.result,
            pending: self.pending,
            phase: self.phase(),
        }
    }

    /// Apply one token.
    ///
    /// Returns `Err` only for an unreadable operand under
    /// [`InvalidNumberStrategy::Reject`], in which case the session is left
    /// exactly as it was. Division by zero is never an `Err`: the session is
    /// cleared and [`StepResult::Cleared`] carries the notification.
    pub fn press(&mut self, token: Token) -> Result<StepResult, CalcError> {
        let from = self.phase();

        let outcome = match token {
            Token::Digit(_) | Token::DecimalPoint => Ok(self.append(token)),
            Token::Operator(op) => self.select_operator(op),
            Token::Equals => self.evaluate(),
            Token::Clear => {
                self.clear();
                Ok(StepResult::Transitioned(Phase::Idle))
            }
        };

        debug!(
            session = %self.id,
            token = %token,
            from = from.name(),
            to = self.phase().name(),
            display = %self.display,
            "press"
        );

        outcome
    }

    /// Reset everything but the session's configuration and identity.
    pub fn clear(&mut self) {
        self.display.clear();
        self.operand_a = 0.0;
        self.operand_b = 0.0;
        self.result = 0.0;
        self.pending = None;
    }

    fn append(&mut self, token: Token) -> StepResult {
        let Some(symbol) = token.entry_char() else {
            return StepResult::Ignored;
        };
        if let Some(limit) = self.max_entry_len {
            if self.display.chars().count() >= limit {
                return StepResult::Ignored;
            }
        }
        if !self.rules.allows_append(&self.display, symbol) {
            return StepResult::Ignored;
        }

        self.display.push(symbol);
        StepResult::Transitioned(self.phase())
    }

    fn select_operator(&mut self, op: Operator) -> Result<StepResult, CalcError> {
        let operand = match self.read_operand() {
            Ok(value) => value,
            Err(err) => return self.refuse(err),
        };

        // A second operator before equals replaces the first; nothing is computed.
        if self.phase().awaits_operand() {
            debug!(session = %self.id, previous = ?self.pending, next = %op, "operator replaced");
        }
        self.operand_a = operand;
        self.pending = Some(op);
        self.display.clear();
        Ok(StepResult::Transitioned(Phase::OperatorPending))
    }

    fn evaluate(&mut self) -> Result<StepResult, CalcError> {
        let operand = match self.read_operand() {
            Ok(value) => value,
            Err(err) => return self.refuse(err),
        };
        self.operand_b = operand;

        // With nothing pending the previous result is shown again.
        if let Some(op) = self.pending {
            match compute(self.operand_a, self.operand_b, op) {
                Ok(value) => self.result = value,
                Err(err) => {
                    warn!(session = %self.id, a = self.operand_a, error = %err, "computation refused");
                    self.clear();
                    return Ok(StepResult::Cleared(Notification::from_error(&err)));
                }
            }
        }

        self.display = number::render(self.result);
        self.operand_a = self.result;
        self.pending = None;
        Ok(StepResult::Transitioned(Phase::Idle))
    }

    fn read_operand(&self) -> Result<f64, CalcError> {
        match self.rules.enforce(&self.display) {
            Validation::Success(value) => Ok(value),
            Validation::Failure(violations) => Err(CalcError::InvalidNumberFormat {
                input: self.display.clone(),
                violations: violations.iter().cloned().collect(),
            }),
        }
    }

    fn refuse(&mut self, err: CalcError) -> Result<StepResult, CalcError> {
        warn!(session = %self.id, error = %err, "operand refused");
        match self.rules.violation_strategy() {
            InvalidNumberStrategy::Reject => Err(err),
            InvalidNumberStrategy::ClearAndNotify => {
                self.clear();
                Ok(StepResult::Cleared(Notification::from_error(&err)))
            }
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
