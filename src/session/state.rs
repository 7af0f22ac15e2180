//! Calculator Session Module
//!
//! The calculator's UI state machine: operand entry, pending operator,
//! chained results and history.

use tracing::{debug, warn};

use crate::calculator::Operation;
use crate::error::{CalcError, Result};
use crate::history::{History, HistoryEntry, KeyValueStore};
use crate::session::{format_number, format_result, operator_symbol, CalculationBackend, KeyAction};

/// Status indicator shown next to the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Idle
    Ready,
    /// A calculation is in flight
    Processing,
    /// The last calculation failed
    Error,
}

/// One user's calculator.
///
/// Results feed the running first operand, so `2 + 3 =` followed by `+ 4 =`
/// continues from 5.
#[derive(Debug)]
pub struct Session<B, S: KeyValueStore> {
    backend: B,
    history: History<S>,
    display: String,
    first_operand: Option<f64>,
    pending: Option<Operation>,
    /// True once the user has typed part of the current operand
    entering: bool,
    status: Status,
}

impl<B: CalculationBackend, S: KeyValueStore> Session<B, S> {
    /// Creates a session, loading any history saved in `store`.
    pub fn new(backend: B, store: S) -> Self {
        Self {
            backend,
            history: History::load(store),
            display: "0".to_string(),
            first_operand: None,
            pending: None,
            entering: false,
            status: Status::Ready,
        }
    }

    // == Accessors ==
    /// Text currently on the display.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Running first operand, fed by previous results.
    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    /// Operator waiting for its second operand.
    pub fn pending(&self) -> Option<Operation> {
        self.pending
    }

    /// Status indicator state.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Past calculations.
    pub fn history(&self) -> &History<S> {
        &self.history
    }

    /// Past calculations, e.g. for clearing.
    pub fn history_mut(&mut self) -> &mut History<S> {
        &mut self.history
    }

    // == Input ==
    /// Digit or decimal point. Anything else is ignored.
    pub fn input(&mut self, c: char) {
        if !(c.is_ascii_digit() || c == '.') {
            return;
        }

        if !self.entering {
            self.display = if c == '.' { "0.".to_string() } else { c.to_string() };
            self.entering = true;
        } else if c != '.' || !self.display.contains('.') {
            if self.display == "0" && c != '.' {
                self.display.clear();
            }
            self.display.push(c);
        }
    }

    /// Operator press. A pending operator with an entered operand is
    /// calculated first; otherwise an entered operand becomes the first one.
    pub async fn press_operator(&mut self, operation: Operation) -> Result<()> {
        let outcome = if self.pending.is_some() && self.entering {
            self.perform().await
        } else {
            if self.entering {
                self.first_operand = Some(self.current_operand()?);
            }
            Ok(())
        };

        self.pending = Some(operation);
        self.entering = false;
        outcome
    }

    /// Calculates the pending operation, then clears it even on failure.
    pub async fn equals(&mut self) -> Result<()> {
        if self.pending.is_none() {
            return Ok(());
        }

        let outcome = self.perform().await;
        self.pending = None;
        outcome
    }

    /// Resets everything but the history.
    pub fn clear(&mut self) {
        self.display = "0".to_string();
        self.first_operand = None;
        self.pending = None;
        self.entering = false;
        self.status = Status::Ready;
    }

    /// Drops the last character of the shown operand.
    ///
    /// The edited text becomes the operand being entered, so a shortened
    /// result feeds the next operator. Text that no longer reads as a number
    /// (a lone `-`, a clipped `Infinity`) resets to `0`.
    pub fn backspace(&mut self) {
        self.display.pop();
        if self.display.is_empty() || self.display == "0" || self.display.parse::<f64>().is_err() {
            self.display = "0".to_string();
            self.entering = false;
        } else {
            self.entering = true;
        }
    }

    /// Dispatches a keyboard key; unmapped keys are ignored.
    pub async fn handle_key(&mut self, key: &str) -> Result<()> {
        match KeyAction::from_key(key) {
            Some(KeyAction::Input(c)) => self.input(c),
            Some(KeyAction::Operator(operation)) => return self.press_operator(operation).await,
            Some(KeyAction::Equals) => return self.equals().await,
            Some(KeyAction::Clear) => self.clear(),
            Some(KeyAction::Backspace) => self.backspace(),
            None => debug!(key, "Ignoring unmapped key"),
        }
        Ok(())
    }

    // == Calculation ==
    async fn perform(&mut self) -> Result<()> {
        let (Some(num1), Some(operation), true) =
            (self.first_operand, self.pending, self.entering)
        else {
            return Ok(());
        };
        let num2 = self.current_operand()?;

        self.status = Status::Processing;
        match self.backend.calculate(operation, num1, num2).await {
            Ok(resp) => {
                self.first_operand = Some(resp.result);
                self.display = format_result(resp.result);
                self.entering = false;

                let expression = format!(
                    "{} {} {}",
                    format_number(resp.num1),
                    operator_symbol(operation),
                    format_number(resp.num2)
                );
                let entry = HistoryEntry::now(resp.operation, expression, resp.result);
                if let Err(err) = self.history.record(entry) {
                    warn!(error = %err, "Failed to persist history");
                }

                self.status = Status::Ready;
                Ok(())
            }
            Err(err) => {
                self.status = Status::Error;
                Err(err)
            }
        }
    }

    fn current_operand(&self) -> Result<f64> {
        self.display
            .parse::<f64>()
            .map_err(|_| CalcError::InvalidInput(format!("Not a number: {}", self.display)))
    }
}
