//! Event dispatcher that owns a session and its notifier.

use crate::core::Token;
use crate::error::DispatchError;
use crate::machine::{Calculator, StepResult};
use crate::notify::Notifier;
use tracing::debug;

/// Routes button presses to a [`Calculator`] and notifications to a
/// [`Notifier`].
///
/// # Example
///
/// ```rust
/// use reckon::keypad::Dispatcher;
/// use reckon::machine::Calculator;
/// use reckon::notify::RecordingNotifier;
///
/// let mut dispatcher = Dispatcher::new(Calculator::new(), RecordingNotifier::new());
/// for label in ["9", "/", "0"] {
///     dispatcher.press(label).unwrap();
/// }
/// assert_eq!(dispatcher.press("=").unwrap(), "");
/// assert_eq!(dispatcher.notifier().notifications().len(), 1);
/// ```
pub struct Dispatcher<N: Notifier> {
    calculator: Calculator,
    notifier: N,
}

impl<N: Notifier> Dispatcher<N> {
    pub fn new(calculator: Calculator, notifier: N) -> Self {
        Self {
            calculator,
            notifier,
        }
    }

    /// Decode a button label and apply it, returning the display.
    pub fn press(&mut self, label: &str) -> Result<&str, DispatchError> {
        let token = Token::from_label(label)?;
        self.dispatch(token)
    }

    /// Apply an already decoded token, returning the display.
    pub fn dispatch(&mut self, token: Token) -> Result<&str, DispatchError> {
        if let StepResult::Cleared(notification) = self.calculator.press(token)? {
            debug!(
                session = %self.calculator.session_id(),
                kind = ?notification.kind,
                "raising notification"
            );
            self.notifier.notify(&notification);
        }
        Ok(self.calculator.display())
    }

    /// The user dismissed a notification. Dismissal clears the session.
    pub fn acknowledge(&mut self) -> &str {
        self.calculator.clear();
        self.calculator.display()
    }

    pub fn display(&self) -> &str {
        self.calculator.display()
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn into_parts(self) -> (Calculator, N) {
        (self.calculator, self.notifier)
    }
}
