// Busy flag and error banner for an action handler
//
// idle --Submit--> busy --Succeeded--> succeeded
//                       --Failed-----> failed(message)
// succeeded/failed --Dismiss--> idle, --Submit--> busy

use super::types::ActionKind;
use statig::blocking::StateMachine;
use statig::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerEvent {
    Submit { action: ActionKind },
    Succeeded,
    Failed { message: String },
    Dismiss,
}

#[derive(Debug, Default)]
pub struct ActionHandler {
    pub in_flight: Option<ActionKind>,
    pub last_completed: Option<ActionKind>,
}

#[state_machine(initial = "State::idle()", state(derive(Debug, Clone, PartialEq, Eq)))]
impl ActionHandler {
    #[state]
    fn idle(&mut self, event: &HandlerEvent) -> Outcome<State> {
        match event {
            HandlerEvent::Submit { action } => self.start(*action),
            _ => Handled,
        }
    }

    #[state]
    fn busy(&mut self, event: &HandlerEvent) -> Outcome<State> {
        match event {
            HandlerEvent::Succeeded => {
                self.last_completed = self.in_flight.take();
                tracing::info!(action = ?self.last_completed, "Action succeeded");
                Transition(State::succeeded())
            }
            HandlerEvent::Failed { message } => {
                let action = self.in_flight.take();
                tracing::warn!(action = ?action, message = %message, "Action failed");
                Transition(State::failed(message.clone()))
            }
            // Nothing stops a second submit while one is in flight. The first
            // action keeps ownership of the settle event.
            HandlerEvent::Submit { action } => {
                tracing::debug!(
                    in_flight = ?self.in_flight,
                    submitted = %action,
                    "Submit while busy"
                );
                Handled
            }
            HandlerEvent::Dismiss => Handled,
        }
    }

    #[state]
    fn succeeded(&mut self, event: &HandlerEvent) -> Outcome<State> {
        match event {
            HandlerEvent::Submit { action } => self.start(*action),
            HandlerEvent::Dismiss => Transition(State::idle()),
            _ => Handled,
        }
    }

    #[state]
    fn failed(&mut self, message: &mut String, event: &HandlerEvent) -> Outcome<State> {
        match event {
            HandlerEvent::Submit { action } => {
                tracing::debug!(previous_error = %message, "Retrying after failure");
                self.start(*action)
            }
            HandlerEvent::Dismiss => Transition(State::idle()),
            _ => Handled,
        }
    }
}

impl ActionHandler {
    fn start(&mut self, action: ActionKind) -> Outcome<State> {
        self.in_flight = Some(action);
        tracing::debug!(action = %action, "Action submitted");
        Transition(State::busy())
    }
}

/// Owned lifecycle of one action handler as the view sees it.
pub struct ActionLifecycle {
    machine: StateMachine<ActionHandler>,
}

impl Default for ActionLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionLifecycle {
    pub fn new() -> Self {
        Self {
            machine: ActionHandler::default().state_machine(),
        }
    }

    pub fn begin(&mut self, action: ActionKind) {
        self.machine.handle(&HandlerEvent::Submit { action });
    }

    pub fn succeed(&mut self) {
        self.machine.handle(&HandlerEvent::Succeeded);
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.machine.handle(&HandlerEvent::Failed {
            message: message.into(),
        });
    }

    /// Closes the error banner or success notice.
    pub fn dismiss(&mut self) {
        self.machine.handle(&HandlerEvent::Dismiss);
    }

    pub fn state(&self) -> &State {
        self.machine.state()
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state(), State::Busy {})
    }

    pub fn banner(&self) -> Option<&str> {
        match self.state() {
            State::Failed { message } => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn succeeded(&self) -> bool {
        matches!(self.state(), State::Succeeded {})
    }
}
