// PRD lifecycle state machine with validation

use super::PrdStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateTransitionError {
    #[error("Invalid state transition from {from:?} to {to:?}")]
    InvalidTransition { from: PrdStatus, to: PrdStatus },
}

/// Validates if a document can transition from one status to another
pub fn can_transition(from: PrdStatus, to: PrdStatus) -> bool {
    match (from, to) {
        // From Draft: the webhook call starts immediately after creation
        (PrdStatus::Draft, PrdStatus::Processing) => true,

        // From Processing: the single in-flight call settles one way
        (PrdStatus::Processing, PrdStatus::Completed) => true,
        (PrdStatus::Processing, PrdStatus::Error) => true,

        // Completed and Error are terminal; recovery is a fresh document,
        // not a transition

        // Same state is always allowed (no-op)
        (a, b) if a == b => true,

        // All other transitions are invalid
        _ => false,
    }
}

/// Validates and performs a state transition
pub fn transition_state(
    current: PrdStatus,
    target: PrdStatus,
) -> Result<PrdStatus, StateTransitionError> {
    if !can_transition(current, target) {
        return Err(StateTransitionError::InvalidTransition {
            from: current,
            to: target,
        });
    }

    Ok(target)
}

/// Check if a status is a terminal state
pub fn is_terminal_state(status: PrdStatus) -> bool {
    matches!(status, PrdStatus::Completed | PrdStatus::Error)
}

/// Check if a status indicates an in-flight enrichment call
pub fn is_active_state(status: PrdStatus) -> bool {
    matches!(status, PrdStatus::Processing)
}

/// Get all valid next states from current state
pub fn valid_next_states(current: PrdStatus) -> Vec<PrdStatus> {
    let all_states = vec![
        PrdStatus::Draft,
        PrdStatus::Processing,
        PrdStatus::Completed,
        PrdStatus::Error,
    ];

    all_states
        .into_iter()
        .filter(|&state| can_transition(current, state))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_to_processing() {
        assert!(can_transition(PrdStatus::Draft, PrdStatus::Processing));
        let result = transition_state(PrdStatus::Draft, PrdStatus::Processing);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), PrdStatus::Processing);
    }

    #[test]
    fn test_processing_to_completed() {
        assert!(can_transition(PrdStatus::Processing, PrdStatus::Completed));
        let result = transition_state(PrdStatus::Processing, PrdStatus::Completed);
        assert!(result.is_ok());
    }

    #[test]
    fn test_processing_to_error() {
        assert!(can_transition(PrdStatus::Processing, PrdStatus::Error));
        let result = transition_state(PrdStatus::Processing, PrdStatus::Error);
        assert!(result.is_ok());
    }

    #[test]
    fn test_invalid_draft_to_completed() {
        assert!(!can_transition(PrdStatus::Draft, PrdStatus::Completed));
        let result = transition_state(PrdStatus::Draft, PrdStatus::Completed);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_draft_to_error() {
        assert!(!can_transition(PrdStatus::Draft, PrdStatus::Error));
    }

    #[test]
    fn test_terminal_states_do_not_reopen() {
        assert!(!can_transition(PrdStatus::Completed, PrdStatus::Processing));
        assert!(!can_transition(PrdStatus::Completed, PrdStatus::Draft));
        assert!(!can_transition(PrdStatus::Completed, PrdStatus::Error));
        assert!(!can_transition(PrdStatus::Error, PrdStatus::Processing));
        assert!(!can_transition(PrdStatus::Error, PrdStatus::Completed));
        assert!(!can_transition(PrdStatus::Error, PrdStatus::Draft));
    }

    #[test]
    fn test_same_state_allowed() {
        assert!(can_transition(PrdStatus::Draft, PrdStatus::Draft));
        assert!(can_transition(PrdStatus::Processing, PrdStatus::Processing));
        assert!(can_transition(PrdStatus::Completed, PrdStatus::Completed));
        assert!(can_transition(PrdStatus::Error, PrdStatus::Error));
    }

    #[test]
    fn test_is_terminal_state() {
        assert!(is_terminal_state(PrdStatus::Completed));
        assert!(is_terminal_state(PrdStatus::Error));
        assert!(!is_terminal_state(PrdStatus::Draft));
        assert!(!is_terminal_state(PrdStatus::Processing));
    }

    #[test]
    fn test_is_active_state() {
        assert!(is_active_state(PrdStatus::Processing));
        assert!(!is_active_state(PrdStatus::Draft));
        assert!(!is_active_state(PrdStatus::Completed));
        assert!(!is_active_state(PrdStatus::Error));
    }

    #[test]
    fn test_valid_next_states() {
        let states = valid_next_states(PrdStatus::Draft);
        assert!(states.contains(&PrdStatus::Draft));
        assert!(states.contains(&PrdStatus::Processing));
        assert!(!states.contains(&PrdStatus::Completed));
        assert!(!states.contains(&PrdStatus::Error));

        let states = valid_next_states(PrdStatus::Processing);
        assert!(states.contains(&PrdStatus::Processing));
        assert!(states.contains(&PrdStatus::Completed));
        assert!(states.contains(&PrdStatus::Error));
        assert!(!states.contains(&PrdStatus::Draft));

        let states = valid_next_states(PrdStatus::Completed);
        assert_eq!(states, vec![PrdStatus::Completed]);

        let states = valid_next_states(PrdStatus::Error);
        assert_eq!(states, vec![PrdStatus::Error]);
    }
}
