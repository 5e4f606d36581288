//! Session lifecycle transitions: boot, lock screen, and active desktop.

use crate::{
    model::{DesktopState, SessionMode},
    reducer::ReducerError,
    window_manager,
};

fn transition(
    state: &mut DesktopState,
    expected: SessionMode,
    next: SessionMode,
) -> Result<(), ReducerError> {
    if state.session != expected {
        return Err(ReducerError::InvalidSessionTransition {
            from: state.session,
            to: next,
        });
    }
    state.session = next;
    Ok(())
}

/// `Booting -> Locked`.
pub fn finish_boot(state: &mut DesktopState) -> Result<(), ReducerError> {
    transition(state, SessionMode::Booting, SessionMode::Locked)
}

/// `Locked -> Active`. There is no credential check.
pub fn login(state: &mut DesktopState) -> Result<(), ReducerError> {
    transition(state, SessionMode::Locked, SessionMode::Active)
}

/// `Active -> Locked`, discarding every window and the context menu.
pub fn logout(state: &mut DesktopState) -> Result<(), ReducerError> {
    transition(state, SessionMode::Active, SessionMode::Locked)?;
    window_manager::discard_all(state);
    state.context_menu = None;
    Ok(())
}

/// Fails with [`ReducerError::SessionInactive`] unless the desktop is showing.
pub fn require_active(state: &DesktopState) -> Result<(), ReducerError> {
    if state.session == SessionMode::Active {
        Ok(())
    } else {
        Err(ReducerError::SessionInactive(state.session))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::AppId;

    #[test]
    fn lifecycle_runs_boot_lock_active_lock() {
        let mut state = DesktopState::default();
        finish_boot(&mut state).expect("boot");
        login(&mut state).expect("login");
        assert_eq!(state.session, SessionMode::Active);

        window_manager::open_window(&mut state, AppId::Contact, None);
        logout(&mut state).expect("logout");
        assert_eq!(state.session, SessionMode::Locked);
        assert!(state.windows.is_empty());
        assert_eq!(state.focus, None);
    }

    #[test]
    fn out_of_order_transitions_leave_state_untouched() {
        let mut state = DesktopState::default();
        let err = login(&mut state).expect_err("login while booting");
        assert_eq!(
            err,
            ReducerError::InvalidSessionTransition {
                from: SessionMode::Booting,
                to: SessionMode::Active,
            }
        );
        assert_eq!(state.session, SessionMode::Booting);
        assert!(logout(&mut state).is_err());
        assert_eq!(
            require_active(&state),
            Err(ReducerError::SessionInactive(SessionMode::Booting))
        );
    }
}
