//! Session bookkeeping: which dealer is logged in, and whether that login
//! sticks across runs ("presence").

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{CarDealer, SessionDocument};
use crate::store::DataStore;
use tracing::info;

/// Logs `dealer` in. A session with presence enabled is never replaced:
/// it is returned as-is, whatever dealer or flag was asked for.
pub fn log_in<S: DataStore>(
    store: &mut S,
    dealer: &CarDealer,
    presence: bool,
) -> Result<CmdResult> {
    let current = store.load_session()?;
    if current.presence {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning(
            "Presence is enabled; keeping the current session.",
        ));
        return Ok(result.with_session(current));
    }

    let session = SessionDocument::for_dealer(dealer.id, presence);
    store.save_session(&session)?;
    info!(dealer = %dealer.id, presence, "logged in");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Logged in as '{}'",
        dealer.name
    )));
    Ok(result.with_session(session))
}

/// Clears the session unconditionally.
pub fn log_out<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let session = SessionDocument::default();
    store.save_session(&session)?;
    info!("logged out");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Logged out"));
    Ok(result.with_session(session))
}

pub fn set_presence<S: DataStore>(store: &mut S, presence: bool) -> Result<CmdResult> {
    let mut session = store.load_session()?;
    session.presence = presence;
    store.save_session(&session)?;
    info!(presence, "presence changed");

    let state = if presence { "Enabled" } else { "Disabled" };
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Presence {}", state)));
    Ok(result.with_session(session))
}

pub fn active_session<S: DataStore>(store: &S) -> Result<Option<SessionDocument>> {
    let session = store.load_session()?;
    Ok(session.is_active().then_some(session))
}

/// Active session plus the dealer it points at, when both exist.
pub fn status<S: DataStore>(store: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let Some(session) = active_session(store)? else {
        result.add_message(CmdMessage::info("Not logged in."));
        return Ok(result);
    };

    let doc = store.load_dealers()?;
    let dealer = session.dealer_id.and_then(|id| doc.dealer(&id).cloned());
    match dealer {
        Some(dealer) => result = result.with_dealer(dealer),
        None => result.add_message(CmdMessage::warning(
            "Session points at a dealer that no longer exists.",
        )),
    }
    Ok(result.with_session(session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn dealer(name: &str) -> CarDealer {
        CarDealer::new(name.to_string())
    }

    #[test]
    fn log_in_overwrites_a_plain_session() {
        let mut store = InMemoryStore::new();
        let acme = dealer("Acme");
        let globex = dealer("Globex");

        log_in(&mut store, &acme, false).unwrap();
        let result = log_in(&mut store, &globex, true).unwrap();

        let session = result.session.unwrap();
        assert_eq!(session.dealer_id, Some(globex.id));
        assert!(session.presence);
        assert_eq!(store.load_session().unwrap(), session);
    }

    #[test]
    fn log_in_is_a_no_op_while_presence_is_enabled() {
        let mut store = InMemoryStore::new();
        let acme = dealer("Acme");
        log_in(&mut store, &acme, true).unwrap();
        let before = store.load_session().unwrap();
        let saves = store.saves();

        let result = log_in(&mut store, &dealer("Globex"), false).unwrap();
        assert_eq!(result.session.unwrap(), before);
        assert_eq!(store.load_session().unwrap(), before);
        assert_eq!(store.saves(), saves);
    }

    #[test]
    fn log_out_clears_even_with_presence() {
        let mut store = InMemoryStore::new();
        log_in(&mut store, &dealer("Acme"), true).unwrap();

        log_out(&mut store).unwrap();
        let session = store.load_session().unwrap();
        assert_eq!(session.dealer_id, None);
        assert!(!session.presence);
        assert!(active_session(&store).unwrap().is_none());
    }

    #[test]
    fn set_presence_only_flips_the_flag() {
        let mut store = InMemoryStore::new();
        let acme = dealer("Acme");
        log_in(&mut store, &acme, false).unwrap();

        set_presence(&mut store, true).unwrap();
        let session = active_session(&store).unwrap().unwrap();
        assert_eq!(session.dealer_id, Some(acme.id));
        assert!(session.presence);

        set_presence(&mut store, false).unwrap();
        assert!(!store.load_session().unwrap().presence);
    }

    #[test]
    fn status_reports_missing_dealer() {
        let mut store = InMemoryStore::new();
        log_in(&mut store, &dealer("Ghost"), false).unwrap();

        let result = status(&store).unwrap();
        assert!(result.session.is_some());
        assert!(result.dealer.is_none());
        assert_eq!(result.messages[0].level, crate::commands::MessageLevel::Warning);
    }
}
