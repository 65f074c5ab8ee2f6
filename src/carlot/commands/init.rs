use crate::commands::{CarlotPaths, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Makes sure both documents exist on disk. Loading creates them when absent.
pub fn run<S: DataStore>(store: &S, paths: &CarlotPaths) -> Result<CmdResult> {
    let dealers = store.load_dealers()?;
    store.load_session()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized carlot store at {} ({} dealers)",
        paths.data_dir.display(),
        dealers.dealers.len()
    )));
    Ok(result)
}
