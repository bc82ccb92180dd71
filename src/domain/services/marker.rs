//! Revision Marker
//!
//! The only persisted state: a small remote file holding the revision that
//! was last deployed.

use crate::domain::ports::RemoteStore;
use crate::domain::value_objects::Revision;
use crate::error::RevshipResult;

/// Default remote path of the marker
pub const DEFAULT_MARKER_PATH: &str = ".revision";

/// Read the revision recorded on the remote.
///
/// A missing (or empty) marker is `Ok(None)`; every other store failure
/// propagates.
pub fn read_remote_revision(
    store: &dyn RemoteStore,
    marker_path: &str,
) -> RevshipResult<Option<Revision>> {
    match store.read(marker_path) {
        Ok(bytes) => Ok(Revision::from_marker(&bytes)),
        Err(err) if err.is_missing() => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Record `revision` as the deployed revision
pub fn write_remote_revision(
    store: &dyn RemoteStore,
    marker_path: &str,
    revision: &Revision,
) -> RevshipResult<()> {
    store.write(marker_path, &revision.to_marker())?;
    Ok(())
}
