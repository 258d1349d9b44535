use crate::{
    entry::ServerEntry,
    error::{Error, Result},
};

/// Remove the entry at a 1-based `position`, compacting the positions of
/// every entry after it.
///
/// Positions outside `1..=len` fail with [`Error::OutOfRange`] and leave
/// the registry untouched.
pub fn remove_at(entries: &mut Vec<ServerEntry>, position: i64) -> Result<ServerEntry> {
    let len = entries.len();
    if position < 1 || position as usize > len {
        return Err(Error::out_of_range(position, len));
    }
    Ok(entries.remove(position as usize - 1))
}
