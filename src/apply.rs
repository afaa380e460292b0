use crate::wagner_fischer::{Edit, EditKind};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    #[error("edit at index {index} comes before position {position} already written")]
    OutOfOrder { index: usize, position: usize },
    #[error("edit at index {index} runs past the end of an origin of length {len}")]
    OutOfBounds { index: usize, len: usize },
    #[error("deleted value does not match the origin at index {index}")]
    ValueMismatch { index: usize },
    #[error("{0} edits cannot be applied")]
    Unsupported(EditKind),
}

/// Replays the edits of a script against the origin it was computed from.
struct Replay<'a, T> {
    origin: &'a [T],
    cursor: usize,
    result: Vec<T>,
}

impl<'a, T: Clone + PartialEq> Replay<'a, T> {
    fn new(origin: &'a [T]) -> Self {
        Replay {
            origin,
            cursor: 0,
            result: Vec::with_capacity(origin.len()),
        }
    }

    /// Copies unchanged origin elements until `count` of them have been kept.
    fn keep(&mut self, count: usize) -> Result<(), ApplyError> {
        let end = match self.cursor.checked_add(count) {
            Some(end) if end <= self.origin.len() => end,
            _ => {
                return Err(ApplyError::OutOfBounds {
                    index: self.cursor.saturating_add(count),
                    len: self.origin.len(),
                })
            }
        };
        self.result.extend_from_slice(&self.origin[self.cursor..end]);
        self.cursor = end;
        Ok(())
    }

    /// Advances to destination position `index`.
    fn seek_destination(&mut self, index: usize) -> Result<(), ApplyError> {
        let position = self.result.len();
        if index < position {
            return Err(ApplyError::OutOfOrder { index, position });
        }
        self.keep(index - position)
    }

    /// Advances to origin position `index`.
    fn seek_origin(&mut self, index: usize) -> Result<(), ApplyError> {
        if index < self.cursor {
            return Err(ApplyError::OutOfOrder {
                index,
                position: self.cursor,
            });
        }
        self.keep(index - self.cursor)
    }

    fn skip(&mut self) -> Result<(), ApplyError> {
        if self.cursor >= self.origin.len() {
            return Err(ApplyError::OutOfBounds {
                index: self.cursor,
                len: self.origin.len(),
            });
        }
        self.cursor += 1;
        Ok(())
    }

    fn process(&mut self, edit: &Edit<T>) -> Result<(), ApplyError> {
        match edit.action() {
            EditKind::Insert => {
                self.seek_destination(edit.destination())?;
                self.result.push(edit.value().clone());
            }
            EditKind::Substitute => {
                self.seek_destination(edit.destination())?;
                self.skip()?;
                self.result.push(edit.value().clone());
            }
            EditKind::Delete => {
                self.seek_origin(edit.destination())?;
                if self.origin.get(self.cursor) != Some(edit.value()) {
                    if self.cursor >= self.origin.len() {
                        return Err(ApplyError::OutOfBounds {
                            index: self.cursor,
                            len: self.origin.len(),
                        });
                    }
                    return Err(ApplyError::ValueMismatch { index: self.cursor });
                }
                self.skip()?;
            }
            action @ EditKind::Move => return Err(ApplyError::Unsupported(action)),
        }
        Ok(())
    }

    fn finish(mut self) -> Vec<T> {
        self.result.extend_from_slice(&self.origin[self.cursor..]);
        self.result
    }
}

/// Rebuilds the destination sequence from `origin` and the edit script
/// `calculate_diff` produced for it.
///
/// Elements between two edits are the ones both sequences share and are
/// copied from the origin unchanged.
///
/// # Examples
///
/// ```
/// use arraydiff::apply::apply;
/// use arraydiff::wagner_fischer::calculate_diff;
///
/// let origin = vec![1, 2, 3];
/// let destination = vec![0, 2, 3, 4];
/// let script = calculate_diff(&origin, &destination);
/// assert_eq!(apply(&origin, &script), Ok(destination));
/// ```
pub fn apply<T: Clone + PartialEq>(origin: &[T], script: &[Edit<T>]) -> Result<Vec<T>, ApplyError> {
    let mut replay = Replay::new(origin);
    for edit in script {
        if let Err(err) = replay.process(edit) {
            log::debug!("rejecting edit script: {err}");
            return Err(err);
        }
    }
    Ok(replay.finish())
}
