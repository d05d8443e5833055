use std::fmt;

/// Position of a record in the table as it was loaded, starting at 1.
///
/// Nothing is stored for it: it is only stable until the next write to the table.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct ApplicationId(pub usize);

impl ApplicationId {
    pub fn from_index(index: usize) -> ApplicationId {
        ApplicationId(index + 1)
    }

    pub fn index(self) -> Option<usize> {
        self.0.checked_sub(1)
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
