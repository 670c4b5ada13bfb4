use std::fmt;

/// Output category for a piece of artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Wide key art, fanned out into one file per recipe
    Backdrop,
    /// Title treatment / emblem, written once
    Logos,
}

impl Role {
    /// Every role, in processing order.
    pub const ALL: [Role; 2] = [Role::Backdrop, Role::Logos];

    /// Name of the subdirectory this role is written to.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Role::Backdrop => "backdrop",
            Role::Logos => "logos",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}
