//! Soft and hard resource limits of the current process.

use std::{fmt, io};

use libc::{rlim_t, RLIM_INFINITY};
use nix::sys::resource::{getrlimit, Resource as RawResource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Stack,
    Processes,
    OpenFiles,
}

impl Resource {
    /// Every resource, in report order.
    pub const ALL: [Resource; 3] = [Resource::Stack, Resource::Processes, Resource::OpenFiles];

    pub fn label(self) -> &'static str {
        match self {
            Resource::Stack => "stack size",
            Resource::Processes => "process limit",
            Resource::OpenFiles => "max file descriptors",
        }
    }

    /// Name of the underlying `RLIMIT_*` constant
    pub fn name(self) -> &'static str {
        match self {
            Resource::Stack => "RLIMIT_STACK",
            Resource::Processes => "RLIMIT_NPROC",
            Resource::OpenFiles => "RLIMIT_NOFILE",
        }
    }

    fn raw(self) -> RawResource {
        match self {
            Resource::Stack => RawResource::RLIMIT_STACK,
            Resource::Processes => RawResource::RLIMIT_NPROC,
            Resource::OpenFiles => RawResource::RLIMIT_NOFILE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    pub soft: rlim_t,
    pub hard: rlim_t,
}

impl Limit {
    pub fn is_unlimited(&self) -> bool {
        self.soft == RLIM_INFINITY
    }
}

/// Shows the soft limit only.
impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unlimited() {
            f.write_str("unlimited")
        } else {
            write!(f, "{}", self.soft)
        }
    }
}

pub fn query(resource: Resource) -> nix::Result<Limit> {
    getrlimit(resource.raw()).map(|(soft, hard)| Limit { soft, hard })
}

/// Print one `<label>: <soft limit>` line per resource. A failed query is
/// logged and left out.
pub fn report<W: io::Write>(out: &mut W) -> io::Result<()> {
    for resource in Resource::ALL {
        match query(resource) {
            Ok(limit) => writeln!(out, "{}: {limit}", resource.label())?,
            Err(errno) => log::error!("getrlimit ({}): {errno}", resource.name()),
        }
    }
    Ok(())
}
