use std::sync::OnceLock;

use log::{debug, info};
use regex::Regex;

use crate::{
    DecimalType, Error, Result, SyntheticChild, ValueSnapshot, children,
    summary,
};

/// The debugger whose type-name matching conventions are followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Host {
    /// Matches `boost::decimal::NAME` or the bare `NAME`.
    Gdb,
    /// Matches `NAME` under any chain of namespaces.
    Lldb,
}

impl Host {
    /// Regex matching the type names (with optional `const`, `&` and `*`)
    /// under which `ty` is printed.
    pub fn type_pattern(self, ty: DecimalType) -> String {
        let name = ty.name();
        match self {
            Self::Gdb => {
                format!(r"^(const )?(boost::decimal::)?{name}( &| \*)?$")
            }
            Self::Lldb => format!(
                r"^(const )?(boost::decimal::{name}|(\w+::)*{name})( &| \*)?$"
            ),
        }
    }
}

/// Maps debugger type names to the decimal printer that handles them.
#[derive(Debug, Clone)]
pub struct PrinterRegistry {
    host: Host,
    printers: Vec<(DecimalType, Regex)>,
}

impl PrinterRegistry {
    pub fn new(host: Host) -> Result<Self> {
        let mut printers = Vec::with_capacity(DecimalType::ALL.len());
        for ty in DecimalType::ALL {
            printers.push((ty, Regex::new(&host.type_pattern(ty))?));
            info!("{} printer loaded", ty);
        }
        Ok(Self { host, printers })
    }

    pub fn host(&self) -> Host { self.host }

    pub fn lookup(&self, type_name: &str) -> Option<DecimalType> {
        let found = self
            .printers
            .iter()
            .find(|(_, pattern)| pattern.is_match(type_name))
            .map(|(ty, _)| *ty);
        if found.is_none() {
            debug!("no decimal printer for `{}`", type_name);
        }
        found
    }

    /// Summary for a value of the named type, or `None` if the type is not
    /// a decimal type.
    pub fn summarize(
        &self,
        type_name: &str,
        snapshot: &ValueSnapshot,
    ) -> Option<String> {
        self.lookup(type_name).map(|ty| summary(ty, snapshot))
    }

    pub fn children(
        &self,
        type_name: &str,
        snapshot: &ValueSnapshot,
    ) -> Result<Vec<SyntheticChild>> {
        let ty = self
            .lookup(type_name)
            .ok_or_else(|| Error::UnknownType(type_name.to_string()))?;
        children(ty, snapshot)
    }
}

static REGISTRY: OnceLock<PrinterRegistry> = OnceLock::new();

/// Builds the process-wide registry on first call. Later calls return the
/// registry already installed, whatever `host` they pass.
pub fn install(host: Host) -> Result<&'static PrinterRegistry> {
    if let Some(registry) = REGISTRY.get() {
        return Ok(registry);
    }
    let registry = PrinterRegistry::new(host)?;
    Ok(REGISTRY.get_or_init(|| registry))
}

/// The process-wide registry, if [`install`] has run.
pub fn installed() -> Option<&'static PrinterRegistry> { REGISTRY.get() }
