use std::collections::HashMap;
use std::sync::Arc;

/// Handle to an interned symbol name.
///
/// Two symbols are the same symbol iff their handles are equal; the handle is
/// only meaningful for the `SymbolTable` that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(u32);

impl Symbol {
    pub fn id(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct SymbolTable {
    names: Vec<Arc<str>>,
    ids: HashMap<Arc<str>, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the symbol for `name`, creating an entry on first use.
    pub fn intern(&mut self, name: &str) -> Symbol {
        if let Some(sym) = self.ids.get(name) {
            return *sym;
        }
        let sym = Symbol(self.names.len() as u32);
        let name: Arc<str> = Arc::from(name);
        self.names.push(name.clone());
        self.ids.insert(name, sym);
        sym
    }

    pub fn lookup(&self, name: &str) -> Option<Symbol> {
        self.ids.get(name).copied()
    }

    pub fn name(&self, sym: Symbol) -> Option<&str> {
        self.names.get(sym.0 as usize).map(|s| &**s)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
