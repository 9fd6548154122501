//! The live symbol table: namespaces, vars, aliases.
//!
//! Namespaces form a flat set identified by string name. Each namespace owns
//! its interned vars, a set of referred names pointing into other
//! namespaces, and a private alias table. Mutation belongs to the embedding
//! runtime; request handlers only read and snapshot.

use rustc_hash::FxHashMap;

/// Metadata recorded for a var at definition time.
#[derive(Debug, Clone, Default)]
pub struct VarMeta {
    /// Source file the var was defined in, relative to a search root.
    pub file: Option<String>,
    /// One-based line of the defining form.
    pub line: Option<u32>,
    /// Printed parameter lists, one entry per arity, e.g. `"[x]"`.
    pub arglists: Vec<String>,
    pub doc: Option<String>,
    /// Private vars are visible inside their namespace but not exported.
    pub private: bool,
}

impl VarMeta {
    pub fn new() -> Self {
        VarMeta::default()
    }

    pub fn with_source(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self
    }

    pub fn with_arglists(mut self, arglists: Vec<String>) -> Self {
        self.arglists = arglists;
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.private = true;
        self
    }
}

/// Immutable snapshot of a resolved var.
///
/// Taken at resolution time; the live table may change between requests, so
/// nothing holds onto these across calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub name: String,
    /// The namespace that interned the var (not the one it was seen from).
    pub namespace: String,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub arglists: Vec<String>,
    pub doc: Option<String>,
}

impl Binding {
    fn from_meta(namespace: &str, name: &str, meta: &VarMeta) -> Self {
        Binding {
            name: name.to_string(),
            namespace: namespace.to_string(),
            file: meta.file.clone(),
            line: meta.line,
            arglists: meta.arglists.clone(),
            doc: meta.doc.clone(),
        }
    }

    /// Qualified `ns/name` form.
    pub fn qualified_name(&self) -> String {
        format!("{}/{}", self.namespace, self.name)
    }
}

/// A named container of vars plus referral and alias tables.
#[derive(Debug, Default)]
pub struct Namespace {
    interns: FxHashMap<String, VarMeta>,
    /// Referred names: local name → (origin namespace, origin var name).
    refers: FxHashMap<String, (String, String)>,
    /// Alias table local to this namespace: short name → namespace name.
    aliases: FxHashMap<String, String>,
}

impl Namespace {
    pub fn new() -> Self {
        Namespace::default()
    }

    /// Intern a var in this namespace, replacing any previous definition.
    pub fn intern(&mut self, name: impl Into<String>, meta: VarMeta) {
        self.interns.insert(name.into(), meta);
    }

    /// Make a var from another namespace visible here under `name`.
    pub fn refer(
        &mut self,
        name: impl Into<String>,
        origin_ns: impl Into<String>,
        origin_name: impl Into<String>,
    ) {
        self.refers
            .insert(name.into(), (origin_ns.into(), origin_name.into()));
    }

    /// Register a namespace alias local to this namespace.
    pub fn alias(&mut self, alias: impl Into<String>, ns_name: impl Into<String>) {
        self.aliases.insert(alias.into(), ns_name.into());
    }

    /// Resolve a local alias to a namespace name.
    pub fn alias_target(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    fn intern_meta(&self, name: &str) -> Option<&VarMeta> {
        self.interns.get(name)
    }
}

/// The flat set of live namespaces, keyed by name.
#[derive(Debug, Default)]
pub struct NamespaceTable {
    namespaces: FxHashMap<String, Namespace>,
}

impl NamespaceTable {
    pub fn new() -> Self {
        NamespaceTable::default()
    }

    pub fn get(&self, name: &str) -> Option<&Namespace> {
        self.namespaces.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Namespace> {
        self.namespaces.get_mut(name)
    }

    /// Fetch a namespace, creating an empty one on first reference.
    pub fn ensure(&mut self, name: &str) -> &mut Namespace {
        self.namespaces.entry(name.to_string()).or_default()
    }

    /// All namespace names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.namespaces.keys().cloned().collect();
        names.sort();
        names
    }

    /// Look up `name` among everything visible in `ns`: its own interns
    /// (private included) plus referred vars. Referred vars resolve through
    /// their origin namespace, so the snapshot records the declaring one.
    pub fn lookup_visible(&self, ns: &str, name: &str) -> Option<Binding> {
        let namespace = self.get(ns)?;
        if let Some(meta) = namespace.intern_meta(name) {
            return Some(Binding::from_meta(ns, name, meta));
        }
        let (origin_ns, origin_name) = namespace.refers.get(name)?;
        let meta = self.get(origin_ns)?.intern_meta(origin_name)?;
        Some(Binding::from_meta(origin_ns, origin_name, meta))
    }

    /// Look up `name` among the vars `ns` exports (interned and not private).
    pub fn lookup_public(&self, ns: &str, name: &str) -> Option<Binding> {
        let meta = self.get(ns)?.intern_meta(name)?;
        if meta.private {
            return None;
        }
        Some(Binding::from_meta(ns, name, meta))
    }

    /// Names of everything visible in `ns` (unsorted).
    pub fn visible_names(&self, ns: &str) -> Vec<String> {
        match self.get(ns) {
            Some(namespace) => namespace
                .interns
                .keys()
                .chain(namespace.refers.keys())
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }

    /// Names of the vars `ns` exports (unsorted).
    pub fn public_names(&self, ns: &str) -> Vec<String> {
        match self.get(ns) {
            Some(namespace) => namespace
                .interns
                .iter()
                .filter(|(_, meta)| !meta.private)
                .map(|(name, _)| name.clone())
                .collect(),
            None => Vec::new(),
        }
    }
}
