//! Symbol model consumed by the find-usages pipeline.
//!
//! Symbols are produced by the semantic model that hosts this crate. They
//! are immutable and shared behind `Arc`; the pipeline only reads them.

mod kind;
mod location;

use std::sync::Arc;

use indexmap::IndexSet;

pub use kind::{FieldKind, MethodKind, SymbolKind, SymbolOrigin, TypeKind};
pub use location::{Location, LocationVisibility, MetadataLocation, SourceLocation};

/// A resolved named entity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub name: Arc<str>,
    pub kind: SymbolKind,
    pub origin: SymbolOrigin,
    /// The namespace, type or member that declares this symbol.
    pub container: Option<Arc<Symbol>>,
    pub locations: Vec<Location>,
    /// Project (source) or assembly (metadata) the symbol belongs to.
    pub module: Option<Arc<str>>,
    /// Type arguments of a constructed symbol, e.g. `int` in `List<int>`.
    pub type_arguments: Vec<Arc<str>>,
    /// The unsubstituted definition this symbol was constructed from.
    pub original: Option<Arc<Symbol>>,
    /// Compiler-synthesized (default constructors, backing fields).
    pub implicitly_declared: bool,
}

impl Symbol {
    pub fn new(name: impl Into<Arc<str>>, kind: SymbolKind) -> Self {
        Self {
            name: name.into(),
            kind,
            origin: SymbolOrigin::Source,
            container: None,
            locations: Vec::new(),
            module: None,
            type_arguments: Vec::new(),
            original: None,
            implicitly_declared: false,
        }
    }

    pub fn with_container(mut self, container: Arc<Symbol>) -> Self {
        self.container = Some(container);
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.locations.push(location);
        self
    }

    pub fn with_locations(mut self, locations: impl IntoIterator<Item = Location>) -> Self {
        self.locations.extend(locations);
        self
    }

    pub fn with_origin(mut self, origin: SymbolOrigin) -> Self {
        self.origin = origin;
        self
    }

    pub fn in_module(mut self, module: impl Into<Arc<str>>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn implicitly_declared(mut self) -> Self {
        self.implicitly_declared = true;
        self
    }

    /// Build an instantiation of `original` with the given type arguments.
    ///
    /// The instantiation shares name, kind, container, locations and module
    /// with its definition.
    pub fn constructed_from(
        original: &Arc<Symbol>,
        type_arguments: impl IntoIterator<Item = impl Into<Arc<str>>>,
    ) -> Self {
        Self {
            type_arguments: type_arguments.into_iter().map(Into::into).collect(),
            original: Some(Arc::clone(original)),
            ..Symbol::clone(original)
        }
    }

    pub fn into_arc(self) -> Arc<Symbol> {
        Arc::new(self)
    }

    pub fn is_tuple_field(&self) -> bool {
        self.kind.is_tuple_field()
    }

    pub fn is_constructor(&self) -> bool {
        self.kind.is_constructor()
    }

    pub fn is_property_accessor(&self) -> bool {
        self.kind.is_property_accessor()
    }

    pub fn is_in_metadata(&self) -> bool {
        self.locations.iter().any(Location::is_in_metadata)
    }

    /// The nearest enclosing type.
    pub fn containing_type(&self) -> Option<&Arc<Symbol>> {
        let mut current = self.container.as_ref();
        while let Some(container) = current {
            if container.kind.is_type() {
                return Some(container);
            }
            current = container.container.as_ref();
        }
        None
    }

    /// Names of all containers, outermost first.
    pub fn container_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        let mut current = self.container.as_ref();
        while let Some(container) = current {
            if !container.name.is_empty() {
                path.push(container.name.as_ref());
            }
            current = container.container.as_ref();
        }
        path.reverse();
        path
    }

    /// Dotted name including all containers, e.g. `System.Collections.List`.
    pub fn qualified_name(&self) -> String {
        let mut path = self.container_path();
        path.push(&self.name);
        path.join(".")
    }
}

/// Resolve `symbol` to the definition it was constructed from.
///
/// Returns `symbol` itself when it already is a definition.
pub fn original_definition(symbol: &Arc<Symbol>) -> Arc<Symbol> {
    let mut current = symbol;
    while let Some(original) = current.original.as_ref() {
        current = original;
    }
    Arc::clone(current)
}

/// Symbols shown together as one definition (e.g. the parts of a partial
/// type, or an interface member and its implementations grouped for display).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolGroup {
    symbols: Vec<Arc<Symbol>>,
}

impl SymbolGroup {
    /// A group with one member.
    pub fn single(symbol: Arc<Symbol>) -> Self {
        Self {
            symbols: vec![symbol],
        }
    }

    /// Build a group from its members. `None` if `symbols` is empty.
    pub fn from_symbols(symbols: impl IntoIterator<Item = Arc<Symbol>>) -> Option<Self> {
        let symbols: Vec<_> = symbols.into_iter().collect();
        (!symbols.is_empty()).then_some(Self { symbols })
    }

    /// The member used for display, tags and properties.
    pub fn primary(&self) -> &Arc<Symbol> {
        &self.symbols[0]
    }

    pub fn symbols(&self) -> &[Arc<Symbol>] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Union of the locations of every member, in first-seen order.
    pub fn all_locations(&self) -> Vec<Location> {
        self.symbols
            .iter()
            .flat_map(|symbol| symbol.locations.iter().cloned())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }
}
