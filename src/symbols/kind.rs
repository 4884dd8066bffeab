//! Closed classification of symbols.
//!
//! Every branch in the find-usages pipeline that depends on what a symbol is
//! matches on these enums exhaustively, so adding a kind forces every
//! special case (namespaces, constructors, tuple fields) to be revisited.

/// The kind of a symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Namespace,
    Type(TypeKind),
    Method(MethodKind),
    Property,
    Field(FieldKind),
    Event,
    Parameter,
    Local,
    TypeParameter,
}

/// Kinds of named types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
}

/// Kinds of methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MethodKind {
    Ordinary,
    Constructor,
    StaticConstructor,
    PropertyGet,
    PropertySet,
    Operator,
}

/// Kinds of fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Ordinary,
    /// An element of a tuple type (`(int count, string name).count`).
    TupleElement,
    EnumMember,
}

/// Where a symbol comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SymbolOrigin {
    #[default]
    Source,
    Metadata,
    None,
}

impl SymbolKind {
    pub fn is_namespace(&self) -> bool {
        matches!(self, SymbolKind::Namespace)
    }

    pub fn is_type(&self) -> bool {
        matches!(self, SymbolKind::Type(_))
    }

    /// Instance and static constructors.
    pub fn is_constructor(&self) -> bool {
        matches!(
            self,
            SymbolKind::Method(MethodKind::Constructor | MethodKind::StaticConstructor)
        )
    }

    pub fn is_property_accessor(&self) -> bool {
        matches!(
            self,
            SymbolKind::Method(MethodKind::PropertyGet | MethodKind::PropertySet)
        )
    }

    pub fn is_tuple_field(&self) -> bool {
        matches!(self, SymbolKind::Field(FieldKind::TupleElement))
    }

    /// Function-local symbols have no identity outside their body.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            SymbolKind::Local | SymbolKind::Parameter | SymbolKind::TypeParameter
        )
    }

    /// Keyword used when rendering a declaration of this kind.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            SymbolKind::Namespace => Some("namespace"),
            SymbolKind::Type(TypeKind::Class) => Some("class"),
            SymbolKind::Type(TypeKind::Struct) => Some("struct"),
            SymbolKind::Type(TypeKind::Interface) => Some("interface"),
            SymbolKind::Type(TypeKind::Enum) => Some("enum"),
            SymbolKind::Type(TypeKind::Delegate) => Some("delegate"),
            SymbolKind::Event => Some("event"),
            SymbolKind::Method(_)
            | SymbolKind::Property
            | SymbolKind::Field(_)
            | SymbolKind::Parameter
            | SymbolKind::Local
            | SymbolKind::TypeParameter => None,
        }
    }
}
