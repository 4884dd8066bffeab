//! Glyphs and the tag strings UI layers key their icons on.

use smol_str::SmolStr;

use crate::symbols::{FieldKind, MethodKind, Symbol, SymbolKind, TypeKind};

use super::GlyphService;

/// Icon shown next to a symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    Namespace,
    Class,
    Struct,
    Interface,
    Enum,
    EnumMember,
    Delegate,
    Method,
    Operator,
    Property,
    Field,
    Event,
    Parameter,
    Local,
    TypeParameter,
}

/// The tag set for one glyph.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GlyphTags(Vec<SmolStr>);

impl GlyphTags {
    pub fn for_glyph(glyph: Glyph) -> Self {
        let tag = match glyph {
            Glyph::Namespace => "Namespace",
            Glyph::Class => "Class",
            Glyph::Struct => "Structure",
            Glyph::Interface => "Interface",
            Glyph::Enum => "Enum",
            Glyph::EnumMember => "EnumMember",
            Glyph::Delegate => "Delegate",
            Glyph::Method => "Method",
            Glyph::Operator => "Operator",
            Glyph::Property => "Property",
            Glyph::Field => "Field",
            Glyph::Event => "Event",
            Glyph::Parameter => "Parameter",
            Glyph::Local => "Local",
            Glyph::TypeParameter => "TypeParameter",
        };
        Self(vec![SmolStr::new_static(tag)])
    }

    pub fn as_slice(&self) -> &[SmolStr] {
        &self.0
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }
}

/// Maps each symbol kind to its glyph.
#[derive(Debug, Clone, Copy, Default)]
pub struct KindGlyphs;

impl GlyphService for KindGlyphs {
    fn glyph(&self, symbol: &Symbol) -> Glyph {
        match symbol.kind {
            SymbolKind::Namespace => Glyph::Namespace,
            SymbolKind::Type(TypeKind::Class) => Glyph::Class,
            SymbolKind::Type(TypeKind::Struct) => Glyph::Struct,
            SymbolKind::Type(TypeKind::Interface) => Glyph::Interface,
            SymbolKind::Type(TypeKind::Enum) => Glyph::Enum,
            SymbolKind::Type(TypeKind::Delegate) => Glyph::Delegate,
            SymbolKind::Method(MethodKind::Operator) => Glyph::Operator,
            SymbolKind::Method(
                MethodKind::Ordinary
                | MethodKind::Constructor
                | MethodKind::StaticConstructor
                | MethodKind::PropertyGet
                | MethodKind::PropertySet,
            ) => Glyph::Method,
            SymbolKind::Property => Glyph::Property,
            SymbolKind::Field(FieldKind::EnumMember) => Glyph::EnumMember,
            SymbolKind::Field(FieldKind::Ordinary | FieldKind::TupleElement) => Glyph::Field,
            SymbolKind::Event => Glyph::Event,
            SymbolKind::Parameter => Glyph::Parameter,
            SymbolKind::Local => Glyph::Local,
            SymbolKind::TypeParameter => Glyph::TypeParameter,
        }
    }
}
