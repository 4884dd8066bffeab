//! Symbol display parts.

use smol_str::SmolStr;

use crate::symbols::{FieldKind, MethodKind, Symbol, SymbolKind, TypeKind};

use super::SymbolDisplay;

/// Classification of one display fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextTag {
    Keyword,
    Namespace,
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
    EnumMember,
    Method,
    Property,
    Field,
    Event,
    Parameter,
    Local,
    TypeParameter,
    Assembly,
    Punctuation,
    Space,
    Text,
}

/// A display fragment with its classification.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TaggedText {
    pub tag: TextTag,
    pub text: SmolStr,
}

impl TaggedText {
    pub fn new(tag: TextTag, text: impl Into<SmolStr>) -> Self {
        Self {
            tag,
            text: text.into(),
        }
    }

    /// Concatenate the text of `parts`.
    pub fn join(parts: &[TaggedText]) -> String {
        parts.iter().map(|part| part.text.as_str()).collect()
    }
}

impl TextTag {
    /// Tag used for the name of a symbol of `kind`.
    pub fn for_kind(kind: SymbolKind) -> Self {
        match kind {
            SymbolKind::Namespace => TextTag::Namespace,
            SymbolKind::Type(TypeKind::Class) => TextTag::Class,
            SymbolKind::Type(TypeKind::Struct) => TextTag::Struct,
            SymbolKind::Type(TypeKind::Interface) => TextTag::Interface,
            SymbolKind::Type(TypeKind::Enum) => TextTag::Enum,
            SymbolKind::Type(TypeKind::Delegate) => TextTag::Delegate,
            SymbolKind::Method(_) => TextTag::Method,
            SymbolKind::Property => TextTag::Property,
            SymbolKind::Field(FieldKind::EnumMember) => TextTag::EnumMember,
            SymbolKind::Field(_) => TextTag::Field,
            SymbolKind::Event => TextTag::Event,
            SymbolKind::Parameter => TextTag::Parameter,
            SymbolKind::Local => TextTag::Local,
            SymbolKind::TypeParameter => TextTag::TypeParameter,
        }
    }
}

/// Renders symbols as `keyword Container.Name<Args>(...)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct QualifiedNameDisplay;

impl QualifiedNameDisplay {
    fn push_type_arguments(parts: &mut Vec<TaggedText>, symbol: &Symbol) {
        if symbol.type_arguments.is_empty() {
            return;
        }
        parts.push(TaggedText::new(TextTag::Punctuation, "<"));
        for (i, arg) in symbol.type_arguments.iter().enumerate() {
            if i > 0 {
                parts.push(TaggedText::new(TextTag::Punctuation, ","));
                parts.push(TaggedText::new(TextTag::Space, " "));
            }
            parts.push(TaggedText::new(TextTag::TypeParameter, arg.as_ref()));
        }
        parts.push(TaggedText::new(TextTag::Punctuation, ">"));
    }

    /// Name of the symbol itself; constructors display as their type.
    fn push_name(parts: &mut Vec<TaggedText>, symbol: &Symbol) {
        match (symbol.kind, symbol.containing_type()) {
            (SymbolKind::Method(MethodKind::Constructor | MethodKind::StaticConstructor), Some(ty)) => {
                parts.push(TaggedText::new(TextTag::for_kind(ty.kind), ty.name.as_ref()));
            }
            _ => parts.push(TaggedText::new(TextTag::for_kind(symbol.kind), symbol.name.as_ref())),
        }
        Self::push_type_arguments(parts, symbol);
        if matches!(symbol.kind, SymbolKind::Method(_)) {
            parts.push(TaggedText::new(TextTag::Punctuation, "("));
            parts.push(TaggedText::new(TextTag::Punctuation, ")"));
        }
    }
}

impl SymbolDisplay for QualifiedNameDisplay {
    fn display_parts(&self, symbol: &Symbol) -> Vec<TaggedText> {
        let mut parts = Vec::new();
        if let Some(keyword) = symbol.kind.keyword() {
            parts.push(TaggedText::new(TextTag::Keyword, keyword));
            parts.push(TaggedText::new(TextTag::Space, " "));
        }

        // Locals and parameters are shown without their enclosing member.
        if !symbol.kind.is_local() {
            let mut containers = Vec::new();
            let mut current = symbol.container.as_ref();
            while let Some(container) = current {
                if !container.name.is_empty() {
                    containers.push(container);
                }
                current = container.container.as_ref();
            }
            for container in containers.into_iter().rev() {
                parts.push(TaggedText::new(
                    TextTag::for_kind(container.kind),
                    container.name.as_ref(),
                ));
                Self::push_type_arguments(&mut parts, container);
                parts.push(TaggedText::new(TextTag::Punctuation, "."));
            }
        }

        Self::push_name(&mut parts, symbol);
        parts
    }

    fn name_display_parts(&self, symbol: &Symbol) -> Vec<TaggedText> {
        let mut parts = Vec::new();
        if let Some(ty) = symbol.containing_type() {
            parts.push(TaggedText::new(TextTag::for_kind(ty.kind), ty.name.as_ref()));
            parts.push(TaggedText::new(TextTag::Punctuation, "."));
        }
        Self::push_name(&mut parts, symbol);
        parts
    }
}
