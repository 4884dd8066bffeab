//! Cross-reference names in documentation-id form (`T:App.Widget`).

use crate::symbols::{MethodKind, Symbol, SymbolKind};

use super::CrossReferenceNames;

/// Builds documentation-comment ids such as `M:App.Widget.#ctor`.
///
/// Symbols that cannot be named from outside their declaration (locals,
/// parameters, type parameters, tuple elements, anything inside an unnamed
/// container) get no name.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocIdNames;

impl DocIdNames {
    fn prefix(kind: SymbolKind) -> Option<char> {
        match kind {
            SymbolKind::Namespace => Some('N'),
            SymbolKind::Type(_) => Some('T'),
            SymbolKind::Method(_) => Some('M'),
            SymbolKind::Property => Some('P'),
            SymbolKind::Field(_) => Some('F'),
            SymbolKind::Event => Some('E'),
            SymbolKind::Parameter | SymbolKind::Local | SymbolKind::TypeParameter => None,
        }
    }

    fn member_name(symbol: &Symbol) -> &str {
        match symbol.kind {
            SymbolKind::Method(MethodKind::Constructor) => "#ctor",
            SymbolKind::Method(MethodKind::StaticConstructor) => "#cctor",
            _ => &symbol.name,
        }
    }
}

impl CrossReferenceNames for DocIdNames {
    fn rq_name(&self, symbol: &Symbol) -> Option<String> {
        if symbol.is_tuple_field() {
            return None;
        }
        let prefix = Self::prefix(symbol.kind)?;

        let mut segments = vec![Self::member_name(symbol)];
        let mut current = symbol.container.as_ref();
        while let Some(container) = current {
            // Members of locals or unnamed types have no stable identity.
            if container.kind.is_local() || container.name.is_empty() {
                return None;
            }
            segments.push(&container.name);
            current = container.container.as_ref();
        }
        if segments.iter().any(|segment| segment.is_empty()) {
            return None;
        }
        segments.reverse();
        Some(format!("{prefix}:{}", segments.join(".")))
    }
}
