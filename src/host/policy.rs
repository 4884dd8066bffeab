//! Default display policy and extension points.

use crate::find_usages::{DisplayableProperties, FindReferencesSearchOptions};
use crate::symbols::{Symbol, SymbolKind};

use super::{AdditionalPropertiesProvider, DefinitionsAndReferencesFactory, ReferencePolicy};

/// Key of the containing-type display property.
pub const CONTAINING_TYPE_INFO: &str = "ContainingTypeInfo";
/// Key of the containing-member display property.
pub const CONTAINING_MEMBER_INFO: &str = "ContainingMemberInfo";

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultReferencePolicy;

impl ReferencePolicy for DefaultReferencePolicy {
    fn should_show_with_no_reference_locations(
        &self,
        symbol: &Symbol,
        options: &FindReferencesSearchOptions,
        show_metadata_symbols_without_references: bool,
    ) -> bool {
        if options.display_all_definitions {
            return true;
        }
        if symbol.implicitly_declared {
            return false;
        }
        if options.associate_property_references_with_specific_accessor
            && symbol.is_property_accessor()
        {
            return false;
        }
        show_metadata_symbols_without_references || !symbol.is_in_metadata()
    }
}

/// Reports the containing type and member of a definition.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainerInfoProperties;

impl AdditionalPropertiesProvider for ContainerInfoProperties {
    fn additional_find_usages_properties(&self, symbol: &Symbol) -> DisplayableProperties {
        let mut properties = DisplayableProperties::new();
        if let Some(ty) = symbol.containing_type() {
            properties.insert(CONTAINING_TYPE_INFO.to_string(), ty.qualified_name());
        }
        if let Some(container) = symbol.container.as_ref() {
            match container.kind {
                SymbolKind::Method(_) | SymbolKind::Property | SymbolKind::Event => {
                    properties.insert(CONTAINING_MEMBER_INFO.to_string(), container.name.to_string());
                }
                SymbolKind::Namespace
                | SymbolKind::Type(_)
                | SymbolKind::Field(_)
                | SymbolKind::Parameter
                | SymbolKind::Local
                | SymbolKind::TypeParameter => {}
            }
        }
        properties
    }
}

/// Contributes no extra definitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoThirdPartyDefinitions;

impl DefinitionsAndReferencesFactory for NoThirdPartyDefinitions {}
