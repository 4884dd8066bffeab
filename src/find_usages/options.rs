//! Find-usages options

/// Options that shape how the search engine cascades and what it reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct FindReferencesSearchOptions {
    /// Report property references against the specific accessor they call.
    pub associate_property_references_with_specific_accessor: bool,
    /// Cascade to related symbols (overrides, implementations, accessors).
    pub cascade: bool,
    /// The search was explicitly invoked by the user.
    pub explicit: bool,
    /// Only cascade down the inheritance hierarchy, never up.
    pub unidirectional_hierarchy_cascade: bool,
    /// Show every definition even when it has no references.
    pub display_all_definitions: bool,
}

impl Default for FindReferencesSearchOptions {
    fn default() -> Self {
        Self {
            associate_property_references_with_specific_accessor: false,
            cascade: true,
            explicit: true,
            unidirectional_hierarchy_cascade: false,
            display_all_definitions: false,
        }
    }
}

impl FindReferencesSearchOptions {
    pub fn with_associate_property_references_with_specific_accessor(mut self, value: bool) -> Self {
        self.associate_property_references_with_specific_accessor = value;
        self
    }

    pub fn with_cascade(mut self, value: bool) -> Self {
        self.cascade = value;
        self
    }

    pub fn with_explicit(mut self, value: bool) -> Self {
        self.explicit = value;
        self
    }

    pub fn with_unidirectional_hierarchy_cascade(mut self, value: bool) -> Self {
        self.unidirectional_hierarchy_cascade = value;
        self
    }

    pub fn with_display_all_definitions(mut self, value: bool) -> Self {
        self.display_all_definitions = value;
        self
    }
}

/// Per-request options handed to the search engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct FindUsagesOptions {
    /// Keep source locations that fall in hidden (generated) regions.
    pub include_hidden_locations: bool,
    pub search: FindReferencesSearchOptions,
}

impl FindUsagesOptions {
    pub fn with_hidden_locations(mut self, include: bool) -> Self {
        self.include_hidden_locations = include;
        self
    }

    pub fn with_search(mut self, search: FindReferencesSearchOptions) -> Self {
        self.search = search;
        self
    }
}
