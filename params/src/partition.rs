//! Section partitioning of parameter definitions.
//!
//! DESIGN
//! ======
//! Every definition lands in exactly one section, decided by `section_for`.
//! The lists keep each definition's original index because inputs bind to
//! the values array by position, so the definitions themselves are never
//! filtered or reordered.

#[cfg(test)]
#[path = "partition_test.rs"]
mod partition_test;

use crate::types::TemplateVersionParameter;

/// Form section a parameter is rendered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    /// Mutable, persisted across starts.
    Parameters,
    /// Mutable, applies to a single start.
    Ephemeral,
    /// Fixed at workspace creation; shown read-only.
    Immutable,
}

impl Section {
    /// Display order of the sections.
    pub const ALL: [Section; 3] = [Section::Parameters, Section::Ephemeral, Section::Immutable];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Parameters => "Parameters",
            Self::Ephemeral => "Ephemeral Parameters",
            Self::Immutable => "Immutable parameters",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Parameters => "Settings used by your template",
            Self::Ephemeral => "These parameters only apply for a single workspace start.",
            Self::Immutable => "These settings cannot be changed after creating the workspace.",
        }
    }

    /// Membership predicate for this section.
    #[must_use]
    pub fn accepts(self, parameter: &TemplateVersionParameter) -> bool {
        match self {
            Self::Parameters => is_persistent_mutable(parameter),
            Self::Ephemeral => is_ephemeral_mutable(parameter),
            Self::Immutable => is_immutable(parameter),
        }
    }

    /// Whether inputs in this section accept edits.
    #[must_use]
    pub fn is_editable(self) -> bool {
        !matches!(self, Self::Immutable)
    }
}

#[must_use]
pub fn is_persistent_mutable(parameter: &TemplateVersionParameter) -> bool {
    parameter.mutable && !parameter.ephemeral
}

#[must_use]
pub fn is_ephemeral_mutable(parameter: &TemplateVersionParameter) -> bool {
    parameter.mutable && parameter.ephemeral
}

#[must_use]
pub fn is_immutable(parameter: &TemplateVersionParameter) -> bool {
    !parameter.mutable
}

/// Section whose predicate accepts `parameter`.
///
/// The predicates are disjoint and together cover every definition, so
/// exactly one section matches.
#[must_use]
pub fn section_for(parameter: &TemplateVersionParameter) -> Section {
    Section::ALL
        .into_iter()
        .find(|section| section.accepts(parameter))
        .unwrap_or(Section::Immutable)
}

/// A definition paired with its position in the definitions array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedParameter {
    pub index: usize,
    pub parameter: TemplateVersionParameter,
}

/// Definitions split into the three sections.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Partition {
    pub parameters: Vec<IndexedParameter>,
    pub ephemeral: Vec<IndexedParameter>,
    pub immutable: Vec<IndexedParameter>,
}

impl Partition {
    #[must_use]
    pub fn section(&self, section: Section) -> &[IndexedParameter] {
        match section {
            Section::Parameters => &self.parameters,
            Section::Ephemeral => &self.ephemeral,
            Section::Immutable => &self.immutable,
        }
    }

    /// Non-empty sections, in display order.
    pub fn visible_sections(&self) -> impl Iterator<Item = (Section, &[IndexedParameter])> {
        Section::ALL
            .into_iter()
            .map(|section| (section, self.section(section)))
            .filter(|(_, items)| !items.is_empty())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parameters.len() + self.ephemeral.len() + self.immutable.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[must_use]
pub fn partition(definitions: &[TemplateVersionParameter]) -> Partition {
    let mut out = Partition::default();
    for (index, parameter) in definitions.iter().enumerate() {
        let item = IndexedParameter { index, parameter: parameter.clone() };
        match section_for(parameter) {
            Section::Parameters => out.parameters.push(item),
            Section::Ephemeral => out.ephemeral.push(item),
            Section::Immutable => out.immutable.push(item),
        }
    }
    out
}
