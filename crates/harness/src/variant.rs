//! The copy and alias operations, and the menus that order them.

use std::hint::black_box;

use copybench_core::{OwnedObject, SharedObject, create_owned_object, create_shared_object};

use crate::timing::{TimingSample, time_iterations};

/// One measured operation on a freshly generated workload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Clone a [`SharedObject`]; storage is shared
    PointerSemantics,
    /// Copy every element out of a [`SharedObject`] into new storage
    ValueSemanticsCopy,
    /// Alias a [`SharedObject`], then release the source handle
    SimulatedMove,
    /// Build a [`SharedObject`] in a helper and return it
    ReturnValue,
    /// Copy the borrowed view of an [`OwnedObject`]
    SliceCopy,
    /// Copy every element seen through a borrowed view into new storage
    SliceDeepCopy,
    /// Clone an [`OwnedObject`]
    OwnedCopy,
    /// Take the storage out of an [`OwnedObject`]
    OwnedMove,
    /// Build an [`OwnedObject`] in a helper and return it
    ReturnValueWithMove,
}

impl Variant {
    /// Label printed in front of the elapsed time
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PointerSemantics => "Pointer semantics (shallow copy) time",
            Self::ValueSemanticsCopy => "Value semantics (deep copy) time",
            Self::SimulatedMove => "Simulated 'move' time",
            Self::ReturnValue => "Return value time",
            Self::SliceCopy => "Slice copy time (shared backing array)",
            Self::SliceDeepCopy => "Slice deep copy time (new backing array)",
            Self::OwnedCopy => "Copy time",
            Self::OwnedMove => "Move time",
            Self::ReturnValueWithMove => "Return value (with move) time",
        }
    }

    /// Run this variant `iterations` times over workloads of `len` elements
    #[must_use]
    pub fn run(self, iterations: u32, len: usize) -> TimingSample {
        let label = self.label();
        match self {
            Self::PointerSemantics => time_iterations(label, iterations, || {
                let source = SharedObject::new(len);
                source.alias()
            }),
            Self::ValueSemanticsCopy => time_iterations(label, iterations, || {
                let source = SharedObject::new(len);
                source.deep_copy()
            }),
            Self::SimulatedMove => time_iterations(label, iterations, || {
                let mut source = SharedObject::new(len);
                let dest = source.alias();
                source.release();
                dest
            }),
            Self::ReturnValue => time_iterations(label, iterations, || create_shared_object(len)),
            Self::SliceCopy => time_iterations(label, iterations, || {
                let source = OwnedObject::new(len);
                let dest = black_box(source.view());
                dest.len()
            }),
            Self::SliceDeepCopy => time_iterations(label, iterations, || {
                let source = OwnedObject::new(len);
                source.view().to_owned_object()
            }),
            Self::OwnedCopy => time_iterations(label, iterations, || {
                let source = OwnedObject::new(len);
                black_box(&source).clone()
            }),
            Self::OwnedMove => time_iterations(label, iterations, || {
                let mut source = OwnedObject::new(len);
                source.take()
            }),
            Self::ReturnValueWithMove => {
                time_iterations(label, iterations, || create_owned_object(len))
            }
        }
    }
}

/// A run of variants printed together, optionally under a subheading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    heading: Option<&'static str>,
    variants: &'static [Variant],
}

impl Section {
    /// Subheading printed after a blank line, if any
    #[must_use]
    pub const fn heading(&self) -> Option<&'static str> {
        self.heading
    }

    /// Variants in run order
    #[must_use]
    pub const fn variants(&self) -> &'static [Variant] {
        self.variants
    }
}

const SEMANTICS_SECTIONS: &[Section] = &[
    Section {
        heading: None,
        variants: &[
            Variant::PointerSemantics,
            Variant::ValueSemanticsCopy,
            Variant::SimulatedMove,
            Variant::ReturnValue,
        ],
    },
    Section {
        heading: Some("Slice-specific tests (borrowed view vs owned copy):"),
        variants: &[Variant::SliceCopy, Variant::SliceDeepCopy],
    },
];

const MOVES_SECTIONS: &[Section] = &[Section {
    heading: None,
    variants: &[Variant::OwnedCopy, Variant::OwnedMove, Variant::ReturnValueWithMove],
}];

/// A fixed, ordered list of variants run by one program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Menu {
    /// Shared handles versus deep copies versus borrowed views
    #[default]
    Semantics,
    /// Clone versus move versus return of an owned workload
    Moves,
}

impl Menu {
    /// Sections in run order
    #[must_use]
    pub const fn sections(self) -> &'static [Section] {
        match self {
            Self::Semantics => SEMANTICS_SECTIONS,
            Self::Moves => MOVES_SECTIONS,
        }
    }

    /// Every variant of the menu, flattened, in run order
    pub fn variants(self) -> impl Iterator<Item = Variant> {
        self.sections()
            .iter()
            .flat_map(|section| section.variants().iter().copied())
    }

    /// Short name used in log events
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Semantics => "semantics",
            Self::Moves => "moves",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_semantics_menu_has_six_variants() {
        let variants: Vec<_> = Menu::Semantics.variants().collect();
        assert_eq!(variants.len(), 6);
        assert_eq!(variants.first(), Some(&Variant::PointerSemantics));
        assert_eq!(variants.last(), Some(&Variant::SliceDeepCopy));
    }

    #[test]
    fn test_moves_menu_has_three_variants() {
        let variants: Vec<_> = Menu::Moves.variants().collect();
        assert_eq!(
            variants,
            vec![Variant::OwnedCopy, Variant::OwnedMove, Variant::ReturnValueWithMove]
        );
    }

    #[test]
    fn test_only_slice_section_has_heading() {
        let headings: Vec<_> = Menu::Semantics
            .sections()
            .iter()
            .map(Section::heading)
            .collect();
        assert_eq!(headings.len(), 2);
        assert!(headings.first().is_some_and(Option::is_none));
        assert!(headings.get(1).is_some_and(Option::is_some));
    }

    #[test]
    fn test_labels_are_unique() {
        let labels: HashSet<_> = Menu::Semantics
            .variants()
            .chain(Menu::Moves.variants())
            .map(Variant::label)
            .collect();
        assert_eq!(labels.len(), 9);
    }

    #[test]
    fn test_every_variant_runs_on_small_workload() {
        for variant in Menu::Semantics.variants().chain(Menu::Moves.variants()) {
            let sample = variant.run(3, 64);
            assert_eq!(sample.label(), variant.label());
            assert!(sample.seconds() >= 0.0);
        }
    }

    #[test]
    fn test_zero_iterations_still_reports() {
        let sample = Variant::ValueSemanticsCopy.run(0, 64);
        assert!(sample.to_string().ends_with(" seconds"));
    }
}
