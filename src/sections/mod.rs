//! Password requirement sections
//!
//! Each section checks one aspect of a password. The scorer walks
//! [`REQUIREMENTS`] in order; the suggester reuses the same predicates.

mod length;
mod variety;

pub use length::{length_section, MIN_LENGTH};
pub use variety::{lowercase_section, number_section, symbol_section, uppercase_section};

use crate::types::RequirementId;

/// Predicate signature shared by every section.
pub type SectionCheck = fn(&str) -> bool;

/// One weighted pass/fail rule.
#[derive(Debug, Clone, Copy)]
pub struct Requirement {
    pub id: RequirementId,
    pub check: SectionCheck,
    pub weight: u8,
}

/// The fixed rule set, in display order.
pub const REQUIREMENTS: [Requirement; 5] = [
    Requirement {
        id: RequirementId::Length,
        check: length_section,
        weight: 20,
    },
    Requirement {
        id: RequirementId::Lowercase,
        check: lowercase_section,
        weight: 20,
    },
    Requirement {
        id: RequirementId::Uppercase,
        check: uppercase_section,
        weight: 20,
    },
    Requirement {
        id: RequirementId::Number,
        check: number_section,
        weight: 20,
    },
    Requirement {
        id: RequirementId::Symbol,
        check: symbol_section,
        weight: 20,
    },
];

const fn total_weight() -> u16 {
    let mut sum = 0u16;
    let mut i = 0;
    while i < REQUIREMENTS.len() {
        sum += REQUIREMENTS[i].weight as u16;
        i += 1;
    }
    sum
}

// Scores are percentages.
const _: () = assert!(total_weight() == 100);
