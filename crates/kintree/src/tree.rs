//! The in-memory family tree document.
//!
//! This module defines the document that is read from and written back to
//! disk in full, and the append operation that best-effort maintains the
//! reciprocal relationship links between records.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::person::Person;

/// The family tree document: every person record, in insertion order.
///
/// Relationship links are id strings, and the reciprocal entries are only
/// maintained for records that are already present when a new person is
/// appended. Ids that match nothing are kept verbatim and never repaired.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyTree {
    #[serde(default)]
    people: Vec<Person>,
}

impl FamilyTree {
    /// Append a person, syncing reciprocal links first.
    ///
    /// Three passes over the existing records: each parent id gains the new
    /// person as a child, each spouse id gains them as a spouse, and each
    /// child id gains them as a parent. A scan stops at the first record
    /// with a matching id, so duplicate ids in the document are tolerated
    /// silently. A reciprocal entry is only pushed if it is not already
    /// present. The new record itself is pushed after all three passes and
    /// never back-links to itself.
    pub fn append(&mut self, person: Person) {
        for parent_id in &person.parents {
            if let Some(parent) = Self::first_match(&mut self.people, parent_id) {
                if !parent.children.contains(&person.id) {
                    debug!("linking '{}' as child of '{}'", person.id, parent_id);
                    parent.children.push(person.id.clone());
                }
            }
        }

        for spouse_id in &person.spouses {
            if let Some(spouse) = Self::first_match(&mut self.people, spouse_id) {
                if !spouse.spouses.contains(&person.id) {
                    debug!("linking '{}' as spouse of '{}'", person.id, spouse_id);
                    spouse.spouses.push(person.id.clone());
                }
            }
        }

        for child_id in &person.children {
            if let Some(child) = Self::first_match(&mut self.people, child_id) {
                if !child.parents.contains(&person.id) {
                    debug!("linking '{}' as parent of '{}'", person.id, child_id);
                    child.parents.push(person.id.clone());
                }
            }
        }

        self.people.push(person);
    }

    fn first_match<'a>(people: &'a mut [Person], id: &str) -> Option<&'a mut Person> {
        people.iter_mut().find(|p| p.id == id)
    }

    /// The first person with the given id, if any.
    #[must_use]
    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    /// All people, in insertion order.
    #[must_use]
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Number of people in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Check whether the document has no people.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Number of people marked alive.
    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.people.iter().filter(|p| p.alive).count()
    }
}
