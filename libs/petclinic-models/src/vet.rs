//! Veterinarian records

use serde::{Deserialize, Serialize};

/// A named medical specialty a vet can hold
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Specialty {
    pub id: i32,
    pub name: String,
}

impl Specialty {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A veterinarian with zero or more specialties.
///
/// Specialties are kept sorted by name and unique by id, so every
/// representation (HTML or JSON) lists them in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vet {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    specialties: Vec<Specialty>,
}

impl Vet {
    pub fn new(id: i32, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            specialties: Vec::new(),
        }
    }

    /// Builder form of [`Vet::add_specialty`]
    pub fn with_specialty(mut self, specialty: Specialty) -> Self {
        self.add_specialty(specialty);
        self
    }

    /// Adds a specialty, ignoring one whose id is already present
    pub fn add_specialty(&mut self, specialty: Specialty) {
        if self.specialties.iter().any(|s| s.id == specialty.id) {
            return;
        }
        let pos = self
            .specialties
            .partition_point(|s| s.name.as_str() <= specialty.name.as_str());
        self.specialties.insert(pos, specialty);
    }

    pub fn specialties(&self) -> &[Specialty] {
        &self.specialties
    }

    pub fn nr_of_specialties(&self) -> usize {
        self.specialties.len()
    }
}

/// Collection wrapper used for the JSON listing: `{"vetList": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vets {
    pub vet_list: Vec<Vet>,
}

impl From<Vec<Vet>> for Vets {
    fn from(vet_list: Vec<Vet>) -> Self {
        Self { vet_list }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn specialties_are_sorted_by_name() {
        let vet = Vet::new(3, "Linda", "Douglas")
            .with_specialty(Specialty::new(2, "surgery"))
            .with_specialty(Specialty::new(3, "dentistry"));

        let names: Vec<&str> = vet.specialties().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["dentistry", "surgery"]);
        assert_eq!(vet.nr_of_specialties(), 2);
    }

    #[test]
    fn duplicate_specialty_id_is_ignored() {
        let mut vet = Vet::new(2, "Helen", "Leary");
        vet.add_specialty(Specialty::new(1, "radiology"));
        vet.add_specialty(Specialty::new(1, "radiology"));
        assert_eq!(vet.nr_of_specialties(), 1);
    }

    #[test]
    fn vet_serializes_with_camel_case_and_nested_specialties() {
        let helen = Vet::new(2, "Helen", "Leary").with_specialty(Specialty::new(1, "radiology"));
        let value = serde_json::to_value(&helen).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 2,
                "firstName": "Helen",
                "lastName": "Leary",
                "specialties": [{ "id": 1, "name": "radiology" }]
            })
        );
    }

    #[test]
    fn vets_wrapper_uses_vet_list_key() {
        let vets = Vets::from(vec![Vet::new(1, "James", "Carter")]);
        let value = serde_json::to_value(&vets).unwrap();
        assert_eq!(value["vetList"][0]["id"], 1);
        assert_eq!(value["vetList"][0]["specialties"], json!([]));
    }

    #[test]
    fn vets_survive_a_json_round_trip() {
        let vets = Vets::from(vec![
            Vet::new(1, "James", "Carter"),
            Vet::new(2, "Helen", "Leary").with_specialty(Specialty::new(1, "radiology")),
        ]);
        let json = serde_json::to_string(&vets).unwrap();
        let back: Vets = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vets);
        assert_eq!(back.vet_list[1].specialties(), &[Specialty::new(1, "radiology")]);
    }

    #[test]
    fn vet_without_specialties_deserializes() {
        let vet: Vet =
            serde_json::from_value(json!({ "id": 6, "firstName": "Sharon", "lastName": "Jenkins" }))
                .unwrap();
        assert!(vet.specialties().is_empty());
        assert_eq!(vet.first_name, "Sharon");
    }
}
