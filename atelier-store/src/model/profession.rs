use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed list of Dofus crafting professions.
///
/// The serialized names are the accented French ones: they are the on-disk
/// contract of the roster document and double as the Discord role names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profession {
    Paysan,
    Boulanger,
    Alchimiste,
    #[serde(rename = "Bûcheron")]
    Bucheron,
    Mineur,
    Chasseur,
    #[serde(rename = "Pêcheur")]
    Pecheur,
    Bricoleur,
    Bijoutier,
    Cordonnier,
    Tailleur,
    Forgeron,
    Sculpteur,
    Joaillomage,
    Cordomage,
    Costumage,
    Forgemage,
    Sculptemage,
    /// One data revision wrote this profession as "Façomage"; the alias keeps
    /// those documents loadable, and only the canonical spelling is ever
    /// written back.
    #[serde(rename = "Façonneur", alias = "Façomage")]
    Faconneur,
}

impl Profession {
    /// Every profession, in the order the game lists them.
    pub const ALL: [Profession; 19] = [
        Profession::Paysan,
        Profession::Boulanger,
        Profession::Alchimiste,
        Profession::Bucheron,
        Profession::Mineur,
        Profession::Chasseur,
        Profession::Pecheur,
        Profession::Bricoleur,
        Profession::Bijoutier,
        Profession::Cordonnier,
        Profession::Tailleur,
        Profession::Forgeron,
        Profession::Sculpteur,
        Profession::Joaillomage,
        Profession::Cordomage,
        Profession::Costumage,
        Profession::Forgemage,
        Profession::Sculptemage,
        Profession::Faconneur,
    ];

    /// Canonical display name, identical to the document key and role name.
    pub const fn name(self) -> &'static str {
        match self {
            Profession::Paysan => "Paysan",
            Profession::Boulanger => "Boulanger",
            Profession::Alchimiste => "Alchimiste",
            Profession::Bucheron => "Bûcheron",
            Profession::Mineur => "Mineur",
            Profession::Chasseur => "Chasseur",
            Profession::Pecheur => "Pêcheur",
            Profession::Bricoleur => "Bricoleur",
            Profession::Bijoutier => "Bijoutier",
            Profession::Cordonnier => "Cordonnier",
            Profession::Tailleur => "Tailleur",
            Profession::Forgeron => "Forgeron",
            Profession::Sculpteur => "Sculpteur",
            Profession::Joaillomage => "Joaillomage",
            Profession::Cordomage => "Cordomage",
            Profession::Costumage => "Costumage",
            Profession::Forgemage => "Forgemage",
            Profession::Sculptemage => "Sculptemage",
            Profession::Faconneur => "Façonneur",
        }
    }
}

impl fmt::Display for Profession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Profession;

    #[test]
    fn serialized_names_match_display_names() {
        for profession in Profession::ALL {
            let serialized = serde_json::to_string(&profession).unwrap();
            assert_eq!(serialized, format!("\"{}\"", profession));
        }
    }

    #[test]
    fn every_canonical_name_deserializes_back() {
        for profession in Profession::ALL {
            let raw = format!("\"{}\"", profession.name());
            let parsed: Profession = serde_json::from_str(&raw).unwrap();
            assert_eq!(parsed, profession);
        }
    }

    #[test]
    fn facomage_is_read_as_faconneur() {
        let parsed: Profession = serde_json::from_str("\"Façomage\"").unwrap();
        assert_eq!(parsed, Profession::Faconneur);
        assert_eq!(
            serde_json::to_string(&parsed).unwrap(),
            "\"Façonneur\"",
            "the misspelling must never be written back"
        );
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!(serde_json::from_str::<Profession>("\"Chorégraphe\"").is_err());
        assert!(serde_json::from_str::<Profession>("\"paysan\"").is_err());
    }

    #[test]
    fn the_profession_list_is_closed() {
        assert_eq!(Profession::ALL.len(), 19);
    }
}
