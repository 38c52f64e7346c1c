use atelier_store::model::Profession;

/// The `/metier` and `/recherche` choice list, mirroring [`Profession`]
/// variant for variant. Discord only ever submits one of these values, and
/// the conversion below is the single place a raw choice becomes a typed
/// profession.
#[derive(Clone, Copy, Debug, PartialEq, Eq, poise::ChoiceParameter)]
pub enum ProfessionChoice {
    #[name = "Paysan"]
    Paysan,
    #[name = "Boulanger"]
    Boulanger,
    #[name = "Alchimiste"]
    Alchimiste,
    #[name = "Bûcheron"]
    Bucheron,
    #[name = "Mineur"]
    Mineur,
    #[name = "Chasseur"]
    Chasseur,
    #[name = "Pêcheur"]
    Pecheur,
    #[name = "Bricoleur"]
    Bricoleur,
    #[name = "Bijoutier"]
    Bijoutier,
    #[name = "Cordonnier"]
    Cordonnier,
    #[name = "Tailleur"]
    Tailleur,
    #[name = "Forgeron"]
    Forgeron,
    #[name = "Sculpteur"]
    Sculpteur,
    #[name = "Joaillomage"]
    Joaillomage,
    #[name = "Cordomage"]
    Cordomage,
    #[name = "Costumage"]
    Costumage,
    #[name = "Forgemage"]
    Forgemage,
    #[name = "Sculptemage"]
    Sculptemage,
    #[name = "Façonneur"]
    Faconneur,
}

impl From<ProfessionChoice> for Profession {
    fn from(choice: ProfessionChoice) -> Profession {
        match choice {
            ProfessionChoice::Paysan => Profession::Paysan,
            ProfessionChoice::Boulanger => Profession::Boulanger,
            ProfessionChoice::Alchimiste => Profession::Alchimiste,
            ProfessionChoice::Bucheron => Profession::Bucheron,
            ProfessionChoice::Mineur => Profession::Mineur,
            ProfessionChoice::Chasseur => Profession::Chasseur,
            ProfessionChoice::Pecheur => Profession::Pecheur,
            ProfessionChoice::Bricoleur => Profession::Bricoleur,
            ProfessionChoice::Bijoutier => Profession::Bijoutier,
            ProfessionChoice::Cordonnier => Profession::Cordonnier,
            ProfessionChoice::Tailleur => Profession::Tailleur,
            ProfessionChoice::Forgeron => Profession::Forgeron,
            ProfessionChoice::Sculpteur => Profession::Sculpteur,
            ProfessionChoice::Joaillomage => Profession::Joaillomage,
            ProfessionChoice::Cordomage => Profession::Cordomage,
            ProfessionChoice::Costumage => Profession::Costumage,
            ProfessionChoice::Forgemage => Profession::Forgemage,
            ProfessionChoice::Sculptemage => Profession::Sculptemage,
            ProfessionChoice::Faconneur => Profession::Faconneur,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ProfessionChoice;
    use atelier_store::model::Profession;
    use poise::ChoiceParameter;

    const ALL_CHOICES: [ProfessionChoice; 19] = [
        ProfessionChoice::Paysan,
        ProfessionChoice::Boulanger,
        ProfessionChoice::Alchimiste,
        ProfessionChoice::Bucheron,
        ProfessionChoice::Mineur,
        ProfessionChoice::Chasseur,
        ProfessionChoice::Pecheur,
        ProfessionChoice::Bricoleur,
        ProfessionChoice::Bijoutier,
        ProfessionChoice::Cordonnier,
        ProfessionChoice::Tailleur,
        ProfessionChoice::Forgeron,
        ProfessionChoice::Sculpteur,
        ProfessionChoice::Joaillomage,
        ProfessionChoice::Cordomage,
        ProfessionChoice::Costumage,
        ProfessionChoice::Forgemage,
        ProfessionChoice::Sculptemage,
        ProfessionChoice::Faconneur,
    ];

    #[test]
    fn choice_list_matches_the_profession_list_one_to_one() {
        assert_eq!(ALL_CHOICES.len(), Profession::ALL.len());
        for (choice, profession) in ALL_CHOICES.into_iter().zip(Profession::ALL) {
            assert_eq!(Profession::from(choice), profession);
        }
    }

    #[test]
    fn choice_names_match_the_canonical_profession_names() {
        for choice in ALL_CHOICES {
            assert_eq!(choice.name(), Profession::from(choice).name());
        }
    }
}
