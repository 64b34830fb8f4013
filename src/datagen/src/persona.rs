use enum_iterator::all;
use enum_iterator::Sequence;
use rand::prelude::*;
use rand::rngs::StdRng;
use strum_macros::Display;

#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Display, Sequence)]
pub enum Persona {
    #[strum(serialize = "Tech Enthusiast")]
    TechEnthusiast,
    #[strum(serialize = "Bargain Hunter")]
    BargainHunter,
    #[strum(serialize = "Parent Reviewer")]
    ParentReviewer,
    #[strum(serialize = "Outdoor Enthusiast")]
    OutdoorEnthusiast,
    #[strum(serialize = "Home Chef")]
    HomeChef,
    #[strum(serialize = "Audiophile")]
    Audiophile,
    #[strum(serialize = "Frequent Traveler")]
    FrequentTraveler,
    #[strum(serialize = "Pet Owner")]
    PetOwner,
}

/// What a persona cares about; colours the review text.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Display, Sequence)]
#[strum(serialize_all = "snake_case")]
pub enum Focus {
    Performance,
    Value,
    Durability,
    Weatherproofing,
    EaseOfUse,
    SoundQuality,
    Portability,
    Safety,
}

impl Focus {
    pub fn phrase(&self) -> &'static str {
        match self {
            Focus::Performance => "As someone who values performance, ",
            Focus::Value => "As someone who looks for value, ",
            Focus::Durability => "With kids in the house, ",
            Focus::Weatherproofing => "I use it outdoors often, so ",
            Focus::EaseOfUse => "I cook a lot and care about ease of use, so ",
            Focus::SoundQuality => "As an audiophile, ",
            Focus::Portability => "I travel a lot, so ",
            Focus::Safety => "With pets around, ",
        }
    }
}

pub struct PersonaProfile {
    pub first_names: &'static [&'static str],
    pub last_names: &'static [&'static str],
    // inclusive
    pub age_range: (i16, i16),
    pub locations: &'static [&'static str],
    pub focus: Focus,
}

impl Persona {
    pub fn profile(&self) -> PersonaProfile {
        match self {
            Persona::TechEnthusiast => PersonaProfile {
                first_names: &["Alex", "Jordan", "Taylor", "Sam", "Riley", "Casey"],
                last_names: &["Ng", "Patel", "Garcia", "Smith", "Khan", "Brown"],
                age_range: (22, 45),
                locations: &["San Francisco, CA", "Berlin, DE", "London, UK", "Austin, TX"],
                focus: Focus::Performance,
            },
            Persona::BargainHunter => PersonaProfile {
                first_names: &["Jamie", "Morgan", "Avery", "Charlie"],
                last_names: &["Diaz", "Chen", "O'Neill", "Lopez"],
                age_range: (25, 60),
                locations: &["Nashville, TN", "Madrid, ES", "Chicago, IL"],
                focus: Focus::Value,
            },
            Persona::ParentReviewer => PersonaProfile {
                first_names: &["Pat", "Kelly", "Dana", "Robin"],
                last_names: &["Williams", "Miller", "Wilson", "Davis"],
                age_range: (30, 50),
                locations: &["Seattle, WA", "Paris, FR", "Toronto, CA"],
                focus: Focus::Durability,
            },
            Persona::OutdoorEnthusiast => PersonaProfile {
                first_names: &["Blake", "Drew", "Harper", "Parker"],
                last_names: &["Hunt", "Stone", "Wells", "Fisher"],
                age_range: (20, 55),
                locations: &["Denver, CO", "Vancouver, CA", "Rotorua, NZ"],
                focus: Focus::Weatherproofing,
            },
            Persona::HomeChef => PersonaProfile {
                first_names: &["Maya", "Noah", "Liam", "Ivy"],
                last_names: &["Singh", "Martinez", "Rossi", "Keller"],
                age_range: (24, 65),
                locations: &["Rome, IT", "Melbourne, AU", "Boston, MA"],
                focus: Focus::EaseOfUse,
            },
            Persona::Audiophile => PersonaProfile {
                first_names: &["Evan", "Kai", "Zoe", "Nina"],
                last_names: &["Park", "Hernandez", "Lopez", "Morris"],
                age_range: (18, 50),
                locations: &["Tokyo, JP", "Seoul, KR", "Brooklyn, NY"],
                focus: Focus::SoundQuality,
            },
            Persona::FrequentTraveler => PersonaProfile {
                first_names: &["Chris", "Patrice", "Jo", "Samir"],
                last_names: &["Baker", "Singh", "Ali", "Johnson"],
                age_range: (28, 58),
                locations: &["Dubai, AE", "Singapore, SG", "Los Angeles, CA"],
                focus: Focus::Portability,
            },
            Persona::PetOwner => PersonaProfile {
                first_names: &["Lena", "Omar", "Bea", "Hannah"],
                last_names: &["Ramirez", "Gonzalez", "Brown", "Evans"],
                age_range: (21, 70),
                locations: &["Minneapolis, MN", "Dublin, IE", "Lima, PE"],
                focus: Focus::Safety,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reviewer {
    pub name: String,
    pub persona: Persona,
    pub age: i16,
    pub location: &'static str,
    pub focus: Focus,
}

pub struct PersonaProvider {
    personas: Vec<Persona>,
}

impl PersonaProvider {
    pub fn new() -> Self {
        Self {
            personas: all::<Persona>().collect(),
        }
    }

    pub fn sample(&self, rng: &mut StdRng) -> Reviewer {
        let persona = self.personas[rng.gen_range(0..self.personas.len())];
        let profile = persona.profile();
        let first = profile.first_names[rng.gen_range(0..profile.first_names.len())];
        let last = profile.last_names[rng.gen_range(0..profile.last_names.len())];
        let age = rng.gen_range(profile.age_range.0..=profile.age_range.1);
        let location = profile.locations[rng.gen_range(0..profile.locations.len())];

        Reviewer {
            name: format!("{first} {last}"),
            persona,
            age,
            location,
            focus: profile.focus,
        }
    }
}

impl Default for PersonaProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_sample_stays_within_profile() {
        let provider = PersonaProvider::new();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let r = provider.sample(&mut rng);
            let profile = r.persona.profile();
            assert!(r.age >= profile.age_range.0 && r.age <= profile.age_range.1);
            assert!(profile.locations.contains(&r.location));
            assert_eq!(r.focus, profile.focus);
            let (first, last) = r.name.split_once(' ').unwrap();
            assert!(profile.first_names.contains(&first));
            assert!(profile.last_names.contains(&last));
        }
    }

    #[test]
    fn test_every_persona_is_picked() {
        let provider = PersonaProvider::new();
        let mut rng = StdRng::seed_from_u64(2);
        let seen = (0..2000)
            .map(|_| provider.sample(&mut rng).persona)
            .collect::<std::collections::HashSet<_>>();
        assert_eq!(seen.len(), all::<Persona>().count());
    }

    #[test]
    fn test_display() {
        assert_eq!(Persona::HomeChef.to_string(), "Home Chef");
        assert_eq!(Focus::EaseOfUse.to_string(), "ease_of_use");
    }
}
