// Code generated by gqlbind. DO NOT EDIT.

pub mod scalars {
    /// An ISO-8601 encoded UTC date string.
    pub type DateTime = gqlbind_runtime::serde_json::Value;
}

pub mod enums {
    use gqlbind_runtime::serde::{Deserialize, Serialize};

    /// One of the films in the Star Wars Trilogy
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(crate = "gqlbind_runtime::serde")]
    pub enum Episode {
        /// Released in 1977.
        #[serde(rename = "NEWHOPE")]
        Newhope,

        /// Released in 1980.
        #[serde(rename = "EMPIRE")]
        Empire,

        /// Released in 1983.
        #[deprecated(note = "Was too good.")]
        #[serde(rename = "JEDI")]
        Jedi,
    }

    #[allow(deprecated)]
    impl Episode {
        pub const ALL: &'static [Episode] = &[Episode::Newhope, Episode::Empire, Episode::Jedi];

        /// The value as it appears in the schema.
        pub fn as_str(&self) -> &'static str {
            match *self {
                Episode::Newhope => "NEWHOPE",
                Episode::Empire => "EMPIRE",
                Episode::Jedi => "JEDI",
            }
        }
    }

    #[allow(deprecated)]
    impl gqlbind_runtime::Leaf for Episode {
        fn placeholder() -> Self {
            Episode::Newhope
        }
    }

    impl gqlbind_runtime::IntoArgument for Episode {
        fn to_argument(&self) -> gqlbind_runtime::ArgumentValue {
            gqlbind_runtime::ArgumentValue::Enum(self.as_str().to_string())
        }
    }

    /// Language
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(crate = "gqlbind_runtime::serde")]
    pub enum Language {
        /// English
        #[serde(rename = "EN")]
        En,

        /// Slovene
        #[serde(rename = "SL")]
        Sl,
    }

    #[allow(deprecated)]
    impl Language {
        pub const ALL: &'static [Language] = &[Language::En, Language::Sl];

        /// The value as it appears in the schema.
        pub fn as_str(&self) -> &'static str {
            match *self {
                Language::En => "EN",
                Language::Sl => "SL",
            }
        }
    }

    #[allow(deprecated)]
    impl gqlbind_runtime::Leaf for Language {
        fn placeholder() -> Self {
            Language::En
        }
    }

    impl gqlbind_runtime::IntoArgument for Language {
        fn to_argument(&self) -> gqlbind_runtime::ArgumentValue {
            gqlbind_runtime::ArgumentValue::Enum(self.as_str().to_string())
        }
    }
}

pub mod objects {
    /// Query
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Query;

    impl gqlbind_runtime::Scope for Query {
        const TYPE_NAME: &'static str = "Query";
    }

    /// Mutation
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Mutation;

    impl gqlbind_runtime::Scope for Mutation {
        const TYPE_NAME: &'static str = "Mutation";
    }

    /// A humanoid creature in the Star Wars universe.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Human;

    impl gqlbind_runtime::Scope for Human {
        const TYPE_NAME: &'static str = "Human";
    }

    /// A mechanical creature in the Star Wars universe.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Droid;

    impl gqlbind_runtime::Scope for Droid {
        const TYPE_NAME: &'static str = "Droid";
    }
}

pub mod interfaces {
    /// A character in the Star Wars Trilogy
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Character;

    impl gqlbind_runtime::Scope for Character {
        const TYPE_NAME: &'static str = "Character";
    }

    impl gqlbind_runtime::Polymorphic for Character {}

    impl gqlbind_runtime::PossibleType<Character> for super::objects::Human {}

    impl gqlbind_runtime::PossibleType<Character> for super::objects::Droid {}
}

pub mod unions {
    /// CharacterUnion
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum CharacterUnion {
        Human,
        Droid,
    }

    impl CharacterUnion {
        /// `__typename` of the member.
        pub fn typename(&self) -> &'static str {
            match *self {
                CharacterUnion::Human => "Human",
                CharacterUnion::Droid => "Droid",
            }
        }

        pub fn from_typename(typename: &str) -> Option<Self> {
            match typename {
                "Human" => Some(CharacterUnion::Human),
                "Droid" => Some(CharacterUnion::Droid),
                _ => None,
            }
        }
    }

    impl gqlbind_runtime::Scope for CharacterUnion {
        const TYPE_NAME: &'static str = "CharacterUnion";
    }

    impl gqlbind_runtime::Polymorphic for CharacterUnion {}

    impl gqlbind_runtime::PossibleType<CharacterUnion> for super::objects::Human {}

    impl gqlbind_runtime::PossibleType<CharacterUnion> for super::objects::Droid {}
}

pub mod inputs {
    /// Greeting
    #[derive(Debug, Clone, PartialEq)]
    pub struct Greeting {
        pub language: Option<super::enums::Language>,
        pub name: String,
    }

    #[allow(deprecated)]
    impl gqlbind_runtime::IntoArgument for Greeting {
        fn to_argument(&self) -> gqlbind_runtime::ArgumentValue {
            gqlbind_runtime::Arguments::new()
                .optional("language", &self.language)
                .arg("name", &self.name)
                .into_object()
        }
    }
}

pub mod fields {
    /// Field accessors of [`Query`](super::objects::Query).
    pub trait QueryFields {
        /// The hero of an episode; the hero of the whole saga when no episode is given.
        fn hero<T: 'static>(&mut self, episode: Option<super::enums::Episode>, selection: &gqlbind_runtime::SelectionSet<T, gqlbind_runtime::Nullable<super::interfaces::Character>>) -> Result<T, gqlbind_runtime::DecodeError>;

        fn human<T: 'static>(&mut self, id: String, selection: &gqlbind_runtime::SelectionSet<T, gqlbind_runtime::Nullable<super::objects::Human>>) -> Result<T, gqlbind_runtime::DecodeError>;

        fn droid<T: 'static>(&mut self, id: String, selection: &gqlbind_runtime::SelectionSet<T, gqlbind_runtime::Nullable<super::objects::Droid>>) -> Result<T, gqlbind_runtime::DecodeError>;

        fn characters<T: 'static>(&mut self, selection: &gqlbind_runtime::SelectionSet<T, gqlbind_runtime::List<super::interfaces::Character>>) -> Result<T, gqlbind_runtime::DecodeError>;

        fn search<T: 'static>(&mut self, text: String, selection: &gqlbind_runtime::SelectionSet<T, gqlbind_runtime::List<super::unions::CharacterUnion>>) -> Result<T, gqlbind_runtime::DecodeError>;

        fn greeting(&mut self, input: Option<super::inputs::Greeting>) -> Result<String, gqlbind_runtime::DecodeError>;

        fn whoami(&mut self) -> Result<String, gqlbind_runtime::DecodeError>;

        fn time(&mut self) -> Result<super::scalars::DateTime, gqlbind_runtime::DecodeError>;
    }

    #[allow(deprecated)]
    impl QueryFields for gqlbind_runtime::Fields<'_, super::objects::Query> {
        fn hero<T: 'static>(&mut self, episode: Option<super::enums::Episode>, selection: &gqlbind_runtime::SelectionSet<T, gqlbind_runtime::Nullable<super::interfaces::Character>>) -> Result<T, gqlbind_runtime::DecodeError> {
            self.composite("hero", gqlbind_runtime::Arguments::new().optional("episode", &episode), selection)
        }

        fn human<T: 'static>(&mut self, id: String, selection: &gqlbind_runtime::SelectionSet<T, gqlbind_runtime::Nullable<super::objects::Human>>) -> Result<T, gqlbind_runtime::DecodeError> {
            self.composite("human", gqlbind_runtime::Arguments::new().arg("id", &id), selection)
        }

        fn droid<T: 'static>(&mut self, id: String, selection: &gqlbind_runtime::SelectionSet<T, gqlbind_runtime::Nullable<super::objects::Droid>>) -> Result<T, gqlbind_runtime::DecodeError> {
            self.composite("droid", gqlbind_runtime::Arguments::new().arg("id", &id), selection)
        }

        fn characters<T: 'static>(&mut self, selection: &gqlbind_runtime::SelectionSet<T, gqlbind_runtime::List<super::interfaces::Character>>) -> Result<T, gqlbind_runtime::DecodeError> {
            self.composite("characters", gqlbind_runtime::Arguments::new(), selection)
        }

        fn search<T: 'static>(&mut self, text: String, selection: &gqlbind_runtime::SelectionSet<T, gqlbind_runtime::List<super::unions::CharacterUnion>>) -> Result<T, gqlbind_runtime::DecodeError> {
            self.composite("search", gqlbind_runtime::Arguments::new().arg("text", &text), selection)
        }

        fn greeting(&mut self, input: Option<super::inputs::Greeting>) -> Result<String, gqlbind_runtime::DecodeError> {
            self.leaf("greeting", gqlbind_runtime::Arguments::new().optional("input", &input))
        }

        fn whoami(&mut self) -> Result<String, gqlbind_runtime::DecodeError> {
            self.leaf("whoami", gqlbind_runtime::Arguments::new())
        }

        fn time(&mut self) -> Result<super::scalars::DateTime, gqlbind_runtime::DecodeError> {
            self.leaf("time", gqlbind_runtime::Arguments::new())
        }
    }

    /// Field accessors of [`Mutation`](super::objects::Mutation).
    pub trait MutationFields {
        fn mutate(&mut self) -> Result<bool, gqlbind_runtime::DecodeError>;
    }

    #[allow(deprecated)]
    impl MutationFields for gqlbind_runtime::Fields<'_, super::objects::Mutation> {
        fn mutate(&mut self) -> Result<bool, gqlbind_runtime::DecodeError> {
            self.leaf("mutate", gqlbind_runtime::Arguments::new())
        }
    }

    /// Field accessors of [`Character`](super::interfaces::Character).
    pub trait CharacterFields {
        /// The id of the character.
        fn id(&mut self) -> Result<String, gqlbind_runtime::DecodeError>;

        /// The name of the character.
        fn name(&mut self) -> Result<String, gqlbind_runtime::DecodeError>;

        /// Which movies they appear in.
        fn appears_in(&mut self) -> Result<Vec<super::enums::Episode>, gqlbind_runtime::DecodeError>;

        /// Selects one branch per concrete type of [`Character`](super::interfaces::Character).
        fn on<T: 'static>(&mut self, human: &gqlbind_runtime::SelectionSet<T, super::objects::Human>, droid: &gqlbind_runtime::SelectionSet<T, super::objects::Droid>) -> Result<T, gqlbind_runtime::DecodeError>;
    }

    #[allow(deprecated)]
    impl CharacterFields for gqlbind_runtime::Fields<'_, super::interfaces::Character> {
        fn id(&mut self) -> Result<String, gqlbind_runtime::DecodeError> {
            self.leaf("id", gqlbind_runtime::Arguments::new())
        }

        fn name(&mut self) -> Result<String, gqlbind_runtime::DecodeError> {
            self.leaf("name", gqlbind_runtime::Arguments::new())
        }

        fn appears_in(&mut self) -> Result<Vec<super::enums::Episode>, gqlbind_runtime::DecodeError> {
            self.leaf("appearsIn", gqlbind_runtime::Arguments::new())
        }

        fn on<T: 'static>(&mut self, human: &gqlbind_runtime::SelectionSet<T, super::objects::Human>, droid: &gqlbind_runtime::SelectionSet<T, super::objects::Droid>) -> Result<T, gqlbind_runtime::DecodeError> {
            self.fragments(vec![gqlbind_runtime::Case::new(human), gqlbind_runtime::Case::new(droid)])
        }
    }

    /// Field accessors of [`Human`](super::objects::Human).
    pub trait HumanFields {
        /// The id of the character.
        fn id(&mut self) -> Result<String, gqlbind_runtime::DecodeError>;

        /// The name of the character.
        fn name(&mut self) -> Result<String, gqlbind_runtime::DecodeError>;

        /// Which movies they appear in.
        fn appears_in(&mut self) -> Result<Vec<super::enums::Episode>, gqlbind_runtime::DecodeError>;

        /// The home planet of the human, or null if unknown.
        fn home_planet(&mut self) -> Result<Option<String>, gqlbind_runtime::DecodeError>;

        #[deprecated(note = "Use homePlanet.")]
        fn info_url(&mut self) -> Result<Option<String>, gqlbind_runtime::DecodeError>;
    }

    #[allow(deprecated)]
    impl HumanFields for gqlbind_runtime::Fields<'_, super::objects::Human> {
        fn id(&mut self) -> Result<String, gqlbind_runtime::DecodeError> {
            self.leaf("id", gqlbind_runtime::Arguments::new())
        }

        fn name(&mut self) -> Result<String, gqlbind_runtime::DecodeError> {
            self.leaf("name", gqlbind_runtime::Arguments::new())
        }

        fn appears_in(&mut self) -> Result<Vec<super::enums::Episode>, gqlbind_runtime::DecodeError> {
            self.leaf("appearsIn", gqlbind_runtime::Arguments::new())
        }

        fn home_planet(&mut self) -> Result<Option<String>, gqlbind_runtime::DecodeError> {
            self.leaf("homePlanet", gqlbind_runtime::Arguments::new())
        }

        fn info_url(&mut self) -> Result<Option<String>, gqlbind_runtime::DecodeError> {
            self.leaf("infoURL", gqlbind_runtime::Arguments::new())
        }
    }

    /// Field accessors of [`Droid`](super::objects::Droid).
    pub trait DroidFields {
        /// The id of the character.
        fn id(&mut self) -> Result<String, gqlbind_runtime::DecodeError>;

        /// The name of the character.
        fn name(&mut self) -> Result<String, gqlbind_runtime::DecodeError>;

        /// Which movies they appear in.
        fn appears_in(&mut self) -> Result<Vec<super::enums::Episode>, gqlbind_runtime::DecodeError>;

        /// The primary function of the droid.
        fn primary_function(&mut self) -> Result<Option<String>, gqlbind_runtime::DecodeError>;
    }

    #[allow(deprecated)]
    impl DroidFields for gqlbind_runtime::Fields<'_, super::objects::Droid> {
        fn id(&mut self) -> Result<String, gqlbind_runtime::DecodeError> {
            self.leaf("id", gqlbind_runtime::Arguments::new())
        }

        fn name(&mut self) -> Result<String, gqlbind_runtime::DecodeError> {
            self.leaf("name", gqlbind_runtime::Arguments::new())
        }

        fn appears_in(&mut self) -> Result<Vec<super::enums::Episode>, gqlbind_runtime::DecodeError> {
            self.leaf("appearsIn", gqlbind_runtime::Arguments::new())
        }

        fn primary_function(&mut self) -> Result<Option<String>, gqlbind_runtime::DecodeError> {
            self.leaf("primaryFunction", gqlbind_runtime::Arguments::new())
        }
    }

    /// Field accessors of [`CharacterUnion`](super::unions::CharacterUnion).
    pub trait CharacterUnionFields {
        /// Selects one branch per concrete type of [`CharacterUnion`](super::unions::CharacterUnion).
        fn on<T: 'static>(&mut self, human: &gqlbind_runtime::SelectionSet<T, super::objects::Human>, droid: &gqlbind_runtime::SelectionSet<T, super::objects::Droid>) -> Result<T, gqlbind_runtime::DecodeError>;
    }

    #[allow(deprecated)]
    impl CharacterUnionFields for gqlbind_runtime::Fields<'_, super::unions::CharacterUnion> {
        fn on<T: 'static>(&mut self, human: &gqlbind_runtime::SelectionSet<T, super::objects::Human>, droid: &gqlbind_runtime::SelectionSet<T, super::objects::Droid>) -> Result<T, gqlbind_runtime::DecodeError> {
            self.fragments(vec![gqlbind_runtime::Case::new(human), gqlbind_runtime::Case::new(droid)])
        }
    }
}

pub mod operations {
    impl gqlbind_runtime::Operation for super::objects::Query {
        const KIND: gqlbind_runtime::OperationKind = gqlbind_runtime::OperationKind::Query;
    }

    impl gqlbind_runtime::Operation for super::objects::Mutation {
        const KIND: gqlbind_runtime::OperationKind = gqlbind_runtime::OperationKind::Mutation;
    }
}
