use crate::config::Members;

/// The two household members. Stored as "A" / "B"; display names are
/// configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Person {
    A,
    B,
    /// Stored text that is neither code nor legacy name; kept verbatim.
    Other(String),
}

impl Person {
    pub const ALL: [Person; 2] = [Person::A, Person::B];

    pub fn code(&self) -> &str {
        match self {
            Person::A => "A",
            Person::B => "B",
            Person::Other(raw) => raw,
        }
    }

    /// Names used before member names became configurable.
    pub fn default_name(&self) -> &str {
        match self {
            Person::A => "ぴちゃん",
            Person::B => "みちゃん",
            Person::Other(raw) => raw,
        }
    }

    pub fn name<'a>(&'a self, members: &'a Members) -> &'a str {
        match self {
            Person::A => &members.a,
            Person::B => &members.b,
            Person::Other(raw) => raw,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &str {
        self.code()
    }

    /// Convert DB string → known member (code or legacy default name)
    pub fn from_db_str(s: &str) -> Option<Self> {
        let s = s.trim();
        Person::ALL
            .into_iter()
            .find(|p| s == p.code() || s == p.default_name())
    }

    /// Decode a stored value without failing: unknown text becomes `Other`.
    pub fn from_db_lossless(s: &str) -> Self {
        Person::from_db_str(s).unwrap_or_else(|| Person::Other(s.trim().to_string()))
    }

    /// Helper: parse user input (code in any case, or a configured name)
    pub fn from_input(s: &str, members: &Members) -> Option<Self> {
        Person::from_db_str(&s.trim().to_uppercase())
            .or_else(|| Person::ALL.into_iter().find(|p| s.trim() == p.name(members)))
            .or_else(|| Person::from_db_str(s))
    }
}
