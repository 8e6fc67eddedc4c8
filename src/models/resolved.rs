use std::fmt;

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Summary data from the primary provider.
    Primary,
    /// Records from the secondary provider.
    Secondary,
    /// The primary provider's schedule for the following season.
    NextSeason,
    /// Computed locally from raw secondary records.
    Derived,
    /// Static placeholder data.
    Fallback,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Origin::Primary => "primary",
            Origin::Secondary => "secondary",
            Origin::NextSeason => "next_season",
            Origin::Derived => "derived",
            Origin::Fallback => "fallback",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub value: T,
    pub origin: Origin,
}

impl<T> Resolved<T> {
    pub fn new(value: T, origin: Origin) -> Self {
        Self { value, origin }
    }

    pub fn fallback(value: T) -> Self {
        Self::new(value, Origin::Fallback)
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == Origin::Fallback
    }

    pub fn into_value(self) -> T {
        self.value
    }
}
