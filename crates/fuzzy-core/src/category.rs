/// Linguistic categories and the fixed-size membership vectors indexed by them.
///
/// Each input dimension has exactly three categories, ordered from the lowest
/// to the highest region of its domain. A [`Membership`] stores one degree per
/// category in a plain array, so every category is always populated.
use std::fmt;
use std::marker::PhantomData;
use std::ops::Index;

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

pub trait Category: Copy + Eq + fmt::Debug + 'static {
    /// Name of the input dimension, used in error messages.
    const DIMENSION: &'static str;

    /// All categories, ordered low to high.
    const ALL: [Self; 3];

    fn index(self) -> usize;

    fn label(self) -> &'static str;

    /// Alternative spellings accepted when parsing rule banks.
    fn aliases(self) -> &'static [&'static str];

    /// Case-insensitive lookup by label or alias.
    fn parse(label: &str) -> Result<Self, EngineError> {
        let wanted = label.trim();
        Self::ALL
            .into_iter()
            .find(|c| {
                c.label().eq_ignore_ascii_case(wanted)
                    || c.aliases().iter().any(|a| a.eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| EngineError::UnknownCategory {
                dimension: Self::DIMENSION,
                label: wanted.to_string(),
            })
    }
}

/// Service quality categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceLevel {
    Poor = 0,
    Average = 1,
    Good = 2,
}

impl Category for ServiceLevel {
    const DIMENSION: &'static str = "service";
    const ALL: [Self; 3] = [Self::Poor, Self::Average, Self::Good];

    fn index(self) -> usize {
        self as usize
    }

    fn label(self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Average => "Average",
            Self::Good => "Good",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Poor => &["Buruk", "Bad"],
            Self::Average => &["Sedang", "Medium"],
            Self::Good => &["Bagus"],
        }
    }
}

/// Price categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceLevel {
    Cheap = 0,
    Moderate = 1,
    Expensive = 2,
}

impl Category for PriceLevel {
    const DIMENSION: &'static str = "price";
    const ALL: [Self; 3] = [Self::Cheap, Self::Moderate, Self::Expensive];

    fn index(self) -> usize {
        self as usize
    }

    fn label(self) -> &'static str {
        match self {
            Self::Cheap => "Cheap",
            Self::Moderate => "Moderate",
            Self::Expensive => "Expensive",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Cheap => &["Murah"],
            Self::Moderate => &["Sedang", "Medium"],
            Self::Expensive => &["Mahal"],
        }
    }
}

impl fmt::Display for ServiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Degrees of membership in each category of one dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Membership<C> {
    degrees: [f64; 3],
    _category: PhantomData<C>,
}

impl<C: Category> Membership<C> {
    pub fn from_degrees(degrees: [f64; 3]) -> Self {
        Self {
            degrees,
            _category: PhantomData,
        }
    }

    pub fn degrees(&self) -> [f64; 3] {
        self.degrees
    }

    pub fn get(&self, category: C) -> f64 {
        self.degrees[category.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (C, f64)> + '_ {
        C::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    pub fn sum(&self) -> f64 {
        self.degrees.iter().sum()
    }

    /// Category with the highest degree. Ties go to the lower category.
    pub fn dominant(&self) -> C {
        let mut best = C::ALL[0];
        for c in C::ALL.into_iter().skip(1) {
            if self.get(c) > self.get(best) {
                best = c;
            }
        }
        best
    }

    /// True when a single category holds degree 1 and the others hold 0.
    pub fn is_saturated(&self) -> bool {
        let ones = self.degrees.iter().filter(|&&d| d == 1.0).count();
        let zeros = self.degrees.iter().filter(|&&d| d == 0.0).count();
        ones == 1 && zeros == 2
    }
}

impl<C: Category> Index<C> for Membership<C> {
    type Output = f64;

    fn index(&self, category: C) -> &f64 {
        &self.degrees[category.index()]
    }
}

impl<C: Category> fmt::Display for Membership<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (c, d)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {:.2}", c.label(), d)?;
        }
        f.write_str("}")
    }
}

impl<C: Category> Serialize for Membership<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        for (c, d) in self.iter() {
            map.serialize_entry(c.label(), &d)?;
        }
        map.end()
    }
}
