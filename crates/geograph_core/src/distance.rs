use std::{fmt, iter::Sum, ops::Add};

use serde::{Deserialize, Serialize};

/// Great-circle distance, also used as the edge weight of every graph in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct Kilometers(f64);

impl Kilometers {
    pub const ZERO: Kilometers = Kilometers(0.0);
    pub const INFINITY: Kilometers = Kilometers(f64::INFINITY);

    pub const fn new(value: f64) -> Self {
        Kilometers(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Compares two distances with an absolute tolerance, in kilometers.
    pub fn approx_eq(&self, other: Kilometers, epsilon: f64) -> bool {
        (self.0 - other.0).abs() <= epsilon
    }
}

impl Eq for Kilometers {}

impl PartialOrd for Kilometers {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Kilometers {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for Kilometers {
    fn from(value: f64) -> Self {
        Kilometers::new(value)
    }
}

impl fmt::Display for Kilometers {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} km", self.0)
    }
}

impl Add for Kilometers {
    type Output = Kilometers;

    fn add(self, other: Kilometers) -> Kilometers {
        Kilometers(self.0 + other.0)
    }
}

impl Sum for Kilometers {
    fn sum<I: Iterator<Item = Kilometers>>(iter: I) -> Kilometers {
        iter.fold(Kilometers::ZERO, |acc, x| acc + x)
    }
}

#[macro_export]
macro_rules! kilometers {
    ($num:expr) => {
        $crate::distance::Kilometers::from($num as f64)
    };
}
