//! Distribution catalogue.
//!
//! Every supported distribution is a variant of the closed [`Distribution`]
//! enum. Each variant owns one immutable [`DistributionSpec`] describing its
//! arity, parameter symbols, human-readable bounds and domain predicate.
//! The catalogue is a `static` table; nothing is registered at runtime.

use std::fmt;
use std::str::FromStr;

use crate::error::SampleError;

/// A supported probability distribution.
///
/// Variant order matches [`Distribution::ALL`] and the catalogue table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Distribution {
    /// Bernoulli(p).
    Bernoulli,
    /// Binomial(n, p). Note the `(n, p)` order.
    Binomial,
    /// Exponential(λ), rate parameterisation.
    Exponential,
    /// Gamma(k, θ), shape and scale.
    Gamma,
    /// Geometric(p), failures before the first success.
    Geometric,
    /// Normal(μ, σ).
    Normal,
    /// Poisson(λ).
    Poisson,
    /// Triangular(a, b, c) with minimum `a`, maximum `b` and mode `c`.
    Triangular,
    /// Weibull(λ, k), scale and shape.
    Weibull,
}

/// Catalogue entry for one distribution.
///
/// `symbols` and `bounds` are parallel and both have `num_params` entries.
#[derive(Clone, Copy)]
pub struct DistributionSpec {
    /// The distribution this entry describes.
    pub distribution: Distribution,
    /// Lower-case lookup key.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Required number of parameters.
    pub num_params: usize,
    /// Parameter symbols in positional order.
    pub symbols: &'static [&'static str],
    /// Human-readable bound for each parameter.
    pub bounds: &'static [&'static str],
    valid: fn(&[f64]) -> bool,
}

impl DistributionSpec {
    /// Evaluates the domain predicate.
    ///
    /// Returns `false` for a vector of the wrong length and for any
    /// non-finite value; the predicate itself only runs on a correctly
    /// sized, finite vector.
    pub fn is_valid(&self, params: &[f64]) -> bool {
        params.len() == self.num_params
            && params.iter().all(|v| v.is_finite())
            && (self.valid)(params)
    }
}

impl fmt::Debug for DistributionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistributionSpec")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("num_params", &self.num_params)
            .field("symbols", &self.symbols)
            .field("bounds", &self.bounds)
            .finish()
    }
}

fn is_probability(p: f64) -> bool {
    (0.0..=1.0).contains(&p)
}

static CATALOG: [DistributionSpec; 9] = [
    DistributionSpec {
        distribution: Distribution::Bernoulli,
        id: "bernoulli",
        name: "Bernoulli",
        num_params: 1,
        symbols: &["p"],
        bounds: &["0 ≤ p ≤ 1"],
        valid: |params| is_probability(params[0]),
    },
    DistributionSpec {
        distribution: Distribution::Binomial,
        id: "binomial",
        name: "Binomial",
        num_params: 2,
        symbols: &["n", "p"],
        bounds: &["n ∈ {0, 1, 2,...}", "0 ≤ p ≤ 1"],
        valid: |params| {
            let n = params[0];
            n >= 0.0 && n == n.floor() && is_probability(params[1])
        },
    },
    DistributionSpec {
        distribution: Distribution::Exponential,
        id: "exponential",
        name: "Exponential",
        num_params: 1,
        symbols: &["λ"],
        bounds: &["λ > 0"],
        valid: |params| params[0] > 0.0,
    },
    DistributionSpec {
        distribution: Distribution::Gamma,
        id: "gamma",
        name: "Gamma",
        num_params: 2,
        symbols: &["k", "θ"],
        bounds: &["k > 0", "θ > 0"],
        valid: |params| params[0] > 0.0 && params[1] > 0.0,
    },
    DistributionSpec {
        distribution: Distribution::Geometric,
        id: "geometric",
        name: "Geometric",
        num_params: 1,
        symbols: &["p"],
        bounds: &["0 < p ≤ 1"],
        valid: |params| 0.0 < params[0] && params[0] <= 1.0,
    },
    DistributionSpec {
        distribution: Distribution::Normal,
        id: "normal",
        name: "Normal",
        num_params: 2,
        symbols: &["μ", "σ"],
        bounds: &["μ ∈ ℝ", "σ > 0"],
        valid: |params| params[1] > 0.0,
    },
    DistributionSpec {
        distribution: Distribution::Poisson,
        id: "poisson",
        name: "Poisson",
        num_params: 1,
        symbols: &["λ"],
        bounds: &["λ > 0"],
        valid: |params| params[0] > 0.0,
    },
    DistributionSpec {
        distribution: Distribution::Triangular,
        id: "triangular",
        name: "Triangular",
        num_params: 3,
        symbols: &["a", "b", "c"],
        bounds: &["a ≤ c", "b ≥ c", "a ≤ c ≤ b"],
        valid: |params| params[0] <= params[2] && params[2] <= params[1],
    },
    DistributionSpec {
        distribution: Distribution::Weibull,
        id: "weibull",
        name: "Weibull",
        num_params: 2,
        symbols: &["λ", "k"],
        bounds: &["λ > 0", "k > 0"],
        valid: |params| params[0] > 0.0 && params[1] > 0.0,
    },
];

/// Looks up a catalogue entry by identifier, ignoring ASCII case.
///
/// Unknown identifiers yield `None`; reporting them is up to the caller.
///
/// ```rust
/// use variate_core::catalog::lookup;
///
/// let spec = lookup("Weibull").unwrap();
/// assert_eq!(spec.symbols, &["λ", "k"]);
/// assert!(lookup("cauchy").is_none());
/// ```
pub fn lookup(id: &str) -> Option<&'static DistributionSpec> {
    CATALOG.iter().find(|spec| spec.id.eq_ignore_ascii_case(id))
}

/// Every catalogue entry, in catalogue order.
pub fn entries() -> &'static [DistributionSpec] {
    &CATALOG
}

impl Distribution {
    /// All distributions in catalogue order.
    pub const ALL: [Distribution; 9] = [
        Distribution::Bernoulli,
        Distribution::Binomial,
        Distribution::Exponential,
        Distribution::Gamma,
        Distribution::Geometric,
        Distribution::Normal,
        Distribution::Poisson,
        Distribution::Triangular,
        Distribution::Weibull,
    ];

    /// Resolves an identifier, ignoring ASCII case.
    pub fn from_id(id: &str) -> Option<Self> {
        lookup(id).map(|spec| spec.distribution)
    }

    /// Returns the catalogue entry for this distribution.
    #[inline]
    pub fn spec(self) -> &'static DistributionSpec {
        &CATALOG[self as usize]
    }

    /// Lower-case identifier.
    #[inline]
    pub fn id(self) -> &'static str {
        self.spec().id
    }

    /// Display name.
    #[inline]
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Required number of parameters.
    #[inline]
    pub fn num_params(self) -> usize {
        self.spec().num_params
    }
}

impl fmt::Display for Distribution {
    /// Formats as `Name(sym,sym)`, e.g. `Binomial(n,p)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spec = self.spec();
        write!(f, "{}({})", spec.name, spec.symbols.join(","))
    }
}

impl FromStr for Distribution {
    type Err = SampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s.trim()).ok_or_else(|| SampleError::UnknownDistribution(s.to_string()))
    }
}

/// Comma-separated list of every identifier, for error messages.
pub fn supported_ids() -> String {
    CATALOG
        .iter()
        .map(|spec| spec.id)
        .collect::<Vec<_>>()
        .join(", ")
}
