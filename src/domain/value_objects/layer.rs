//! Layer Value Object
//!
//! The fixed precedence category of a module. Declaration order of the variants
//! is the ordering used by the sorter: base < modes < traits < policies < contracts.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    #[default]
    Base,
    Modes,
    Traits,
    Policies,
    Contracts,
}

impl Layer {
    /// All layers in precedence order
    pub const ALL: [Layer; 5] = [
        Layer::Base,
        Layer::Modes,
        Layer::Traits,
        Layer::Policies,
        Layer::Contracts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Base => "base",
            Layer::Modes => "modes",
            Layer::Traits => "traits",
            Layer::Policies => "policies",
            Layer::Contracts => "contracts",
        }
    }

    /// Position in the precedence order (0 = base)
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Derive the layer from a module path relative to the prompts directory.
    ///
    /// The first layer (in precedence order) whose name equals any path component
    /// wins, so `traits/base/x.md` is still `base`. Paths naming no layer are `base`.
    pub fn from_path(path: &Path) -> Layer {
        let components: Vec<&str> = path
            .components()
            .filter_map(|c| c.as_os_str().to_str())
            .collect();

        Layer::ALL
            .into_iter()
            .find(|layer| components.iter().any(|c| *c == layer.as_str()))
            .unwrap_or_default()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layer::ALL
            .into_iter()
            .find(|layer| layer.as_str() == s)
            .ok_or_else(|| format!("unknown layer '{}'", s))
    }
}
