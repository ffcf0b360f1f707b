//! Prompt pack fixtures.

/// Relative path and content of every file in the standard pack
pub const STANDARD_PACK: &[(&str, &str)] = &[
    ("rules.yml", "exclusive_groups:\n  - risk\n  - verbosity\n"),
    ("base.md", "---\nid: base\ndesc: Shared ground rules\n---\nBASE\n"),
    (
        "modes/explore.md",
        "---\nid: modes/explore\ndesc: Open-ended exploration\n---\nMODE:{{mode}}\n",
    ),
    (
        "modes/ship.md",
        "---\nid: modes/ship\n---\nSHIP for {{team}}\n",
    ),
    (
        "contracts/markdown.md",
        "---\nid: contracts/markdown\ndesc: Markdown output\n---\nCONTRACT\n",
    ),
    (
        "contracts/code.md",
        "---\nid: contracts/code\ndesc: Code only\n---\nCODE\n",
    ),
    (
        "traits/conservative.md",
        "---\nid: traits/conservative\ntags: [risk:low]\n---\nCONSERVATIVE\n",
    ),
    (
        "traits/creative.md",
        "---\nid: traits/creative\ntags: [risk:high]\n---\nCREATIVE\n",
    ),
    (
        "traits/terse.md",
        "---\nid: traits/terse\ndesc: Short answers\ntags: [verbosity:low]\nrequires: [policies/brevity]\n---\nTERSE\n",
    ),
    (
        "policies/brevity.md",
        "---\nid: policies/brevity\n---\nBREVITY\n",
    ),
    (
        "policies/revisions.md",
        "---\nid: policies/revisions\n---\nREVISIONS:{{revisions}}\n",
    ),
];

/// A profile selecting ship mode with the terse trait
pub const SHIP_PROFILE: &str = "mode: ship\ncontract: code\ntraits:\n  - traits/terse\nvars:\n  team: core\n";
