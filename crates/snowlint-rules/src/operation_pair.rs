//! Operation-pair registry.
//!
//! Functions named after one half of a messaging operation must have the
//! other half in the same package: `RequestUser` needs `ReplyUser`,
//! `SendOrder` needs `ReceiveOrder`, `PublishEvent` needs `SubscribeEvent`.
//!
//! Functions are keyed by `(package clause, base name)`. The base name is
//! the function name with each verb stripped in [`VERBS`] order, so
//! `RequestReplyUser` has the base `User` and pairs with `ReplyUser`.

use std::collections::BTreeMap;

use snowlint_core::{FileContext, Location, Reporter, RuleId, Span};

/// Which side of a pair a verb belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    /// The initiating side (`Request`, `Send`, `Publish`).
    First,
    /// The answering side (`Reply`, `Receive`, `Subscribe`).
    Second,
}

/// Verbs recognized during traversal, in matching order.
pub const VERBS: &[(&str, Half)] = &[
    ("Request", Half::First),
    ("Reply", Half::Second),
    ("Send", Half::First),
    ("Receive", Half::Second),
    ("Publish", Half::First),
    ("Subscribe", Half::Second),
];

/// Opposite of each verb.
///
/// `Set`/`Get` are never matched by [`VERBS`]; they only resolve here.
const OPPOSITES: &[(&str, &str)] = &[
    ("Request", "Reply"),
    ("Reply", "Request"),
    ("Send", "Receive"),
    ("Receive", "Send"),
    ("Publish", "Subscribe"),
    ("Subscribe", "Publish"),
    ("Set", "Get"),
    ("Get", "Set"),
];

/// Opposite reported for verbs missing from the table.
pub const UNKNOWN_OPPOSITE: &str = "unknown";

/// Returns the opposite of `verb`, or [`UNKNOWN_OPPOSITE`].
#[must_use]
pub fn opposite(verb: &str) -> &'static str {
    OPPOSITES
        .iter()
        .find(|(v, _)| *v == verb)
        .map_or(UNKNOWN_OPPOSITE, |(_, o)| *o)
}

/// Splits `name` into its leading verb, the verb's half and the base name.
///
/// The verb is the first one in [`VERBS`] that `name` starts with; the base
/// is what remains after stripping every verb prefix in table order.
#[must_use]
pub fn split_verb(name: &str) -> Option<(&'static str, Half, &str)> {
    let (verb, half) = VERBS
        .iter()
        .find(|(verb, _)| name.starts_with(verb))
        .copied()?;
    Some((verb, half, base_name(name)))
}

fn base_name(name: &str) -> &str {
    VERBS
        .iter()
        .fold(name, |rest, (verb, _)| rest.strip_prefix(verb).unwrap_or(rest))
}

/// One recorded half of a pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEntry {
    /// Verb the function starts with.
    pub verb: &'static str,
    /// Where the function was declared.
    pub location: Location,
}

#[derive(Debug, Default)]
struct Pair {
    first: Option<PendingEntry>,
    second: Option<PendingEntry>,
}

/// Operation halves seen in one package.
#[derive(Debug, Default)]
pub struct OperationPairRegistry {
    pairs: BTreeMap<(String, String), Pair>,
}

impl OperationPairRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the function `name` if it starts with a known verb.
    ///
    /// A later declaration of the same half replaces the earlier one.
    pub fn record(&mut self, ctx: &FileContext<'_>, name: &str, span: Span) {
        let Some((verb, half, base)) = split_verb(name) else {
            return;
        };

        let entry = PendingEntry {
            verb,
            location: Location::from_span(ctx.path.to_path_buf(), span),
        };
        let pair = self
            .pairs
            .entry((ctx.package_name.to_string(), base.to_string()))
            .or_default();
        match half {
            Half::First => pair.first = Some(entry),
            Half::Second => pair.second = Some(entry),
        }
    }

    /// Number of distinct keys recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Reports every key with exactly one half, in key order.
    pub fn reconcile(self, reporter: &mut Reporter<'_>) {
        for pair in self.pairs.into_values() {
            let lone = match (pair.first, pair.second) {
                (Some(entry), None) | (None, Some(entry)) => entry,
                _ => continue,
            };
            reporter.report_at(
                RuleId::OperationPair,
                lone.location,
                format!("missing {} function", opposite(lone.verb)),
            );
        }
    }
}
