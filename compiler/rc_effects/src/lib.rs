//! Item-effect expressions for a game randomizer.
//!
//! Effect text such as ``Grubsong++ >> `Grubsong = 1` => CHARMS += 1``
//! is tokenized with whitespace preserved, parsed into an owned tree, then
//! checked structurally (`validate`) and semantically (`evaluate`).
//!
//! ```
//! use rc_effects::check_effect;
//!
//! let check = check_effect("Grubsong++ >> `Grubsong = 1` => CHARMS += 1")?;
//! assert!(check.is_item_effect());
//! assert_eq!(check.expr.print(), "Grubsong++ >> `Grubsong = 1` => CHARMS += 1");
//! # Ok::<(), rc_effects::EffectError>(())
//! ```
//!
//! # Tracing
//!
//! Every phase logs through `tracing`. Call [`init_tracing`] and set
//! `RUST_LOG=rc_lexer=trace,rc_parse=debug` to see the tree of events.

mod error;
mod language;

pub use error::EffectError;
pub use language::{EffectCheck, EffectLanguage};

pub use rc_diagnostic::{Diagnostic, ErrorCode};
pub use rc_ir::{EvaluatedType, Expr, ItemOperator, ItemOperators, Span, TokenList, TypeSet};
pub use rc_lexer::{LexError, TokenizerConfig};
pub use rc_parse::ParseError;

use std::sync::{Once, OnceLock};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let layer = tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true);
            // Another subscriber may already own the global slot.
            let _ = tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(layer)
                .try_init();
        }
    });
}

/// The shared item-effect language.
pub fn item_language() -> &'static EffectLanguage {
    static LANGUAGE: OnceLock<EffectLanguage> = OnceLock::new();
    LANGUAGE.get_or_init(EffectLanguage::item_effects)
}

/// Parse item-effect text into one expression.
pub fn parse_effect(source: &str) -> Result<Expr, EffectError> {
    item_language().parse(source)
}

/// Parse item-effect text and check the resulting tree.
pub fn check_effect(source: &str) -> Result<EffectCheck, EffectError> {
    item_language().check(source)
}
