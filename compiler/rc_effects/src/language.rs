//! A configured effect language: operator table plus tokenizer settings.

use rc_ir::{EvaluatedType, Expr, ItemOperators, OperatorCatalog, TokenList, TypeSet};
use rc_lexer::{LexError, Tokenizer, TokenizerConfig};
use rc_lexer_core::OperatorTable;
use tracing::debug;

use crate::EffectError;

/// Operator table and tokenizer configuration, built once and reused.
///
/// Holds no per-parse state, so one instance can be shared across
/// threads and used for any number of inputs.
#[derive(Clone, Debug)]
pub struct EffectLanguage {
    table: OperatorTable,
    config: TokenizerConfig,
}

/// The result of checking one effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectCheck {
    pub expr: Expr,
    /// Whether every node is locally well-formed.
    pub valid: bool,
    /// Every type the whole expression can be read as.
    pub types: TypeSet,
}

impl EffectCheck {
    /// Whether the expression is usable as an item effect.
    pub fn is_item_effect(&self) -> bool {
        self.valid && self.types.has(EvaluatedType::ItemEffect)
    }
}

impl EffectLanguage {
    /// Build a language from `catalog`'s operators.
    pub fn new<C: OperatorCatalog + ?Sized>(catalog: &C, config: TokenizerConfig) -> Self {
        EffectLanguage {
            table: rc_lexer::operator_table(catalog),
            config,
        }
    }

    /// The item-effect grammar: `++ -- += -= => >>` with backtick strings.
    pub fn item_effects() -> Self {
        Self::new(&ItemOperators, TokenizerConfig::default())
    }

    pub fn table(&self) -> &OperatorTable {
        &self.table
    }

    pub fn config(&self) -> TokenizerConfig {
        self.config
    }

    pub fn tokenizer(&self) -> Tokenizer<'_> {
        Tokenizer::new(&self.table, self.config)
    }

    pub fn tokenize(&self, source: &str) -> Result<TokenList, LexError> {
        self.tokenizer().tokenize(source)
    }

    /// Tokenize and parse `source` into one expression.
    pub fn parse(&self, source: &str) -> Result<Expr, EffectError> {
        let tokens = self.tokenize(source)?;
        Ok(rc_parse::parse(&tokens)?)
    }

    /// Parse `source`, then validate and evaluate the tree.
    pub fn check(&self, source: &str) -> Result<EffectCheck, EffectError> {
        let expr = self.parse(source)?;
        let valid = expr.validate();
        let types = expr.evaluate();
        debug!(valid, %types, "checked effect");
        Ok(EffectCheck { expr, valid, types })
    }
}

impl Default for EffectLanguage {
    fn default() -> Self {
        Self::item_effects()
    }
}

#[cfg(test)]
mod tests;
