//! Evaluated types: what an expression can be read as.
//!
//! An expression may satisfy several interpretations at once (a bare name
//! is both a numeric term and a truthiness check), so evaluation produces a
//! [`TypeSet`] rather than a single type.

use std::fmt;

use bitflags::bitflags;

/// A semantic classification an expression may satisfy.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum EvaluatedType {
    /// Usable as a logic term (a numeric variable).
    TermLike,
    /// Usable as a condition.
    Bool,
    /// An integer value.
    Int,
    /// An action applied to game state.
    ItemEffect,
}

impl EvaluatedType {
    /// All evaluated types, in declaration order.
    pub const ALL: [EvaluatedType; 4] = [
        EvaluatedType::TermLike,
        EvaluatedType::Bool,
        EvaluatedType::Int,
        EvaluatedType::ItemEffect,
    ];

    const fn flag(self) -> TypeSet {
        match self {
            EvaluatedType::TermLike => TypeSet::TERM_LIKE,
            EvaluatedType::Bool => TypeSet::BOOL,
            EvaluatedType::Int => TypeSet::INT,
            EvaluatedType::ItemEffect => TypeSet::ITEM_EFFECT,
        }
    }
}

impl fmt::Display for EvaluatedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EvaluatedType::TermLike => "TermLike",
            EvaluatedType::Bool => "Bool",
            EvaluatedType::Int => "Int",
            EvaluatedType::ItemEffect => "ItemEffect",
        };
        f.write_str(name)
    }
}

bitflags! {
    /// A set of [`EvaluatedType`]s.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TypeSet: u8 {
        const TERM_LIKE = 1 << 0;
        const BOOL = 1 << 1;
        const INT = 1 << 2;
        const ITEM_EFFECT = 1 << 3;
    }
}

impl TypeSet {
    /// The set holding exactly `ty`.
    pub const fn of(ty: EvaluatedType) -> Self {
        ty.flag()
    }

    /// Check membership of a single evaluated type.
    pub const fn has(self, ty: EvaluatedType) -> bool {
        self.contains(ty.flag())
    }

    /// The member types, in declaration order.
    pub fn types(self) -> impl Iterator<Item = EvaluatedType> {
        EvaluatedType::ALL
            .into_iter()
            .filter(move |ty| self.has(*ty))
    }

    /// The member types collected into a vector.
    pub fn to_vec(self) -> Vec<EvaluatedType> {
        self.types().collect()
    }
}

impl From<EvaluatedType> for TypeSet {
    fn from(ty: EvaluatedType) -> Self {
        TypeSet::of(ty)
    }
}

impl FromIterator<EvaluatedType> for TypeSet {
    fn from_iter<I: IntoIterator<Item = EvaluatedType>>(iter: I) -> Self {
        iter.into_iter()
            .fold(TypeSet::empty(), |set, ty| set | ty.flag())
    }
}

impl fmt::Display for TypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, ty) in self.types().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{ty}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests;
