//! Attribute modifiers (quirks) and their aggregation.
//!
//! Chassis, omni pods, items and pilot modules all carry modifiers. A loadout
//! collects every active modifier into a [`ModifierStack`], which applies them
//! in a fixed order so the result does not depend on collection order:
//!
//! ```text
//! result = (base + Σ additive) × (1 + Σ multiplicative)
//! ```

/// How a modifier combines with the base value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ModifierOp {
    /// Added to the base before scaling.
    Additive,
    /// Summed with other multiplicative modifiers, then applied once
    /// (0.1 = +10%).
    Multiplicative,
}

/// A single change to a named attribute, such as `"heat.dissipation"`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifier {
    pub attribute: String,
    pub op: ModifierOp,
    pub value: f64,
}

impl Modifier {
    pub fn additive(attribute: impl Into<String>, value: f64) -> Self {
        Self {
            attribute: attribute.into(),
            op: ModifierOp::Additive,
            value,
        }
    }

    pub fn multiplicative(attribute: impl Into<String>, value: f64) -> Self {
        Self {
            attribute: attribute.into(),
            op: ModifierOp::Multiplicative,
            value,
        }
    }
}

/// A collection of modifiers that will be applied in the correct order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModifierStack {
    modifiers: Vec<Modifier>,
}

impl ModifierStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, modifier: Modifier) {
        self.modifiers.push(modifier);
    }

    pub fn extend<'m>(&mut self, modifiers: impl IntoIterator<Item = &'m Modifier>) {
        self.modifiers.extend(modifiers.into_iter().cloned());
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Modifier> {
        self.modifiers.iter()
    }

    /// Apply every modifier targeting `attribute` to `base`.
    pub fn apply(&self, attribute: &str, base: f64) -> f64 {
        let (additive, multiplicative) = self
            .modifiers
            .iter()
            .filter(|m| m.attribute == attribute)
            .fold((0.0, 0.0), |(add, mul), m| match m.op {
                ModifierOp::Additive => (add + m.value, mul),
                ModifierOp::Multiplicative => (add, mul + m.value),
            });

        (base + additive) * (1.0 + multiplicative)
    }
}

impl<'m> FromIterator<&'m Modifier> for ModifierStack {
    fn from_iter<T: IntoIterator<Item = &'m Modifier>>(iter: T) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn additive_applies_before_scaling() {
        let mut stack = ModifierStack::new();
        stack.add(Modifier::multiplicative("heat.dissipation", 0.1));
        stack.add(Modifier::additive("heat.dissipation", 2.0));
        stack.add(Modifier::multiplicative("heat.dissipation", 0.15));

        let result = stack.apply("heat.dissipation", 8.0);
        assert!((result - 12.5).abs() < 1e-9);
    }

    #[test]
    fn unrelated_attributes_are_ignored() {
        let stack: ModifierStack = [Modifier::additive("armour.ct", 20.0)].iter().collect();
        assert_eq!(stack.apply("heat.dissipation", 1.0), 1.0);
        assert_eq!(stack.len(), 1);
    }
}
