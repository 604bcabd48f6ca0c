/// Bond order as stored on a [`Bond`].
///
/// `Aromatic` is the uniform, not yet resolved ring bond type. Resolution
/// replaces it with `Single` or `Double`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BondOrder {
    #[default]
    Single,
    Double,
    Triple,
    Aromatic,
}

impl BondOrder {
    /// Contribution of this bond to an endpoint's valence.
    ///
    /// An unresolved aromatic bond counts as 1, the share every ring bond
    /// carries regardless of its final order.
    pub fn valence_contribution(self) -> u8 {
        match self {
            BondOrder::Single | BondOrder::Aromatic => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
        }
    }

    pub fn is_aromatic(self) -> bool {
        self == BondOrder::Aromatic
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bond {
    pub order: BondOrder,
}

impl Bond {
    pub fn new(order: BondOrder) -> Self {
        Self { order }
    }

    pub fn aromatic() -> Self {
        Self::new(BondOrder::Aromatic)
    }
}

impl Default for Bond {
    fn default() -> Self {
        Self {
            order: BondOrder::Single,
        }
    }
}

impl crate::traits::HasBondOrder for Bond {
    fn bond_order(&self) -> BondOrder {
        self.order
    }
}

impl crate::traits::HasBondOrderMut for Bond {
    fn bond_order_mut(&mut self) -> &mut BondOrder {
        &mut self.order
    }
}
